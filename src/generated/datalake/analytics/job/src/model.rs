// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use time::OffsetDateTime;

/// Run information for a pipeline.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobPipelineRunInformation {
    /// The run identifier of an instance of pipeline executions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,

    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_submit_time: Option<OffsetDateTime>,
}

/// Job pipeline information, showing the relationship of jobs and
/// recurrences of those jobs in a pipeline.
///
/// All fields are output only.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobPipelineInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_jobs_failed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_jobs_canceled: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_jobs_succeeded: Option<i32>,

    /// Analytics units hours consumed by the failed jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub au_hours_failed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub au_hours_canceled: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub au_hours_succeeded: Option<f64>,

    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_submit_time: Option<OffsetDateTime>,

    /// The list of recurrence identifiers of this pipeline.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recurrences: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<JobPipelineRunInformation>,
}

/// A page of pipelines.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobPipelineInformationListResult {
    pub value: Vec<JobPipelineInformation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl gax::paginator::PageableResponse for JobPipelineInformationListResult {
    type PageItem = JobPipelineInformation;

    fn next_link(&self) -> Option<String> {
        self.next_link.clone()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.value
    }
}
