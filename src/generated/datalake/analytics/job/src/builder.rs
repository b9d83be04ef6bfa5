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

use crate::client::Inner;
use gax::Result;
use gaxi::path_parameter::skip_quote;

/// Formats the base URL for an account.
///
/// The account name and the DNS suffix are part of the host name, they are
/// validated but not escaped.
fn account_url(inner: &Inner, account_name: &str) -> Result<String> {
    let account_name = skip_quote("account_name", account_name)?;
    let suffix = skip_quote("adla_job_dns_suffix", &inner.adla_job_dns_suffix)?;
    Ok(inner
        .http
        .endpoint()
        .replace("{accountName}", account_name)
        .replace("{adlaJobDnsSuffix}", suffix))
}

pub mod pipeline {
    use super::account_url;
    use crate::API_VERSION;
    use crate::client::Inner;
    use crate::model::*;
    use gax::Result;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use gax::response::Response;
    use gaxi::http::NoBody;
    use gaxi::path_parameter::encode;
    use gaxi::query_parameter::QueryParameter;
    use http::Method;
    use std::sync::Arc;
    use time::OffsetDateTime;

    /// The request builder for [PipelineOperations::list][crate::client::PipelineOperations::list] calls.
    #[derive(Clone, Debug)]
    pub struct List {
        inner: Arc<Inner>,
        account_name: String,
        start_date_time: Option<OffsetDateTime>,
        end_date_time: Option<OffsetDateTime>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                account_name: String::new(),
                start_date_time: None,
                end_date_time: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Data Lake Analytics account to query.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Only list the pipelines with jobs submitted after this time.
        ///
        /// The start and end times can be no more than 30 days apart.
        pub fn set_start_date_time<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
            self.start_date_time = Some(v.into());
            self
        }

        /// Only list the pipelines with jobs submitted before this time.
        pub fn set_end_date_time<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
            self.end_date_time = Some(v.into());
            self
        }

        /// Fetches the first page.
        pub async fn send(self) -> Result<Response<JobPipelineInformationListResult>> {
            self.send_page(None).await
        }

        /// Streams the responses, one page at a time.
        pub fn by_page(self) -> Paginator<JobPipelineInformationListResult, gax::error::Error> {
            let execute = move |link: Option<String>| {
                let builder = self.clone();
                async move { builder.send_page(link).await.map(Response::into_body) }
            };
            Paginator::new(execute)
        }

        /// Streams the pipelines across all pages.
        pub fn by_item(self) -> ItemPaginator<JobPipelineInformation, gax::error::Error> {
            self.by_page().items()
        }

        #[tracing::instrument(level = "debug", name = "Pipeline::list", skip_all)]
        async fn send_page(
            &self,
            next_link: Option<String>,
        ) -> Result<Response<JobPipelineInformationListResult>> {
            let builder = match next_link {
                Some(link) => self.inner.http.builder_for_url(Method::GET, link),
                None => {
                    let url = format!("{}/pipelines", account_url(&self.inner, &self.account_name)?);
                    let builder = self.inner.http.builder_for_url(Method::GET, url);
                    let builder = self.start_date_time.add(builder, "startDateTime")?;
                    let builder = self.end_date_time.add(builder, "endDateTime")?;
                    builder.query("api-version", API_VERSION)
                }
            };
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options.clone(), &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [PipelineOperations::get][crate::client::PipelineOperations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get {
        inner: Arc<Inner>,
        account_name: String,
        pipeline_identity: String,
        start_date_time: Option<OffsetDateTime>,
        end_date_time: Option<OffsetDateTime>,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                account_name: String::new(),
                pipeline_identity: String::new(),
                start_date_time: None,
                end_date_time: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Data Lake Analytics account to query.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sets the pipeline ID.
        pub fn set_pipeline_identity<T: Into<String>>(mut self, v: T) -> Self {
            self.pipeline_identity = v.into();
            self
        }

        /// Only aggregate the jobs submitted after this time.
        ///
        /// The start and end times can be no more than 30 days apart.
        pub fn set_start_date_time<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
            self.start_date_time = Some(v.into());
            self
        }

        /// Only aggregate the jobs submitted before this time.
        pub fn set_end_date_time<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
            self.end_date_time = Some(v.into());
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "Pipeline::get", skip_all)]
        pub async fn send(self) -> Result<Response<JobPipelineInformation>> {
            let url = format!(
                "{}/pipelines/{}",
                account_url(&self.inner, &self.account_name)?,
                encode("pipeline_identity", &self.pipeline_identity)?
            );
            let builder = self.inner.http.builder_for_url(Method::GET, url);
            let builder = self.start_date_time.add(builder, "startDateTime")?;
            let builder = self.end_date_time.add(builder, "endDateTime")?;
            let builder = builder.query("api-version", API_VERSION);
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}
