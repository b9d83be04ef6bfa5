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

//! Azure Management Client Libraries for Rust - Data Lake Analytics Job API
//!
//! This crate queries the job pipelines of a Data Lake Analytics account.
//! Unlike most management APIs the requests are sent to the account's own
//! host, `https://{accountName}.{adlaJobDnsSuffix}`.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
//! use azure_mgmt_datalake_analytics_job::client::DataLakeAnalyticsJobManagementClient;
//! use azure_mgmt_datalake_analytics_job::credentials::AccessToken;
//! let client = DataLakeAnalyticsJobManagementClient::builder()
//!     .with_credentials(AccessToken::new("my-token"))
//!     .build()
//!     .await?;
//! let mut pipelines = client.pipeline().list("myadlaaccount").by_item();
//! while let Some(p) = pipelines.next().await {
//!     let p = p?;
//!     println!("{:?} {:?}", p.pipeline_name, p.num_jobs_failed);
//! }
//! # Ok(()) }
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;
pub use gaxi::credentials;

/// Request builders for each operation.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

pub(crate) const API_VERSION: &str = "2016-11-01";
pub(crate) const DEFAULT_ENDPOINT: &str = "https://{accountName}.{adlaJobDnsSuffix}";
pub(crate) const DEFAULT_DNS_SUFFIX: &str = "azuredatalakeanalytics.net";
