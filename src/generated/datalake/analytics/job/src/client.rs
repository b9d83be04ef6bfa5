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

//! Contains the DataLakeAnalyticsJobManagementClient and related types.

use gaxi::http::HttpClient;
use std::sync::Arc;

/// Implements a client for the Azure Data Lake Analytics Job API.
///
/// The client does not need a subscription. The requests go to the host of
/// the Data Lake Analytics account named in each call.
///
/// # Example
/// ```no_run
/// # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
/// # use azure_mgmt_datalake_analytics_job::client::DataLakeAnalyticsJobManagementClient;
/// # use azure_mgmt_datalake_analytics_job::credentials::AccessToken;
/// let client = DataLakeAnalyticsJobManagementClient::builder()
///     .with_credentials(AccessToken::new("my-token"))
///     .build()
///     .await?
///     .with_adla_job_dns_suffix("azuredatalakeanalytics.net");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct DataLakeAnalyticsJobManagementClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) http: HttpClient,
    pub(crate) adla_job_dns_suffix: String,
}

/// A builder for [DataLakeAnalyticsJobManagementClient].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gaxi::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::DataLakeAnalyticsJobManagementClient;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = DataLakeAnalyticsJobManagementClient;
        type Credentials = gaxi::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

impl DataLakeAnalyticsJobManagementClient {
    /// Returns a builder for [DataLakeAnalyticsJobManagementClient].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let http = HttpClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                adla_job_dns_suffix: crate::DEFAULT_DNS_SUFFIX.to_string(),
            }),
        })
    }

    /// Changes the DNS suffix used as the base for all Data Lake Analytics
    /// Job service requests.
    pub fn with_adla_job_dns_suffix<V: Into<String>>(self, v: V) -> Self {
        Self {
            inner: Arc::new(Inner {
                http: self.inner.http.clone(),
                adla_job_dns_suffix: v.into(),
            }),
        }
    }

    /// The DNS suffix used as the base for all requests.
    pub fn adla_job_dns_suffix(&self) -> &str {
        &self.inner.adla_job_dns_suffix
    }

    /// Operations on job pipelines.
    pub fn pipeline(&self) -> PipelineOperations {
        PipelineOperations {
            inner: self.inner.clone(),
        }
    }
}

/// The operations on the job pipelines of an account.
#[derive(Clone, Debug)]
pub struct PipelineOperations {
    inner: Arc<Inner>,
}

impl PipelineOperations {
    /// Lists all pipelines.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_datalake_analytics_job::client::PipelineOperations;
    /// # use time::{Duration, OffsetDateTime};
    /// async fn example(ops: &PipelineOperations) -> gax::Result<()> {
    ///     let end = OffsetDateTime::now_utc();
    ///     let mut pipelines = ops
    ///         .list("myadlaaccount")
    ///         .set_start_date_time(end - Duration::days(7))
    ///         .set_end_date_time(end)
    ///         .by_item();
    ///     while let Some(p) = pipelines.next().await {
    ///         println!("{:?}", p?.pipeline_name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list<T: Into<String>>(&self, account_name: T) -> crate::builder::pipeline::List {
        crate::builder::pipeline::List::new(self.inner.clone()).set_account_name(account_name)
    }

    /// Gets the pipeline information for the specified pipeline ID.
    pub fn get<A, P>(&self, account_name: A, pipeline_identity: P) -> crate::builder::pipeline::Get
    where
        A: Into<String>,
        P: Into<String>,
    {
        crate::builder::pipeline::Get::new(self.inner.clone())
            .set_account_name(account_name)
            .set_pipeline_identity(pipeline_identity)
    }
}
