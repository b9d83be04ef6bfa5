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

//! Contains the ResourceManagementClient and related types.

use gax::client_builder::Error as BuilderError;
use gaxi::http::HttpClient;
use std::sync::Arc;

/// Implements a client for the Azure Resource Manager.
///
/// # Example
/// ```no_run
/// # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
/// # use azure_mgmt_resource::client::ResourceManagementClient;
/// # use azure_mgmt_resource::credentials::AccessToken;
/// let client = ResourceManagementClient::builder()
///     .with_credentials(AccessToken::new("my-token"))
///     .with_subscription_id("00000000-0000-0000-0000-000000000000")
///     .build()
///     .await?;
/// // use `client` to make requests to the Azure Resource Manager.
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `ResourceManagementClient` use the `with_*` methods in the
/// type returned by [builder()][ResourceManagementClient::builder]. All
/// clients require [with_credentials()] and [with_subscription_id()].
///
/// # Pooling and Cloning
///
/// `ResourceManagementClient` holds a connection pool internally, it is
/// advised to create one and reuse it. You do not need to wrap it in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [with_subscription_id()]: gax::client_builder::ClientBuilder::with_subscription_id
#[derive(Clone, Debug)]
pub struct ResourceManagementClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) http: HttpClient,
    pub(crate) subscription_id: String,
}

/// A builder for [ResourceManagementClient].
///
/// ```no_run
/// # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
/// # use azure_mgmt_resource::*;
/// # use client::ClientBuilder;
/// # use client::ResourceManagementClient;
/// let builder: ClientBuilder = ResourceManagementClient::builder();
/// let client = builder
///     .with_endpoint("https://management.usgovcloudapi.net")
///     .with_credentials(credentials::Anonymous)
///     .with_subscription_id("00000000-0000-0000-0000-000000000000")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gaxi::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::ResourceManagementClient;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = ResourceManagementClient;
        type Credentials = gaxi::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

impl ResourceManagementClient {
    /// Returns a builder for [ResourceManagementClient].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let subscription_id = config
            .subscription_id
            .clone()
            .ok_or_else(|| BuilderError::missing_parameter("subscription_id"))?;
        let http = HttpClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                subscription_id,
            }),
        })
    }

    /// The subscription targeted by this client.
    pub fn subscription_id(&self) -> &str {
        &self.inner.subscription_id
    }

    /// Operations on resource groups.
    pub fn resource_groups(&self) -> ResourceGroupsOperations {
        ResourceGroupsOperations {
            inner: self.inner.clone(),
        }
    }
}

/// The operations on resource groups.
///
/// Obtained from [ResourceManagementClient::resource_groups].
#[derive(Clone, Debug)]
pub struct ResourceGroupsOperations {
    inner: Arc<Inner>,
}

impl ResourceGroupsOperations {
    /// Creates or updates a resource group.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_resource::client::ResourceGroupsOperations;
    /// # use azure_mgmt_resource::model::ResourceGroup;
    /// async fn example(ops: &ResourceGroupsOperations) -> gax::Result<()> {
    ///     let group = ops
    ///         .create_or_update("my-group")
    ///         .set_parameters(ResourceGroup::new().set_location("westus"))
    ///         .send()
    ///         .await?;
    ///     println!("created {:?} in {}", group.body().name, group.body().location);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_or_update<T: Into<String>>(
        &self,
        resource_group_name: T,
    ) -> crate::builder::resource_groups::CreateOrUpdate {
        crate::builder::resource_groups::CreateOrUpdate::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
    }

    /// Gets a resource group.
    pub fn get<T: Into<String>>(
        &self,
        resource_group_name: T,
    ) -> crate::builder::resource_groups::Get {
        crate::builder::resource_groups::Get::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
    }

    /// Checks whether a resource group exists.
    ///
    /// The response body is `true` if the resource group exists.
    pub fn check_existence<T: Into<String>>(
        &self,
        resource_group_name: T,
    ) -> crate::builder::resource_groups::CheckExistence {
        crate::builder::resource_groups::CheckExistence::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
    }

    /// Deletes a resource group and all the resources it contains.
    ///
    /// This is a long-running operation.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_resource::client::ResourceGroupsOperations;
    /// async fn example(ops: &ResourceGroupsOperations) -> gax::Result<()> {
    ///     ops.delete("my-group").send().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn delete<T: Into<String>>(
        &self,
        resource_group_name: T,
    ) -> crate::builder::resource_groups::Delete {
        crate::builder::resource_groups::Delete::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
    }

    /// Lists the resource groups in the subscription.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_resource::client::ResourceGroupsOperations;
    /// async fn example(ops: &ResourceGroupsOperations) -> gax::Result<()> {
    ///     let mut items = ops.list().by_item();
    ///     while let Some(group) = items.next().await {
    ///         println!("{:?}", group?.name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list(&self) -> crate::builder::resource_groups::List {
        crate::builder::resource_groups::List::new(self.inner.clone())
    }
}
