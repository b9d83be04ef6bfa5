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

//! Contains the StorageManagementClient and related types.

use gax::client_builder::Error as BuilderError;
use gaxi::http::HttpClient;
use std::sync::Arc;

/// Implements a client for the Azure Storage Management API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
/// # use azure_mgmt_storage::client::StorageManagementClient;
/// # use azure_mgmt_storage::credentials::AccessToken;
/// let client = StorageManagementClient::builder()
///     .with_credentials(AccessToken::new("my-token"))
///     .with_subscription_id("00000000-0000-0000-0000-000000000000")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `StorageManagementClient` holds a connection pool internally, it is
/// advised to create one and reuse it. It already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct StorageManagementClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) http: HttpClient,
    pub(crate) subscription_id: String,
}

/// A builder for [StorageManagementClient].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gaxi::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::StorageManagementClient;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = StorageManagementClient;
        type Credentials = gaxi::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

impl StorageManagementClient {
    /// Returns a builder for [StorageManagementClient].
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

    /// Operations on storage accounts.
    pub fn storage_accounts(&self) -> StorageAccountsOperations {
        StorageAccountsOperations {
            inner: self.inner.clone(),
        }
    }

    /// Operations on the storage usage of the subscription.
    pub fn usage(&self) -> UsageOperations {
        UsageOperations {
            inner: self.inner.clone(),
        }
    }
}

/// The operations on storage accounts.
#[derive(Clone, Debug)]
pub struct StorageAccountsOperations {
    inner: Arc<Inner>,
}

impl StorageAccountsOperations {
    /// Checks that the storage account name is valid and is not already in
    /// use.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_storage::client::StorageAccountsOperations;
    /// async fn example(ops: &StorageAccountsOperations) -> gax::Result<()> {
    ///     let result = ops.check_name_availability("mystorageaccount").send().await?;
    ///     if result.body().name_available != Some(true) {
    ///         println!("cannot use the name: {:?}", result.body().message);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn check_name_availability<T: Into<String>>(
        &self,
        account_name: T,
    ) -> crate::builder::storage_accounts::CheckNameAvailability {
        crate::builder::storage_accounts::CheckNameAvailability::new(self.inner.clone())
            .set_account_name(account_name)
    }

    /// Asynchronously creates a new storage account.
    ///
    /// This is a long-running operation. If an account is already created and
    /// a subsequent create request is issued with the same properties, the
    /// request succeeds.
    pub fn create<G, A>(
        &self,
        resource_group_name: G,
        account_name: A,
    ) -> crate::builder::storage_accounts::Create
    where
        G: Into<String>,
        A: Into<String>,
    {
        crate::builder::storage_accounts::Create::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_account_name(account_name)
    }

    /// Deletes a storage account.
    pub fn delete<G, A>(
        &self,
        resource_group_name: G,
        account_name: A,
    ) -> crate::builder::storage_accounts::Delete
    where
        G: Into<String>,
        A: Into<String>,
    {
        crate::builder::storage_accounts::Delete::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_account_name(account_name)
    }

    /// Returns the properties of a storage account, including its SKU, its
    /// endpoints, and its provisioning state. The account keys are not
    /// included, use [list_keys][Self::list_keys].
    pub fn get_properties<G, A>(
        &self,
        resource_group_name: G,
        account_name: A,
    ) -> crate::builder::storage_accounts::GetProperties
    where
        G: Into<String>,
        A: Into<String>,
    {
        crate::builder::storage_accounts::GetProperties::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_account_name(account_name)
    }

    /// Lists all the storage accounts in the subscription.
    pub fn list(&self) -> crate::builder::storage_accounts::List {
        crate::builder::storage_accounts::List::new(self.inner.clone())
    }

    /// Lists the storage accounts in a resource group.
    pub fn list_by_resource_group<G: Into<String>>(
        &self,
        resource_group_name: G,
    ) -> crate::builder::storage_accounts::ListByResourceGroup {
        crate::builder::storage_accounts::ListByResourceGroup::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
    }

    /// Lists the access keys of a storage account.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_storage::client::StorageAccountsOperations;
    /// async fn example(ops: &StorageAccountsOperations) -> gax::Result<()> {
    ///     let keys = ops.list_keys("my-group", "mystorageaccount").send().await?;
    ///     for key in &keys.body().keys {
    ///         println!("{:?} {:?}", key.key_name, key.permissions);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_keys<G, A>(
        &self,
        resource_group_name: G,
        account_name: A,
    ) -> crate::builder::storage_accounts::ListKeys
    where
        G: Into<String>,
        A: Into<String>,
    {
        crate::builder::storage_accounts::ListKeys::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_account_name(account_name)
    }

    /// Regenerates one of the access keys of a storage account.
    pub fn regenerate_key<G, A, K>(
        &self,
        resource_group_name: G,
        account_name: A,
        key_name: K,
    ) -> crate::builder::storage_accounts::RegenerateKey
    where
        G: Into<String>,
        A: Into<String>,
        K: Into<String>,
    {
        crate::builder::storage_accounts::RegenerateKey::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_account_name(account_name)
            .set_key_name(key_name)
    }

    /// Updates the SKU or the tags of a storage account.
    pub fn update<G, A>(
        &self,
        resource_group_name: G,
        account_name: A,
    ) -> crate::builder::storage_accounts::Update
    where
        G: Into<String>,
        A: Into<String>,
    {
        crate::builder::storage_accounts::Update::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_account_name(account_name)
    }
}

/// The operations on the storage usage of a subscription.
#[derive(Clone, Debug)]
pub struct UsageOperations {
    inner: Arc<Inner>,
}

impl UsageOperations {
    /// Gets the current usage count and the limit for the storage resources
    /// of the subscription.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_storage::client::UsageOperations;
    /// async fn example(ops: &UsageOperations) -> gax::Result<()> {
    ///     let mut items = ops.list().by_item();
    ///     while let Some(usage) = items.next().await {
    ///         let usage = usage?;
    ///         println!("{:?}: {:?}/{:?}", usage.name, usage.current_value, usage.limit);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list(&self) -> crate::builder::usage::List {
        crate::builder::usage::List::new(self.inner.clone())
    }
}
