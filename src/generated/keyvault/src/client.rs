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

//! Contains the KeyVaultManagementClient and related types.

use gax::client_builder::Error as BuilderError;
use gaxi::http::HttpClient;
use std::sync::Arc;

/// Implements a client for the Azure Key Vault Management API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
/// # use azure_mgmt_keyvault::client::KeyVaultManagementClient;
/// # use azure_mgmt_keyvault::credentials::AccessToken;
/// let client = KeyVaultManagementClient::builder()
///     .with_credentials(AccessToken::new("my-token"))
///     .with_subscription_id("00000000-0000-0000-0000-000000000000")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `KeyVaultManagementClient` holds a connection pool internally, it is
/// advised to create one and reuse it. It already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct KeyVaultManagementClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) http: HttpClient,
    pub(crate) subscription_id: String,
}

/// A builder for [KeyVaultManagementClient].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gaxi::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::KeyVaultManagementClient;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = KeyVaultManagementClient;
        type Credentials = gaxi::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

impl KeyVaultManagementClient {
    /// Returns a builder for [KeyVaultManagementClient].
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

    /// Operations on key vaults.
    pub fn vaults(&self) -> VaultsOperations {
        VaultsOperations {
            inner: self.inner.clone(),
        }
    }
}

/// The operations on key vaults.
#[derive(Clone, Debug)]
pub struct VaultsOperations {
    inner: Arc<Inner>,
}

impl VaultsOperations {
    /// Creates or updates a key vault in the specified subscription.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_keyvault::client::VaultsOperations;
    /// # use azure_mgmt_keyvault::model::*;
    /// async fn example(ops: &VaultsOperations, tenant_id: &str) -> gax::Result<()> {
    ///     let vault = ops
    ///         .create_or_update("my-group", "my-vault")
    ///         .set_parameters(VaultCreateOrUpdateParameters::new(
    ///             "westus",
    ///             VaultProperties::new(tenant_id, SkuName::Standard),
    ///         ))
    ///         .send()
    ///         .await?;
    ///     println!("{:?}", vault.body().properties.vault_uri);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_or_update<G, V>(
        &self,
        resource_group_name: G,
        vault_name: V,
    ) -> crate::builder::vaults::CreateOrUpdate
    where
        G: Into<String>,
        V: Into<String>,
    {
        crate::builder::vaults::CreateOrUpdate::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_vault_name(vault_name)
    }

    /// Deletes the specified key vault.
    pub fn delete<G, V>(&self, resource_group_name: G, vault_name: V) -> crate::builder::vaults::Delete
    where
        G: Into<String>,
        V: Into<String>,
    {
        crate::builder::vaults::Delete::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_vault_name(vault_name)
    }

    /// Gets the specified key vault.
    pub fn get<G, V>(&self, resource_group_name: G, vault_name: V) -> crate::builder::vaults::Get
    where
        G: Into<String>,
        V: Into<String>,
    {
        crate::builder::vaults::Get::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
            .set_vault_name(vault_name)
    }

    /// Lists the key vaults in a resource group.
    pub fn list_by_resource_group<G: Into<String>>(
        &self,
        resource_group_name: G,
    ) -> crate::builder::vaults::ListByResourceGroup {
        crate::builder::vaults::ListByResourceGroup::new(self.inner.clone())
            .set_resource_group_name(resource_group_name)
    }
}
