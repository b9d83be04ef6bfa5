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

use super::{Preparer, Values, fixture_client};
use crate::errors::{HarnessError, PreparerError};
use crate::resource_names::resource_name;
use crate::runtime_config;
use crate::testcase::{DEFAULT_REGION, TestContext};
use azure_mgmt_keyvault::client::KeyVaultManagementClient;
use azure_mgmt_keyvault::model::*;

const KIND: &str = "key vault";
const PREPARER: &str = "KeyVaultPreparer";
const MAX_NAME_LENGTH: usize = 24;

/// Creates a key vault in the resource group injected by a preceding
/// [ResourceGroupPreparer][super::ResourceGroupPreparer].
///
/// Injects the vault name as `key_vault` and its URI as `key_vault_uri`.
/// The principal running the tests gets all the permissions on keys and
/// secrets.
///
/// The vault is a fixture: its requests are not recorded, and in playback
/// the preparer sends no requests and injects a fake vault URI. If
/// `AZURE_CLI_TEST_DEV_KEY_VAULT_NAME` is set, the preparer uses that
/// (existing) vault instead, and never removes it.
#[derive(Clone, Debug)]
pub struct KeyVaultPreparer {
    name_prefix: String,
    sku: SkuName,
    location: String,
    parameter_name: String,
    resource_group_parameter_name: String,
    skip_delete: bool,
    playback_fake_vault_uri: Option<String>,
    dev_vault: Option<String>,
}

impl Default for KeyVaultPreparer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyVaultPreparer {
    pub fn new() -> Self {
        Self {
            name_prefix: "clitest".to_string(),
            sku: SkuName::Standard,
            location: DEFAULT_REGION.to_string(),
            parameter_name: "key_vault".to_string(),
            resource_group_parameter_name: "resource_group_name".to_string(),
            skip_delete: true,
            playback_fake_vault_uri: None,
            dev_vault: runtime_config::dev_key_vault_name(),
        }
    }

    pub fn with_name_prefix<V: Into<String>>(mut self, v: V) -> Self {
        self.name_prefix = v.into();
        self
    }

    pub fn with_sku<V: Into<SkuName>>(mut self, v: V) -> Self {
        self.sku = v.into();
        self
    }

    pub fn with_location<V: Into<String>>(mut self, v: V) -> Self {
        self.location = v.into();
        self
    }

    pub fn with_parameter_name<V: Into<String>>(mut self, v: V) -> Self {
        self.parameter_name = v.into();
        self
    }

    pub fn with_resource_group_parameter_name<V: Into<String>>(mut self, v: V) -> Self {
        self.resource_group_parameter_name = v.into();
        self
    }

    pub fn with_skip_delete(mut self, v: bool) -> Self {
        self.skip_delete = v;
        self
    }

    /// The vault URI injected in playback mode.
    ///
    /// Defaults to the public cloud URI for the vault name.
    pub fn with_playback_fake_vault_uri<V: Into<String>>(mut self, v: V) -> Self {
        self.playback_fake_vault_uri = Some(v.into());
        self
    }

    /// Ignores `AZURE_CLI_TEST_DEV_KEY_VAULT_NAME`.
    pub fn without_dev_setting(mut self) -> Self {
        self.dev_vault = None;
        self
    }

    fn values(&self, name: &str, uri: String) -> Values {
        Values::new()
            .with(&self.parameter_name, name)
            .with(format!("{}_uri", self.parameter_name), uri)
    }

    fn parameters(&self, ctx: &TestContext) -> VaultCreateOrUpdateParameters {
        let settings = ctx.settings();
        let policy = AccessPolicyEntry::new(settings.tenant_id(), settings.client_oid())
            .set_permissions(
                Permissions::new()
                    .set_keys([KeyPermissions::All])
                    .set_secrets([SecretPermissions::All]),
            );
        let properties = VaultProperties::new(settings.tenant_id(), self.sku.clone())
            .set_access_policies([policy])
            .set_enabled_for_deployment(true)
            .set_enabled_for_disk_encryption(true)
            .set_enabled_for_template_deployment(true);
        VaultCreateOrUpdateParameters::new(&self.location, properties)
    }

    async fn client(&self, ctx: &TestContext) -> Result<KeyVaultManagementClient, HarnessError> {
        fixture_client(ctx, true, KeyVaultManagementClient::builder()).await
    }
}

fn public_vault_uri(name: &str) -> String {
    format!("https://{name}.vault.azure.net/")
}

#[async_trait::async_trait]
impl Preparer for KeyVaultPreparer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn moniker(&self, ctx: &TestContext) -> String {
        resource_name(&self.name_prefix, ctx.qualified_test_name(), MAX_NAME_LENGTH)
    }

    async fn create_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        values: &Values,
    ) -> Result<Values, PreparerError> {
        if let Some(dev) = &self.dev_vault {
            return Ok(self.values(dev, public_vault_uri(dev)));
        }
        let group = values.dependency(PREPARER, &self.resource_group_parameter_name)?;
        if ctx.is_playback() {
            let uri = self
                .playback_fake_vault_uri
                .clone()
                .unwrap_or_else(|| public_vault_uri(name));
            return Ok(self.values(name, uri));
        }
        let client = self
            .client(ctx)
            .await
            .map_err(|e| PreparerError::create(KIND, name, e))?;
        let vault = client
            .vaults()
            .create_or_update(group, name)
            .set_parameters(self.parameters(ctx))
            .send()
            .await
            .map_err(|e| PreparerError::create(KIND, name, e))?
            .into_body();
        let uri = vault
            .properties
            .vault_uri
            .unwrap_or_else(|| public_vault_uri(name));
        Ok(self.values(name, uri))
    }

    async fn remove_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        values: &Values,
    ) -> Result<(), PreparerError> {
        if self.dev_vault.is_some() || ctx.is_playback() {
            return Ok(());
        }
        let group = values.dependency(PREPARER, &self.resource_group_parameter_name)?;
        let client = self
            .client(ctx)
            .await
            .map_err(|e| PreparerError::remove(KIND, name, e))?;
        match client.vaults().delete(group, name).send().await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(PreparerError::remove(KIND, name, e)),
        }
    }

    fn skip_delete(&self) -> bool {
        self.skip_delete
    }
}
