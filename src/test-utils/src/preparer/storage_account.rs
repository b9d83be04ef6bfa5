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
use crate::testcase::{DEFAULT_REGION, TestContext};
use azure_mgmt_storage::client::StorageManagementClient;
use azure_mgmt_storage::model::{Kind, SkuName, StorageAccountCreateParameters};

const KIND: &str = "storage account";
const PREPARER: &str = "StorageAccountPreparer";
// Storage account names are limited to 24 lowercase letters and digits.
const MAX_NAME_LENGTH: usize = 24;

/// Creates a storage account in the resource group injected by a preceding
/// [ResourceGroupPreparer][super::ResourceGroupPreparer].
///
/// Injects the account name as `storage_account_name`. The account is not
/// removed by default: removing the resource group removes it too.
#[derive(Clone, Debug)]
pub struct StorageAccountPreparer {
    name_prefix: String,
    sku: SkuName,
    location: String,
    parameter_name: String,
    resource_group_parameter_name: String,
    skip_delete: bool,
    disable_recording: bool,
}

impl Default for StorageAccountPreparer {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageAccountPreparer {
    pub fn new() -> Self {
        Self {
            name_prefix: "sdktest".to_string(),
            sku: SkuName::StandardLrs,
            location: DEFAULT_REGION.to_string(),
            parameter_name: "storage_account_name".to_string(),
            resource_group_parameter_name: "resource_group_name".to_string(),
            skip_delete: true,
            disable_recording: false,
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

    /// The name of the value holding the resource group.
    pub fn with_resource_group_parameter_name<V: Into<String>>(mut self, v: V) -> Self {
        self.resource_group_parameter_name = v.into();
        self
    }

    pub fn with_skip_delete(mut self, v: bool) -> Self {
        self.skip_delete = v;
        self
    }

    pub fn with_disable_recording(mut self, v: bool) -> Self {
        self.disable_recording = v;
        self
    }

    async fn client(&self, ctx: &TestContext) -> Result<StorageManagementClient, HarnessError> {
        fixture_client(ctx, self.disable_recording, StorageManagementClient::builder()).await
    }
}

#[async_trait::async_trait]
impl Preparer for StorageAccountPreparer {
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
        let group = values.dependency(PREPARER, &self.resource_group_parameter_name)?;
        let injected = Values::new().with(&self.parameter_name, name);
        if self.disable_recording && ctx.is_playback() {
            return Ok(injected);
        }
        let client = self
            .client(ctx)
            .await
            .map_err(|e| PreparerError::create(KIND, name, e))?;
        client
            .storage_accounts()
            .create(group, name)
            .set_parameters(
                StorageAccountCreateParameters::new()
                    .set_sku(self.sku.clone())
                    .set_kind(Kind::Storage)
                    .set_location(&self.location),
            )
            .send()
            .await
            .map_err(|e| PreparerError::create(KIND, name, e))?;
        Ok(injected)
    }

    async fn remove_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        values: &Values,
    ) -> Result<(), PreparerError> {
        if self.disable_recording && ctx.is_playback() {
            return Ok(());
        }
        let group = values.dependency(PREPARER, &self.resource_group_parameter_name)?;
        let client = self
            .client(ctx)
            .await
            .map_err(|e| PreparerError::remove(KIND, name, e))?;
        match client.storage_accounts().delete(group, name).send().await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(PreparerError::remove(KIND, name, e)),
        }
    }

    fn skip_delete(&self) -> bool {
        self.skip_delete
    }
}
