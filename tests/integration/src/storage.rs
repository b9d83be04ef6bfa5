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

use crate::Result;
use azure_mgmt_storage::client::StorageManagementClient;
use azure_mgmt_storage::model::{Kind, SkuName};
use azure_mgmt_test_utils::preparer::{
    ResourceGroupPreparer, StorageAccountPreparer, run_preparers,
};
use azure_mgmt_test_utils::testcase::TestContext;

/// Creates a storage account in a new resource group, and reads it back.
pub async fn account_lifecycle(ctx: &TestContext) -> Result<()> {
    let group = ResourceGroupPreparer::new();
    let account = StorageAccountPreparer::new();
    run_preparers(ctx, &[&group, &account], |values| async move {
        let group = values.require("resource_group_name")?;
        let account = values.require("storage_account_name")?;
        let client: StorageManagementClient = ctx
            .create_mgmt_client(StorageManagementClient::builder())
            .await?;
        let accounts = client.storage_accounts();

        let properties = accounts.get_properties(group, account).send().await?;
        tracing::info!("get_properties response={properties:?}");
        let properties = properties.into_body();
        assert_eq!(properties.name.as_deref(), Some(account));
        assert_eq!(properties.kind, Some(Kind::Storage));
        assert_eq!(
            properties.sku.map(|s| s.name),
            Some(SkuName::StandardLrs)
        );

        let keys = accounts.list_keys(group, account).send().await?;
        let names = keys
            .body()
            .keys
            .iter()
            .filter_map(|k| k.key_name.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["key1", "key2"]);

        let mut items = accounts.list_by_resource_group(group).by_item();
        let mut found = Vec::new();
        while let Some(item) = items.next().await {
            found.extend(item?.name);
        }
        assert_eq!(found, vec![account.to_string()]);
        Ok(())
    })
    .await
}
