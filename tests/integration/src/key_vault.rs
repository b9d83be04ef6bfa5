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
use azure_mgmt_keyvault::client::KeyVaultManagementClient;
use azure_mgmt_test_utils::preparer::{
    KeyVaultPreparer, ResourceGroupPreparer, Values, run_preparers,
};
use azure_mgmt_test_utils::session::TestSession;
use azure_mgmt_test_utils::testcase::TestContext;
use std::sync::Arc;

async fn check_vault(ctx: &TestContext, values: &Values) -> Result<()> {
    let group = values.require("resource_group_name")?;
    let name = values.require("key_vault")?;
    let client: KeyVaultManagementClient = ctx
        .create_mgmt_client(KeyVaultManagementClient::builder())
        .await?;
    let vault = client.vaults().get(group, name).send().await?;
    tracing::info!("get response={vault:?}");
    let vault = vault.into_body();
    assert_eq!(vault.name.as_deref(), Some(name));
    assert_eq!(vault.properties.tenant_id, ctx.settings().tenant_id());
    assert_eq!(
        vault.properties.vault_uri.as_deref(),
        values.get("key_vault_uri")
    );
    Ok(())
}

/// Creates a key vault for the test, and reads its properties.
pub async fn vault_properties(ctx: &TestContext) -> Result<()> {
    let group = ResourceGroupPreparer::new();
    let vault = KeyVaultPreparer::new();
    run_preparers(ctx, &[&group, &vault], |values| async move {
        check_vault(ctx, &values).await
    })
    .await
}

/// Uses the key vault shared by all the tests in the process.
pub async fn shared_vault(ctx: &TestContext) -> Result<()> {
    let group = ResourceGroupPreparer::new();
    run_preparers(ctx, &[&group], |values| async move {
        let session = TestSession::global();
        let shared = session
            .shared("vault", ctx, Arc::new(KeyVaultPreparer::new()), &values)
            .await?;
        // A second request reuses the vault.
        let again = session
            .shared("vault", ctx, Arc::new(KeyVaultPreparer::new()), &values)
            .await?;
        assert_eq!(shared, again);

        let mut values = values;
        values.extend(shared);
        let result = check_vault(ctx, &values).await;
        session.teardown().await?;
        result
    })
    .await
}
