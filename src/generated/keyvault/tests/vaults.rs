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

#[cfg(test)]
mod tests {
    use azure_mgmt_keyvault::client::KeyVaultManagementClient;
    use azure_mgmt_keyvault::credentials::Anonymous;
    use azure_mgmt_keyvault::model::*;
    use futures::TryStreamExt;
    use httptest::{Expectation, Server, cycle, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const SUB: &str = "00000000-0000-0000-0000-000000000000";
    const TENANT: &str = "00000000-0000-0000-0000-000000000001";
    const API_VERSION: &str = "2016-10-01";

    async fn test_client(server: &Server) -> Result<KeyVaultManagementClient> {
        let client = KeyVaultManagementClient::builder()
            .with_endpoint(server.url_str(""))
            .with_credentials(Anonymous)
            .with_subscription_id(SUB)
            .build()
            .await?;
        Ok(client)
    }

    fn vaults_path() -> String {
        format!("/subscriptions/{SUB}/resourceGroups/test-rg/providers/Microsoft.KeyVault/vaults")
    }

    fn vault_json(name: &str) -> serde_json::Value {
        json!({
            "id": format!("{}/{name}", vaults_path()),
            "name": name,
            "type": "Microsoft.KeyVault/vaults",
            "location": "westus",
            "properties": {
                "tenantId": TENANT,
                "sku": {"family": "A", "name": "standard"},
                "accessPolicies": [],
                "vaultUri": format!("https://{name}.vault.azure.net/"),
                "enabledForDeployment": true
            }
        })
    }

    #[tokio::test]
    async fn create_or_update() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("{}/testvault", vaults_path())),
                request::query(url_decoded(contains(("api-version", API_VERSION)))),
                request::body(json_decoded(eq(json!({
                    "location": "westus",
                    "properties": {
                        "tenantId": TENANT,
                        "sku": {"family": "A", "name": "standard"},
                        "accessPolicies": [{
                            "tenantId": TENANT,
                            "objectId": "test-object",
                            "permissions": {"keys": ["all"], "secrets": ["all"]}
                        }],
                        "enabledForDeployment": true,
                        "enabledForDiskEncryption": true,
                        "enabledForTemplateDeployment": true
                    }
                })))),
            ])
            .times(2)
            .respond_with(cycle![
                status_code(201).body(vault_json("testvault").to_string()),
                json_encoded(vault_json("testvault")),
            ]),
        );
        let client = test_client(&server).await?;
        let parameters = VaultCreateOrUpdateParameters::new(
            "westus",
            VaultProperties::new(TENANT, SkuName::Standard)
                .set_access_policies([AccessPolicyEntry::new(TENANT, "test-object")
                    .set_permissions(
                        Permissions::new()
                            .set_keys([KeyPermissions::All])
                            .set_secrets([SecretPermissions::All]),
                    )])
                .set_enabled_for_deployment(true)
                .set_enabled_for_disk_encryption(true)
                .set_enabled_for_template_deployment(true),
        );

        let created = client
            .vaults()
            .create_or_update("test-rg", "testvault")
            .set_parameters(parameters.clone())
            .send()
            .await?;
        assert_eq!(created.status_code(), 201);
        assert_eq!(
            created.body().properties.vault_uri.as_deref(),
            Some("https://testvault.vault.azure.net/")
        );

        let updated = client
            .vaults()
            .create_or_update("test-rg", "testvault")
            .set_parameters(parameters)
            .send()
            .await?;
        assert_eq!(updated.status_code(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn get_and_delete() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{}/testvault", vaults_path()),
            ))
            .respond_with(json_encoded(vault_json("testvault"))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("{}/testvault", vaults_path())),
                request::query(url_decoded(contains(("api-version", API_VERSION)))),
            ])
            .respond_with(status_code(200)),
        );
        let client = test_client(&server).await?;
        let vault = client.vaults().get("test-rg", "testvault").send().await?;
        assert_eq!(vault.body().name.as_deref(), Some("testvault"));
        assert_eq!(vault.body().properties.tenant_id, TENANT);
        assert_eq!(vault.body().properties.enabled_for_deployment, Some(true));

        let deleted = client.vaults().delete("test-rg", "testvault").send().await?;
        assert_eq!(deleted.status_code(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn get_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("{}/missing", vaults_path()),
            ))
            .respond_with(
                status_code(404)
                    .insert_header("x-ms-request-id", "rid-404")
                    .body(
                        json!({"error": {
                            "code": "ResourceNotFound",
                            "message": "The Resource 'Microsoft.KeyVault/vaults/missing' was not found."
                        }})
                        .to_string(),
                    ),
            ),
        );
        let client = test_client(&server).await?;
        let err = client
            .vaults()
            .get("test-rg", "missing")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(err.request_id(), Some("rid-404"));
        assert_eq!(
            err.cloud_error().and_then(|e| e.code()),
            Some("ResourceNotFound")
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_by_resource_group() -> Result<()> {
        let server = Server::run();
        let next = server.url_str("/page2?api-version=2016-10-01&$skiptoken=v2");
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", vaults_path()),
                request::query(url_decoded(contains(("$top", "1")))),
                request::query(url_decoded(contains(("api-version", API_VERSION)))),
            ])
            .respond_with(json_encoded(json!({
                "value": [vault_json("vault1")],
                "nextLink": next
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/page2"),
                request::query(url_decoded(contains(("$skiptoken", "v2")))),
            ])
            .respond_with(json_encoded(json!({"value": [vault_json("vault2")]}))),
        );
        let client = test_client(&server).await?;
        let names = client
            .vaults()
            .list_by_resource_group("test-rg")
            .set_top(1)
            .by_item()
            .map_ok(|v| v.name.unwrap_or_default())
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(names, vec!["vault1", "vault2"]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_vault_name() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.vaults().get("test-rg", "").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
