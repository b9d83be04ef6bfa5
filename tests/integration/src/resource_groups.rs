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
use azure_mgmt_resource::client::ResourceManagementClient;
use azure_mgmt_resource::model::ResourceGroup;
use azure_mgmt_test_utils::testcase::TestContext;
use lro::PollingResult;

/// Creates, inspects, lists, and deletes a resource group.
pub async fn lifecycle(ctx: &TestContext) -> Result<()> {
    let client: ResourceManagementClient = ctx
        .create_mgmt_client(ResourceManagementClient::builder())
        .await?;
    let groups = client.resource_groups();
    let name = ctx.create_random_name("sdktestrg", 24);

    let created = groups
        .create_or_update(&name)
        .set_parameters(
            ResourceGroup::new()
                .set_location(ctx.region())
                .set_tags([("purpose", "lifecycle")]),
        )
        .send()
        .await?;
    tracing::info!("create_or_update response={created:?}");
    assert_eq!(created.body().name.as_deref(), Some(name.as_str()));
    assert_eq!(created.body().location, ctx.region());
    assert_eq!(created.body().provisioning_state(), Some("Succeeded"));

    let exists = groups.check_existence(&name).send().await?;
    assert!(*exists.body(), "{exists:?}");

    let group = groups.get(&name).send().await?;
    assert_eq!(
        group.body().tags.get("purpose").map(String::as_str),
        Some("lifecycle")
    );

    let mut items = groups.list().set_filter("tagName eq 'purpose'").by_item();
    let mut found = Vec::new();
    while let Some(item) = items.next().await {
        found.extend(item?.name);
    }
    assert!(found.contains(&name), "{found:?}");

    let mut poller = groups.delete(&name).poller();
    let mut in_progress = 0;
    while let Some(p) = poller.poll().await {
        match p {
            PollingResult::Completed(r) => r?,
            PollingResult::InProgress => in_progress += 1,
            PollingResult::PollingError(e) => return Err(e.into()),
        }
        tokio::time::sleep(poller.delay()).await;
    }
    tracing::info!("resource group deleted after {in_progress} polls");

    let exists = groups.check_existence(&name).send().await?;
    assert!(!*exists.body(), "{exists:?}");
    Ok(())
}
