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
use azure_mgmt_resource::client::ResourceManagementClient;
use azure_mgmt_resource::model::ResourceGroup;
use lro::PollingResult;
use std::time::Duration;

const KIND: &str = "resource group";

/// Creates a resource group.
///
/// Injects the group name as `resource_group_name` and its location as
/// `resource_group_location`.
///
/// If `AZURE_CLI_TEST_DEV_RESOURCE_GROUP_NAME` is set, the preparer uses
/// that (existing) group instead, and never removes it.
///
/// By default the group is a fixture: its requests are not recorded, and in
/// playback the preparer sends no requests at all.
#[derive(Clone, Debug)]
pub struct ResourceGroupPreparer {
    name_prefix: String,
    parameter_name: String,
    location_parameter_name: String,
    location: String,
    random_name_length: usize,
    disable_recording: bool,
    delete_wait_timeout: Option<Duration>,
    dev_group: Option<(String, String)>,
}

impl Default for ResourceGroupPreparer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceGroupPreparer {
    pub fn new() -> Self {
        let dev_group = runtime_config::dev_resource_group_name().map(|name| {
            let location = runtime_config::dev_resource_group_location()
                .unwrap_or_else(|| DEFAULT_REGION.to_string());
            (name, location)
        });
        Self {
            name_prefix: "sdktest.rg".to_string(),
            parameter_name: "resource_group_name".to_string(),
            location_parameter_name: "resource_group_location".to_string(),
            location: DEFAULT_REGION.to_string(),
            random_name_length: 75,
            disable_recording: true,
            delete_wait_timeout: None,
            dev_group,
        }
    }

    pub fn with_name_prefix<V: Into<String>>(mut self, v: V) -> Self {
        self.name_prefix = v.into();
        self
    }

    pub fn with_parameter_name<V: Into<String>>(mut self, v: V) -> Self {
        self.parameter_name = v.into();
        self
    }

    pub fn with_location_parameter_name<V: Into<String>>(mut self, v: V) -> Self {
        self.location_parameter_name = v.into();
        self
    }

    pub fn with_location<V: Into<String>>(mut self, v: V) -> Self {
        self.location = v.into();
        self
    }

    /// Record the requests to create and remove the group.
    pub fn with_disable_recording(mut self, v: bool) -> Self {
        self.disable_recording = v;
        self
    }

    /// Wait up to `v` for the group to be removed.
    ///
    /// By default the preparer starts the removal and does not wait for it
    /// to complete. Each test uses a different group, so a slow removal does
    /// not affect other tests.
    pub fn with_delete_wait_timeout(mut self, v: Duration) -> Self {
        self.delete_wait_timeout = Some(v);
        self
    }

    /// Ignores `AZURE_CLI_TEST_DEV_RESOURCE_GROUP_NAME`.
    pub fn without_dev_setting(mut self) -> Self {
        self.dev_group = None;
        self
    }

    fn values(&self, name: &str, location: &str) -> Values {
        Values::new()
            .with(&self.parameter_name, name)
            .with(&self.location_parameter_name, location)
    }

    fn is_fake(&self, ctx: &TestContext) -> bool {
        self.disable_recording && ctx.is_playback()
    }

    async fn client(&self, ctx: &TestContext) -> Result<ResourceManagementClient, HarnessError> {
        fixture_client(ctx, self.disable_recording, ResourceManagementClient::builder()).await
    }
}

#[async_trait::async_trait]
impl Preparer for ResourceGroupPreparer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn moniker(&self, ctx: &TestContext) -> String {
        resource_name(
            &self.name_prefix,
            ctx.qualified_test_name(),
            self.random_name_length,
        )
    }

    async fn create_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        _values: &Values,
    ) -> Result<Values, PreparerError> {
        if let Some((dev_name, dev_location)) = &self.dev_group {
            return Ok(self.values(dev_name, dev_location));
        }
        if self.is_fake(ctx) {
            return Ok(self.values(name, &self.location));
        }
        let client = self
            .client(ctx)
            .await
            .map_err(|e| PreparerError::create(KIND, name, e))?;
        client
            .resource_groups()
            .create_or_update(name)
            .set_parameters(
                ResourceGroup::new()
                    .set_location(&self.location)
                    .set_tags([("use", "az-test")]),
            )
            .send()
            .await
            .map_err(|e| PreparerError::create(KIND, name, e))?;
        Ok(self.values(name, &self.location))
    }

    async fn remove_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        _values: &Values,
    ) -> Result<(), PreparerError> {
        if self.dev_group.is_some() || self.is_fake(ctx) {
            return Ok(());
        }
        let client = self
            .client(ctx)
            .await
            .map_err(|e| PreparerError::remove(KIND, name, e))?;
        let mut poller = client.resource_groups().delete(name).poller();
        let outcome = match self.delete_wait_timeout {
            Some(timeout) => poller.wait(Some(timeout)).await,
            // Start the removal, do not wait for it.
            None => match poller.poll().await {
                Some(PollingResult::Completed(Err(e))) | Some(PollingResult::PollingError(e)) => {
                    Err(e)
                }
                _ => Ok(()),
            },
        };
        match (outcome, self.delete_wait_timeout) {
            (Ok(()), _) => Ok(()),
            (Err(e), _) if e.is_not_found() => {
                tracing::debug!(%name, "resource group already removed");
                Ok(())
            }
            (Err(e), Some(timeout)) if e.is_timeout() => Err(PreparerError::Timeout {
                kind: KIND,
                name: name.to_string(),
                timeout,
            }),
            (Err(e), _) => Err(PreparerError::remove(KIND, name, e)),
        }
    }
}
