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

use crate::errors::ConfigError;
use std::path::PathBuf;

pub const SUBSCRIPTION_ID_VAR: &str = "AZURE_SUBSCRIPTION_ID";
pub const TENANT_ID_VAR: &str = "AZURE_TENANT_ID";
pub const CLIENT_ID_VAR: &str = "AZURE_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "AZURE_CLIENT_SECRET";
pub const CLIENT_OID_VAR: &str = "AZURE_CLIENT_OID";
pub const AD_DOMAIN_VAR: &str = "AZURE_AD_DOMAIN";

const RECORDINGS_DIR_VAR: &str = "AZURE_TEST_RECORDINGS_DIR";
const DEV_RESOURCE_GROUP_NAME_VAR: &str = "AZURE_CLI_TEST_DEV_RESOURCE_GROUP_NAME";
const DEV_RESOURCE_GROUP_LOCATION_VAR: &str = "AZURE_CLI_TEST_DEV_RESOURCE_GROUP_LOCATION";
const DEV_KEY_VAULT_NAME_VAR: &str = "AZURE_CLI_TEST_DEV_KEY_VAULT_NAME";
const LOG_VAR: &str = "SDK_TESTS_LOG";
const DEFAULT_RECORDINGS_DIR: &str = "recordings";

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Returns the value of a required environment variable.
pub fn required(name: &'static str) -> Result<String, ConfigError> {
    non_empty(name).ok_or(ConfigError::Missing(name))
}

/// Returns the directory containing the recordings.
///
/// Defaults to `recordings/`, relative to the package running the tests.
pub fn recordings_dir() -> PathBuf {
    non_empty(RECORDINGS_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDINGS_DIR))
}

/// Returns the name of an existing resource group to use instead of
/// creating one.
pub fn dev_resource_group_name() -> Option<String> {
    non_empty(DEV_RESOURCE_GROUP_NAME_VAR)
}

/// Returns the location of the resource group named by
/// [dev_resource_group_name].
pub fn dev_resource_group_location() -> Option<String> {
    non_empty(DEV_RESOURCE_GROUP_LOCATION_VAR)
}

/// Returns the name of an existing key vault to use instead of creating one.
pub fn dev_key_vault_name() -> Option<String> {
    non_empty(DEV_KEY_VAULT_NAME_VAR)
}

/// Returns true if the tests should log their requests.
pub fn log_enabled() -> bool {
    non_empty(LOG_VAR).is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}
