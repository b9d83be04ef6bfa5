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

//! Azure Management Client Libraries for Rust - Key Vault Management API
//!
//! This crate manages key vaults and their access policies.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
//! use azure_mgmt_keyvault::client::KeyVaultManagementClient;
//! use azure_mgmt_keyvault::credentials::AccessToken;
//! use azure_mgmt_keyvault::model::*;
//! let client = KeyVaultManagementClient::builder()
//!     .with_credentials(AccessToken::new("my-token"))
//!     .with_subscription_id("00000000-0000-0000-0000-000000000000")
//!     .build()
//!     .await?;
//! let tenant_id = "11111111-1111-1111-1111-111111111111";
//! let vault = client
//!     .vaults()
//!     .create_or_update("my-group", "my-vault")
//!     .set_parameters(VaultCreateOrUpdateParameters::new(
//!         "westus",
//!         VaultProperties::new(tenant_id, Sku::new(SkuName::Standard)).set_access_policies([
//!             AccessPolicyEntry::new(tenant_id, "22222222-2222-2222-2222-222222222222")
//!                 .set_permissions(Permissions::new().set_keys([KeyPermissions::All])),
//!         ]),
//!     ))
//!     .send()
//!     .await?;
//! println!("{:?}", vault.body().properties.vault_uri);
//! # Ok(()) }
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;
pub use gaxi::credentials;

/// Request builders for each operation.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

pub(crate) const API_VERSION: &str = "2016-10-01";
pub(crate) const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
