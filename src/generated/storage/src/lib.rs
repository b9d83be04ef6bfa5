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

//! Azure Management Client Libraries for Rust - Storage Management API
//!
//! This crate manages storage accounts: creating, updating, and deleting
//! them, listing their keys, and querying the storage quotas of a
//! subscription.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
//! use azure_mgmt_storage::client::StorageManagementClient;
//! use azure_mgmt_storage::credentials::AccessToken;
//! use azure_mgmt_storage::model::{Kind, Sku, SkuName, StorageAccountCreateParameters};
//! let client = StorageManagementClient::builder()
//!     .with_credentials(AccessToken::new("my-token"))
//!     .with_subscription_id("00000000-0000-0000-0000-000000000000")
//!     .build()
//!     .await?;
//! let account = client
//!     .storage_accounts()
//!     .create("my-group", "mystorageaccount")
//!     .set_parameters(
//!         StorageAccountCreateParameters::new()
//!             .set_sku(Sku::new(SkuName::StandardLrs))
//!             .set_kind(Kind::Storage)
//!             .set_location("westus"),
//!     )
//!     .send()
//!     .await?;
//! println!("{account:?}");
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

pub(crate) const API_VERSION: &str = "2016-12-01";
pub(crate) const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
