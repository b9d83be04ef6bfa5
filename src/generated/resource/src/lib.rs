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

//! Azure Management Client Libraries for Rust - Resource Management API
//!
//! This crate contains traits, types, and functions to interact with the
//! resource groups of an Azure subscription. Most applications will use the
//! structs defined in the [client] module.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> Result<(), Box<dyn std::error::Error>> {
//! use azure_mgmt_resource::client::ResourceManagementClient;
//! use azure_mgmt_resource::credentials::AccessToken;
//! use azure_mgmt_resource::model::ResourceGroup;
//! let client = ResourceManagementClient::builder()
//!     .with_credentials(AccessToken::new("my-token"))
//!     .with_subscription_id("00000000-0000-0000-0000-000000000000")
//!     .build()
//!     .await?;
//! let group = client
//!     .resource_groups()
//!     .create_or_update("my-group")
//!     .set_parameters(ResourceGroup::new().set_location("westus"))
//!     .send()
//!     .await?;
//! println!("{group:?}");
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

/// The API version sent with every request.
pub(crate) const API_VERSION: &str = "2017-05-10";

/// The default endpoint for the Azure Resource Manager.
pub(crate) const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
