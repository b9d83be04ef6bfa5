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

//! Azure Management Client Libraries for Rust - Network Management API
//!
//! This crate contains the messages and enums of the Network Management API
//! used by other client libraries.
//!
//! # Example
//! ```
//! use azure_mgmt_network::model::*;
//! let sku = ExpressRouteCircuitSku::new()
//!     .set_name("Premium_MeteredData")
//!     .set_tier(ExpressRouteCircuitSkuTier::Premium)
//!     .set_family(ExpressRouteCircuitSkuFamily::MeteredData);
//! assert_eq!(sku.tier, Some(ExpressRouteCircuitSkuTier::Premium));
//! ```

/// The messages and enums that are part of this client library.
pub mod model;
