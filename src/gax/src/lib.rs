// Copyright 2024 Google LLC
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

//! Azure management APIs helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Azure Management Client Libraries for Rust. Most
//! applications only use the [error], [paginator], and [response] modules
//! directly.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Defines some types and traits to convert and use list operations as a
/// Stream.
pub mod paginator;

pub mod client_builder;
pub mod options;
pub mod response;

/// Defines the trait implemented by HTTP transports.
pub mod transport;

mod macros;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
