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

//! Per request options.
//!
//! Applications may need to customize the behavior of some calls made via a
//! client. Applications sometimes change the timeout for a specific call, add
//! custom headers, or change the `accept-language` header. The `*Builder`
//! returned by each client method implements the [RequestOptionsBuilder]
//! trait where applications can override some defaults.

use http::{HeaderMap, HeaderName, HeaderValue};

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    custom_headers: HeaderMap,
    accept_language: Option<String>,
    timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Adds a header sent with the request, in addition to any headers set by
    /// the client library.
    ///
    /// Custom headers override the headers set by the client library with the
    /// same name.
    pub fn add_custom_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.custom_headers.insert(name, value);
    }

    /// Gets the custom headers.
    pub fn custom_headers(&self) -> &HeaderMap {
        &self.custom_headers
    }

    /// Overrides the `accept-language` header configured in the client.
    pub fn set_accept_language<T: Into<String>>(&mut self, v: T) {
        self.accept_language = Some(v.into());
    }

    /// Gets the `accept-language` override, if any.
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }

    /// Sets the timeout for the request.
    ///
    /// The timeout covers sending the request and receiving the full response.
    /// It does not apply to the full lifetime of long-running operations.
    pub fn set_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the current request timeout.
    pub fn timeout(&self) -> &Option<std::time::Duration> {
        &self.timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Azure Management Client Libraries for Rust provide a builder for each
/// operation. These builders can be used to set the request parameters, e.g.,
/// the name of the resource group targeted by the operation, as well as any
/// options affecting the request, such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Adds a custom header to the request.
    fn with_custom_header(self, name: HeaderName, value: HeaderValue) -> Self;

    /// Sets the `accept-language` header for this request.
    fn with_accept_language<V: Into<String>>(self, v: V) -> Self;

    /// Sets the request timeout.
    fn with_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_custom_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().add_custom_header(name, value);
        self
    }

    fn with_accept_language<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_accept_language(v);
        self
    }

    fn with_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }
}
