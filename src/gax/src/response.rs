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

//! Response types.
//!
//! This module contains types related to Azure management service responses.
//! Notably it contains the `Response` type itself, used by operations where
//! the application may need the response headers, such as the request id.

use crate::error::REQUEST_ID_HEADER;

/// Represents an Azure management service response.
///
/// A response consists of a body (potentially the unit type), and some
/// metadata: the status code and headers.
///
/// # Example
/// ```
/// # use azure_mgmt_gax::response::{Parts, Response};
/// let mut headers = http::HeaderMap::new();
/// headers.insert("x-ms-request-id", http::HeaderValue::from_static("abc-123"));
/// let response = Response::from_parts(Parts::new().set_headers(headers), "body".to_string());
/// assert_eq!(response.request_id(), Some("abc-123"));
/// assert_eq!(response.body().as_str(), "body");
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, typically used in mocks.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.parts.status_code
    }

    /// The value of the `x-ms-request-id` header, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
    /// The HTTP status code.
    pub status_code: u16,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            headers: http::HeaderMap::new(),
            status_code: http::StatusCode::OK.as_u16(),
        }
    }
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }

    /// Set the status code.
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = v;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.request_id(), None);
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        headers.insert(REQUEST_ID_HEADER, http::HeaderValue::from_static("rid"));
        let parts = Parts::new()
            .set_headers(headers.clone())
            .set_status_code(201);

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.status_code(), 201);
        assert_eq!(response.request_id(), Some("rid"));

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }
}
