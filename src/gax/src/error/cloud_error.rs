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

use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// The header used by Azure services to identify a request in their logs.
pub const REQUEST_ID_HEADER: &str = "x-ms-request-id";

/// An error returned by an Azure management service.
///
/// Any response with a status code not documented as a success for the
/// operation becomes a `CloudError`. The services typically include a JSON
/// payload describing the problem, in the form:
///
/// ```norust
/// { "error": { "code": "ResourceGroupNotFound", "message": "...", "target": "...", "details": [] } }
/// ```
///
/// Some services omit the `error` wrapper. Both forms are accepted. Errors
/// generated by proxies or load balancers may not include any JSON at all, in
/// that case only the status code, headers, and raw payload are available.
///
/// # Example
/// ```
/// use azure_mgmt_gax::error::CloudError;
/// let body = bytes::Bytes::from_static(br#"{"error": {"code": "NotFound", "message": "gone"}}"#);
/// let mut headers = http::HeaderMap::new();
/// headers.insert("x-ms-request-id", http::HeaderValue::from_static("abc-123"));
/// let error = CloudError::new(404, headers, body);
/// assert_eq!(error.code(), Some("NotFound"));
/// assert_eq!(error.request_id(), Some("abc-123"));
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct CloudError {
    status_code: u16,
    body: Option<ErrorBody>,
    request_id: Option<String>,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

impl CloudError {
    /// Creates a new error from the components of an HTTP response.
    pub fn new(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = ErrorBody::parse(&payload);
        Self {
            status_code,
            body,
            request_id,
            headers,
            payload,
        }
    }

    /// The HTTP status code returned by the service.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The service-specific error code, e.g. `ResourceGroupNotFound`.
    pub fn code(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.code.as_deref())
    }

    /// The human-readable description of the error.
    pub fn message(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.message.as_deref())
    }

    /// The target of the error, typically the name of an invalid parameter.
    pub fn target(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.target.as_deref())
    }

    /// Additional errors, typically one per invalid field in the request.
    pub fn details(&self) -> &[ErrorBody] {
        self.body
            .as_ref()
            .map(|b| b.details.as_slice())
            .unwrap_or_default()
    }

    /// The value of the `x-ms-request-id` header, if the service returned one.
    ///
    /// Include this value when contacting Azure support.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response payload.
    pub fn payload(&self) -> &bytes::Bytes {
        &self.payload
    }

    /// Returns true if the service reports the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code == http::StatusCode::NOT_FOUND.as_u16()
    }
}

impl std::fmt::Display for CloudError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            Some(body) => write!(
                f,
                "the service reports a [{}] error with code {} described as: {}",
                self.status_code,
                body.code.as_deref().unwrap_or("<unknown>"),
                body.message.as_deref().unwrap_or_default()
            )?,
            None => match std::str::from_utf8(&self.payload) {
                Ok(message) => write!(
                    f,
                    "the service reports a [{}] error: {message}",
                    self.status_code
                )?,
                Err(_) => write!(
                    f,
                    "the service reports a [{}] error: {:?}",
                    self.status_code, self.payload
                )?,
            },
        };
        if let Some(id) = &self.request_id {
            write!(f, " (request id: {id})")?;
        }
        Ok(())
    }
}

/// The error payload returned by Azure management services.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorBody {
    /// The service-specific error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The target of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Nested errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorBody>,
}

impl ErrorBody {
    fn parse(payload: &bytes::Bytes) -> Option<Self> {
        #[derive(Deserialize)]
        struct Wrapper {
            error: ErrorBody,
        }
        if let Ok(w) = serde_json::from_slice::<Wrapper>(payload) {
            return Some(w.error);
        }
        serde_json::from_slice::<ErrorBody>(payload)
            .ok()
            .filter(|b| b.code.is_some() || b.message.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use pretty_assertions::assert_eq;

    fn headers_with_request_id(id: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(id));
        headers
    }

    #[test]
    fn wrapped() {
        let payload = serde_json::json!({"error": {
            "code": "ResourceGroupNotFound",
            "message": "Resource group 'rg' could not be found.",
            "target": "resourceGroupName",
            "details": [{"code": "Inner", "message": "inner message"}]
        }});
        let error = CloudError::new(
            404,
            headers_with_request_id("req-001"),
            bytes::Bytes::from(payload.to_string()),
        );
        assert_eq!(error.status_code(), 404);
        assert_eq!(error.code(), Some("ResourceGroupNotFound"));
        assert_eq!(
            error.message(),
            Some("Resource group 'rg' could not be found.")
        );
        assert_eq!(error.target(), Some("resourceGroupName"));
        assert_eq!(error.details().len(), 1);
        assert_eq!(error.details()[0].code.as_deref(), Some("Inner"));
        assert_eq!(error.request_id(), Some("req-001"));
        assert!(error.is_not_found(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("ResourceGroupNotFound"), "{fmt}");
        assert!(fmt.contains("req-001"), "{fmt}");
    }

    #[test]
    fn unwrapped() {
        let payload = serde_json::json!({"code": "Conflict", "message": "already exists"});
        let error = CloudError::new(
            409,
            HeaderMap::new(),
            bytes::Bytes::from(payload.to_string()),
        );
        assert_eq!(error.code(), Some("Conflict"));
        assert_eq!(error.message(), Some("already exists"));
        assert!(error.request_id().is_none(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
    }

    #[test]
    fn not_json() {
        let error = CloudError::new(
            502,
            headers_with_request_id("req-002"),
            bytes::Bytes::from_static(b"Bad Gateway"),
        );
        assert_eq!(error.code(), None);
        assert_eq!(error.message(), None);
        assert!(error.details().is_empty(), "{error:?}");
        assert_eq!(error.payload(), &bytes::Bytes::from_static(b"Bad Gateway"));
        let fmt = error.to_string();
        assert!(fmt.contains("[502]"), "{fmt}");
        assert!(fmt.contains("Bad Gateway"), "{fmt}");
    }

    #[test]
    fn json_without_error_fields() {
        let error = CloudError::new(
            500,
            HeaderMap::new(),
            bytes::Bytes::from_static(br#"{"unrelated": true}"#),
        );
        assert_eq!(error.code(), None);
        assert!(error.to_string().contains("unrelated"), "{error}");
    }
}
