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

use super::CloudError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to create the necessary
/// connection to make a request, the request may timeout before a response is
/// received, or the library may be unable to format the request due to
/// invalid or missing application inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use azure_mgmt_gax::error::Error;
/// match example_function() {
///     Err(e) if e.cloud_error().is_some() => {
///         println!("service error {e}, request id {:?}", e.request_id());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by an Azure service.
    ///
    /// # Example
    /// ```
    /// use azure_mgmt_gax::error::{CloudError, Error};
    /// let cloud = CloudError::new(404, http::HeaderMap::new(), bytes::Bytes::new());
    /// let error = Error::cloud(cloud);
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn cloud(error: CloudError) -> Self {
        Self {
            kind: ErrorKind::Cloud(Box::new(error)),
            source: None,
        }
    }

    /// Creates a [CloudError] from the components of a HTTP response.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        Self::cloud(CloudError::new(status_code, headers, payload))
    }

    /// The [CloudError] associated with this error, if any.
    ///
    /// Azure services return a payload describing the error, with a
    /// service-specific code, a human-readable message, and possibly nested
    /// details. The request id is also available and should be included when
    /// contacting support.
    pub fn cloud_error(&self) -> Option<&CloudError> {
        match &self.kind {
            ErrorKind::Cloud(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.cloud_error().map(CloudError::status_code)
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.cloud_error().map(CloudError::headers)
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.cloud_error().map(CloudError::payload)
    }

    /// The value of the `x-ms-request-id` header, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.cloud_error().and_then(CloudError::request_id)
    }

    /// Returns true if the service reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.cloud_error().is_some_and(CloudError::is_not_found)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use azure_mgmt_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The service returned a success status code, but the payload does not
    /// match the documented schema for the operation.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause for deserialization problems is a mismatch
    /// between the `api-version` used by the client library and the version
    /// of the service handling the request. Upgrading to the latest version of
    /// the client library may fix the problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic and will fail on future attempts with the same input data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot build the request URL.
    ///
    /// This indicates the request is missing required parameters, or the
    /// required parameters do not have a valid format.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters or the parameters
    /// did not match any of the expected formats.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required
    /// path parameter was empty, or a header value contained invalid
    /// characters.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured service principal: verify
    /// the tenant id, client id, and client secret.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// failure to resolve the service host name.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. The client libraries
    /// do not retry these errors.
    pub fn is_io(&self) -> bool {
        matches!(&self.kind, ErrorKind::Io)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request from its parameters {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Cloud(e), _) => write!(f, "{e}"),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Io,
    Cloud(Box<CloudError>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[derive(Debug, thiserror::Error)]
    #[error("test-only source")]
    struct TestSource;

    fn not_found() -> Error {
        let mut headers = HeaderMap::new();
        headers.insert("x-ms-request-id", http::HeaderValue::from_static("rid-123"));
        Error::http(
            404,
            headers,
            bytes::Bytes::from_static(br#"{"error": {"code": "NotFound", "message": "NOT FOUND"}}"#),
        )
    }

    #[test]
    fn cloud() {
        let error = not_found();
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.cloud_error().is_some(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.request_id(), Some("rid-123"));
        assert!(error.is_not_found(), "{error:?}");
        assert!(error.http_headers().is_some(), "{error:?}");
        assert!(error.http_payload().is_some(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(TestSource);
        assert!(error.is_timeout(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestSource>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only source"), "{error}");
        assert!(error.cloud_error().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.request_id().is_none(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(TestSource);
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.cloud_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("deserialize"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser(TestSource);
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("serialize"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(TestSource);
        assert!(error.is_binding(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(TestSource);
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.to_string().contains("authentication"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(TestSource);
        assert!(error.is_io(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("transport"), "{error}");
    }
}
