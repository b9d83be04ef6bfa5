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

//! Simplifies the implementation of `Poller`

use bytes::Bytes;
use gax::Result;
use gax::error::{CloudError, Error};
use http::{HeaderMap, Method, StatusCode};
use std::time::Duration;

pub(crate) const ASYNC_OPERATION_HEADER: &str = "azure-asyncoperation";
pub(crate) const LOCATION_HEADER: &str = "location";
pub(crate) const RETRY_AFTER_HEADER: &str = "retry-after";

/// How to find out the status of an operation in progress.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Monitor {
    /// Poll the `Azure-AsyncOperation` URL until its `status` is terminal,
    /// then fetch `final_url`, if any.
    AsyncOperation {
        url: String,
        final_url: Option<String>,
    },
    /// Poll the `Location` URL until it stops returning `202 Accepted`.
    Location { url: String },
    /// Poll the resource until its `provisioningState` is terminal.
    Resource { url: String },
}

impl Monitor {
    pub(crate) fn url(&self) -> &str {
        match self {
            Self::AsyncOperation { url, .. } => url,
            Self::Location { url } => url,
            Self::Resource { url } => url,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Next<R> {
    Done(Result<R>),
    Poll(Monitor),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum OperationStatus {
    InProgress,
    Succeeded,
    Failed,
}

impl OperationStatus {
    fn classify(status: &str) -> Self {
        if status.eq_ignore_ascii_case("succeeded") {
            return Self::Succeeded;
        }
        if ["failed", "canceled", "cancelled"]
            .iter()
            .any(|s| status.eq_ignore_ascii_case(s))
        {
            return Self::Failed;
        }
        Self::InProgress
    }
}

pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parses the body of a successful response.
///
/// Operations like `DELETE` complete with an empty body, in that case the
/// default value is returned.
pub(crate) fn parse_body<R>(body: &Bytes) -> Result<R>
where
    R: serde::de::DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(R::default());
    }
    serde_json::from_slice::<R>(body).map_err(Error::deser)
}

fn provisioning_state(body: &Bytes) -> Option<OperationStatus> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    value
        .get("properties")
        .and_then(|p| p.get("provisioningState"))
        .and_then(serde_json::Value::as_str)
        .map(OperationStatus::classify)
}

fn failed(status: StatusCode, headers: HeaderMap, body: Bytes) -> Error {
    Error::cloud(CloudError::new(status.as_u16(), headers, body))
}

/// Decides how to continue after the initial response.
pub(crate) fn handle_initial<R>(
    method: &Method,
    resource_url: &str,
    response: http::Response<Bytes>,
) -> Next<R>
where
    R: serde::de::DeserializeOwned + Default,
{
    let status = response.status();
    let (parts, body) = response.into_parts();
    if status == StatusCode::NO_CONTENT {
        return Next::Done(Ok(R::default()));
    }
    let location = header(&parts.headers, LOCATION_HEADER);
    if let Some(url) = header(&parts.headers, ASYNC_OPERATION_HEADER) {
        let final_url = if method == Method::PUT || method == Method::PATCH {
            Some(resource_url.to_string())
        } else {
            location
        };
        return Next::Poll(Monitor::AsyncOperation { url, final_url });
    }
    if let Some(url) = location {
        if status == StatusCode::ACCEPTED || status == StatusCode::CREATED {
            return Next::Poll(Monitor::Location { url });
        }
    }
    if method == Method::PUT || method == Method::PATCH {
        match provisioning_state(&body) {
            Some(OperationStatus::InProgress) => {
                return Next::Poll(Monitor::Resource {
                    url: resource_url.to_string(),
                });
            }
            Some(OperationStatus::Failed) => {
                return Next::Done(Err(failed(status, parts.headers, body)));
            }
            _ => {}
        }
    }
    if status == StatusCode::ACCEPTED {
        return Next::Done(Ok(R::default()));
    }
    Next::Done(parse_body(&body))
}

/// Extracts the status from an `Azure-AsyncOperation` response.
///
/// Returns an error if the operation failed or was canceled.
pub(crate) fn async_operation_status(response: http::Response<Bytes>) -> Result<OperationStatus> {
    let (parts, body) = response.into_parts();
    let value = serde_json::from_slice::<serde_json::Value>(&body).map_err(Error::deser)?;
    let status = value
        .get("status")
        .and_then(serde_json::Value::as_str)
        .map(OperationStatus::classify)
        .ok_or_else(|| Error::deser("missing `status` in the operation status response"))?;
    match status {
        OperationStatus::Failed => Err(failed(parts.status, parts.headers, body)),
        s => Ok(s),
    }
}

/// Decides how to continue after polling a `Location` URL.
pub(crate) fn handle_location<R>(url: String, response: http::Response<Bytes>) -> Next<R>
where
    R: serde::de::DeserializeOwned + Default,
{
    let status = response.status();
    let (parts, body) = response.into_parts();
    if status == StatusCode::ACCEPTED {
        let url = header(&parts.headers, LOCATION_HEADER).unwrap_or(url);
        return Next::Poll(Monitor::Location { url });
    }
    Next::Done(parse_body(&body))
}

/// Decides how to continue after polling the resource itself.
pub(crate) fn handle_resource<R>(url: String, response: http::Response<Bytes>) -> Next<R>
where
    R: serde::de::DeserializeOwned + Default,
{
    let status = response.status();
    let (parts, body) = response.into_parts();
    match provisioning_state(&body) {
        Some(OperationStatus::InProgress) => Next::Poll(Monitor::Resource { url }),
        Some(OperationStatus::Failed) => Next::Done(Err(failed(status, parts.headers, body))),
        _ => Next::Done(parse_body(&body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> http::Response<Bytes> {
        let mut builder = http::Response::builder().status(status);
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        builder
            .body(Bytes::from(body.to_string()))
            .expect("valid test response")
    }

    const RESOURCE: &str = "https://management.azure.com/subscriptions/s/resourceGroups/rg";

    #[test_case("Succeeded", OperationStatus::Succeeded)]
    #[test_case("succeeded", OperationStatus::Succeeded)]
    #[test_case("Failed", OperationStatus::Failed)]
    #[test_case("Canceled", OperationStatus::Failed)]
    #[test_case("InProgress", OperationStatus::InProgress)]
    #[test_case("Creating", OperationStatus::InProgress)]
    fn classify(input: &str, want: OperationStatus) {
        assert_eq!(OperationStatus::classify(input), want);
    }

    #[test]
    fn retry_after_header() {
        let r = response(202, &[("Retry-After", "17")], "");
        assert_eq!(retry_after(r.headers()), Some(Duration::from_secs(17)));
        let r = response(202, &[("Retry-After", "soon")], "");
        assert_eq!(retry_after(r.headers()), None);
        let r = response(202, &[], "");
        assert_eq!(retry_after(r.headers()), None);
    }

    #[test]
    fn initial_no_content() {
        let next = handle_initial::<Value>(&Method::DELETE, RESOURCE, response(204, &[], ""));
        assert!(matches!(next, Next::Done(Ok(Value::Null))), "{next:?}");
    }

    #[test]
    fn initial_synchronous() {
        let next = handle_initial::<Value>(
            &Method::PUT,
            RESOURCE,
            response(201, &[], r#"{"name": "rg", "properties": {"provisioningState": "Succeeded"}}"#),
        );
        match next {
            Next::Done(Ok(v)) => assert_eq!(v["name"], "rg"),
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn initial_async_operation_put() {
        let next = handle_initial::<Value>(
            &Method::PUT,
            RESOURCE,
            response(
                201,
                &[("Azure-AsyncOperation", "https://op/1"), ("Location", "https://loc/1")],
                "{}",
            ),
        );
        match next {
            Next::Poll(m) => assert_eq!(
                m,
                Monitor::AsyncOperation {
                    url: "https://op/1".into(),
                    final_url: Some(RESOURCE.into())
                }
            ),
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn initial_async_operation_delete() {
        let next = handle_initial::<Value>(
            &Method::DELETE,
            RESOURCE,
            response(202, &[("Azure-AsyncOperation", "https://op/1")], ""),
        );
        match next {
            Next::Poll(m) => assert_eq!(
                m,
                Monitor::AsyncOperation {
                    url: "https://op/1".into(),
                    final_url: None
                }
            ),
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn initial_location() {
        let next = handle_initial::<Value>(
            &Method::DELETE,
            RESOURCE,
            response(202, &[("Location", "https://loc/1")], ""),
        );
        match next {
            Next::Poll(m) => assert_eq!(
                m,
                Monitor::Location {
                    url: "https://loc/1".into()
                }
            ),
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn initial_provisioning() {
        let next = handle_initial::<Value>(
            &Method::PUT,
            RESOURCE,
            response(201, &[], r#"{"properties": {"provisioningState": "Creating"}}"#),
        );
        match next {
            Next::Poll(m) => assert_eq!(
                m,
                Monitor::Resource {
                    url: RESOURCE.into()
                }
            ),
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn initial_provisioning_failed() {
        let next = handle_initial::<Value>(
            &Method::PUT,
            RESOURCE,
            response(
                200,
                &[],
                r#"{"properties": {"provisioningState": "Failed"}, "error": {"code": "Quota", "message": "over quota"}}"#,
            ),
        );
        match next {
            Next::Done(Err(e)) => {
                assert_eq!(e.cloud_error().and_then(|c| c.code()), Some("Quota"))
            }
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn async_operation() -> anyhow::Result<()> {
        let status = async_operation_status(response(200, &[], r#"{"status": "InProgress"}"#))?;
        assert_eq!(status, OperationStatus::InProgress);
        let status = async_operation_status(response(200, &[], r#"{"status": "Succeeded"}"#))?;
        assert_eq!(status, OperationStatus::Succeeded);

        let body = json!({"status": "Failed", "error": {"code": "Conflict", "message": "busy"}});
        let err = async_operation_status(response(200, &[], &body.to_string())).unwrap_err();
        let cloud = err.cloud_error().expect("a cloud error");
        assert_eq!(cloud.code(), Some("Conflict"));
        assert_eq!(cloud.message(), Some("busy"));

        let err = async_operation_status(response(200, &[], "{}")).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test]
    fn location() {
        let next = handle_location::<Value>(
            "https://loc/1".into(),
            response(202, &[("Location", "https://loc/2")], ""),
        );
        assert!(
            matches!(&next, Next::Poll(Monitor::Location { url }) if url == "https://loc/2"),
            "{next:?}"
        );
        let next = handle_location::<Value>("https://loc/1".into(), response(202, &[], ""));
        assert!(
            matches!(&next, Next::Poll(Monitor::Location { url }) if url == "https://loc/1"),
            "{next:?}"
        );
        let next = handle_location::<Value>("https://loc/1".into(), response(200, &[], ""));
        assert!(matches!(next, Next::Done(Ok(Value::Null))), "{next:?}");
        let next =
            handle_location::<Value>("https://loc/1".into(), response(200, &[], r#"{"a": 1}"#));
        match next {
            Next::Done(Ok(v)) => assert_eq!(v, json!({"a": 1})),
            n => panic!("unexpected {n:?}"),
        }
    }

    #[test]
    fn resource() {
        let next = handle_resource::<Value>(
            RESOURCE.into(),
            response(200, &[], r#"{"properties": {"provisioningState": "Updating"}}"#),
        );
        assert!(matches!(next, Next::Poll(Monitor::Resource { .. })), "{next:?}");
        let next = handle_resource::<Value>(
            RESOURCE.into(),
            response(200, &[], r#"{"properties": {"provisioningState": "Succeeded"}}"#),
        );
        assert!(matches!(next, Next::Done(Ok(_))), "{next:?}");
    }
}
