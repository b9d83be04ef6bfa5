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

//! The recording format.
//!
//! A recording is a JSON file with the interactions of one test, in the
//! order they happened. Bodies are stored as text, the services use JSON
//! payloads.

use crate::errors::RecordingError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The headers of a request or response, with repeated values preserved.
pub type Headers = BTreeMap<String, Vec<String>>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Recording {
    pub interactions: Vec<Interaction>,
}

/// One request and the response received for it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Interaction {
    pub request: RecordedRequest,
    pub response: RecordedResponse,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: Headers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RecordedResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: Headers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn from_http(request: &http::Request<Bytes>) -> Self {
        Self {
            method: request.method().to_string(),
            uri: request.uri().to_string(),
            headers: from_header_map(request.headers()),
            body: body_text(request.body()),
        }
    }
}

impl RecordedResponse {
    pub fn from_http(response: &http::Response<Bytes>) -> Self {
        Self {
            status: response.status().as_u16(),
            headers: from_header_map(response.headers()),
            body: body_text(response.body()),
        }
    }

    /// Converts the recorded response back to a [http::Response].
    ///
    /// Headers that are not valid HTTP headers are skipped.
    pub fn to_http(&self) -> gax::Result<http::Response<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, values) in &self.headers {
            let Ok(name) = http::header::HeaderName::try_from(name.as_str()) else {
                continue;
            };
            for value in values {
                if let Ok(value) = http::header::HeaderValue::try_from(value.as_str()) {
                    builder = builder.header(name.clone(), value);
                }
            }
        }
        let body = self.body.clone().map(Bytes::from).unwrap_or_default();
        builder.body(body).map_err(gax::error::Error::io)
    }
}

fn from_header_map(headers: &http::HeaderMap) -> Headers {
    let mut map = Headers::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        map.entry(name.as_str().to_string())
            .or_default()
            .push(value.to_string());
    }
    map
}

fn body_text(body: &Bytes) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(body).into_owned())
}

impl Recording {
    /// Loads the recording at `path`.
    pub fn load(path: &Path) -> Result<Self, RecordingError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RecordingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| RecordingError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the recording to `path`, creating any missing directories.
    pub fn save(&self, path: &Path) -> Result<(), RecordingError> {
        let io = |source| RecordingError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(|source| RecordingError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, contents + "\n").map_err(io)
    }
}

/// Returns the path of the recording for a test.
pub fn recording_path(dir: &Path, qualified_test_name: &str) -> PathBuf {
    dir.join(format!("{qualified_test_name}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn sample() -> Recording {
        Recording {
            interactions: vec![Interaction {
                request: RecordedRequest {
                    method: "PUT".into(),
                    uri: "https://management.azure.com/subscriptions/00000000-0000-0000-0000-000000000000/resourcegroups/rg?api-version=2017-05-10".into(),
                    headers: Headers::from([(
                        "content-type".to_string(),
                        vec!["application/json".to_string()],
                    )]),
                    body: Some(r#"{"location":"westus"}"#.into()),
                },
                response: RecordedResponse {
                    status: 201,
                    headers: Headers::from([(
                        "x-ms-request-id".to_string(),
                        vec!["rid-1".to_string()],
                    )]),
                    body: Some(r#"{"name":"rg","location":"westus"}"#.into()),
                },
            }],
        }
    }

    #[test]
    fn save_and_load() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = recording_path(&dir.path().join("nested"), "groups.create");
        assert!(path.ends_with("nested/groups.create.json"), "{path:?}");
        sample().save(&path)?;
        let got = Recording::load(&path)?;
        assert_eq!(got, sample());
        Ok(())
    }

    #[test]
    fn load_missing() {
        let got = Recording::load(Path::new("/does/not/exist.json"));
        assert!(matches!(got, Err(RecordingError::Io { .. })), "{got:?}");
    }

    #[test]
    fn load_invalid() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json")?;
        let got = Recording::load(&path);
        assert!(matches!(got, Err(RecordingError::Json { .. })), "{got:?}");
        Ok(())
    }

    #[test]
    fn json_format() -> TestResult {
        let got = serde_json::to_value(sample())?;
        let interaction = &got["interactions"][0];
        assert_eq!(interaction["request"]["method"], "PUT");
        assert_eq!(interaction["response"]["status"], 201);
        assert_eq!(
            interaction["response"]["headers"]["x-ms-request-id"][0],
            "rid-1"
        );
        Ok(())
    }

    #[test]
    fn from_http() -> TestResult {
        let request = http::Request::builder()
            .method("GET")
            .uri("https://management.azure.com/subscriptions?api-version=1")
            .header("accept", "application/json")
            .body(Bytes::new())?;
        let got = RecordedRequest::from_http(&request);
        assert_eq!(got.method, "GET");
        assert_eq!(got.body, None);
        assert_eq!(got.headers["accept"], vec!["application/json"]);

        let response = http::Response::builder()
            .status(404)
            .header("x-ms-request-id", "rid")
            .body(Bytes::from_static(b"{}"))?;
        let got = RecordedResponse::from_http(&response);
        assert_eq!(got.status, 404);
        assert_eq!(got.body.as_deref(), Some("{}"));

        let back = got.to_http()?;
        assert_eq!(back.status(), 404);
        assert_eq!(
            back.headers().get("x-ms-request-id").and_then(|v| v.to_str().ok()),
            Some("rid")
        );
        assert_eq!(back.body(), &Bytes::from_static(b"{}"));
        Ok(())
    }
}
