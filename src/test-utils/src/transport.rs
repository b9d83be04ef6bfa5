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

//! [Transport] implementations to record and replay interactions.

use crate::recording::{Interaction, RecordedRequest, RecordedResponse, Recording};
use crate::scrubber::{Scrubber, normalize_uri};
use bytes::Bytes;
use gax::error::Error;
use gax::transport::Transport;
use std::sync::{Arc, Mutex, PoisonError};

/// Sends requests using an inner transport and records the scrubbed
/// interactions.
#[derive(Clone, Debug)]
pub struct RecordingTransport {
    inner: Arc<dyn Transport>,
    scrubber: Scrubber,
    log: Arc<Mutex<Vec<Interaction>>>,
}

impl RecordingTransport {
    pub fn new(inner: Arc<dyn Transport>, scrubber: Scrubber) -> Self {
        Self {
            inner,
            scrubber,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The interactions recorded so far.
    pub fn interactions(&self) -> Vec<Interaction> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns a recording with the interactions recorded so far.
    pub fn to_recording(&self) -> Recording {
        Recording {
            interactions: self.interactions(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: http::Request<Bytes>) -> gax::Result<http::Response<Bytes>> {
        let recorded = RecordedRequest::from_http(&request);
        let response = self.inner.send(request).await?;
        let interaction = Interaction {
            request: recorded,
            response: RecordedResponse::from_http(&response),
        };
        if let Some(scrubbed) = self.scrubber.scrub(interaction) {
            tracing::debug!(method = %scrubbed.request.method, uri = %scrubbed.request.uri, status = scrubbed.response.status, "recorded interaction");
            self.log
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(scrubbed);
        }
        Ok(response)
    }
}

/// Replays the responses in a recording.
///
/// Each request is matched to the first unused interaction with the same
/// method and [normalized][normalize_uri] URI. Requests with no match fail
/// with an I/O error, as a broken connection would.
#[derive(Debug)]
pub struct PlaybackTransport {
    interactions: Vec<Interaction>,
    state: Mutex<PlaybackState>,
}

#[derive(Debug, Default)]
struct PlaybackState {
    used: Vec<bool>,
    matched: Vec<usize>,
}

impl PlaybackTransport {
    pub fn new(recording: Recording) -> Self {
        let used = vec![false; recording.interactions.len()];
        Self {
            interactions: recording.interactions,
            state: Mutex::new(PlaybackState {
                used,
                matched: Vec::new(),
            }),
        }
    }

    /// The indices of the interactions replayed so far, in request order.
    pub fn matched_sequence(&self) -> Vec<usize> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .matched
            .clone()
    }

    /// The number of interactions not replayed yet.
    pub fn remaining(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .used
            .iter()
            .filter(|u| !**u)
            .count()
    }

    fn find(&self, method: &str, uri: &str) -> Option<usize> {
        let uri = normalize_uri(uri);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let index = self.interactions.iter().enumerate().position(|(i, x)| {
            !state.used[i]
                && x.request.method.eq_ignore_ascii_case(method)
                && normalize_uri(&x.request.uri) == uri
        })?;
        state.used[index] = true;
        state.matched.push(index);
        Some(index)
    }
}

#[async_trait::async_trait]
impl Transport for PlaybackTransport {
    async fn send(&self, request: http::Request<Bytes>) -> gax::Result<http::Response<Bytes>> {
        let method = request.method().to_string();
        let uri = request.uri().to_string();
        let Some(index) = self.find(&method, &uri) else {
            return Err(Error::io(format!(
                "no recorded interaction matches {method} {uri}"
            )));
        };
        tracing::debug!(%method, %uri, index, "replaying interaction");
        let mut response = self.interactions[index].response.to_http()?;
        // Replayed operations complete without waiting.
        response.headers_mut().remove(http::header::RETRY_AFTER);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::Headers;
    use crate::settings::FakeSettings;
    use pretty_assertions::assert_eq;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        Inner {}
        #[async_trait::async_trait]
        impl Transport for Inner {
            async fn send(&self, request: http::Request<Bytes>) -> gax::Result<http::Response<Bytes>>;
        }
    }

    fn request(method: &str, uri: &str) -> http::Request<Bytes> {
        http::Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", "Bearer secret")
            .body(Bytes::new())
            .expect("valid request")
    }

    fn interaction(method: &str, uri: &str, body: &str) -> Interaction {
        Interaction {
            request: RecordedRequest {
                method: method.into(),
                uri: uri.into(),
                headers: Headers::new(),
                body: None,
            },
            response: RecordedResponse {
                status: 200,
                headers: Headers::new(),
                body: Some(body.into()),
            },
        }
    }

    #[tokio::test]
    async fn record() -> TestResult {
        let mut inner = MockInner::new();
        inner.expect_send().times(2).returning(|r| {
            let status = if r.uri().path().contains("oauth2") { 200 } else { 201 };
            Ok(http::Response::builder()
                .status(status)
                .header("date", "Mon, 01 Jan 2018 00:00:00 GMT")
                .body(Bytes::from_static(b"{\"subscription\":\"real-sub\"}"))
                .expect("valid response"))
        });
        let scrubber = Scrubber::default().with_replacement("real-sub", FakeSettings::SUBSCRIPTION_ID);
        let transport = RecordingTransport::new(Arc::new(inner), scrubber);

        let response = transport
            .send(request("PUT", "https://management.azure.com/subscriptions/real-sub/resourcegroups/rg"))
            .await?;
        assert_eq!(response.status(), 201);
        // The caller sees the unscrubbed response.
        assert_eq!(
            response.body(),
            &Bytes::from_static(b"{\"subscription\":\"real-sub\"}")
        );
        transport
            .send(request("POST", "https://login.microsoftonline.com/t/oauth2/token"))
            .await?;

        let got = transport.interactions();
        assert_eq!(got.len(), 1, "{got:?}");
        let recorded = &got[0];
        assert_eq!(
            recorded.request.uri,
            format!(
                "https://management.azure.com/subscriptions/{}/resourcegroups/rg",
                FakeSettings::SUBSCRIPTION_ID
            )
        );
        assert!(recorded.request.headers.is_empty(), "{recorded:?}");
        assert!(recorded.response.headers.is_empty(), "{recorded:?}");
        assert_eq!(transport.to_recording().interactions, got);
        Ok(())
    }

    #[tokio::test]
    async fn record_error() {
        let mut inner = MockInner::new();
        inner
            .expect_send()
            .times(1)
            .returning(|_| Err(Error::io("connection reset")));
        let transport = RecordingTransport::new(Arc::new(inner), Scrubber::default());
        let got = transport
            .send(request("GET", "https://management.azure.com/subscriptions"))
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_io()), "{got:?}");
        assert!(transport.interactions().is_empty());
    }

    #[tokio::test]
    async fn playback_order() -> TestResult {
        let recording = Recording {
            interactions: vec![
                interaction("GET", "https://management.azure.com/a?x=1&api-version=1", "first"),
                interaction("GET", "https://management.azure.com/b", "second"),
                interaction("GET", "https://management.azure.com/a?api-version=1&x=1", "third"),
            ],
        };
        let transport = PlaybackTransport::new(recording);
        assert_eq!(transport.remaining(), 3);

        // Host and query order are ignored.
        let response = transport
            .send(request("GET", "http://127.0.0.1:1234/a?api-version=1&x=1"))
            .await?;
        assert_eq!(response.body(), &Bytes::from_static(b"first"));
        let response = transport
            .send(request("GET", "http://127.0.0.1:1234/a?api-version=1&x=1"))
            .await?;
        assert_eq!(response.body(), &Bytes::from_static(b"third"));
        let response = transport
            .send(request("get", "http://127.0.0.1:1234/b"))
            .await?;
        assert_eq!(response.body(), &Bytes::from_static(b"second"));

        assert_eq!(transport.matched_sequence(), vec![0, 2, 1]);
        assert_eq!(transport.remaining(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn playback_no_match() {
        let recording = Recording {
            interactions: vec![interaction("GET", "https://management.azure.com/a", "a")],
        };
        let transport = PlaybackTransport::new(recording);
        let got = transport
            .send(request("DELETE", "https://management.azure.com/a"))
            .await;
        assert!(got.as_ref().is_err_and(|e| e.is_io()), "{got:?}");
        let got = transport
            .send(request("GET", "https://management.azure.com/a"))
            .await;
        assert!(got.is_ok(), "{got:?}");
        let got = transport
            .send(request("GET", "https://management.azure.com/a"))
            .await;
        assert!(got.is_err(), "interactions are used once: {got:?}");
        assert_eq!(transport.matched_sequence(), vec![0]);
    }

    #[tokio::test]
    async fn playback_ignores_retry_after() -> TestResult {
        let mut accepted = interaction("DELETE", "https://management.azure.com/a", "");
        accepted.response.status = 202;
        accepted.response.headers.insert("retry-after".into(), vec!["15".into()]);
        accepted.response.headers.insert(
            "location".into(),
            vec!["https://management.azure.com/op".into()],
        );
        let transport = PlaybackTransport::new(Recording {
            interactions: vec![accepted],
        });
        let response = transport
            .send(request("DELETE", "https://management.azure.com/a"))
            .await?;
        assert_eq!(response.status(), 202);
        assert!(response.headers().get("retry-after").is_none(), "{response:?}");
        assert!(response.headers().get("location").is_some(), "{response:?}");
        Ok(())
    }
}
