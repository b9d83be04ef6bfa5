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

use bytes::Bytes;

/// Sends fully-formed HTTP requests and returns the full response.
///
/// The client libraries use a [reqwest]-based implementation by default.
/// Applications and test harnesses may replace it, for example to record
/// the interactions with the service, or to replay them without network
/// access.
///
/// Implementations should return a response for any status code, including
/// errors. The client libraries map unexpected status codes to
/// [CloudError][crate::error::CloudError]. Only failures to obtain a
/// response, such as a broken connection, should be returned as errors.
///
/// [reqwest]: https://docs.rs/reqwest
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends `request` and waits for the full response.
    async fn send(&self, request: http::Request<Bytes>) -> crate::Result<http::Response<Bytes>>;
}

#[async_trait::async_trait]
impl<T> Transport for std::sync::Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: http::Request<Bytes>) -> crate::Result<http::Response<Bytes>> {
        self.as_ref().send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct Echo {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl Transport for Echo {
        async fn send(
            &self,
            request: http::Request<Bytes>,
        ) -> crate::Result<http::Response<Bytes>> {
            self.calls.lock().unwrap().push(request.uri().to_string());
            Ok(http::Response::new(request.into_body()))
        }
    }

    #[tokio::test]
    async fn shared() -> anyhow::Result<()> {
        let echo = Arc::new(Echo::default());
        let shared: Arc<dyn Transport> = echo.clone();
        let request = http::Request::builder()
            .uri("https://management.azure.com/subscriptions")
            .body(Bytes::from_static(b"hello"))?;
        let response = shared.send(request).await?;
        assert_eq!(response.body(), &Bytes::from_static(b"hello"));
        assert_eq!(
            echo.calls.lock().unwrap().as_slice(),
            &["https://management.azure.com/subscriptions".to_string()]
        );
        Ok(())
    }
}
