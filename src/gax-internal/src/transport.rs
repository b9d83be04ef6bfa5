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
use gax::error::Error;
use gax::transport::Transport;

/// The default [Transport], based on [reqwest].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> gax::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(gax::client_builder::Error::transport)?;
        Ok(Self { inner })
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: http::Request<Bytes>) -> gax::Result<http::Response<Bytes>> {
        let request = reqwest::Request::try_from(request).map_err(Error::binding)?;
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        let response = http::Response::from(response);
        let (parts, body) = response.into_parts();
        let body = http_body_util::BodyExt::collect(body)
            .await
            .map_err(Error::io)?
            .to_bytes();
        Ok(http::Response::from_parts(parts, body))
    }
}
