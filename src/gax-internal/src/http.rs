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

use crate::credentials::Credentials;
use crate::options::{ClientConfig, DEFAULT_POLLING_INTERVAL};
use crate::transport::ReqwestTransport;
use bytes::Bytes;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::transport::Transport;
use http::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;

pub const CLIENT_REQUEST_ID_HEADER: &str = "x-ms-client-request-id";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Describes a request before it is sent.
///
/// The generated code starts with the endpoint and a path, adds the query
/// parameters, and then calls [HttpClient::execute].
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
}

impl RequestBuilder {
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            headers: HeaderMap::new(),
        }
    }

    /// Appends a query parameter.
    pub fn query<V: Into<String>>(mut self, name: &str, value: V) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }

    /// Sets a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The full request URL, including any query parameters.
    pub fn url(&self) -> Result<url::Url> {
        let mut url = url::Url::parse(&self.url).map_err(Error::binding)?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &self.query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}

/// The HTTP client used by all the generated clients.
///
/// Adds the Azure conventions to each request: authentication, the
/// `accept-language` and `x-ms-client-request-id` headers, and JSON bodies.
/// Maps any response with an unexpected status code to a
/// [CloudError][gax::error::CloudError].
#[derive(Clone, Debug)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    cred: Credentials,
    endpoint: String,
    accept_language: Option<String>,
    generate_client_request_id: bool,
    polling_interval: Duration,
    tracing: bool,
}

impl HttpClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let cred = config
            .cred
            .ok_or_else(|| BuilderError::missing_parameter("credentials"))?;
        let transport: Arc<dyn Transport> = match config.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new()?),
        };
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            transport,
            cred,
            endpoint,
            accept_language: config.accept_language,
            generate_client_request_id: config.generate_client_request_id,
            polling_interval: config
                .long_running_operation_retry_timeout
                .unwrap_or(DEFAULT_POLLING_INTERVAL),
            tracing,
        })
    }

    /// The base URL, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The interval between polls of long-running operations, unless the
    /// service requests a different one.
    pub fn polling_interval(&self) -> Duration {
        self.polling_interval
    }

    /// Starts a request for `path`, relative to the endpoint.
    pub fn builder(&self, method: Method, path: String) -> RequestBuilder {
        RequestBuilder::new(method, format!("{}{path}", &self.endpoint))
    }

    /// Starts a request for an absolute URL, such as a `nextLink` or the
    /// status monitor of a long-running operation.
    pub fn builder_for_url(&self, method: Method, url: String) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// Sends the request and deserializes the response body.
    ///
    /// Any status code not in `expected` is returned as an error.
    pub async fn execute<I, O>(
        &self,
        builder: RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
        expected: &[u16],
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let response = self.execute_raw(builder, body, &options, expected).await?;
        to_response(response)
    }

    /// Sends the request and discards the response body.
    pub async fn execute_empty<I>(
        &self,
        builder: RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
        expected: &[u16],
    ) -> Result<Response<()>>
    where
        I: serde::ser::Serialize,
    {
        let response = self.execute_raw(builder, body, &options, expected).await?;
        let status_code = response.status().as_u16();
        let (parts, _) = response.into_parts();
        Ok(Response::from_parts(
            Parts::new()
                .set_headers(parts.headers)
                .set_status_code(status_code),
            (),
        ))
    }

    /// Sends the request and returns the full response, without parsing the
    /// body.
    pub async fn execute_raw<I>(
        &self,
        builder: RequestBuilder,
        body: Option<I>,
        options: &RequestOptions,
        expected: &[u16],
    ) -> Result<http::Response<Bytes>>
    where
        I: serde::ser::Serialize,
    {
        let request = self.make_request(builder, body, options).await?;
        let method = request.method().clone();
        let uri = request.uri().clone();
        if self.tracing {
            tracing::debug!(
                method = %method,
                uri = %uri,
                client_request_id = request
                    .headers()
                    .get(CLIENT_REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default(),
                "sending request"
            );
        }
        let send = self.transport.send(request);
        let response = match options.timeout() {
            Some(t) => tokio::time::timeout(*t, send)
                .await
                .map_err(Error::timeout)??,
            None => send.await?,
        };
        let status = response.status();
        if self.tracing {
            tracing::debug!(
                method = %method,
                uri = %uri,
                status = status.as_u16(),
                request_id = response
                    .headers()
                    .get(gax::error::REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default(),
                "received response"
            );
        }
        if !expected.contains(&status.as_u16()) {
            let (parts, body) = response.into_parts();
            return Err(Error::http(status.as_u16(), parts.headers, body));
        }
        Ok(response)
    }

    async fn make_request<I>(
        &self,
        builder: RequestBuilder,
        body: Option<I>,
        options: &RequestOptions,
    ) -> Result<http::Request<Bytes>>
    where
        I: serde::ser::Serialize,
    {
        let url = builder.url()?;
        let mut headers = builder.headers;
        let payload = match body {
            Some(b) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                Bytes::from(serde_json::to_vec(&b).map_err(Error::ser)?)
            }
            None => Bytes::new(),
        };
        if let Some(lang) = options
            .accept_language()
            .or(self.accept_language.as_deref())
        {
            headers.insert(
                ACCEPT_LANGUAGE,
                HeaderValue::from_str(lang).map_err(Error::binding)?,
            );
        }
        if self.generate_client_request_id {
            let id = uuid::Uuid::new_v4().to_string();
            headers.insert(
                HeaderName::from_static(CLIENT_REQUEST_ID_HEADER),
                HeaderValue::from_str(&id).map_err(Error::binding)?,
            );
        }
        for (name, value) in options.custom_headers() {
            headers.insert(name.clone(), value.clone());
        }
        headers.extend(self.cred.headers().await?);

        let mut request = http::Request::builder()
            .method(builder.method)
            .uri(url.as_str())
            .body(payload)
            .map_err(Error::binding)?;
        *request.headers_mut() = headers;
        Ok(request)
    }
}

/// Serializes an empty request body.
#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts a full response into a [Response], deserializing the body.
///
/// An empty body is only valid for `202 Accepted` and `204 No Content`, in
/// which case the default value is returned.
pub fn to_response<O>(response: http::Response<Bytes>) -> Result<Response<O>>
where
    O: serde::de::DeserializeOwned + Default,
{
    let status = response.status();
    let (parts, body) = response.into_parts();
    let empty_ok = status == StatusCode::NO_CONTENT || status == StatusCode::ACCEPTED;
    let value = match body {
        content if content.is_empty() && empty_ok => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(Response::from_parts(
        Parts::new()
            .set_headers(parts.headers)
            .set_status_code(status.as_u16()),
        value,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn response(code: u16, content: &'static str) -> anyhow::Result<http::Response<Bytes>> {
        Ok(http::Response::builder()
            .status(code)
            .header("content-type", "application/json")
            .body(Bytes::from_static(content.as_bytes()))?)
    }

    #[test_case(200, "{}"; "200 with empty object")]
    #[test_case(204, ""; "204 with empty content")]
    #[test_case(202, ""; "202 with empty content")]
    #[test_case(204, "{}"; "204 with empty object")]
    fn empty_content(code: u16, content: &'static str) -> TestResult {
        let got = to_response::<serde_json::Value>(response(code, content)?)?;
        assert_eq!(got.status_code(), code);
        Ok(())
    }

    #[test]
    fn empty_content_on_ok_is_an_error() -> TestResult {
        let got = to_response::<serde_json::Value>(response(200, "")?);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
        Ok(())
    }

    #[test]
    fn headers_are_preserved() -> TestResult {
        let mut r = response(200, r#"{"a": 1}"#)?;
        r.headers_mut()
            .insert("x-ms-request-id", HeaderValue::from_static("rid"));
        let got = to_response::<serde_json::Value>(r)?;
        assert_eq!(got.request_id(), Some("rid"));
        assert_eq!(got.body(), &serde_json::json!({"a": 1}));
        Ok(())
    }

    #[test]
    fn request_builder_url() -> TestResult {
        let builder = RequestBuilder::new(
            Method::GET,
            "https://management.azure.com/subscriptions/sub/resourcegroups".to_string(),
        )
        .query("api-version", "2017-05-10")
        .query("$filter", "tagName eq 'use'");
        let url = builder.url()?;
        assert_eq!(
            url.as_str(),
            "https://management.azure.com/subscriptions/sub/resourcegroups?api-version=2017-05-10&%24filter=tagName+eq+%27use%27"
        );
        Ok(())
    }

    #[test]
    fn request_builder_keeps_existing_query() -> TestResult {
        let builder = RequestBuilder::new(
            Method::GET,
            "https://management.azure.com/next?api-version=2017-05-10&$skiptoken=abc".to_string(),
        );
        let url = builder.url()?;
        assert_eq!(url.query(), Some("api-version=2017-05-10&$skiptoken=abc"));
        Ok(())
    }

    #[test]
    fn request_builder_bad_url() {
        let builder = RequestBuilder::new(Method::GET, "not a url".to_string());
        let err = builder.url().unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }
}
