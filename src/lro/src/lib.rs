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

//! Types and functions to make LROs easier to use and to require less boilerplate.
//!
//! Azure Resource Manager reports long-running operations in one of three
//! ways: an `Azure-AsyncOperation` header pointing to a status monitor, a
//! `Location` header that returns `202 Accepted` until the operation
//! completes, or a `provisioningState` in the resource itself. The [Poller]
//! handles all three.

use bytes::Bytes;
use details::{Monitor, Next, OperationStatus};
use gax::Result;
use gax::error::Error;
use gax::options::RequestOptions;
use gaxi::http::{HttpClient, NoBody};
use http::Method;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::time::Duration;

mod details;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
#[derive(Debug)]
pub enum PollingResult<R> {
    /// The operation is still in progress.
    InProgress,
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to Azure. Such
    /// transient errors may disappear in the next polling attempt.
    PollingError(Error),
}

type StartFuture = Pin<Box<dyn Future<Output = Result<http::Response<Bytes>>> + Send>>;

enum State {
    Start(StartFuture),
    Polling(Monitor),
    Done,
}

/// Polls a long-running operation until it completes.
///
/// Applications obtain a poller from the `poller()` method of the operation
/// builders. Most applications just call [until_done][Poller::until_done] or
/// [wait][Poller::wait]. Applications that want to report progress call
/// [poll][Poller::poll] in a loop.
///
/// # Example
/// ```no_run
/// # use azure_mgmt_lro::{Poller, PollingResult};
/// # async fn sample(mut poller: Poller<serde_json::Value>) -> gax::Result<()> {
/// while let Some(p) = poller.poll().await {
///     match p {
///         PollingResult::InProgress => println!("still working"),
///         PollingResult::Completed(r) => { println!("done: {:?}", r?); }
///         PollingResult::PollingError(e) => println!("transient error: {e}"),
///     }
/// }
/// # Ok(()) }
/// ```
pub struct Poller<R> {
    client: HttpClient,
    method: Method,
    resource_url: String,
    state: State,
    delay: Duration,
    response: PhantomData<fn() -> R>,
}

impl<R> Poller<R>
where
    R: serde::de::DeserializeOwned + Default + Send,
{
    /// Creates a new poller.
    ///
    /// This is intended as an implementation detail of the generated clients.
    /// Applications should have no need to call this function.
    ///
    /// # Parameters
    /// * `client` - used to poll the operation status.
    /// * `method` - the HTTP method of the initial request.
    /// * `resource_url` - the URL of the resource targeted by the initial
    ///   request. `PUT` and `PATCH` operations fetch it after the operation
    ///   completes.
    /// * `start` - sends the initial request.
    #[doc(hidden)]
    pub fn new<F>(client: HttpClient, method: Method, resource_url: String, start: F) -> Self
    where
        F: Future<Output = Result<http::Response<Bytes>>> + Send + 'static,
    {
        let delay = client.polling_interval();
        Self {
            client,
            method,
            resource_url,
            state: State::Start(Box::pin(start)),
            delay,
            response: PhantomData,
        }
    }

    /// Returns true once the operation completed, successfully or not.
    pub fn done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// The time to wait before the next call to [poll][Poller::poll].
    ///
    /// Uses the `Retry-After` header from the last response, if present,
    /// otherwise the interval configured in the client.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the operation, or queries its current status.
    ///
    /// Returns `None` once the operation completed and its result was
    /// returned.
    pub async fn poll(&mut self) -> Option<PollingResult<R>> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::Start(start) => {
                let response = match start.await {
                    Ok(r) => r,
                    Err(e) => return Some(PollingResult::Completed(Err(e))),
                };
                self.update_delay(response.headers());
                let next = details::handle_initial(&self.method, &self.resource_url, response);
                Some(self.advance(next))
            }
            State::Polling(monitor) => Some(self.poll_monitor(monitor).await),
        }
    }

    /// Polls the operation until it completes.
    ///
    /// Sleeps for [delay][Poller::delay] between polls. Returns the first
    /// polling error, if any.
    pub async fn until_done(mut self) -> Result<R> {
        loop {
            match self.poll().await {
                None => {
                    return Err(Error::deser(
                        "the operation completed, and its result was already returned",
                    ));
                }
                Some(PollingResult::Completed(r)) => return r,
                Some(PollingResult::PollingError(e)) => return Err(e),
                Some(PollingResult::InProgress) => tokio::time::sleep(self.delay).await,
            }
        }
    }

    /// Like [until_done][Poller::until_done], but gives up after `timeout`.
    ///
    /// The operation may continue in the service after this function
    /// returns a timeout error.
    pub async fn wait(self, timeout: Option<Duration>) -> Result<R> {
        match timeout {
            None => self.until_done().await,
            Some(t) => tokio::time::timeout(t, self.until_done())
                .await
                .map_err(Error::timeout)?,
        }
    }

    async fn poll_monitor(&mut self, monitor: Monitor) -> PollingResult<R> {
        tracing::debug!(url = monitor.url(), "polling long-running operation");
        let response = match get(&self.client, monitor.url()).await {
            Ok(r) => r,
            Err(e) => {
                self.state = State::Polling(monitor);
                return PollingResult::PollingError(e);
            }
        };
        self.update_delay(response.headers());
        match monitor {
            Monitor::AsyncOperation { url, final_url } => {
                match details::async_operation_status(response) {
                    Err(e) => PollingResult::Completed(Err(e)),
                    Ok(OperationStatus::InProgress) => {
                        self.state = State::Polling(Monitor::AsyncOperation { url, final_url });
                        PollingResult::InProgress
                    }
                    Ok(_) => match final_url {
                        None => PollingResult::Completed(Ok(R::default())),
                        Some(u) => PollingResult::Completed(fetch_final(&self.client, &u).await),
                    },
                }
            }
            Monitor::Location { url } => {
                let next = details::handle_location(url, response);
                self.advance(next)
            }
            Monitor::Resource { url } => {
                let next = details::handle_resource(url, response);
                self.advance(next)
            }
        }
    }

    fn advance(&mut self, next: Next<R>) -> PollingResult<R> {
        match next {
            Next::Done(r) => PollingResult::Completed(r),
            Next::Poll(m) => {
                self.state = State::Polling(m);
                PollingResult::InProgress
            }
        }
    }

    fn update_delay(&mut self, headers: &http::HeaderMap) {
        self.delay = details::retry_after(headers).unwrap_or(self.client.polling_interval());
    }
}

async fn get(client: &HttpClient, url: &str) -> Result<http::Response<Bytes>> {
    let builder = client.builder_for_url(Method::GET, url.to_string());
    client
        .execute_raw(
            builder,
            None::<NoBody>,
            &RequestOptions::default(),
            &[200, 201, 202, 204],
        )
        .await
}

async fn fetch_final<R>(client: &HttpClient, url: &str) -> Result<R>
where
    R: serde::de::DeserializeOwned + Default,
{
    let builder = client.builder_for_url(Method::GET, url.to_string());
    let response = client
        .execute_raw(builder, None::<NoBody>, &RequestOptions::default(), &[200])
        .await?;
    details::parse_body(response.body())
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details used by the generated clients. Not part of the
    //! public API.
    use super::*;
    use gaxi::http::RequestBuilder;

    /// Creates a poller that sends `builder` as the initial request.
    ///
    /// Errors building the request are reported by the first poll.
    pub fn start<R, I>(
        client: HttpClient,
        builder: Result<RequestBuilder>,
        body: Option<I>,
        options: RequestOptions,
        expected: &'static [u16],
    ) -> Poller<R>
    where
        R: serde::de::DeserializeOwned + Default + Send,
        I: serde::Serialize + Send + 'static,
    {
        let (method, resource_url) = match &builder {
            Ok(b) => (
                b.method().clone(),
                b.url().map(|u| u.to_string()).unwrap_or_default(),
            ),
            Err(_) => (Method::GET, String::new()),
        };
        let inner = client.clone();
        Poller::new(client, method, resource_url, async move {
            inner.execute_raw(builder?, body, &options, expected).await
        })
    }
}

impl<R> std::fmt::Debug for Poller<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Start(_) => "Start".to_string(),
            State::Polling(m) => format!("{m:?}"),
            State::Done => "Done".to_string(),
        };
        f.debug_struct("Poller")
            .field("method", &self.method)
            .field("resource_url", &self.resource_url)
            .field("state", &state)
            .field("delay", &self.delay)
            .finish()
    }
}
