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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The Azure management client libraries for Rust use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client for a subscription.
//!
//! ```
//! # use azure_mgmt_gax::client_builder::examples;
//! # use azure_mgmt_gax::client_builder::Result;
//! # async fn sample() -> Result<()> {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_subscription_id("00000000-0000-0000-0000-000000000000")
//!     .build().await?;
//! # Ok(()) }
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use azure_mgmt_gax::client_builder::examples;
//! # use azure_mgmt_gax::client_builder::Result;
//! # async fn sample() -> Result<()> {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://management.usgovcloudapi.net")
//!     .build().await?;
//! # Ok(()) }
//! ```

use crate::transport::Transport;
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use azure_mgmt_gax::client_builder::examples;
/// use azure_mgmt_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # async fn sample() -> Result<(), Error> {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_missing_parameter() => {
///         println!("the client is not fully configured: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok(()) }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, a required parameter, such as the subscription id, was not
    /// provided.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(&self.0, ErrorKind::MissingParameter(_))
    }

    /// If true, the client could not initialize the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn missing_parameter(name: &'static str) -> Self {
        Self(ErrorKind::MissingParameter(name))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the `{0}` parameter is required to build this client")]
    MissingParameter(&'static str),
    #[error("could not create credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the Azure management client libraries for Rust a "client" represents a
/// connection to a specific resource provider. Each client library defines
/// one client type, with accessors for each operation group. All the clients
/// are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use azure_mgmt_gax::client_builder::examples;
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use azure_mgmt_gax::client_builder::examples;
/// # use azure_mgmt_gax::client_builder::Result;
/// # async fn sample() -> Result<()> {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_subscription_id("00000000-0000-0000-0000-000000000000")
///     .with_accept_language("en-US")
///     .build().await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint, also known as the base URL.
    ///
    /// The default is the public Azure Resource Manager endpoint. Sovereign
    /// clouds and test fixtures need a different value.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the subscription id used in the request URLs.
    ///
    /// Most resource providers require this parameter.
    pub fn with_subscription_id<V: Into<String>>(mut self, v: V) -> Self {
        self.config.subscription_id = Some(v.into());
        self
    }

    /// Sets the default `accept-language` header.
    pub fn with_accept_language<V: Into<String>>(mut self, v: V) -> Self {
        self.config.accept_language = Some(v.into());
        self
    }

    /// If true (the default) each request includes a unique
    /// `x-ms-client-request-id` header.
    pub fn with_generate_client_request_id(mut self, v: bool) -> Self {
        self.config.generate_client_request_id = v;
        self
    }

    /// Sets the interval between polls of long-running operations.
    ///
    /// Services may override this value with a `Retry-After` header. Test
    /// harnesses set this to zero when replaying recorded interactions.
    pub fn with_long_running_operation_retry_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.long_running_operation_retry_timeout = Some(v.into());
        self
    }

    /// Replaces the HTTP transport.
    ///
    /// Most applications use the default transport. Test harnesses replace it
    /// to record or replay interactions.
    pub fn with_transport<T: Transport + 'static>(mut self, v: T) -> Self {
        self.config.transport = Some(Arc::new(v));
        self
    }

    /// Replaces the HTTP transport with a shared instance.
    pub fn with_shared_transport(mut self, v: Arc<dyn Transport>) -> Self {
        self.config.transport = Some(v);
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to an Azure resource provider. The
    /// default configuration works for most applications, but all clients
    /// require credentials, and most require a subscription id.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub subscription_id: Option<String>,
        pub accept_language: Option<String>,
        pub generate_client_request_id: bool,
        pub long_running_operation_retry_timeout: Option<Duration>,
        pub transport: Option<Arc<dyn Transport>>,
        pub tracing: bool,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                subscription_id: None,
                accept_language: None,
                generate_client_request_id: true,
                long_running_operation_retry_timeout: None,
                transport: None,
                tracing: false,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub token: String,
    }

}
