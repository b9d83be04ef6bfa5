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

use crate::API_VERSION;
use crate::client::Inner;
use gax::Result;
use gaxi::http::RequestBuilder;
use gaxi::path_parameter::encode;
use http::Method;

const PROVIDER: &str = "providers/Microsoft.Storage";

fn subscription_request(inner: &Inner, method: Method, suffix: &str) -> Result<RequestBuilder> {
    let path = format!(
        "/subscriptions/{}/{PROVIDER}/{suffix}",
        encode("subscription_id", &inner.subscription_id)?,
    );
    Ok(inner
        .http
        .builder(method, path)
        .query("api-version", API_VERSION))
}

fn resource_group_request(
    inner: &Inner,
    method: Method,
    resource_group_name: &str,
    suffix: &str,
) -> Result<RequestBuilder> {
    let path = format!(
        "/subscriptions/{}/resourceGroups/{}/{PROVIDER}/{suffix}",
        encode("subscription_id", &inner.subscription_id)?,
        encode("resource_group_name", resource_group_name)?,
    );
    Ok(inner
        .http
        .builder(method, path)
        .query("api-version", API_VERSION))
}

fn account_request(
    inner: &Inner,
    method: Method,
    resource_group_name: &str,
    account_name: &str,
    action: Option<&str>,
) -> Result<RequestBuilder> {
    let account = format!(
        "storageAccounts/{}",
        encode("account_name", account_name)?
    );
    let suffix = match action {
        None => account,
        Some(a) => format!("{account}/{a}"),
    };
    resource_group_request(inner, method, resource_group_name, &suffix)
}

pub mod storage_accounts {
    use super::{account_request, resource_group_request, subscription_request};
    use crate::client::Inner;
    use crate::model::*;
    use gax::Result;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use gax::response::Response;
    use gaxi::http::NoBody;
    use http::Method;
    use std::sync::Arc;

    /// The request builder for [StorageAccountsOperations::check_name_availability][crate::client::StorageAccountsOperations::check_name_availability] calls.
    #[derive(Clone, Debug)]
    pub struct CheckNameAvailability {
        inner: Arc<Inner>,
        account_name: String,
        options: RequestOptions,
    }

    impl CheckNameAvailability {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                account_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the storage account name to check.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::check_name_availability", skip_all)]
        pub async fn send(self) -> Result<Response<CheckNameAvailabilityResult>> {
            let builder =
                subscription_request(&self.inner, Method::POST, "checkNameAvailability")?;
            let body = StorageAccountCheckNameAvailabilityParameters::new(self.account_name);
            self.inner
                .http
                .execute(builder, Some(body), self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CheckNameAvailability {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::create][crate::client::StorageAccountsOperations::create] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_storage::builder::storage_accounts::Create;
    /// # use azure_mgmt_storage::model::*;
    /// # async fn sample(builder: Create) -> gax::Result<()> {
    /// let account = builder
    ///     .set_parameters(
    ///         StorageAccountCreateParameters::new()
    ///             .set_sku(SkuName::StandardLrs)
    ///             .set_kind(Kind::Storage)
    ///             .set_location("westus"),
    ///     )
    ///     .poller()
    ///     .wait(Some(std::time::Duration::from_secs(600)))
    ///     .await?;
    /// println!("{:?}", account.properties);
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Create {
        inner: Arc<Inner>,
        resource_group_name: String,
        account_name: String,
        parameters: StorageAccountCreateParameters,
        options: RequestOptions,
    }

    impl Create {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                account_name: String::new(),
                parameters: StorageAccountCreateParameters::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the account.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the storage account.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sets the parameters for the new account.
        pub fn set_parameters<T: Into<StorageAccountCreateParameters>>(mut self, v: T) -> Self {
            self.parameters = v.into();
            self
        }

        /// Creates a [Poller][lro::Poller] to start the operation and track
        /// its progress.
        pub fn poller(self) -> lro::Poller<StorageAccount> {
            let builder = account_request(
                &self.inner,
                Method::PUT,
                &self.resource_group_name,
                &self.account_name,
                None,
            );
            lro::internal::start(
                self.inner.http.clone(),
                builder,
                Some(self.parameters),
                self.options,
                &[200, 202],
            )
        }

        /// Starts the operation and waits until it completes.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::create", skip_all)]
        pub async fn send(self) -> Result<StorageAccount> {
            self.poller().until_done().await
        }
    }

    impl gax::options::internal::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::delete][crate::client::StorageAccountsOperations::delete] calls.
    #[derive(Clone, Debug)]
    pub struct Delete {
        inner: Arc<Inner>,
        resource_group_name: String,
        account_name: String,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                account_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the account.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the storage account.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sends the request.
        ///
        /// Deleting an account that does not exist succeeds with
        /// `204 No Content`.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::delete", skip_all)]
        pub async fn send(self) -> Result<Response<()>> {
            let builder = account_request(
                &self.inner,
                Method::DELETE,
                &self.resource_group_name,
                &self.account_name,
                None,
            )?;
            self.inner
                .http
                .execute_empty(builder, None::<NoBody>, self.options, &[200, 204])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::get_properties][crate::client::StorageAccountsOperations::get_properties] calls.
    #[derive(Clone, Debug)]
    pub struct GetProperties {
        inner: Arc<Inner>,
        resource_group_name: String,
        account_name: String,
        options: RequestOptions,
    }

    impl GetProperties {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                account_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the account.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the storage account.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::get_properties", skip_all)]
        pub async fn send(self) -> Result<Response<StorageAccount>> {
            let builder = account_request(
                &self.inner,
                Method::GET,
                &self.resource_group_name,
                &self.account_name,
                None,
            )?;
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for GetProperties {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::list][crate::client::StorageAccountsOperations::list] calls.
    #[derive(Clone, Debug)]
    pub struct List {
        inner: Arc<Inner>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                options: RequestOptions::default(),
            }
        }

        /// Fetches the first page.
        pub async fn send(self) -> Result<Response<StorageAccountListResult>> {
            self.send_page(None).await
        }

        /// Streams the responses, one page at a time.
        pub fn by_page(self) -> Paginator<StorageAccountListResult, gax::error::Error> {
            let execute = move |link: Option<String>| {
                let builder = self.clone();
                async move { builder.send_page(link).await.map(Response::into_body) }
            };
            Paginator::new(execute)
        }

        /// Streams the storage accounts across all pages.
        pub fn by_item(self) -> ItemPaginator<StorageAccount, gax::error::Error> {
            self.by_page().items()
        }

        #[tracing::instrument(level = "debug", name = "StorageAccounts::list", skip_all)]
        async fn send_page(
            &self,
            next_link: Option<String>,
        ) -> Result<Response<StorageAccountListResult>> {
            let builder = match next_link {
                Some(link) => self.inner.http.builder_for_url(Method::GET, link),
                None => subscription_request(&self.inner, Method::GET, "storageAccounts")?,
            };
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options.clone(), &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::list_by_resource_group][crate::client::StorageAccountsOperations::list_by_resource_group] calls.
    #[derive(Clone, Debug)]
    pub struct ListByResourceGroup {
        inner: Arc<Inner>,
        resource_group_name: String,
        options: RequestOptions,
    }

    impl ListByResourceGroup {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Fetches the first page.
        pub async fn send(self) -> Result<Response<StorageAccountListResult>> {
            self.send_page(None).await
        }

        /// Streams the responses, one page at a time.
        pub fn by_page(self) -> Paginator<StorageAccountListResult, gax::error::Error> {
            let execute = move |link: Option<String>| {
                let builder = self.clone();
                async move { builder.send_page(link).await.map(Response::into_body) }
            };
            Paginator::new(execute)
        }

        /// Streams the storage accounts across all pages.
        pub fn by_item(self) -> ItemPaginator<StorageAccount, gax::error::Error> {
            self.by_page().items()
        }

        #[tracing::instrument(level = "debug", name = "StorageAccounts::list_by_resource_group", skip_all)]
        async fn send_page(
            &self,
            next_link: Option<String>,
        ) -> Result<Response<StorageAccountListResult>> {
            let builder = match next_link {
                Some(link) => self.inner.http.builder_for_url(Method::GET, link),
                None => resource_group_request(
                    &self.inner,
                    Method::GET,
                    &self.resource_group_name,
                    "storageAccounts",
                )?,
            };
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options.clone(), &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for ListByResourceGroup {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::list_keys][crate::client::StorageAccountsOperations::list_keys] calls.
    #[derive(Clone, Debug)]
    pub struct ListKeys {
        inner: Arc<Inner>,
        resource_group_name: String,
        account_name: String,
        options: RequestOptions,
    }

    impl ListKeys {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                account_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the account.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the storage account.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::list_keys", skip_all)]
        pub async fn send(self) -> Result<Response<StorageAccountListKeysResult>> {
            let builder = account_request(
                &self.inner,
                Method::POST,
                &self.resource_group_name,
                &self.account_name,
                Some("listKeys"),
            )?;
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for ListKeys {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::regenerate_key][crate::client::StorageAccountsOperations::regenerate_key] calls.
    #[derive(Clone, Debug)]
    pub struct RegenerateKey {
        inner: Arc<Inner>,
        resource_group_name: String,
        account_name: String,
        key_name: String,
        options: RequestOptions,
    }

    impl RegenerateKey {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                account_name: String::new(),
                key_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the account.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the storage account.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sets the name of the key to regenerate, `key1` or `key2`.
        pub fn set_key_name<T: Into<String>>(mut self, v: T) -> Self {
            self.key_name = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::regenerate_key", skip_all)]
        pub async fn send(self) -> Result<Response<StorageAccountListKeysResult>> {
            let builder = account_request(
                &self.inner,
                Method::POST,
                &self.resource_group_name,
                &self.account_name,
                Some("regenerateKey"),
            )?;
            let body = StorageAccountRegenerateKeyParameters::new(self.key_name);
            self.inner
                .http
                .execute(builder, Some(body), self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for RegenerateKey {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [StorageAccountsOperations::update][crate::client::StorageAccountsOperations::update] calls.
    #[derive(Clone, Debug)]
    pub struct Update {
        inner: Arc<Inner>,
        resource_group_name: String,
        account_name: String,
        parameters: StorageAccountUpdateParameters,
        options: RequestOptions,
    }

    impl Update {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                account_name: String::new(),
                parameters: StorageAccountUpdateParameters::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the account.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the storage account.
        pub fn set_account_name<T: Into<String>>(mut self, v: T) -> Self {
            self.account_name = v.into();
            self
        }

        /// Sets the fields to update.
        pub fn set_parameters<T: Into<StorageAccountUpdateParameters>>(mut self, v: T) -> Self {
            self.parameters = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "StorageAccounts::update", skip_all)]
        pub async fn send(self) -> Result<Response<StorageAccount>> {
            let builder = account_request(
                &self.inner,
                Method::PATCH,
                &self.resource_group_name,
                &self.account_name,
                None,
            )?;
            self.inner
                .http
                .execute(builder, Some(self.parameters), self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

pub mod usage {
    use super::subscription_request;
    use crate::client::Inner;
    use crate::model::{Usage, UsageListResult};
    use gax::Result;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use gax::response::Response;
    use gaxi::http::NoBody;
    use http::Method;
    use std::sync::Arc;

    /// The request builder for [UsageOperations::list][crate::client::UsageOperations::list] calls.
    #[derive(Clone, Debug)]
    pub struct List {
        inner: Arc<Inner>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                options: RequestOptions::default(),
            }
        }

        /// Fetches the usages.
        pub async fn send(self) -> Result<Response<UsageListResult>> {
            self.send_page(None).await
        }

        /// Streams the responses, one page at a time.
        pub fn by_page(self) -> Paginator<UsageListResult, gax::error::Error> {
            let execute = move |link: Option<String>| {
                let builder = self.clone();
                async move { builder.send_page(link).await.map(Response::into_body) }
            };
            Paginator::new(execute)
        }

        /// Streams the usages across all pages.
        pub fn by_item(self) -> ItemPaginator<Usage, gax::error::Error> {
            self.by_page().items()
        }

        #[tracing::instrument(level = "debug", name = "Usage::list", skip_all)]
        async fn send_page(&self, next_link: Option<String>) -> Result<Response<UsageListResult>> {
            let builder = match next_link {
                Some(link) => self.inner.http.builder_for_url(Method::GET, link),
                None => subscription_request(&self.inner, Method::GET, "usages")?,
            };
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options.clone(), &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}
