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

pub mod resource_groups {
    use crate::API_VERSION;
    use crate::client::Inner;
    use crate::model::{ResourceGroup, ResourceGroupListResult};
    use gax::Result;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use gax::response::Response;
    use gaxi::http::{NoBody, RequestBuilder};
    use gaxi::path_parameter::encode;
    use gaxi::query_parameter::QueryParameter;
    use http::Method;
    use std::sync::Arc;

    fn group_path(inner: &Inner, resource_group_name: &str) -> Result<String> {
        Ok(format!(
            "/subscriptions/{}/resourcegroups/{}",
            encode("subscription_id", &inner.subscription_id)?,
            encode("resource_group_name", resource_group_name)?,
        ))
    }

    fn group_request(
        inner: &Inner,
        method: Method,
        resource_group_name: &str,
    ) -> Result<RequestBuilder> {
        let path = group_path(inner, resource_group_name)?;
        Ok(inner
            .http
            .builder(method, path)
            .query("api-version", API_VERSION))
    }

    /// The request builder for [ResourceGroupsOperations::create_or_update][crate::client::ResourceGroupsOperations::create_or_update] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_resource::builder::resource_groups::CreateOrUpdate;
    /// # use azure_mgmt_resource::model::ResourceGroup;
    /// # async fn sample(builder: CreateOrUpdate) -> gax::Result<()> {
    /// use gax::options::RequestOptionsBuilder;
    /// let response = builder
    ///     .set_parameters(ResourceGroup::new().set_location("westus"))
    ///     .with_accept_language("en-US")
    ///     .send()
    ///     .await?;
    /// println!("request id = {:?}", response.request_id());
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateOrUpdate {
        inner: Arc<Inner>,
        resource_group_name: String,
        parameters: ResourceGroup,
        options: RequestOptions,
    }

    impl CreateOrUpdate {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                parameters: ResourceGroup::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the resource group to create or update.
        pub fn set_parameters<T: Into<ResourceGroup>>(mut self, v: T) -> Self {
            self.parameters = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "ResourceGroups::create_or_update", skip_all)]
        pub async fn send(self) -> Result<Response<ResourceGroup>> {
            let builder = group_request(&self.inner, Method::PUT, &self.resource_group_name)?;
            self.inner
                .http
                .execute(builder, Some(self.parameters), self.options, &[200, 201])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for CreateOrUpdate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [ResourceGroupsOperations::get][crate::client::ResourceGroupsOperations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get {
        inner: Arc<Inner>,
        resource_group_name: String,
        options: RequestOptions,
    }

    impl Get {
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

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "ResourceGroups::get", skip_all)]
        pub async fn send(self) -> Result<Response<ResourceGroup>> {
            let builder = group_request(&self.inner, Method::GET, &self.resource_group_name)?;
            self.inner
                .http
                .execute(builder, None::<NoBody>, self.options, &[200])
                .await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [ResourceGroupsOperations::check_existence][crate::client::ResourceGroupsOperations::check_existence] calls.
    #[derive(Clone, Debug)]
    pub struct CheckExistence {
        inner: Arc<Inner>,
        resource_group_name: String,
        options: RequestOptions,
    }

    impl CheckExistence {
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

        /// Sends the request.
        ///
        /// The service answers `204 No Content` if the resource group exists,
        /// and `404 Not Found` if it does not. Any other status is an error.
        #[tracing::instrument(level = "debug", name = "ResourceGroups::check_existence", skip_all)]
        pub async fn send(self) -> Result<Response<bool>> {
            let builder = group_request(&self.inner, Method::HEAD, &self.resource_group_name)?;
            let response = self
                .inner
                .http
                .execute_empty(builder, None::<NoBody>, self.options, &[204, 404])
                .await?;
            let exists = response.status_code() == 204;
            let (parts, _) = response.into_parts();
            Ok(Response::from_parts(parts, exists))
        }
    }

    impl gax::options::internal::RequestBuilder for CheckExistence {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [ResourceGroupsOperations::delete][crate::client::ResourceGroupsOperations::delete] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_resource::builder::resource_groups::Delete;
    /// # async fn sample(builder: Delete) -> gax::Result<()> {
    /// use lro::PollingResult;
    /// let mut poller = builder.poller();
    /// while let Some(p) = poller.poll().await {
    ///     match p {
    ///         PollingResult::Completed(r) => r?,
    ///         PollingResult::InProgress => println!("deleting..."),
    ///         PollingResult::PollingError(e) => println!("polling error {e}"),
    ///     }
    ///     tokio::time::sleep(poller.delay()).await;
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Delete {
        inner: Arc<Inner>,
        resource_group_name: String,
        options: RequestOptions,
    }

    impl Delete {
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

        /// Creates a [Poller][lro::Poller] to start the operation and track
        /// its progress.
        pub fn poller(self) -> lro::Poller<()> {
            let builder = group_request(&self.inner, Method::DELETE, &self.resource_group_name);
            lro::internal::start(
                self.inner.http.clone(),
                builder,
                None::<NoBody>,
                self.options,
                &[200, 202],
            )
        }

        /// Starts the operation and waits until it completes.
        #[tracing::instrument(level = "debug", name = "ResourceGroups::delete", skip_all)]
        pub async fn send(self) -> Result<()> {
            self.poller().until_done().await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [ResourceGroupsOperations::list][crate::client::ResourceGroupsOperations::list] calls.
    #[derive(Clone, Debug)]
    pub struct List {
        inner: Arc<Inner>,
        filter: Option<String>,
        top: Option<i32>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                filter: None,
                top: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the `$filter` query parameter, e.g. `tagName eq 'use'`.
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.filter = Some(v.into());
            self
        }

        /// Sets the maximum number of results per page.
        pub fn set_top(mut self, v: i32) -> Self {
            self.top = Some(v);
            self
        }

        /// Fetches the first page.
        pub async fn send(self) -> Result<Response<ResourceGroupListResult>> {
            self.send_page(None).await
        }

        /// Streams the responses, one page at a time.
        pub fn by_page(self) -> Paginator<ResourceGroupListResult, gax::error::Error> {
            let execute = move |link: Option<String>| {
                let builder = self.clone();
                async move { builder.send_page(link).await.map(Response::into_body) }
            };
            Paginator::new(execute)
        }

        /// Streams the resource groups across all pages.
        pub fn by_item(self) -> ItemPaginator<ResourceGroup, gax::error::Error> {
            self.by_page().items()
        }

        #[tracing::instrument(level = "debug", name = "ResourceGroups::list", skip_all)]
        async fn send_page(
            &self,
            next_link: Option<String>,
        ) -> Result<Response<ResourceGroupListResult>> {
            let builder = match next_link {
                Some(link) => self.inner.http.builder_for_url(Method::GET, link),
                None => {
                    let path = format!(
                        "/subscriptions/{}/resourcegroups",
                        encode("subscription_id", &self.inner.subscription_id)?
                    );
                    let builder = self.inner.http.builder(Method::GET, path);
                    let builder = self.filter.clone().add(builder, "$filter")?;
                    let builder = self.top.add(builder, "$top")?;
                    builder.query("api-version", API_VERSION)
                }
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
