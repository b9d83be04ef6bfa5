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

pub mod vaults {
    use crate::API_VERSION;
    use crate::client::Inner;
    use crate::model::*;
    use gax::Result;
    use gax::options::RequestOptions;
    use gax::paginator::{ItemPaginator, Paginator};
    use gax::response::Response;
    use gaxi::http::{NoBody, RequestBuilder};
    use gaxi::path_parameter::encode;
    use gaxi::query_parameter::QueryParameter;
    use http::Method;
    use std::sync::Arc;

    fn vaults_path(inner: &Inner, resource_group_name: &str) -> Result<String> {
        Ok(format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.KeyVault/vaults",
            encode("subscription_id", &inner.subscription_id)?,
            encode("resource_group_name", resource_group_name)?,
        ))
    }

    fn vault_request(
        inner: &Inner,
        method: Method,
        resource_group_name: &str,
        vault_name: &str,
    ) -> Result<RequestBuilder> {
        let path = format!(
            "{}/{}",
            vaults_path(inner, resource_group_name)?,
            encode("vault_name", vault_name)?
        );
        Ok(inner
            .http
            .builder(method, path)
            .query("api-version", API_VERSION))
    }

    /// The request builder for [VaultsOperations::create_or_update][crate::client::VaultsOperations::create_or_update] calls.
    #[derive(Clone, Debug)]
    pub struct CreateOrUpdate {
        inner: Arc<Inner>,
        resource_group_name: String,
        vault_name: String,
        parameters: VaultCreateOrUpdateParameters,
        options: RequestOptions,
    }

    impl CreateOrUpdate {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                vault_name: String::new(),
                parameters: VaultCreateOrUpdateParameters::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the vault.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the vault.
        pub fn set_vault_name<T: Into<String>>(mut self, v: T) -> Self {
            self.vault_name = v.into();
            self
        }

        /// Sets the parameters to create or update the vault.
        pub fn set_parameters<T: Into<VaultCreateOrUpdateParameters>>(mut self, v: T) -> Self {
            self.parameters = v.into();
            self
        }

        /// Sends the request.
        ///
        /// The service returns `201 Created` for new vaults and `200 OK` when
        /// it updates an existing vault.
        #[tracing::instrument(level = "debug", name = "Vaults::create_or_update", skip_all)]
        pub async fn send(self) -> Result<Response<Vault>> {
            let builder = vault_request(
                &self.inner,
                Method::PUT,
                &self.resource_group_name,
                &self.vault_name,
            )?;
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

    /// The request builder for [VaultsOperations::delete][crate::client::VaultsOperations::delete] calls.
    #[derive(Clone, Debug)]
    pub struct Delete {
        inner: Arc<Inner>,
        resource_group_name: String,
        vault_name: String,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                vault_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the vault.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the vault.
        pub fn set_vault_name<T: Into<String>>(mut self, v: T) -> Self {
            self.vault_name = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "Vaults::delete", skip_all)]
        pub async fn send(self) -> Result<Response<()>> {
            let builder = vault_request(
                &self.inner,
                Method::DELETE,
                &self.resource_group_name,
                &self.vault_name,
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

    /// The request builder for [VaultsOperations::get][crate::client::VaultsOperations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get {
        inner: Arc<Inner>,
        resource_group_name: String,
        vault_name: String,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                vault_name: String::new(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group containing the vault.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the name of the vault.
        pub fn set_vault_name<T: Into<String>>(mut self, v: T) -> Self {
            self.vault_name = v.into();
            self
        }

        /// Sends the request.
        #[tracing::instrument(level = "debug", name = "Vaults::get", skip_all)]
        pub async fn send(self) -> Result<Response<Vault>> {
            let builder = vault_request(
                &self.inner,
                Method::GET,
                &self.resource_group_name,
                &self.vault_name,
            )?;
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

    /// The request builder for [VaultsOperations::list_by_resource_group][crate::client::VaultsOperations::list_by_resource_group] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use azure_mgmt_keyvault::builder::vaults::ListByResourceGroup;
    /// # async fn sample(builder: ListByResourceGroup) -> gax::Result<()> {
    /// let mut items = builder.set_top(10).by_item();
    /// while let Some(vault) = items.next().await {
    ///     println!("{:?}", vault?.name);
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListByResourceGroup {
        inner: Arc<Inner>,
        resource_group_name: String,
        top: Option<i32>,
        options: RequestOptions,
    }

    impl ListByResourceGroup {
        pub(crate) fn new(inner: Arc<Inner>) -> Self {
            Self {
                inner,
                resource_group_name: String::new(),
                top: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the name of the resource group.
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_group_name = v.into();
            self
        }

        /// Sets the maximum number of results per page.
        pub fn set_top(mut self, v: i32) -> Self {
            self.top = Some(v);
            self
        }

        /// Fetches the first page.
        pub async fn send(self) -> Result<Response<VaultListResult>> {
            self.send_page(None).await
        }

        /// Streams the responses, one page at a time.
        pub fn by_page(self) -> Paginator<VaultListResult, gax::error::Error> {
            let execute = move |link: Option<String>| {
                let builder = self.clone();
                async move { builder.send_page(link).await.map(Response::into_body) }
            };
            Paginator::new(execute)
        }

        /// Streams the vaults across all pages.
        pub fn by_item(self) -> ItemPaginator<Vault, gax::error::Error> {
            self.by_page().items()
        }

        #[tracing::instrument(level = "debug", name = "Vaults::list_by_resource_group", skip_all)]
        async fn send_page(&self, next_link: Option<String>) -> Result<Response<VaultListResult>> {
            let builder = match next_link {
                Some(link) => self.inner.http.builder_for_url(Method::GET, link),
                None => {
                    let path = vaults_path(&self.inner, &self.resource_group_name)?;
                    let builder = self.inner.http.builder(Method::GET, path);
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

    impl gax::options::internal::RequestBuilder for ListByResourceGroup {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}
