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

//! Create the resources a test depends on, and remove them afterwards.
//!
//! A [Preparer] knows how to create and remove one kind of resource.
//! [prepare] and [run_preparers] scope the resources to a test body: they
//! are created before the body runs and removed after it completes, even if
//! the body fails or panics. Resources are created in order and removed in
//! reverse order.
//!
//! Each preparer injects [Values] (e.g. the resource group name) consumed by
//! the body and by the preparers that follow it.

mod key_vault;
mod resource_group;
mod storage_account;

pub use key_vault::KeyVaultPreparer;
pub use resource_group::ResourceGroupPreparer;
pub use storage_account::StorageAccountPreparer;

use crate::errors::{HarnessError, PreparerError};
use crate::testcase::TestContext;
use futures::FutureExt;
use gax::client_builder::ClientBuilder;
use gax::client_builder::internal::ClientFactory;
use gaxi::credentials::Credentials;
use std::collections::BTreeMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// The values injected by preparers, keyed by parameter name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(BTreeMap<String, String>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    /// Adds a value, consuming and returning `self`.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or an error if no preparer injected it.
    pub fn require(&self, key: &str) -> Result<&str, PreparerError> {
        self.dependency("the test body", key)
    }

    pub(crate) fn dependency(&self, preparer: &'static str, key: &str) -> Result<&str, PreparerError> {
        self.get(key).ok_or_else(|| PreparerError::MissingDependency {
            preparer,
            dependency: key.to_string(),
        })
    }

    /// Adds all the values in `other`, replacing any existing keys.
    pub fn extend(&mut self, other: Values) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Creates and removes one kind of resource.
#[async_trait::async_trait]
pub trait Preparer: std::fmt::Debug + Send + Sync {
    /// The kind of resource, used in logs and errors.
    fn kind(&self) -> &'static str;

    /// The name of the resource for the current test.
    ///
    /// Must be stable across runs of the same test, playback depends on it.
    fn moniker(&self, ctx: &TestContext) -> String;

    /// Creates the resource and returns the values to inject.
    ///
    /// `values` contains the values injected by the preceding preparers.
    async fn create_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        values: &Values,
    ) -> Result<Values, PreparerError>;

    /// Removes the resource.
    ///
    /// Implementations treat a resource that no longer exists as removed.
    async fn remove_resource(
        &self,
        ctx: &TestContext,
        name: &str,
        values: &Values,
    ) -> Result<(), PreparerError>;

    /// If true, the resource is never removed. Useful when removing a
    /// parent resource, such as the resource group, removes this resource
    /// too.
    fn skip_delete(&self) -> bool {
        false
    }
}

/// Runs `body` with the resource created by `preparer`.
///
/// `values` are the values injected by any enclosing scope. The resource is
/// removed when `body` completes, whether it succeeds, fails, or panics. A
/// panic in `body` resumes after the removal.
///
/// # Example
/// ```no_run
/// use azure_mgmt_test_utils::preparer::*;
/// # use azure_mgmt_test_utils::testcase::TestContext;
/// # async fn sample(ctx: &TestContext) -> anyhow::Result<()> {
/// let group = ResourceGroupPreparer::new();
/// let account = StorageAccountPreparer::new();
/// prepare(ctx, &group, Values::new(), |values| async move {
///     prepare(ctx, &account, values, |values| async move {
///         println!("{:?}", values.get("storage_account_name"));
///         Ok(())
///     })
///     .await
/// })
/// .await?;
/// # Ok(()) }
/// ```
pub async fn prepare<P, F, Fut, T>(
    ctx: &TestContext,
    preparer: &P,
    values: Values,
    body: F,
) -> anyhow::Result<T>
where
    P: Preparer,
    F: FnOnce(Values) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    run_preparers_with(ctx, &[preparer], values, body).await
}

/// Runs `body` with the resources created by `preparers`.
///
/// Equivalent to nesting [prepare] calls, the first preparer being the
/// outermost.
pub async fn run_preparers<F, Fut, T>(
    ctx: &TestContext,
    preparers: &[&dyn Preparer],
    body: F,
) -> anyhow::Result<T>
where
    F: FnOnce(Values) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    run_preparers_with(ctx, preparers, Values::new(), body).await
}

async fn run_preparers_with<F, Fut, T>(
    ctx: &TestContext,
    preparers: &[&dyn Preparer],
    mut values: Values,
    body: F,
) -> anyhow::Result<T>
where
    F: FnOnce(Values) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut created = Vec::new();
    for preparer in preparers.iter().copied() {
        let name = preparer.moniker(ctx);
        tracing::info!(kind = preparer.kind(), %name, "creating resource");
        match preparer.create_resource(ctx, &name, &values).await {
            Ok(injected) => {
                values.extend(injected);
                created.push((preparer, name));
            }
            Err(e) => {
                if let Err(r) = remove_all(ctx, &created, &values).await {
                    tracing::warn!("cleanup after a failed create also failed: {r}");
                }
                return Err(e.into());
            }
        }
    }

    let outcome = AssertUnwindSafe(body(values.clone())).catch_unwind().await;
    let removed = remove_all(ctx, &created, &values).await;
    match outcome {
        Err(panic) => std::panic::resume_unwind(panic),
        Ok(Err(e)) => {
            if let Err(r) = removed {
                tracing::warn!("cleanup after a failed test also failed: {r}");
            }
            Err(e)
        }
        Ok(Ok(v)) => {
            removed?;
            Ok(v)
        }
    }
}

/// Removes the resources in reverse creation order.
///
/// Attempts every removal, and returns the first error.
async fn remove_all(
    ctx: &TestContext,
    created: &[(&dyn Preparer, String)],
    values: &Values,
) -> Result<(), PreparerError> {
    let mut first = None;
    for (preparer, name) in created.iter().rev() {
        if preparer.skip_delete() {
            tracing::debug!(kind = preparer.kind(), %name, "skipping removal");
            continue;
        }
        match preparer.remove_resource(ctx, name, values).await {
            Ok(()) => tracing::info!(kind = preparer.kind(), %name, "removed resource"),
            Err(e) => {
                tracing::warn!(kind = preparer.kind(), %name, "cannot remove resource: {e}");
                first.get_or_insert(e);
            }
        }
    }
    first.map_or(Ok(()), Err)
}

// Fixtures with recording disabled do not appear in the recordings.
async fn fixture_client<F, C>(
    ctx: &TestContext,
    disable_recording: bool,
    builder: ClientBuilder<F, Credentials>,
) -> Result<C, HarnessError>
where
    F: ClientFactory<Client = C, Credentials = Credentials>,
{
    if disable_recording {
        return ctx.create_unrecorded_mgmt_client(builder).await;
    }
    ctx.create_mgmt_client(builder).await
}
