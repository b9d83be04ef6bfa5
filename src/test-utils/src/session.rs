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

//! Fixtures shared by all the tests in a process.
//!
//! Some resources, such as key vaults, are slow to create. A [TestSession]
//! creates them once, the first time a test requests them, and removes them
//! when [teardown][TestSession::teardown] is called.

use crate::errors::PreparerError;
use crate::preparer::{Preparer, Values};
use crate::testcase::TestContext;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::Mutex;

static GLOBAL: Lazy<TestSession> = Lazy::new(TestSession::new);

#[derive(Debug)]
struct SharedFixture {
    key: String,
    name: String,
    preparer: Arc<dyn Preparer>,
    ctx: TestContext,
    created: Values,
    removal: Values,
}

/// The shared fixtures, in creation order.
#[derive(Debug, Default)]
pub struct TestSession {
    fixtures: Mutex<Vec<SharedFixture>>,
}

impl TestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session shared by all the tests in this process.
    pub fn global() -> &'static TestSession {
        &GLOBAL
    }

    /// Returns the values injected by the fixture named `key`, creating the
    /// fixture if needed.
    ///
    /// The resource name depends on `key`, not on the test running when the
    /// fixture is created.
    pub async fn shared(
        &self,
        key: &str,
        ctx: &TestContext,
        preparer: Arc<dyn Preparer>,
        values: &Values,
    ) -> Result<Values, PreparerError> {
        let mut fixtures = self.fixtures.lock().await;
        if let Some(f) = fixtures.iter().find(|f| f.key == key) {
            return Ok(f.created.clone());
        }
        let ctx = ctx.derived(format!("session.{key}"));
        let name = preparer.moniker(&ctx);
        tracing::info!(kind = preparer.kind(), %name, "creating shared resource");
        let created = preparer.create_resource(&ctx, &name, values).await?;
        // Removal may need the values of the enclosing preparers too.
        let mut removal = values.clone();
        removal.extend(created.clone());
        fixtures.push(SharedFixture {
            key: key.to_string(),
            name,
            preparer,
            ctx,
            created: created.clone(),
            removal,
        });
        Ok(created)
    }

    /// The number of fixtures created and not removed yet.
    pub async fn len(&self) -> usize {
        self.fixtures.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes the fixtures, in reverse creation order.
    ///
    /// Attempts every removal and returns the first error.
    pub async fn teardown(&self) -> Result<(), PreparerError> {
        let fixtures = std::mem::take(&mut *self.fixtures.lock().await);
        let mut first = None;
        for f in fixtures.into_iter().rev() {
            if f.preparer.skip_delete() {
                continue;
            }
            if let Err(e) = f.preparer.remove_resource(&f.ctx, &f.name, &f.removal).await {
                tracing::warn!(kind = f.preparer.kind(), name = %f.name, "cannot remove shared resource: {e}");
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }
}
