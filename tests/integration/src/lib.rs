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

//! Scenarios exercising the management clients through the test harness.
//!
//! By default the scenarios run in playback mode, using the recordings in
//! `recordings/`. Set `AZURE_TEST_MODE=record` and the `AZURE_*` credentials
//! to run them against a subscription and refresh the recordings.

use azure_mgmt_test_utils::testcase::TestContext;

pub type Result<T> = anyhow::Result<T>;
pub mod key_vault;
pub mod resource_groups;
pub mod storage;

pub fn report_error(e: anyhow::Error) -> anyhow::Error {
    eprintln!("\n\nERROR {e:?}\n");
    tracing::error!("ERROR {e:?}");
    e
}

pub fn enable_tracing() -> tracing::subscriber::DefaultGuard {
    azure_mgmt_test_utils::tracing::enable_tracing()
}

/// Completes `ctx` with the outcome of a scenario.
///
/// In record mode the recording is saved only if the scenario succeeded.
pub fn finish(ctx: TestContext, result: Result<()>) -> Result<()> {
    ctx.finish(result.is_ok())?;
    result.map_err(report_error)
}
