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

//! Test harness for the Azure management client libraries.
//!
//! Tests run in one of three [modes][mode::TestMode]. In `live` mode they
//! talk to Azure using real credentials. In `record` mode they also write
//! every (scrubbed) interaction to a JSON recording. In `playback` mode, the
//! default, they replay the recording without network access or secrets.
//!
//! [Preparers][preparer::Preparer] create the resources a test depends on,
//! such as a resource group, and remove them when the test completes.
//!
//! # Example
//! ```no_run
//! use azure_mgmt_test_utils::preparer::{ResourceGroupPreparer, run_preparers};
//! use azure_mgmt_test_utils::testcase::TestContext;
//! # async fn sample() -> anyhow::Result<()> {
//! let ctx = TestContext::builder(module_path!(), "create_group").build()?;
//! let group = ResourceGroupPreparer::new();
//! run_preparers(&ctx, &[&group], |values| async move {
//!     println!("using {}", values.require("resource_group_name")?);
//!     Ok(())
//! })
//! .await?;
//! ctx.finish(true)?;
//! # Ok(()) }
//! ```

pub mod errors;
pub mod http_status;
pub mod mode;
pub mod preparer;
pub mod recording;
pub mod resource_names;
pub mod runtime_config;
pub mod scrubber;
pub mod session;
pub mod settings;
pub mod testcase;
pub mod tracing;
pub mod transport;
