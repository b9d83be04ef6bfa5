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

//! The per-test context: mode, settings, names, and client construction.

use crate::errors::HarnessError;
use crate::mode::TestMode;
use crate::recording::{Recording, recording_path};
use crate::resource_names::{preparer_resource_name, qualified_test_name, resource_name};
use crate::scrubber::Scrubber;
use crate::settings::{self, FakeSettings, Settings};
use crate::transport::{PlaybackTransport, RecordingTransport};
use gax::client_builder::ClientBuilder;
use gax::client_builder::internal::ClientFactory;
use gax::transport::Transport;
use gaxi::credentials::Credentials;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// The default location for test resources.
pub const DEFAULT_REGION: &str = "westus";

#[derive(Clone, Debug)]
enum ContextTransport {
    Live(Arc<dyn Transport>),
    Record {
        recorder: RecordingTransport,
        inner: Arc<dyn Transport>,
    },
    Playback(Arc<PlaybackTransport>),
}

/// The state shared by the test body and its preparers.
///
/// Create one per test with [TestContext::builder], and call
/// [finish][TestContext::finish] when the test completes.
#[derive(Debug)]
pub struct TestContext {
    mode: TestMode,
    qualified_test_name: String,
    settings: Arc<dyn Settings>,
    recording_path: PathBuf,
    endpoint: Option<String>,
    transport: ContextTransport,
}

/// Configures a [TestContext].
///
/// By default the mode, settings, and recordings directory come from the
/// environment.
#[derive(Debug)]
pub struct TestContextBuilder {
    qualified_test_name: String,
    mode: Option<TestMode>,
    settings: Option<Arc<dyn Settings>>,
    recordings_dir: Option<PathBuf>,
    endpoint: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl TestContextBuilder {
    /// Overrides the `AZURE_TEST_MODE` environment variable.
    pub fn with_mode(mut self, v: TestMode) -> Self {
        self.mode = Some(v);
        self
    }

    /// Overrides the settings selected by the mode.
    pub fn with_settings<S: Settings + 'static>(mut self, v: S) -> Self {
        self.settings = Some(Arc::new(v));
        self
    }

    /// Overrides the directory containing the recordings.
    pub fn with_recordings_dir<P: Into<PathBuf>>(mut self, v: P) -> Self {
        self.recordings_dir = Some(v.into());
        self
    }

    /// Overrides the endpoint of the management clients.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Overrides the transport used in live and record modes.
    pub fn with_transport<T: Transport + 'static>(mut self, v: T) -> Self {
        self.transport = Some(Arc::new(v));
        self
    }

    pub fn build(self) -> Result<TestContext, HarnessError> {
        let mode = match self.mode {
            Some(m) => m,
            None => TestMode::from_env()?,
        };
        let settings = match self.settings {
            Some(s) => s,
            None => settings::for_mode(mode)?,
        };
        let dir = self
            .recordings_dir
            .unwrap_or_else(crate::runtime_config::recordings_dir);
        let recording_path = recording_path(&dir, &self.qualified_test_name);
        let live = || -> Result<Arc<dyn Transport>, HarnessError> {
            match &self.transport {
                Some(t) => Ok(t.clone()),
                None => Ok(Arc::new(gaxi::transport::ReqwestTransport::new()?)),
            }
        };
        let transport = match mode {
            TestMode::Live => ContextTransport::Live(live()?),
            TestMode::Record => {
                let inner = live()?;
                let scrubber = Scrubber::from_settings(settings.as_ref(), &FakeSettings);
                ContextTransport::Record {
                    recorder: RecordingTransport::new(inner.clone(), scrubber),
                    inner,
                }
            }
            TestMode::Playback => {
                let recording = if recording_path.exists() {
                    Recording::load(&recording_path)?
                } else {
                    tracing::warn!(path = %recording_path.display(), "no recording found, requests will fail");
                    Recording::default()
                };
                ContextTransport::Playback(Arc::new(PlaybackTransport::new(recording)))
            }
        };
        tracing::info!(test = %self.qualified_test_name, %mode, "test context ready");
        Ok(TestContext {
            mode,
            qualified_test_name: self.qualified_test_name,
            settings,
            recording_path,
            endpoint: self.endpoint,
            transport,
        })
    }
}

impl TestContext {
    /// Starts configuring the context for a test.
    ///
    /// `module_path` is usually `module_path!()`, and `test_name` the name
    /// of the test function.
    pub fn builder(module_path: &str, test_name: &str) -> TestContextBuilder {
        TestContextBuilder {
            qualified_test_name: qualified_test_name(module_path, test_name),
            mode: None,
            settings: None,
            recordings_dir: None,
            endpoint: None,
            transport: None,
        }
    }

    pub fn mode(&self) -> TestMode {
        self.mode
    }

    pub fn is_live(&self) -> bool {
        self.mode.is_live()
    }

    pub fn is_playback(&self) -> bool {
        self.mode.is_playback()
    }

    /// The name of the test, `<module>.<test function>`.
    pub fn qualified_test_name(&self) -> &str {
        &self.qualified_test_name
    }

    pub fn settings(&self) -> &dyn Settings {
        self.settings.as_ref()
    }

    /// The settings written to recordings instead of the real ones.
    pub fn fake_settings(&self) -> FakeSettings {
        FakeSettings
    }

    pub fn region(&self) -> &'static str {
        DEFAULT_REGION
    }

    /// The resource group name for this test.
    pub fn group_name(&self) -> String {
        preparer_resource_name(&self.qualified_test_name)
    }

    /// Returns a name for a resource, unique to this test and stable across
    /// runs.
    pub fn create_random_name(&self, prefix: &str, max_length: usize) -> String {
        resource_name(prefix, &self.qualified_test_name, max_length)
    }

    /// Creates a management client whose requests are recorded or replayed.
    ///
    /// # Example
    /// ```no_run
    /// use azure_mgmt_resource::client::ResourceManagementClient;
    /// # use azure_mgmt_test_utils::testcase::TestContext;
    /// # async fn sample(ctx: &TestContext) -> anyhow::Result<()> {
    /// let client: ResourceManagementClient = ctx
    ///     .create_mgmt_client(ResourceManagementClient::builder())
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub async fn create_mgmt_client<F, C>(
        &self,
        builder: ClientBuilder<F, Credentials>,
    ) -> Result<C, HarnessError>
    where
        F: ClientFactory<Client = C, Credentials = Credentials>,
    {
        let transport: Arc<dyn Transport> = match &self.transport {
            ContextTransport::Live(t) => t.clone(),
            ContextTransport::Record { recorder, .. } => Arc::new(recorder.clone()),
            ContextTransport::Playback(p) => p.clone(),
        };
        Ok(self.configure(builder, transport).build().await?)
    }

    /// Creates a management client whose requests are never recorded.
    ///
    /// Used for fixtures that are not part of the test. In playback mode the
    /// client still uses the recording, as no other transport is available.
    pub async fn create_unrecorded_mgmt_client<F, C>(
        &self,
        builder: ClientBuilder<F, Credentials>,
    ) -> Result<C, HarnessError>
    where
        F: ClientFactory<Client = C, Credentials = Credentials>,
    {
        let transport: Arc<dyn Transport> = match &self.transport {
            ContextTransport::Live(t) => t.clone(),
            ContextTransport::Record { inner, .. } => inner.clone(),
            ContextTransport::Playback(p) => p.clone(),
        };
        Ok(self.configure(builder, transport).build().await?)
    }

    fn configure<F>(
        &self,
        builder: ClientBuilder<F, Credentials>,
        transport: Arc<dyn Transport>,
    ) -> ClientBuilder<F, Credentials> {
        let builder = builder
            .with_credentials(self.settings.credentials())
            .with_subscription_id(self.settings.subscription_id())
            .with_shared_transport(transport);
        let builder = match &self.endpoint {
            Some(e) => builder.with_endpoint(e.clone()),
            None => builder,
        };
        if self.mode.is_playback() {
            return builder.with_long_running_operation_retry_timeout(Duration::ZERO);
        }
        builder
    }

    /// Returns a context sharing this context's mode, settings, and
    /// transport, but with a different test name.
    ///
    /// Used for fixtures shared by many tests, their names must not depend
    /// on the test that happens to create them.
    pub(crate) fn derived(&self, qualified_test_name: String) -> TestContext {
        TestContext {
            mode: self.mode,
            qualified_test_name,
            settings: self.settings.clone(),
            recording_path: self.recording_path.clone(),
            endpoint: self.endpoint.clone(),
            transport: self.transport.clone(),
        }
    }

    /// The indices of the recorded interactions replayed so far.
    ///
    /// Always empty outside playback mode.
    pub fn matched_sequence(&self) -> Vec<usize> {
        match &self.transport {
            ContextTransport::Playback(p) => p.matched_sequence(),
            _ => Vec::new(),
        }
    }

    /// Completes the test.
    ///
    /// In record mode, saves the recording if the test succeeded. A failed
    /// test never overwrites a previous recording.
    pub fn finish(self, succeeded: bool) -> Result<(), HarnessError> {
        let ContextTransport::Record { recorder, .. } = &self.transport else {
            return Ok(());
        };
        if !succeeded {
            tracing::warn!(test = %self.qualified_test_name, "test failed, recording discarded");
            return Ok(());
        }
        recorder.to_recording().save(&self.recording_path)?;
        tracing::info!(path = %self.recording_path.display(), "recording saved");
        Ok(())
    }
}
