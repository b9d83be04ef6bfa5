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

//! The errors raised by the test harness.

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The harness configuration is incomplete or invalid.
///
/// Raised while setting up a test context, before any request is sent.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("the environment variable {0} is required in live and record modes")]
    Missing(&'static str),
    #[error("unknown test mode {0:?}, expected one of `live`, `playback`, or `record`")]
    InvalidMode(String),
}

/// A recording cannot be loaded or saved.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RecordingError {
    #[error("cannot access the recording at {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse the recording at {}: {source}", path.display())]
    Json {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A preparer failed to create or remove its resource.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PreparerError {
    #[error("cannot create {kind} {name}: {source}")]
    Create {
        kind: &'static str,
        name: String,
        #[source]
        source: BoxError,
    },
    #[error("cannot remove {kind} {name}: {source}")]
    Remove {
        kind: &'static str,
        name: String,
        #[source]
        source: BoxError,
    },
    #[error("{kind} {name} was not removed within {timeout:?}")]
    Timeout {
        kind: &'static str,
        name: String,
        timeout: Duration,
    },
    #[error("{preparer} requires a {dependency}, add the corresponding preparer before it")]
    MissingDependency {
        preparer: &'static str,
        dependency: String,
    },
}

impl PreparerError {
    pub(crate) fn create<E: Into<BoxError>>(kind: &'static str, name: &str, source: E) -> Self {
        Self::Create {
            kind,
            name: name.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn remove<E: Into<BoxError>>(kind: &'static str, name: &str, source: E) -> Self {
        Self::Remove {
            kind,
            name: name.to_string(),
            source: source.into(),
        }
    }

    /// Returns true if the resource removal did not complete in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Any of the errors raised while setting up or finishing a test.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Recording(#[from] RecordingError),
    #[error("cannot create the management client: {0}")]
    Client(#[from] gax::client_builder::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_messages() {
        let got = ConfigError::Missing("AZURE_TENANT_ID").to_string();
        assert!(got.contains("AZURE_TENANT_ID"), "{got}");
        let got = ConfigError::InvalidMode("replay".into()).to_string();
        assert!(got.contains("\"replay\""), "{got}");
    }

    #[test]
    fn preparer_predicates() {
        let timeout = PreparerError::Timeout {
            kind: "resource group",
            name: "rg".into(),
            timeout: Duration::from_secs(5),
        };
        assert!(timeout.is_timeout());
        let remove = PreparerError::remove("resource group", "rg", "boom");
        assert!(!remove.is_timeout());
        let got = remove.to_string();
        assert!(got.contains("resource group rg"), "{got}");
        assert!(std::error::Error::source(&remove).is_some());
    }

    #[test]
    fn harness_from() {
        let got = HarnessError::from(ConfigError::Missing("AZURE_SUBSCRIPTION_ID"));
        assert!(matches!(got, HarnessError::Config(_)), "{got:?}");
        let got = HarnessError::from(gax::client_builder::Error::missing_parameter(
            "subscription_id",
        ));
        assert!(matches!(got, HarnessError::Client(_)), "{got:?}");
    }
}
