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

use crate::errors::ConfigError;

/// The environment variable selecting the [TestMode].
pub const TEST_MODE_VAR: &str = "AZURE_TEST_MODE";

/// How a test interacts with the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestMode {
    /// Send requests to Azure, do not record them.
    Live,
    /// Replay a previous recording. No network access, no credentials.
    #[default]
    Playback,
    /// Send requests to Azure and record the scrubbed interactions.
    Record,
}

impl TestMode {
    /// Reads the mode from `AZURE_TEST_MODE`, defaulting to playback.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TEST_MODE_VAR) {
            Ok(v) if !v.trim().is_empty() => v.parse(),
            _ => Ok(Self::default()),
        }
    }

    /// Returns true if requests reach the service.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live | Self::Record)
    }

    pub fn is_playback(&self) -> bool {
        matches!(self, Self::Playback)
    }
}

impl std::str::FromStr for TestMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "playback" => Ok(Self::Playback),
            "record" => Ok(Self::Record),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TestMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Live => "live",
            Self::Playback => "playback",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}
