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

//! The account settings used by the tests.
//!
//! Playback uses [FakeSettings], whose values also replace the real values
//! in recordings. Live and record modes use [RealSettings], loaded from the
//! environment.

use crate::errors::ConfigError;
use crate::mode::TestMode;
use crate::runtime_config::{self, *};
use gaxi::credentials::{AccessToken, Credentials, ServicePrincipal};
use std::sync::Arc;

/// The identity and credentials used to create management clients.
pub trait Settings: std::fmt::Debug + Send + Sync {
    fn subscription_id(&self) -> &str;
    fn tenant_id(&self) -> &str;
    fn ad_domain(&self) -> &str;
    /// The object id of the principal running the tests, used in key vault
    /// access policies.
    fn client_oid(&self) -> &str;
    fn credentials(&self) -> Credentials;
}

/// Placeholder values used in playback and written to recordings.
#[derive(Clone, Debug, Default)]
pub struct FakeSettings;

impl FakeSettings {
    pub const SUBSCRIPTION_ID: &str = "00000000-0000-0000-0000-000000000000";
    pub const TENANT_ID: &str = "00000000-0000-0000-0000-000000000000";
    pub const AD_DOMAIN: &str = "myaddomain.onmicrosoft.com";
    pub const CLIENT_OID: &str = "00000000-0000-0000-0000-000000000000";
    pub const TOKEN: &str = "fake-token";
}

impl Settings for FakeSettings {
    fn subscription_id(&self) -> &str {
        Self::SUBSCRIPTION_ID
    }
    fn tenant_id(&self) -> &str {
        Self::TENANT_ID
    }
    fn ad_domain(&self) -> &str {
        Self::AD_DOMAIN
    }
    fn client_oid(&self) -> &str {
        Self::CLIENT_OID
    }
    fn credentials(&self) -> Credentials {
        AccessToken::new(Self::TOKEN).into()
    }
}

/// Settings for a real Azure subscription and service principal.
#[derive(Clone)]
pub struct RealSettings {
    subscription_id: String,
    tenant_id: String,
    client_id: String,
    client_secret: String,
    client_oid: String,
    ad_domain: String,
}

impl RealSettings {
    /// Loads the settings from the `AZURE_*` environment variables.
    ///
    /// All the variables are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            subscription_id: runtime_config::required(SUBSCRIPTION_ID_VAR)?,
            tenant_id: runtime_config::required(TENANT_ID_VAR)?,
            client_id: runtime_config::required(CLIENT_ID_VAR)?,
            client_secret: runtime_config::required(CLIENT_SECRET_VAR)?,
            client_oid: runtime_config::required(CLIENT_OID_VAR)?,
            ad_domain: runtime_config::required(AD_DOMAIN_VAR)?,
        })
    }
}

impl std::fmt::Debug for RealSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealSettings")
            .field("subscription_id", &self.subscription_id)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("client_oid", &self.client_oid)
            .field("ad_domain", &self.ad_domain)
            .finish()
    }
}

impl Settings for RealSettings {
    fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
    fn ad_domain(&self) -> &str {
        &self.ad_domain
    }
    fn client_oid(&self) -> &str {
        &self.client_oid
    }
    fn credentials(&self) -> Credentials {
        ServicePrincipal::new(&self.tenant_id, &self.client_id, &self.client_secret).into()
    }
}

/// Returns the settings for `mode`.
///
/// Playback never reads the environment. The other modes fail if any
/// setting is missing.
pub fn for_mode(mode: TestMode) -> Result<Arc<dyn Settings>, ConfigError> {
    if mode.is_playback() {
        return Ok(Arc::new(FakeSettings));
    }
    Ok(Arc::new(RealSettings::from_env()?))
}
