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

//! Removes secrets and volatile values from the interactions before they
//! are saved, and normalizes URIs for playback matching.

use crate::recording::{Headers, Interaction, RecordedRequest, RecordedResponse};
use crate::settings::Settings;

const REMOVED_HEADERS: [&str; 4] = [
    "authorization",
    "x-ms-client-request-id",
    "date",
    "set-cookie",
];

const TOKEN_PATH: &str = "/oauth2/";

/// Scrubs interactions before they are recorded.
#[derive(Clone, Debug, Default)]
pub struct Scrubber {
    replacements: Vec<(String, String)>,
}

impl Scrubber {
    /// Replaces the values in `real` by the corresponding values in `fake`.
    pub fn from_settings(real: &dyn Settings, fake: &dyn Settings) -> Self {
        let pairs = [
            (real.subscription_id(), fake.subscription_id()),
            (real.tenant_id(), fake.tenant_id()),
            (real.ad_domain(), fake.ad_domain()),
            (real.client_oid(), fake.client_oid()),
        ];
        pairs
            .into_iter()
            .fold(Self::default(), |s, (r, f)| s.with_replacement(r, f))
    }

    /// Adds a replacement. Empty or identical values are ignored.
    pub fn with_replacement<R: Into<String>, F: Into<String>>(mut self, real: R, fake: F) -> Self {
        let (real, fake) = (real.into(), fake.into());
        if !real.is_empty() && real != fake {
            self.replacements.push((real, fake));
        }
        self
    }

    /// Returns the scrubbed interaction, or `None` if the interaction must
    /// not be recorded.
    ///
    /// Token requests and `401 Unauthorized` responses are never recorded.
    pub fn scrub(&self, interaction: Interaction) -> Option<Interaction> {
        if interaction.request.uri.contains(TOKEN_PATH) || interaction.response.status == 401 {
            return None;
        }
        let Interaction { request, response } = interaction;
        Some(Interaction {
            request: RecordedRequest {
                method: request.method,
                uri: self.scrub_text(&request.uri),
                headers: self.scrub_headers(request.headers),
                body: request.body.map(|b| self.scrub_text(&b)),
            },
            response: RecordedResponse {
                status: response.status,
                headers: self.scrub_headers(response.headers),
                body: response.body.map(|b| self.scrub_text(&b)),
            },
        })
    }

    fn scrub_headers(&self, headers: Headers) -> Headers {
        headers
            .into_iter()
            .filter(|(name, _)| !REMOVED_HEADERS.contains(&name.to_ascii_lowercase().as_str()))
            .map(|(name, values)| {
                let values = values.iter().map(|v| self.scrub_text(v)).collect();
                (name, values)
            })
            .collect()
    }

    /// Replaces every real value in `text`.
    pub fn scrub_text(&self, text: &str) -> String {
        self.replacements
            .iter()
            .fold(text.to_string(), |acc, (real, fake)| acc.replace(real, fake))
    }
}

/// Returns the path and query of `uri`, with the query parameters sorted.
///
/// Recordings are matched by method and normalized URI. The scheme and host
/// are ignored, playback clients may use a different endpoint.
pub fn normalize_uri(uri: &str) -> String {
    let parsed = url::Url::parse(uri)
        .or_else(|_| url::Url::parse("http://localhost").and_then(|base| base.join(uri)));
    let Ok(parsed) = parsed else {
        return uri.to_string();
    };
    let mut query = parsed.query_pairs().into_owned().collect::<Vec<_>>();
    query.sort();
    if query.is_empty() {
        return parsed.path().to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    format!("{}?{query}", parsed.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FakeSettings;
    use gaxi::credentials::{Anonymous, Credentials};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[derive(Debug)]
    struct Real;
    impl Settings for Real {
        fn subscription_id(&self) -> &str {
            "real-subscription"
        }
        fn tenant_id(&self) -> &str {
            "real-tenant"
        }
        fn ad_domain(&self) -> &str {
            "contoso.onmicrosoft.com"
        }
        fn client_oid(&self) -> &str {
            "real-oid"
        }
        fn credentials(&self) -> Credentials {
            Anonymous.into()
        }
    }

    fn interaction(uri: &str, status: u16) -> Interaction {
        Interaction {
            request: RecordedRequest {
                method: "GET".into(),
                uri: uri.into(),
                headers: Headers::from([
                    ("Authorization".to_string(), vec!["Bearer secret".to_string()]),
                    ("x-ms-client-request-id".to_string(), vec!["abc".to_string()]),
                    ("accept".to_string(), vec!["application/json".to_string()]),
                ]),
                body: None,
            },
            response: RecordedResponse {
                status,
                headers: Headers::from([
                    ("date".to_string(), vec!["Mon, 01 Jan 2018 00:00:00 GMT".to_string()]),
                    ("x-ms-request-id".to_string(), vec!["rid".to_string()]),
                ]),
                body: Some(r#"{"tenantId":"real-tenant","domain":"contoso.onmicrosoft.com"}"#.into()),
            },
        }
    }

    #[test]
    fn replaces_real_values() {
        let scrubber = Scrubber::from_settings(&Real, &FakeSettings);
        let got = scrubber
            .scrub(interaction(
                "https://management.azure.com/subscriptions/real-subscription/resourcegroups?api-version=1",
                200,
            ))
            .expect("regular interactions are kept");
        assert_eq!(
            got.request.uri,
            format!(
                "https://management.azure.com/subscriptions/{}/resourcegroups?api-version=1",
                FakeSettings::SUBSCRIPTION_ID
            )
        );
        let body = got.response.body.unwrap_or_default();
        assert!(!body.contains("real-tenant"), "{body}");
        assert!(body.contains(FakeSettings::AD_DOMAIN), "{body}");
    }

    #[test]
    fn removes_headers() {
        let scrubber = Scrubber::default();
        let got = scrubber
            .scrub(interaction("https://management.azure.com/", 200))
            .expect("regular interactions are kept");
        assert_eq!(
            got.request.headers.keys().collect::<Vec<_>>(),
            vec!["accept"]
        );
        assert_eq!(
            got.response.headers.keys().collect::<Vec<_>>(),
            vec!["x-ms-request-id"]
        );
    }

    #[test]
    fn drops_token_requests() {
        let scrubber = Scrubber::default();
        let got = scrubber.scrub(interaction(
            "https://login.microsoftonline.com/tenant/oauth2/token",
            200,
        ));
        assert!(got.is_none(), "{got:?}");
    }

    #[test]
    fn drops_unauthorized() {
        let scrubber = Scrubber::default();
        let got = scrubber.scrub(interaction("https://management.azure.com/", 401));
        assert!(got.is_none(), "{got:?}");
    }

    #[test]
    fn ignores_empty_and_identical() {
        let scrubber = Scrubber::default()
            .with_replacement("", "fake")
            .with_replacement("same", "same");
        assert!(scrubber.replacements.is_empty(), "{scrubber:?}");
    }

    #[test_case(
        "https://management.azure.com/subscriptions/s/resourcegroups?api-version=2017-05-10&$top=1",
        "/subscriptions/s/resourcegroups?%24top=1&api-version=2017-05-10"
    )]
    #[test_case(
        "http://127.0.0.1:8080/subscriptions/s/resourcegroups?$top=1&api-version=2017-05-10",
        "/subscriptions/s/resourcegroups?%24top=1&api-version=2017-05-10"
    )]
    #[test_case("https://management.azure.com/subscriptions", "/subscriptions")]
    #[test_case("/subscriptions?b=2&a=1", "/subscriptions?a=1&b=2")]
    fn normalize(input: &str, want: &str) {
        assert_eq!(normalize_uri(input), want);
    }
}
