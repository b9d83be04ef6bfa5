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

#[cfg(test)]
mod tests {
    use azure_mgmt_gax_internal::credentials::{Anonymous, Credentials};
    use azure_mgmt_gax_internal::http::{HttpClient, NoBody};
    use azure_mgmt_gax_internal::options::ClientConfig;
    use gax::options::RequestOptions;
    use http::Method;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::field;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Result<T> = anyhow::Result<T>;
    type Fields = HashMap<String, String>;

    struct Visitor<'a>(&'a mut Fields);

    impl field::Visit for Visitor<'_> {
        fn record_str(&mut self, field: &field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_u64(&mut self, field: &field::Field, value: u64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    #[derive(Clone, Default)]
    struct Events(Arc<Mutex<Vec<Fields>>>);

    impl<S: tracing::Subscriber> Layer<S> for Events {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut Visitor(&mut fields));
            self.0.lock().unwrap().push(fields);
        }
    }

    impl Events {
        fn with_message(&self, message: &str) -> Vec<Fields> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.get("message").is_some_and(|m| m == message))
                .cloned()
                .collect()
        }
    }

    async fn send(server: &Server, tracing: bool) -> Result<()> {
        let mut config = ClientConfig::default();
        config.endpoint = Some(server.url_str(""));
        config.cred = Some(Credentials::from(Anonymous));
        config.tracing = tracing;
        let client = HttpClient::new(config, "https://unused.example.com").await?;
        let builder = client.builder(Method::GET, "/traced".to_string());
        let _ = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default(), &[200])
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn request_and_response_events() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/traced")).respond_with(
                status_code(200)
                    .insert_header("x-ms-request-id", "rid-traced")
                    .body("{}"),
            ),
        );
        let events = Events::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        send(&server, true).await?;

        let sent = events.with_message("sending request");
        assert_eq!(sent.len(), 1, "{sent:?}");
        let sent = &sent[0];
        assert_eq!(sent.get("method").map(String::as_str), Some("GET"));
        assert!(
            sent.get("uri").is_some_and(|u| u.ends_with("/traced")),
            "{sent:?}"
        );
        assert!(
            sent.get("client_request_id").is_some_and(|id| !id.is_empty()),
            "{sent:?}"
        );

        let received = events.with_message("received response");
        assert_eq!(received.len(), 1, "{received:?}");
        let received = &received[0];
        assert_eq!(received.get("status").map(String::as_str), Some("200"));
        assert_eq!(
            received.get("request_id").map(String::as_str),
            Some("rid-traced")
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_events_without_tracing() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/traced"))
                .respond_with(status_code(200).body("{}")),
        );
        let events = Events::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        send(&server, false).await?;

        assert!(events.with_message("sending request").is_empty());
        assert!(events.with_message("received response").is_empty());
        Ok(())
    }
}
