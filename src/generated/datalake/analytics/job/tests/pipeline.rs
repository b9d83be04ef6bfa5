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
    use azure_mgmt_datalake_analytics_job::client::DataLakeAnalyticsJobManagementClient;
    use azure_mgmt_datalake_analytics_job::credentials::Anonymous;
    use futures::TryStreamExt;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const API_VERSION: &str = "2016-11-01";

    async fn test_client(server: &Server) -> Result<DataLakeAnalyticsJobManagementClient> {
        let client = DataLakeAnalyticsJobManagementClient::builder()
            .with_endpoint(server.url_str(""))
            .with_credentials(Anonymous)
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn no_subscription_needed() -> Result<()> {
        let client = DataLakeAnalyticsJobManagementClient::builder()
            .with_credentials(Anonymous)
            .build()
            .await?;
        assert_eq!(client.adla_job_dns_suffix(), "azuredatalakeanalytics.net");
        let client = client.with_adla_job_dns_suffix("example.net");
        assert_eq!(client.adla_job_dns_suffix(), "example.net");
        Ok(())
    }

    #[tokio::test]
    async fn list() -> Result<()> {
        let server = Server::run();
        let next = server.url_str("/pipelines?api-version=2016-11-01&$skip=1");
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/pipelines"),
                request::query(url_decoded(contains(("api-version", API_VERSION)))),
                request::query(url_decoded(contains((
                    "startDateTime",
                    "2017-07-14T02:40:00Z"
                )))),
                request::query(url_decoded(not(contains(key("$skip"))))),
            ])
            .respond_with(json_encoded(json!({
                "value": [{"pipelineId": "p1", "pipelineName": "nightly"}],
                "nextLink": next
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/pipelines"),
                request::query(url_decoded(contains(("$skip", "1")))),
            ])
            .respond_with(json_encoded(json!({
                "value": [{"pipelineId": "p2", "pipelineName": "hourly"}]
            }))),
        );
        let client = test_client(&server).await?;
        let start = time::OffsetDateTime::from_unix_timestamp(1_500_000_000)?;
        let names = client
            .pipeline()
            .list("testadla")
            .set_start_date_time(start)
            .by_item()
            .map_ok(|p| p.pipeline_name.unwrap_or_default())
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(names, vec!["nightly", "hourly"]);
        Ok(())
    }

    #[tokio::test]
    async fn get() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/pipelines/my%20pipeline"),
                request::query(url_decoded(contains(("api-version", API_VERSION)))),
            ])
            .respond_with(json_encoded(json!({
                "pipelineId": "my pipeline",
                "numJobsFailed": 2,
                "auHoursFailed": 0.5
            }))),
        );
        let client = test_client(&server).await?;
        let response = client
            .pipeline()
            .get("testadla", "my pipeline")
            .send()
            .await?;
        assert_eq!(response.body().num_jobs_failed, Some(2));
        assert_eq!(response.body().au_hours_failed, Some(0.5));
        Ok(())
    }

    #[tokio::test]
    async fn get_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/pipelines/missing")).respond_with(
                status_code(404)
                    .insert_header("x-ms-request-id", "rid-1")
                    .body(
                        json!({"error": {"code": "PipelineNotFound", "message": "not found"}})
                            .to_string(),
                    ),
            ),
        );
        let client = test_client(&server).await?;
        let err = client
            .pipeline()
            .get("testadla", "missing")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(err.request_id(), Some("rid-1"));
        assert_eq!(
            err.cloud_error().and_then(|e| e.code()),
            Some("PipelineNotFound")
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_account_name() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.pipeline().get("", "p1").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
