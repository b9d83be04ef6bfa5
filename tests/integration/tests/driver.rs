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
mod driver {
    use azure_mgmt_test_utils::testcase::TestContext;
    use integration_tests::enable_tracing;

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn resource_group_lifecycle() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        let ctx = TestContext::builder(module_path!(), "resource_group_lifecycle").build()?;
        let result = integration_tests::resource_groups::lifecycle(&ctx).await;
        if ctx.is_playback() {
            assert_eq!(ctx.matched_sequence(), (0..8).collect::<Vec<_>>());
        }
        integration_tests::finish(ctx, result)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn storage_account_lifecycle() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        let ctx = TestContext::builder(module_path!(), "storage_account_lifecycle").build()?;
        let result = integration_tests::storage::account_lifecycle(&ctx).await;
        integration_tests::finish(ctx, result)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn key_vault_properties() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        let ctx = TestContext::builder(module_path!(), "key_vault_properties").build()?;
        let result = integration_tests::key_vault::vault_properties(&ctx).await;
        integration_tests::finish(ctx, result)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn shared_key_vault() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        let ctx = TestContext::builder(module_path!(), "shared_key_vault").build()?;
        let result = integration_tests::key_vault::shared_vault(&ctx).await;
        integration_tests::finish(ctx, result)
    }
}
