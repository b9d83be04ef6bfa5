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

//! Helper functions to generate deterministic resource names.
//!
//! Each test gets different resource names, but the same test gets the same
//! names on every run. Playback depends on this, as the recorded URLs
//! contain the resource names.

/// No length limit.
pub const UNLIMITED: usize = usize::MAX;

const ADLER_MOD: u32 = 65521;

/// Computes the Adler-32 checksum of `data`.
pub fn adler32(data: &[u8]) -> u32 {
    let (a, b) = data.iter().fold((1_u32, 0_u32), |(a, b), byte| {
        let a = (a + u32::from(*byte)) % ADLER_MOD;
        (a, (b + a) % ADLER_MOD)
    });
    (b << 16) | a
}

/// Returns `prefix` followed by the checksum of `identifier` in hex.
///
/// If the result exceeds `max_length` the checksum is truncated, the prefix
/// is always preserved in full.
///
/// # Example
/// ```
/// use azure_mgmt_test_utils::resource_names::resource_name;
/// let name = resource_name("sdktest", "test_mgmt_storage.test_create", 24);
/// assert!(name.starts_with("sdktest"));
/// assert!(name.len() <= 24);
/// assert_eq!(name, resource_name("sdktest", "test_mgmt_storage.test_create", 24));
/// ```
pub fn resource_name(prefix: &str, identifier: &str, max_length: usize) -> String {
    let checksum = format!("{:x}", adler32(identifier.as_bytes()));
    let room = max_length.saturating_sub(prefix.len());
    let suffix = &checksum[..checksum.len().min(room)];
    format!("{prefix}{suffix}")
}

/// Returns the name identifying a test, `<module>.<test function>`.
///
/// `module_path` is usually the output of `module_path!()` in the test. The
/// crate name and any `tests` modules are dropped, the remaining segments
/// are joined with `.`. Tests with the same name in different modules get
/// different identifiers.
///
/// # Example
/// ```
/// use azure_mgmt_test_utils::resource_names::qualified_test_name;
/// let name = qualified_test_name("integration_tests::storage", "create_account");
/// assert_eq!(name, "storage.create_account");
/// let name = qualified_test_name("my_crate::preparer::storage_account::tests", "create");
/// assert_eq!(name, "preparer.storage_account.create");
/// ```
pub fn qualified_test_name(module_path: &str, test_name: &str) -> String {
    let mut segments = module_path.split("::");
    let krate = segments.next().unwrap_or(module_path);
    let module = segments
        .filter(|s| *s != "tests")
        .collect::<Vec<_>>()
        .join(".");
    if module.is_empty() {
        return format!("{krate}.{test_name}");
    }
    format!("{module}.{test_name}")
}

/// Returns the name used for resources shared by a test, such as its
/// resource group.
pub fn preparer_resource_name(qualified_test_name: &str) -> String {
    resource_name(
        &qualified_test_name.replace('.', "_"),
        qualified_test_name,
        UNLIMITED,
    )
}
