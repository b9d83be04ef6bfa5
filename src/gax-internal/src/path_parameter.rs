// Copyright 2024 Google LLC
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

//! Handling of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required. The generated code needs to return an error when the parameter
//! is missing or empty, and to escape the value so it forms a single path
//! segment. A small helper function makes the generated code easier to read.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// RFC 3986 unreserved characters are left as-is, everything else is escaped,
// including `/`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Escapes `value` as a single path segment.
///
/// # Example
/// ```
/// # use azure_mgmt_gax_internal::path_parameter::encode;
/// let p = encode("resourceGroupName", "my rg/1")?;
/// assert_eq!(p, "my%20rg%2F1");
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn encode(name: &str, value: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Validates `value` but does not escape it.
///
/// Used for parameters that are part of the host name, such as the account
/// name in data plane endpoints, or for parameters documented as
/// already-escaped paths.
pub fn skip_quote<'a>(name: &str, value: &'a str) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("my-rg", "my-rg")]
    #[test_case("my_rg.v1~", "my_rg.v1~")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("café", "caf%C3%A9")]
    fn encode(input: &str, want: &str) {
        let got = super::encode("p", input).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn encode_empty() {
        let e = super::encode("resourceGroupName", "").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(format!("{e}").contains("resourceGroupName"), "{e}");
    }

    #[test]
    fn skip_quote() {
        assert_eq!(super::skip_quote("p", "a/b").unwrap(), "a/b");
        let e = super::skip_quote("accountName", "").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }
}
