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

//! Defines traits and helpers to serialize query parameters.
//!
//! Query parameters in the Azure management APIs can be types other than
//! strings, notably booleans, integers, and timestamps. Optional parameters
//! are omitted from the request when not set. We need a helper to serialize
//! parameters of different types, while keeping the generated code uniform.
//!
//! The types are not intended for application developers to use. They are
//! public because we will generate many crates (roughly one per resource
//! provider), and most of these crates will use these helpers.

use crate::http::RequestBuilder;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder>;
}

impl QueryParameter for &str {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(name, self))
    }
}

impl QueryParameter for String {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(name, self))
    }
}

impl QueryParameter for bool {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(name, self.to_string()))
    }
}

impl QueryParameter for i32 {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(name, self.to_string()))
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        Ok(builder.query(name, self.to_string()))
    }
}

impl QueryParameter for OffsetDateTime {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        let formatted = self.format(&Rfc3339).map_err(gax::error::Error::binding)?;
        Ok(builder.query(name, formatted))
    }
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: RequestBuilder, name: &str) -> gax::Result<RequestBuilder> {
        match self {
            None => Ok(builder),
            Some(v) => v.add(builder, name),
        }
    }
}
