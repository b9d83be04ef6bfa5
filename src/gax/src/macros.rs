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

/// Defines an enum where the service may return values unknown to this
/// version of the client library.
///
/// Azure services add new values to their enums over time. The generated
/// enums preserve such values in an `UnknownValue` variant, and serialize
/// them back unchanged.
///
/// This is an implementation detail of the generated clients, applications
/// should have no need to use it.
///
/// # Example
/// ```
/// azure_mgmt_gax::open_enum! {
///     /// The tier of a SKU.
///     Tier {
///         Standard => "Standard",
///         Premium => "Premium",
///     }
/// }
/// assert_eq!(Tier::from("Premium"), Tier::Premium);
/// assert_eq!(Tier::from("Basic").value(), "Basic");
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the client library.
            UnknownValue(String),
        }

        impl $name {
            /// The value used by the service.
            pub fn value(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::UnknownValue(v) => v.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::UnknownValue(other.to_string()),
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.value())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    crate::open_enum! {
        /// A test enum.
        Family {
            UnlimitedData => "UnlimitedData",
            MeteredData => "MeteredData",
        }
    }

    #[test]
    fn known_values() -> anyhow::Result<()> {
        assert_eq!(Family::from("MeteredData"), Family::MeteredData);
        assert_eq!(Family::UnlimitedData.to_string(), "UnlimitedData");
        assert_eq!(serde_json::to_value(Family::MeteredData)?, json!("MeteredData"));
        let got = serde_json::from_value::<Family>(json!("UnlimitedData"))?;
        assert_eq!(got, Family::UnlimitedData);
        Ok(())
    }

    #[test]
    fn unknown_values() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Family>(json!("FutureData"))?;
        assert_eq!(got, Family::UnknownValue("FutureData".into()));
        assert_eq!(got.value(), "FutureData");
        assert_eq!(serde_json::to_value(&got)?, json!("FutureData"));
        Ok(())
    }

    #[test]
    fn values_are_case_sensitive() {
        assert_eq!(
            Family::from("meteredData"),
            Family::UnknownValue("meteredData".into())
        );
    }

    #[test]
    fn not_a_string() {
        let got = serde_json::from_value::<Family>(json!(42));
        assert!(got.is_err(), "{got:?}");
    }
}
