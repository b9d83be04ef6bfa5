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

use std::collections::HashMap;

gax::open_enum! {
    /// The SKU name. Required for account creation, optional for update.
    SkuName {
        StandardLrs => "Standard_LRS",
        StandardGrs => "Standard_GRS",
        StandardRagrs => "Standard_RAGRS",
        StandardZrs => "Standard_ZRS",
        PremiumLrs => "Premium_LRS",
    }
}

gax::open_enum! {
    /// The SKU tier, derived from the SKU name.
    SkuTier {
        Standard => "Standard",
        Premium => "Premium",
    }
}

gax::open_enum! {
    /// The kind of storage account.
    Kind {
        Storage => "Storage",
        BlobStorage => "BlobStorage",
    }
}

gax::open_enum! {
    /// Why a storage account name could not be used.
    Reason {
        AccountNameInvalid => "AccountNameInvalid",
        AlreadyExists => "AlreadyExists",
    }
}

gax::open_enum! {
    /// Permissions for a storage account key.
    KeyPermission {
        Read => "Read",
        Full => "Full",
    }
}

gax::open_enum! {
    /// The unit of measurement of a usage.
    UsageUnit {
        Count => "Count",
        Bytes => "Bytes",
        Seconds => "Seconds",
        Percent => "Percent",
        CountsPerSecond => "CountsPerSecond",
        BytesPerSecond => "BytesPerSecond",
    }
}

/// The SKU of a storage account.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sku {
    pub name: SkuName,

    /// Output only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SkuTier>,
}

impl Sku {
    pub fn new<T: Into<SkuName>>(name: T) -> Self {
        Self {
            name: name.into(),
            tier: None,
        }
    }
}

impl From<SkuName> for Sku {
    fn from(value: SkuName) -> Self {
        Self::new(value)
    }
}

/// The parameters used when creating a storage account.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountCreateParameters {
    pub sku: Sku,
    pub kind: Kind,

    /// The geo-location of the account, it cannot be changed once set.
    pub location: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl Default for StorageAccountCreateParameters {
    fn default() -> Self {
        Self {
            sku: Sku::new(SkuName::StandardLrs),
            kind: Kind::Storage,
            location: String::new(),
            tags: HashMap::new(),
        }
    }
}

impl StorageAccountCreateParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [sku][StorageAccountCreateParameters::sku].
    pub fn set_sku<T: Into<Sku>>(mut self, v: T) -> Self {
        self.sku = v.into();
        self
    }

    /// Sets the value of [kind][StorageAccountCreateParameters::kind].
    pub fn set_kind<T: Into<Kind>>(mut self, v: T) -> Self {
        self.kind = v.into();
        self
    }

    /// Sets the value of [location][StorageAccountCreateParameters::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [tags][StorageAccountCreateParameters::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The parameters used when updating a storage account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountUpdateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl StorageAccountUpdateParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [sku][StorageAccountUpdateParameters::sku].
    pub fn set_sku<T: Into<Sku>>(mut self, v: T) -> Self {
        self.sku = Some(v.into());
        self
    }

    /// Sets the value of [tags][StorageAccountUpdateParameters::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The URIs used to access the public endpoints of a storage account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Endpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// The properties of a storage account. All fields are output only.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_endpoints: Option<Endpoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_of_primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_location: Option<String>,

    /// The creation time, in ISO-8601 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
}

/// A storage account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountProperties>,
}

/// A page of storage accounts.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountListResult {
    pub value: Vec<StorageAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl gax::paginator::PageableResponse for StorageAccountListResult {
    type PageItem = StorageAccount;

    fn next_link(&self) -> Option<String> {
        self.next_link.clone()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.value
    }
}

/// The request body for `check_name_availability`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountCheckNameAvailabilityParameters {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

impl StorageAccountCheckNameAvailabilityParameters {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            r#type: "Microsoft.Storage/storageAccounts".to_string(),
        }
    }
}

/// The result of `check_name_availability`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckNameAvailabilityResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An access key for a storage account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<KeyPermission>,
}

/// The result of `list_keys` and `regenerate_key`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountListKeysResult {
    pub keys: Vec<StorageAccountKey>,
}

impl StorageAccountListKeysResult {
    /// Finds a key by name, e.g. `key1`.
    pub fn key(&self, key_name: &str) -> Option<&StorageAccountKey> {
        self.keys
            .iter()
            .find(|k| k.key_name.as_deref() == Some(key_name))
    }
}

/// The request body for `regenerate_key`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageAccountRegenerateKeyParameters {
    pub key_name: String,
}

impl StorageAccountRegenerateKeyParameters {
    pub fn new<T: Into<String>>(key_name: T) -> Self {
        Self {
            key_name: key_name.into(),
        }
    }
}

/// The name of a usage counter.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UsageName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_value: Option<String>,
}

/// The usage of a storage resource in the subscription.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Usage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UsageUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<UsageName>,
}

/// The usages in a subscription.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UsageListResult {
    pub value: Vec<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl gax::paginator::PageableResponse for UsageListResult {
    type PageItem = Usage;

    fn next_link(&self) -> Option<String> {
        self.next_link.clone()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn open_enum() -> anyhow::Result<()> {
        assert_eq!(SkuName::from("Standard_GRS"), SkuName::StandardGrs);
        assert_eq!(SkuName::StandardRagrs.to_string(), "Standard_RAGRS");
        let got = serde_json::from_value::<SkuName>(json!("Standard_Future"))?;
        assert_eq!(got, SkuName::UnknownValue("Standard_Future".into()));
        assert_eq!(serde_json::to_value(&got)?, json!("Standard_Future"));
        Ok(())
    }

    #[test]
    fn create_parameters() -> anyhow::Result<()> {
        let params = StorageAccountCreateParameters::new()
            .set_sku(SkuName::StandardLrs)
            .set_kind(Kind::Storage)
            .set_location("westus");
        let got = serde_json::to_value(&params)?;
        assert_eq!(
            got,
            json!({"sku": {"name": "Standard_LRS"}, "kind": "Storage", "location": "westus"})
        );
        Ok(())
    }

    #[test]
    fn list_keys() -> anyhow::Result<()> {
        let got = serde_json::from_value::<StorageAccountListKeysResult>(json!({
            "keys": [
                {"keyName": "key1", "value": "secret1", "permissions": "Full"},
                {"keyName": "key2", "value": "secret2", "permissions": "READ"}
            ]
        }))?;
        assert_eq!(
            got.key("key1").and_then(|k| k.permissions.clone()),
            Some(KeyPermission::Full)
        );
        assert_eq!(
            got.key("key2").and_then(|k| k.permissions.clone()),
            Some(KeyPermission::UnknownValue("READ".into()))
        );
        assert!(got.key("key3").is_none());
        Ok(())
    }
}
