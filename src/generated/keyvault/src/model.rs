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
    /// The SKU family. Key vaults only support family `A`.
    SkuFamily {
        A => "A",
    }
}

gax::open_enum! {
    /// Whether the vault is a standard vault or a premium vault.
    SkuName {
        Standard => "standard",
        Premium => "premium",
    }
}

gax::open_enum! {
    /// The permissions a principal has on the keys of a vault.
    KeyPermissions {
        All => "all",
        Encrypt => "encrypt",
        Decrypt => "decrypt",
        WrapKey => "wrapKey",
        UnwrapKey => "unwrapKey",
        Sign => "sign",
        Verify => "verify",
        Get => "get",
        List => "list",
        Create => "create",
        Update => "update",
        Import => "import",
        Delete => "delete",
        Backup => "backup",
        Restore => "restore",
        Recover => "recover",
        Purge => "purge",
    }
}

gax::open_enum! {
    /// The permissions a principal has on the secrets of a vault.
    SecretPermissions {
        All => "all",
        Get => "get",
        List => "list",
        Set => "set",
        Delete => "delete",
        Backup => "backup",
        Restore => "restore",
        Recover => "recover",
        Purge => "purge",
    }
}

gax::open_enum! {
    /// The permissions a principal has on the certificates of a vault.
    CertificatePermissions {
        All => "all",
        Get => "get",
        List => "list",
        Delete => "delete",
        Create => "create",
        Import => "import",
        Update => "update",
        ManageContacts => "managecontacts",
        GetIssuers => "getissuers",
        ListIssuers => "listissuers",
        SetIssuers => "setissuers",
        DeleteIssuers => "deleteissuers",
        ManageIssuers => "manageissuers",
        Recover => "recover",
        Purge => "purge",
    }
}

gax::open_enum! {
    /// The permissions a principal has on the storage accounts managed by a
    /// vault.
    StoragePermissions {
        All => "all",
        Get => "get",
        List => "list",
        Delete => "delete",
        Set => "set",
        Update => "update",
        RegenerateKey => "regeneratekey",
        SetSas => "setsas",
        ListSas => "listsas",
        GetSas => "getsas",
        DeleteSas => "deletesas",
    }
}

/// The SKU of a key vault.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sku {
    pub family: SkuFamily,
    pub name: SkuName,
}

impl Sku {
    pub fn new<T: Into<SkuName>>(name: T) -> Self {
        Self {
            family: SkuFamily::A,
            name: name.into(),
        }
    }
}

impl Default for Sku {
    fn default() -> Self {
        Self::new(SkuName::Standard)
    }
}

impl From<SkuName> for Sku {
    fn from(value: SkuName) -> Self {
        Self::new(value)
    }
}

/// The permissions granted by an access policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Permissions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeyPermissions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<SecretPermissions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certificates: Vec<CertificatePermissions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub storage: Vec<StoragePermissions>,
}

impl Permissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [keys][Permissions::keys].
    pub fn set_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<KeyPermissions>,
    {
        self.keys = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [secrets][Permissions::secrets].
    pub fn set_secrets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SecretPermissions>,
    {
        self.secrets = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [certificates][Permissions::certificates].
    pub fn set_certificates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CertificatePermissions>,
    {
        self.certificates = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [storage][Permissions::storage].
    pub fn set_storage<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<StoragePermissions>,
    {
        self.storage = v.into_iter().map(Into::into).collect();
        self
    }
}

/// An identity that has access to the vault.
///
/// All the identities in the policies must belong to the same tenant as the
/// vault.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AccessPolicyEntry {
    /// The Azure Active Directory tenant used to authenticate requests.
    pub tenant_id: String,

    /// The object ID of a user, service principal, or security group.
    pub object_id: String,

    /// The application ID of a client making requests on behalf of a
    /// principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    pub permissions: Permissions,
}

impl AccessPolicyEntry {
    pub fn new<T: Into<String>, O: Into<String>>(tenant_id: T, object_id: O) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            object_id: object_id.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [application_id][AccessPolicyEntry::application_id].
    pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
        self.application_id = Some(v.into());
        self
    }

    /// Sets the value of [permissions][AccessPolicyEntry::permissions].
    pub fn set_permissions<T: Into<Permissions>>(mut self, v: T) -> Self {
        self.permissions = v.into();
        self
    }
}

/// The properties of a vault.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VaultProperties {
    /// The Azure Active Directory tenant used to authenticate requests to
    /// the vault.
    pub tenant_id: String,

    pub sku: Sku,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_policies: Vec<AccessPolicyEntry>,

    /// The URI used to perform operations on keys and secrets. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_uri: Option<String>,

    /// Whether virtual machines may retrieve certificates stored as secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_deployment: Option<bool>,

    /// Whether Azure Disk Encryption may retrieve secrets and unwrap keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_disk_encryption: Option<bool>,

    /// Whether Azure Resource Manager may retrieve secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_template_deployment: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_soft_delete: Option<bool>,
}

impl VaultProperties {
    pub fn new<T: Into<String>, S: Into<Sku>>(tenant_id: T, sku: S) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            sku: sku.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [access_policies][VaultProperties::access_policies].
    pub fn set_access_policies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AccessPolicyEntry>,
    {
        self.access_policies = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [enabled_for_deployment][VaultProperties::enabled_for_deployment].
    pub fn set_enabled_for_deployment(mut self, v: bool) -> Self {
        self.enabled_for_deployment = Some(v);
        self
    }

    /// Sets the value of [enabled_for_disk_encryption][VaultProperties::enabled_for_disk_encryption].
    pub fn set_enabled_for_disk_encryption(mut self, v: bool) -> Self {
        self.enabled_for_disk_encryption = Some(v);
        self
    }

    /// Sets the value of [enabled_for_template_deployment][VaultProperties::enabled_for_template_deployment].
    pub fn set_enabled_for_template_deployment(mut self, v: bool) -> Self {
        self.enabled_for_template_deployment = Some(v);
        self
    }

    /// Sets the value of [enable_soft_delete][VaultProperties::enable_soft_delete].
    pub fn set_enable_soft_delete(mut self, v: bool) -> Self {
        self.enable_soft_delete = Some(v);
        self
    }
}

/// The parameters to create or update a vault.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VaultCreateOrUpdateParameters {
    /// The supported Azure location where the vault is created.
    pub location: String,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,

    pub properties: VaultProperties,
}

impl VaultCreateOrUpdateParameters {
    pub fn new<T: Into<String>, P: Into<VaultProperties>>(location: T, properties: P) -> Self {
        Self {
            location: location.into(),
            tags: HashMap::new(),
            properties: properties.into(),
        }
    }

    /// Sets the value of [tags][VaultCreateOrUpdateParameters::tags].
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

/// A key vault.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Vault {
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
    pub properties: VaultProperties,
}

/// A page of vaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VaultListResult {
    pub value: Vec<Vault>,

    /// The URL to get the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl gax::paginator::PageableResponse for VaultListResult {
    type PageItem = Vault;

    fn next_link(&self) -> Option<String> {
        self.next_link.clone()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.value
    }
}
