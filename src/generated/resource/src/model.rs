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

/// A resource group, a container for related Azure resources.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroup {
    /// The ID of the resource group. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The name of the resource group. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ResourceGroupProperties>,

    /// The location of the resource group. It cannot be changed after the
    /// resource group has been created.
    pub location: String,

    /// The ID of the resource that manages this resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,

    /// The tags attached to the resource group.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl ResourceGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [location][ResourceGroup::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [managed_by][ResourceGroup::managed_by].
    pub fn set_managed_by<T: Into<String>>(mut self, v: T) -> Self {
        self.managed_by = Some(v.into());
        self
    }

    /// Sets the value of [tags][ResourceGroup::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// The provisioning state, if known.
    pub fn provisioning_state(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.provisioning_state.as_deref())
    }
}

/// The resource group properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroupProperties {
    /// The provisioning state. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// List of resource groups.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroupListResult {
    /// The list of resource groups in this page.
    pub value: Vec<ResourceGroup>,

    /// The URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl gax::paginator::PageableResponse for ResourceGroupListResult {
    type PageItem = ResourceGroup;

    fn next_link(&self) -> Option<String> {
        self.next_link.clone()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.value
    }
}
