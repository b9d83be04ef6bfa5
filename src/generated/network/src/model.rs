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

gax::open_enum! {
    /// The tier of an ExpressRoute circuit SKU.
    ExpressRouteCircuitSkuTier {
        Standard => "Standard",
        Premium => "Premium",
    }
}

gax::open_enum! {
    /// The billing family of an ExpressRoute circuit SKU.
    ExpressRouteCircuitSkuFamily {
        UnlimitedData => "UnlimitedData",
        MeteredData => "MeteredData",
    }
}

/// Contains the SKU of an ExpressRoute circuit.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExpressRouteCircuitSku {
    /// The name of the SKU, e.g. `Standard_MeteredData`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<ExpressRouteCircuitSkuTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<ExpressRouteCircuitSkuFamily>,
}

impl ExpressRouteCircuitSku {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ExpressRouteCircuitSku::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [tier][ExpressRouteCircuitSku::tier].
    pub fn set_tier<T: Into<ExpressRouteCircuitSkuTier>>(mut self, v: T) -> Self {
        self.tier = Some(v.into());
        self
    }

    /// Sets the value of [family][ExpressRouteCircuitSku::family].
    pub fn set_family<T: Into<ExpressRouteCircuitSkuFamily>>(mut self, v: T) -> Self {
        self.family = Some(v.into());
        self
    }
}
