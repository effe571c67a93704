//! Leaf resources found in an asset catalog.

use serde::Serialize;

use crate::{locale::LocaleReference, options::BundleReference};

/// A named color (`<name>.colorset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorResource {
    pub name: String,
    /// Namespace names from the catalog root down to the color's parent.
    pub path: Vec<String>,
    pub bundle: BundleReference,
}

/// An image set (`<name>.imageset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResource {
    pub name: String,
    pub path: Vec<String>,
    pub bundle: BundleReference,
    pub locale: Option<LocaleReference>,
    pub on_demand_resource_tags: Option<Vec<String>>,
}

/// A data set (`<name>.dataset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResource {
    pub name: String,
    pub path: Vec<String>,
    pub bundle: BundleReference,
    pub on_demand_resource_tags: Option<Vec<String>>,
}

/// Common view over the three leaf kinds.
pub trait AssetResource {
    fn name(&self) -> &str;
    fn path(&self) -> &[String];

    /// `path` and `name` joined with `.`, e.g. `Icons.Tab.home`.
    fn qualified_name(&self) -> String {
        let mut parts = self.path().to_vec();
        parts.push(self.name().to_string());
        parts.join(".")
    }
}

macro_rules! impl_asset_resource {
    ($($ty:ty),*) => {
        $(impl AssetResource for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn path(&self) -> &[String] {
                &self.path
            }
        })*
    };
}

impl_asset_resource!(ColorResource, ImageResource, DataResource);
