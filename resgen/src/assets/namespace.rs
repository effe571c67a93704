//! The namespace tree of an asset catalog.

use indexmap::IndexMap;
use serde::Serialize;

use super::resource::{ColorResource, DataResource, ImageResource};

/// A node of the asset tree.
///
/// Each child is owned by exactly one parent; combining trees goes through
/// [`Namespace::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub subnamespaces: IndexMap<String, Namespace>,
    pub colors: Vec<ColorResource>,
    pub images: Vec<ImageResource>,
    pub data_assets: Vec<DataResource>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combines two namespaces.
    ///
    /// Leaf sequences are concatenated with `self`'s entries first.
    /// Sub-namespaces sharing a name are merged recursively; the rest are
    /// carried over, `self`'s names first.
    pub fn merge(mut self, other: Namespace) -> Namespace {
        self.colors.extend(other.colors);
        self.images.extend(other.images);
        self.data_assets.extend(other.data_assets);

        for (name, child) in other.subnamespaces {
            match self.subnamespaces.get_mut(&name) {
                Some(existing) => {
                    let taken = std::mem::take(existing);
                    *existing = taken.merge(child);
                }
                None => {
                    self.subnamespaces.insert(name, child);
                }
            }
        }
        self
    }

    /// True when neither this node nor any descendant holds a resource.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.images.is_empty()
            && self.data_assets.is_empty()
            && self.subnamespaces.values().all(Namespace::is_empty)
    }

    /// Every color in the tree, depth first, own colors before children's.
    pub fn all_colors(&self) -> Vec<&ColorResource> {
        self.flatten_leaves(&|ns| ns.colors.iter().collect())
    }

    pub fn all_images(&self) -> Vec<&ImageResource> {
        self.flatten_leaves(&|ns| ns.images.iter().collect())
    }

    pub fn all_data_assets(&self) -> Vec<&DataResource> {
        self.flatten_leaves(&|ns| ns.data_assets.iter().collect())
    }

    fn flatten_leaves<'a, T>(
        &'a self,
        leaves: &dyn Fn(&'a Namespace) -> Vec<&'a T>,
    ) -> Vec<&'a T> {
        let mut out = leaves(self);
        for child in self.subnamespaces.values() {
            out.extend(child.flatten_leaves(leaves));
        }
        out
    }
}
