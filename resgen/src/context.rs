//! Template contexts handed to the code-generation renderer.
//!
//! These are plain serializable views; resgen never renders templates
//! itself.

use serde::Serialize;

use crate::{
    assets::{AssetCatalog, AssetResource, Namespace},
    catalog::KeyTable,
    types::{StringsCatalog, StringsEntry},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryContext {
    pub key: String,
    pub value: String,
    pub argument_count: usize,
    pub locale: Option<String>,
    pub is_base: bool,
}

impl From<&StringsEntry> for EntryContext {
    fn from(entry: &StringsEntry) -> Self {
        EntryContext {
            key: entry.key.clone(),
            value: entry.value.clone(),
            argument_count: entry.argument_count,
            locale: entry.locale.code().map(str::to_string),
            is_base: entry.locale.is_base(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringsContext {
    pub filename: String,
    pub entries: Vec<EntryContext>,
}

impl StringsContext {
    /// Context for a deduplicated key table, under `filename`.
    pub fn from_table(filename: impl Into<String>, table: &KeyTable) -> Self {
        StringsContext {
            filename: filename.into(),
            entries: table.iter().map(EntryContext::from).collect(),
        }
    }
}

impl StringsCatalog {
    pub fn context(&self) -> StringsContext {
        StringsContext {
            filename: self.filename.clone(),
            entries: self.entries.iter().map(EntryContext::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceContext {
    pub name: String,
    pub path: Vec<String>,
}

impl ResourceContext {
    fn from_resource<R: AssetResource>(resource: &R) -> Self {
        ResourceContext {
            name: resource.name().to_string(),
            path: resource.path().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsContext {
    pub colors: Vec<ResourceContext>,
    pub images: Vec<ResourceContext>,
    pub data_assets: Vec<ResourceContext>,
}

impl From<&Namespace> for AssetsContext {
    /// Flattens the whole tree; `path` keeps each resource's namespace.
    fn from(namespace: &Namespace) -> Self {
        AssetsContext {
            colors: namespace
                .all_colors()
                .into_iter()
                .map(ResourceContext::from_resource)
                .collect(),
            images: namespace
                .all_images()
                .into_iter()
                .map(ResourceContext::from_resource)
                .collect(),
            data_assets: namespace
                .all_data_assets()
                .into_iter()
                .map(ResourceContext::from_resource)
                .collect(),
        }
    }
}

impl AssetCatalog {
    pub fn context(&self) -> AssetsContext {
        AssetsContext::from(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assets::{ColorResource, DataResource, ImageResource},
        locale::LocaleReference,
        options::BundleReference,
    };

    #[test]
    fn test_strings_context_shape() {
        let catalog = StringsCatalog {
            filename: "Localizable".to_string(),
            entries: vec![StringsEntry::new(
                "greeting",
                "Hi %@",
                LocaleReference::from_code("en", Some("en")),
            )],
        };
        let json = serde_json::to_value(catalog.context()).unwrap();
        assert_eq!(json["filename"], "Localizable");
        assert_eq!(json["entries"][0]["key"], "greeting");
        assert_eq!(json["entries"][0]["argumentCount"], 1);
        assert_eq!(json["entries"][0]["locale"], "en");
        assert_eq!(json["entries"][0]["isBase"], true);
    }

    #[test]
    fn test_table_context_uses_deduplicated_entries() {
        let table: KeyTable = vec![
            StringsEntry::new("k", "fr", LocaleReference::from_code("fr", None)),
            StringsEntry::new("k", "base", LocaleReference::none()),
        ]
        .into_iter()
        .collect();
        let context = StringsContext::from_table("Localizable", &table);
        assert_eq!(context.entries.len(), 1);
        assert_eq!(context.entries[0].value, "base");
        assert_eq!(context.entries[0].locale, None);
    }

    #[test]
    fn test_assets_context_shape() {
        let mut icons = Namespace::new();
        icons.images.push(ImageResource {
            name: "home".to_string(),
            path: vec!["Icons".to_string()],
            bundle: BundleReference::Host,
            locale: None,
            on_demand_resource_tags: None,
        });
        let mut root = Namespace::new();
        root.colors.push(ColorResource {
            name: "Accent".to_string(),
            path: Vec::new(),
            bundle: BundleReference::Host,
        });
        root.data_assets.push(DataResource {
            name: "Seed".to_string(),
            path: Vec::new(),
            bundle: BundleReference::Host,
            on_demand_resource_tags: None,
        });
        root.subnamespaces.insert("Icons".to_string(), icons);

        let json = serde_json::to_value(AssetsContext::from(&root)).unwrap();
        assert_eq!(json["colors"][0]["name"], "Accent");
        assert_eq!(json["images"][0]["name"], "home");
        assert_eq!(json["images"][0]["path"][0], "Icons");
        assert_eq!(json["dataAssets"][0]["name"], "Seed");
    }
}
