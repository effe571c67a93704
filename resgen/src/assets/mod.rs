//! Asset catalog (`.xcassets`) parsing.
//!
//! A catalog directory is classified level by level. `.colorset`,
//! `.imageset` and `.dataset` directories become leaf resources of the
//! current namespace; other plain directories become child namespaces when
//! their subtree holds at least one resource.

pub mod namespace;
pub mod resource;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use walkdir::WalkDir;

pub use namespace::Namespace;
pub use resource::{AssetResource, ColorResource, DataResource, ImageResource};

use crate::{error::Error, locale::LocaleReference, options::ExtractOptions};

const CATALOG_EXTENSION: &str = "xcassets";
const DESCRIPTOR_FILE: &str = "Contents.json";

/// Xcode leaf folders that carry no color, image or data resource.
const SKIPPED_LEAF_EXTENSIONS: [&str; 10] = [
    "appiconset",
    "iconset",
    "launchimage",
    "symbolset",
    "imagestack",
    "brandassets",
    "spriteatlas",
    "textureset",
    "cubetextureset",
    "mipmapset",
];

/// One parsed `.xcassets` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    /// Catalog directory name without extension (e.g. `Assets`).
    pub filename: String,
    pub root: Namespace,
}

impl AssetCatalog {
    /// Parses the catalog rooted at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::CatalogRead`] on any I/O failure and
    /// [`Error::InvalidDescriptor`] if any leaf's `Contents.json` is malformed.
    /// Either aborts the whole catalog.
    pub fn read_from<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Self, Error> {
        let path = path.as_ref();
        let filename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::MissingBasename(path.into()))?
            .to_string();

        let root = build_namespace(path, &[], options)?;
        tracing::info!(
            catalog = %filename,
            colors = root.all_colors().len(),
            images = root.all_images().len(),
            data = root.all_data_assets().len(),
            "parsed asset catalog"
        );
        Ok(AssetCatalog { filename, root })
    }

    /// Parses `root` if it is an `.xcassets` directory, otherwise every
    /// `.xcassets` directory beneath it, in file-name order.
    pub fn read_all<P: AsRef<Path>>(
        root: P,
        options: &ExtractOptions,
    ) -> Result<Vec<Self>, Error> {
        let root = root.as_ref();
        if is_catalog_dir(root) {
            return Ok(vec![Self::read_from(root, options)?]);
        }

        let mut catalogs = Vec::new();
        let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                Error::catalog_read(path, e.into())
            })?;
            if entry.file_type().is_dir() && is_catalog_dir(entry.path()) {
                catalogs.push(Self::read_from(entry.path(), options)?);
                walker.skip_current_dir();
            }
        }
        Ok(catalogs)
    }

    /// Folds the roots of several catalogs into one namespace, in order.
    pub fn merge_all<I>(catalogs: I) -> Namespace
    where
        I: IntoIterator<Item = AssetCatalog>,
    {
        catalogs
            .into_iter()
            .fold(Namespace::new(), |acc, catalog| acc.merge(catalog.root))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetKind {
    Color,
    Image,
    Data,
}

impl AssetKind {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "colorset" => Some(AssetKind::Color),
            "imageset" => Some(AssetKind::Image),
            "dataset" => Some(AssetKind::Data),
            _ => None,
        }
    }
}

/// `Contents.json` of a leaf folder. Only the fields resgen reads.
#[derive(Debug, Default, Deserialize)]
struct Descriptor {
    #[serde(default)]
    images: Vec<ImageDescriptor>,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct ImageDescriptor {
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(rename = "on-demand-resource-tags", default)]
    on_demand_resource_tags: Option<Vec<String>>,
}

fn is_catalog_dir(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
}

/// Builds the namespace for `dir`, whose namespace chain from the catalog
/// root is `path`.
fn build_namespace(
    dir: &Path,
    path: &[String],
    options: &ExtractOptions,
) -> Result<Namespace, Error> {
    let mut namespace = Namespace::new();

    for child in sorted_subdirectories(dir)? {
        let Some(dir_name) = child.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!(path = %child.display(), "skipping non UTF-8 directory name");
            continue;
        };
        let extension = child.extension().and_then(|e| e.to_str());
        let name = child
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(dir_name)
            .to_string();

        match extension.and_then(AssetKind::from_extension) {
            Some(AssetKind::Color) => {
                read_descriptor(&child)?;
                namespace.colors.push(ColorResource {
                    name,
                    path: path.to_vec(),
                    bundle: options.bundle.clone(),
                });
            }
            Some(AssetKind::Image) => {
                let descriptor = read_descriptor(&child)?.unwrap_or_default();
                let locale = descriptor
                    .images
                    .iter()
                    .find_map(|image| image.locale.as_deref())
                    .map(|code| {
                        LocaleReference::from_code(code, options.development_language.as_deref())
                    });
                namespace.images.push(ImageResource {
                    name,
                    path: path.to_vec(),
                    bundle: options.bundle.clone(),
                    locale,
                    on_demand_resource_tags: descriptor.properties.on_demand_resource_tags,
                });
            }
            Some(AssetKind::Data) => {
                let descriptor = read_descriptor(&child)?.unwrap_or_default();
                namespace.data_assets.push(DataResource {
                    name,
                    path: path.to_vec(),
                    bundle: options.bundle.clone(),
                    on_demand_resource_tags: descriptor.properties.on_demand_resource_tags,
                });
            }
            None if extension.is_some_and(|e| SKIPPED_LEAF_EXTENSIONS.contains(&e)) => {
                tracing::debug!(path = %child.display(), "skipping unsupported asset type");
            }
            None => {
                let mut child_path = path.to_vec();
                child_path.push(dir_name.to_string());
                let subnamespace = build_namespace(&child, &child_path, options)?;
                if subnamespace.is_empty() {
                    tracing::debug!(path = %child.display(), "skipping empty namespace");
                } else {
                    namespace
                        .subnamespaces
                        .insert(dir_name.to_string(), subnamespace);
                }
            }
        }
    }

    Ok(namespace)
}

fn sorted_subdirectories(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::catalog_read(dir, e))? {
        let entry = entry.map_err(|e| Error::catalog_read(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Reads `Contents.json` in `dir`. A missing descriptor is not an error.
fn read_descriptor(dir: &Path) -> Result<Option<Descriptor>, Error> {
    let path = dir.join(DESCRIPTOR_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::catalog_read(path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| Error::InvalidDescriptor { path, source })
}
