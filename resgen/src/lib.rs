#![forbid(unsafe_code)]
//! Resource extraction for Apple projects.
//!
//! Parses `.strings` and `.xcstrings` files and `.xcassets` directories into
//! normalized models that a code generator can turn into typed accessors.
//! Rendering is left to the caller; this crate stops at the models and their
//! template contexts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resgen::{AssetCatalog, ExtractOptions, KeyTable, read_catalogs};
//!
//! let options = ExtractOptions::new().with_development_language(Some("en".into()));
//!
//! // Every .strings / .xcstrings file under Resources/, one entry per key
//! let catalogs = read_catalogs("Resources", &options)?;
//! let table = KeyTable::from_catalogs(&catalogs);
//!
//! // Asset catalogs as a namespace tree
//! let assets = AssetCatalog::read_from("Resources/Assets.xcassets", &options)?;
//! println!("{} keys, {} colors", table.len(), assets.root.all_colors().len());
//! # Ok::<(), resgen::Error>(())
//! ```

pub mod arguments;
pub mod assets;
pub mod catalog;
pub mod context;
pub mod error;
pub mod formats;
pub mod locale;
pub mod options;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    arguments::count_arguments,
    assets::{AssetCatalog, ColorResource, DataResource, ImageResource, Namespace},
    catalog::{KeyTable, read_catalogs},
    context::{AssetsContext, StringsContext},
    error::Error,
    formats::{FormatType, SUPPORTED_EXTENSIONS},
    locale::LocaleReference,
    options::{BundleReference, ExtractOptions},
    types::{PluralCategory, StringsCatalog, StringsEntry},
};
