//! Options controlling how catalogs are extracted.

use serde::Serialize;

/// Opaque handle to the container an asset ships in.
///
/// Extraction never interprets this; it is copied onto every asset resource
/// so code generation can emit the right bundle lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
pub enum BundleReference {
    /// The bundle of the module the generated code is compiled into.
    #[default]
    Host,
    /// A bundle referenced by name.
    Named(String),
}

/// Extraction behavior shared by the strings and asset pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// The project's development language. Files under `<code>.lproj` with a
    /// matching code are treated as base locale.
    pub development_language: Option<String>,
    /// Bundle threaded into every asset resource.
    pub bundle: BundleReference,
}

impl ExtractOptions {
    /// Creates default extraction options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the development language.
    pub fn with_development_language(mut self, language: Option<String>) -> Self {
        self.development_language = language;
        self
    }

    /// Sets the bundle reference.
    pub fn with_bundle(mut self, bundle: BundleReference) -> Self {
        self.bundle = bundle;
        self
    }
}
