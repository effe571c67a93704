//! Locale resolution from file locations.
//!
//! Apple projects place per-language resources under `<code>.lproj`
//! directories. `Base.lproj` and files outside any `.lproj` belong to the
//! development (base) locale.

use std::{fmt::Display, path::Path};

use serde::Serialize;
use unic_langid::LanguageIdentifier;

const LOCALE_DIR_EXTENSION: &str = "lproj";
const BASE_LOCALE_CODE: &str = "Base";

/// The locale a source file belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleReference {
    code: Option<String>,
    is_base: bool,
}

impl LocaleReference {
    /// A file that lives outside any locale directory.
    pub fn none() -> Self {
        LocaleReference {
            code: None,
            is_base: true,
        }
    }

    /// Builds a reference for an explicit locale code.
    ///
    /// The code is base when it is `Base` or names the development language.
    pub fn from_code(code: &str, development_language: Option<&str>) -> Self {
        let is_base = code == BASE_LOCALE_CODE
            || development_language.is_some_and(|dev| same_language(code, dev));
        LocaleReference {
            code: Some(code.to_string()),
            is_base,
        }
    }

    /// Resolves the locale of `path` from its immediate parent directory.
    pub fn from_path<P: AsRef<Path>>(path: P, development_language: Option<&str>) -> Self {
        path.as_ref()
            .parent()
            .and_then(locale_dir_code)
            .map(|code| Self::from_code(code, development_language))
            .unwrap_or_else(Self::none)
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn is_none(&self) -> bool {
        self.code.is_none()
    }
}

impl Display for LocaleReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "none"),
        }
    }
}

/// Returns the locale code if `dir` is named `<code>.lproj`.
fn locale_dir_code(dir: &Path) -> Option<&str> {
    if dir.extension()?.to_str()? != LOCALE_DIR_EXTENSION {
        return None;
    }
    dir.file_stem()?.to_str().filter(|stem| !stem.is_empty())
}

/// Compares two locale codes, tolerating `_` vs `-` and case differences.
fn same_language(a: &str, b: &str) -> bool {
    match (
        a.parse::<LanguageIdentifier>(),
        b.parse::<LanguageIdentifier>(),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.eq_ignore_ascii_case(b),
    }
}
