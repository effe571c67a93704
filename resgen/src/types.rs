//! Core, format-agnostic string types for resgen.
//! Both string parsers decode into these.

use serde::Serialize;

use crate::{arguments::count_arguments, locale::LocaleReference};

/// One translatable string.
///
/// Plural variants of a key are separate entries whose key carries a
/// `_<category>` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringsEntry {
    pub key: String,
    pub value: String,
    pub locale: LocaleReference,
    /// Number of format arguments in `value`, computed once at construction.
    pub argument_count: usize,
}

impl StringsEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, locale: LocaleReference) -> Self {
        let value = value.into();
        let argument_count = count_arguments(&value);
        StringsEntry {
            key: key.into(),
            value,
            locale,
            argument_count,
        }
    }
}

/// All entries parsed from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringsCatalog {
    /// Source file name without extension (e.g. `Localizable`).
    pub filename: String,
    pub entries: Vec<StringsEntry>,
}

impl StringsCatalog {
    pub fn find_entry(&self, key: &str) -> Option<&StringsEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Plural categories, in CLDR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Categories that produce a suffixed entry; `Other` is the bare key.
    pub const SUFFIXED: [PluralCategory; 5] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// The key of the entry carrying this category's variant of `key`.
    pub fn suffixed_key(&self, key: &str) -> String {
        format!("{}_{}", key, self.as_str())
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
