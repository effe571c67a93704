//! Support for Apple `.xcstrings` string catalogs.
//!
//! Keys and localizations keep document order, so the "first localization"
//! of a key is the first one written in the file.

use std::io::BufRead;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::Error,
    locale::LocaleReference,
    traits::Parser,
    types::{PluralCategory, StringsEntry},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub source_language: String,
    pub version: String,
    pub strings: IndexMap<String, Item>,
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(|source| Error::Decode {
            path: Default::default(),
            source,
        })
    }
}

impl Format {
    /// Flattens the catalog into entries.
    ///
    /// A localization is base when its language is the catalog's source
    /// language or `development_language`.
    pub fn into_entries(self, development_language: Option<&str>) -> Vec<StringsEntry> {
        let locale_for = |code: &str| {
            let mut locale = LocaleReference::from_code(code, development_language);
            if !locale.is_base() {
                locale = LocaleReference::from_code(code, Some(self.source_language.as_str()));
            }
            locale
        };

        let mut entries = Vec::new();
        for (key, item) in &self.strings {
            let Some((language, localization)) = item.localizations.first() else {
                entries.push(StringsEntry::new(key, "", locale_for(self.source_language.as_str())));
                continue;
            };
            let locale = locale_for(language.as_str());

            match localization.primary_value() {
                Some(value) => entries.push(StringsEntry::new(key, value, locale.clone())),
                None => tracing::warn!(key = %key, language = %language, "no resolvable value"),
            }

            if let Localization::Variations { variations } = localization {
                if let Some(plural) = &variations.plural {
                    for category in PluralCategory::SUFFIXED {
                        if let Some(value) = plural.value(category) {
                            entries.push(StringsEntry::new(
                                category.suffixed_key(key),
                                value,
                                locale.clone(),
                            ));
                        }
                    }
                }
            }
        }
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub localizations: IndexMap<String, Localization>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub should_translate: Option<bool>,
}

/// One language's value for a key: a direct string, or per-category
/// variations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Localization {
    Direct {
        #[serde(rename = "stringUnit")]
        string_unit: StringUnit,
    },
    Variations {
        variations: Variations,
    },
}

impl Localization {
    /// The value emitted under the bare key: the direct string, or the
    /// `other` plural variant.
    pub fn primary_value(&self) -> Option<&str> {
        match self {
            Localization::Direct { string_unit } => Some(&string_unit.value),
            Localization::Variations { variations } => variations
                .plural
                .as_ref()
                .and_then(|plural| plural.value(PluralCategory::Other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StringUnit {
    #[serde(default)]
    pub state: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variations {
    #[serde(default)]
    pub plural: Option<PluralVariations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PluralVariations {
    pub zero: Option<PluralVariation>,
    pub one: Option<PluralVariation>,
    pub two: Option<PluralVariation>,
    pub few: Option<PluralVariation>,
    pub many: Option<PluralVariation>,
    pub other: Option<PluralVariation>,
}

impl PluralVariations {
    pub fn value(&self, category: PluralCategory) -> Option<&str> {
        let variation = match category {
            PluralCategory::Zero => &self.zero,
            PluralCategory::One => &self.one,
            PluralCategory::Two => &self.two,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
            PluralCategory::Other => &self.other,
        };
        variation.as_ref().map(|v| v.string_unit.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluralVariation {
    pub string_unit: StringUnit,
}
