//! Reading string catalogs from files and directory trees, and merging them
//! into one key table.

use std::path::Path;

use indexmap::{IndexMap, map::Entry};
use walkdir::WalkDir;

use crate::{
    error::Error,
    formats::{FormatType, StringsFormat, XcstringsFormat},
    locale::LocaleReference,
    options::ExtractOptions,
    traits::Parser,
    types::{StringsCatalog, StringsEntry},
};

impl StringsCatalog {
    /// Parses one `.strings` or `.xcstrings` file.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedExtension`] if the extension is not recognized, and
    /// any error raised by the format's parser.
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Self, Error> {
        let path = path.as_ref();
        let format_type =
            FormatType::from_path(path).ok_or_else(|| Error::UnsupportedExtension(path.into()))?;
        // A recognized extension implies a non-empty stem.
        let filename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let development_language = options.development_language.as_deref();

        let entries = match format_type {
            FormatType::Strings => {
                let locale = LocaleReference::from_path(path, development_language);
                StringsFormat::read_from(path)?.into_entries(&locale)
            }
            FormatType::Xcstrings => {
                XcstringsFormat::read_from(path)?.into_entries(development_language)
            }
        };
        tracing::debug!(
            path = %path.display(),
            format = %format_type,
            entries = entries.len(),
            "parsed string catalog"
        );

        Ok(StringsCatalog { filename, entries })
    }
}

/// Parses every string catalog at `root`.
///
/// A file is parsed directly. A directory is walked recursively in file-name
/// order; files with unrecognized extensions are skipped.
///
/// # Errors
///
/// [`Error::NoCatalogsFound`] if the walk finds no recognized file. The first
/// failing file aborts the whole walk.
pub fn read_catalogs<P: AsRef<Path>>(
    root: P,
    options: &ExtractOptions,
) -> Result<Vec<StringsCatalog>, Error> {
    let root = root.as_ref();
    let metadata = std::fs::metadata(root).map_err(|e| Error::file_read(root, e))?;
    if metadata.is_file() {
        return Ok(vec![StringsCatalog::read_file(root, options)?]);
    }

    let mut catalogs = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::file_read(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if FormatType::from_path(entry.path()).is_none() {
            tracing::debug!(path = %entry.path().display(), "skipping unrecognized file");
            continue;
        }
        catalogs.push(StringsCatalog::read_file(entry.path(), options)?);
    }

    if catalogs.is_empty() {
        return Err(Error::NoCatalogsFound(root.into()));
    }
    tracing::info!(
        root = %root.display(),
        catalogs = catalogs.len(),
        "collected string catalogs"
    );
    Ok(catalogs)
}

/// One entry per key across many catalogs.
///
/// A base-locale entry replaces a non-base one for the same key; otherwise
/// the first entry inserted for a key is kept. Keys keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    entries: IndexMap<String, StringsEntry>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from catalogs in the given order.
    pub fn from_catalogs<'a, I>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = &'a StringsCatalog>,
    {
        let mut table = KeyTable::new();
        for catalog in catalogs {
            table.extend(catalog.entries.iter().cloned());
        }
        table
    }

    /// Inserts `entry`, honouring base-locale precedence.
    pub fn insert(&mut self, entry: StringsEntry) {
        match self.entries.entry(entry.key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                if entry.locale.is_base() && !slot.get().locale.is_base() {
                    slot.insert(entry);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StringsEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StringsEntry> {
        self.entries.values()
    }

    pub fn into_entries(self) -> Vec<StringsEntry> {
        self.entries.into_values().collect()
    }
}

impl Extend<StringsEntry> for KeyTable {
    fn extend<T: IntoIterator<Item = StringsEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<StringsEntry> for KeyTable {
    fn from_iter<T: IntoIterator<Item = StringsEntry>>(iter: T) -> Self {
        let mut table = KeyTable::new();
        table.extend(iter);
        table
    }
}
