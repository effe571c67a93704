//! Support for Apple `.strings` localization format.
//!
//! The file is scanned for every non-overlapping `"key" = "value";`
//! occurrence. Anything between occurrences (comments, blank lines, malformed
//! lines) is skipped without error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, locale::LocaleReference, traits::Parser, types::StringsEntry};

lazy_static! {
    static ref PAIR_REGEX: Regex =
        Regex::new(r#""((?:[^"\\\n]|\\.)*)"\s*=\s*"((?:[^"\\]|\\.)*)"\s*;"#).unwrap();
}

/// Represents an Apple `.strings` localization file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// All well-formed key-value pairs, in file order.
    pub pairs: Vec<Pair>,
}

impl Format {
    /// Converts every pair into an entry belonging to `locale`.
    pub fn into_entries(self, locale: &LocaleReference) -> Vec<StringsEntry> {
        self.pairs
            .into_iter()
            .map(|pair| StringsEntry::new(pair.key, pair.value, locale.clone()))
            .collect()
    }
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| Error::file_read("", e))?;

        let pairs = PAIR_REGEX
            .captures_iter(&content)
            .map(|captures| Pair {
                key: captures[1].to_string(),
                value: captures[2].to_string(),
            })
            .collect();

        Ok(Format { pairs })
    }

    /// Override default file reading to support BOM-aware decoding (e.g., UTF-16 Apple .strings)
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file_read(path, e))?;
        // Auto-detect BOM, decode to UTF-8; passthrough UTF-8
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder
            .read_to_string(&mut decoded)
            .map_err(|e| Error::file_read(path, e))?;

        Self::from_str(&decoded)
    }
}

/// A single key-value pair in a `.strings` file.
///
/// Key and value are kept verbatim, escape sequences included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}
