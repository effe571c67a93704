//! Traits for format-agnostic parsing in resgen.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing one localization source file.
///
/// Implementors only provide [`Parser::from_reader`]. Errors raised while
/// reading from memory carry an empty path; [`Parser::read_from`] fills in
/// the real one.
///
/// # Example
///
/// ```rust,no_run
/// use resgen::traits::Parser;
/// let format = resgen::formats::strings::Format::read_from("en.lproj/Localizable.strings")?;
/// println!("{} pairs", format.pairs.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file_read(path, e))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| e.with_path(path))
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
