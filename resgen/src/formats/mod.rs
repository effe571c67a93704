//! Supported string source formats.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum used to dispatch files by extension.

pub mod strings;
pub mod xcstrings;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

// Reexporting the formats for easier access
pub use strings::Format as StringsFormat;
pub use xcstrings::Format as XcstringsFormat;

use crate::Error;

/// File extensions recognized as string sources, one per [`FormatType`].
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["strings", "xcstrings"];

/// Represents every supported string source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Legacy `"key" = "value";` files.
    Strings,
    /// JSON string catalogs with per-locale localizations and plurals.
    Xcstrings,
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Accepts `strings` and `xcstrings`, case-insensitively.
///
/// # Example
/// ```rust
/// use resgen::formats::FormatType;
/// use std::str::FromStr;
/// assert_eq!(FormatType::from_str("strings").unwrap(), FormatType::Strings);
/// assert_eq!(FormatType::from_str("XCSTRINGS").unwrap(), FormatType::Xcstrings);
/// assert!(FormatType::from_str("xml").is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "strings" => Ok(FormatType::Strings),
            "xcstrings" => Ok(FormatType::Xcstrings),
            other => Err(Error::UnsupportedExtension(other.into())),
        }
    }
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Strings => SUPPORTED_EXTENSIONS[0],
            FormatType::Xcstrings => SUPPORTED_EXTENSIONS[1],
        }
    }

    /// Infers the format from a path's extension.
    ///
    /// Returns `None` when the extension is not in [`SUPPORTED_EXTENSIONS`].
    ///
    /// # Example
    /// ```rust
    /// use resgen::formats::FormatType;
    /// assert_eq!(FormatType::from_path("en.lproj/Localizable.strings"), Some(FormatType::Strings));
    /// assert_eq!(FormatType::from_path("Localizable.xcstrings"), Some(FormatType::Xcstrings));
    /// assert_eq!(FormatType::from_path("notes.txt"), None);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        [FormatType::Strings, FormatType::Xcstrings]
            .into_iter()
            .find(|format| format.extension() == extension)
    }
}
