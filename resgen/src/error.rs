//! All error types for the resgen crate.
//!
//! Every parse failure aborts the aggregation it belongs to, so callers only
//! ever see complete catalogs or one of these errors.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode `{}`: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no string catalogs found in `{}`", .0.display())]
    NoCatalogsFound(PathBuf),

    #[error("failed to read asset catalog `{}`: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid asset descriptor `{}`: {source}", path.display())]
    InvalidDescriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{}` has no usable file name", .0.display())]
    MissingBasename(PathBuf),

    #[error("unsupported file extension for `{}`", .0.display())]
    UnsupportedExtension(PathBuf),
}

impl Error {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Attaches `path` to errors raised while parsing an in-memory reader.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            Error::FileRead { source, .. } => Error::file_read(path, source),
            Error::Decode { source, .. } => Error::Decode {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    pub(crate) fn catalog_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::CatalogRead {
            path: path.into(),
            source,
        }
    }
}
