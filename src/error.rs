use std::path::PathBuf;

use thiserror::Error;

use crate::document::LookupError;
use crate::io::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("INI file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl Error {
    /// The section or key was missing; the file itself was fine.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::Lookup(_))
    }

    /// The missing section or key, if that is what failed.
    pub fn lookup(&self) -> Option<&LookupError> {
        match self {
            Error::Lookup(err) => Some(err),
            _ => None,
        }
    }
}
