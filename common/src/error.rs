//! # Error Taxonomy
//!
//! Every failure a user can run into while querying or exporting.
//! "User not found" is deliberately absent: a missing account is a normal
//! [`crate::lookup::LookupResult`] with `found == false`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while talking to the directory service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid directory configuration: {0}")]
    Config(String),

    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("bind as '{identity}' failed: {message}")]
    Bind { identity: String, message: String },

    #[error("directory search failed ({phase}): {message}")]
    Search { phase: &'static str, message: String },

    #[error("could not decode directory entry: {0}")]
    Decode(String),

    #[error("directory did not answer within {seconds}s")]
    Timeout { seconds: u64 },
}

/// Failures of a lookup command.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Blank account name, rejected before the directory is contacted.
    #[error("please enter a username")]
    EmptyInput,

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Failures of an export command.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing exportable is held in the session.
    #[error("no groups to save")]
    NoData,

    #[error("error saving file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_error_wraps_into_lookup_error() {
        let err: LookupError = DirectoryError::Timeout { seconds: 5 }.into();
        assert!(matches!(err, LookupError::Directory(_)));
        assert_eq!(err.to_string(), "directory did not answer within 5s");
    }

    #[test]
    fn io_error_message_keeps_underlying_cause() {
        let err = ExportError::io(
            "/nope/out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert_eq!(err.to_string(), "error saving file /nope/out.txt: access denied");
    }
}
