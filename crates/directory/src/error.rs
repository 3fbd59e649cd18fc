//! Directory error model.
//!
//! The original provider surfaced "not found" as an exception carrying an
//! error-code string; callers here branch on an explicit tag instead.

use thiserror::Error;

/// Failure modes of the directory capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No entry exists for the queried identifier. Expected, non-exceptional.
    #[error("no directory entry for identifier")]
    NotFound,

    /// An entry already exists (create-if-absent). Expected during
    /// re-provisioning.
    #[error("directory entry already exists")]
    AlreadyExists,

    /// Transport or provider failure (network, permission, malformed
    /// response). Always unexpected; callers surface it as an internal
    /// error.
    #[error("directory transport failure: {0}")]
    Transport(String),
}

impl DirectoryError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
