//! `cpfauth-directory` — identity-directory capability boundary.
//!
//! The core never talks to a concrete identity provider; it sees two narrow
//! traits: [`UserDirectory`] (lookup / create-if-absent, keyed by CPF) and
//! [`CpfSource`] (enumerate identifiers for provisioning). Providers are
//! added by implementing [`UserDirectory`]; there is no inheritance
//! hierarchy to extend.

pub mod entry;
pub mod error;
pub mod memory;

use cpfauth_core::Cpf;

pub use entry::DirectoryEntry;
pub use error::DirectoryError;
pub use memory::{InMemoryCpfSource, InMemoryDirectory};

/// Identity-directory capability consumed by the authentication core and
/// the provisioning job.
///
/// Implementations must be safe to share across concurrent requests
/// (`Send + Sync`); callers hold a single long-lived `Arc<dyn UserDirectory>`
/// constructed at startup. All calls are scoped to the directory pool the
/// implementation was constructed with.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up the entry stored under `cpf`.
    ///
    /// "No such entry" is the expected miss and reported as
    /// [`DirectoryError::NotFound`]; anything else (network, permissions,
    /// malformed provider response) is [`DirectoryError::Transport`].
    async fn lookup(&self, cpf: &Cpf) -> Result<DirectoryEntry, DirectoryError>;

    /// Create an entry for `cpf` if none exists.
    ///
    /// An existing entry is reported as [`DirectoryError::AlreadyExists`]
    /// so batch callers can distinguish it from a real failure.
    async fn create_if_absent(&self, cpf: &Cpf) -> Result<DirectoryEntry, DirectoryError>;
}

/// Enumeration of known identifiers from the system of record.
///
/// Consumed only by the provisioning job. The listing is finite and
/// restartable per batch run; ordering is unspecified.
#[async_trait::async_trait]
pub trait CpfSource: Send + Sync {
    async fn list_all_cpfs(&self) -> Result<Vec<Cpf>, DirectoryError>;
}
