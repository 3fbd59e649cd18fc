//! Directory entry read model.

use chrono::{DateTime, Utc};
use cpfauth_core::Cpf;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identity-directory entry as seen by the core.
///
/// The core only ever checks existence and that [`username`] matches the
/// queried CPF; every other provider attribute stays opaque behind the
/// directory boundary.
///
/// [`username`]: DirectoryEntry::username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Provider-assigned subject identifier.
    pub subject: Uuid,
    /// The identifier the entry is stored under.
    pub username: Cpf,
    /// When the entry was provisioned.
    pub created_at: DateTime<Utc>,
}

impl DirectoryEntry {
    pub fn new(username: Cpf) -> Self {
        Self {
            subject: Uuid::now_v7(),
            username,
            created_at: Utc::now(),
        }
    }

    /// Whether the stored identifier matches `cpf` exactly.
    pub fn matches(&self, cpf: &Cpf) -> bool {
        &self.username == cpf
    }
}
