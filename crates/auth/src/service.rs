//! Authentication decision procedure.
//!
//! Stateless orchestration: classify the raw header value, validate the CPF,
//! run exactly one directory lookup, and tag the result. Status codes and
//! bodies are the HTTP edge's concern.

use std::sync::Arc;

use cpfauth_core::Cpf;
use cpfauth_directory::{DirectoryError, UserDirectory};

/// Why an authentication input was rejected before any directory call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Header absent or empty after trimming.
    Missing,
    /// Present but failed structural/checksum validation.
    Malformed,
}

/// Result of one authentication attempt.
///
/// Produced once per attempt and consumed immediately by the response
/// renderer; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    /// Directory holds an entry whose stored identifier matches the
    /// queried CPF.
    Authenticated,
    /// Input never reached the directory.
    InvalidInput(InvalidReason),
    /// No matching entry. Covers both a directory miss and the defensive
    /// case of an entry stored under a different identifier.
    NotFound,
    /// The lookup itself failed; details are logged, not surfaced.
    InternalError,
}

/// Orchestrates header value → validation → directory lookup → outcome.
///
/// Holds only an immutable shared directory handle, so concurrent calls are
/// trivially safe. No retries here; retry policy, if any, belongs to the
/// directory implementation.
#[derive(Clone)]
pub struct AuthenticationService {
    directory: Arc<dyn UserDirectory>,
}

impl AuthenticationService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Authenticate a raw CPF header value.
    ///
    /// Leading/trailing whitespace is insignificant; a whitespace-only value
    /// classifies as missing. Performs exactly one directory lookup, and
    /// only for a structurally valid CPF.
    pub async fn authenticate(&self, raw_cpf: Option<&str>) -> AuthenticationOutcome {
        let raw = match raw_cpf.map(str::trim) {
            None | Some("") => return AuthenticationOutcome::InvalidInput(InvalidReason::Missing),
            Some(raw) => raw,
        };

        let Ok(cpf) = Cpf::parse(raw) else {
            return AuthenticationOutcome::InvalidInput(InvalidReason::Malformed);
        };

        match self.directory.lookup(&cpf).await {
            Ok(entry) if entry.matches(&cpf) => AuthenticationOutcome::Authenticated,
            Ok(entry) => {
                // Entry stored under a different identifier than the one
                // queried: treat as "no such matching record".
                tracing::warn!(
                    queried = %cpf.masked(),
                    stored = %entry.username.masked(),
                    "directory returned entry with mismatched identifier"
                );
                AuthenticationOutcome::NotFound
            }
            Err(DirectoryError::NotFound) => AuthenticationOutcome::NotFound,
            Err(err) => {
                tracing::error!(cpf = %cpf.masked(), error = %err, "directory lookup failed");
                AuthenticationOutcome::InternalError
            }
        }
    }
}
