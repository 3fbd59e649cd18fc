//! `cpfauth-auth` — CPF authentication decision procedure.

pub mod service;

pub use service::{AuthenticationOutcome, AuthenticationService, InvalidReason};
