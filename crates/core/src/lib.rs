//! `cpfauth-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod cpf;
pub mod error;

pub use cpf::Cpf;
pub use error::{DomainError, DomainResult};
