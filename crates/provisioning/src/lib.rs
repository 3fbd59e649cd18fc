//! `cpfauth-provisioning` — batch account provisioning.
//!
//! Reads every known CPF from the system of record and ensures a directory
//! entry exists for each. Storage/runtime agnostic: both collaborators come
//! in as capability traits.

pub mod job;

pub use job::{ProvisioningJob, ProvisioningReport};
