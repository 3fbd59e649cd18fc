//! One-shot provisioning run over the full identifier listing.

use std::sync::Arc;

use cpfauth_directory::{CpfSource, DirectoryError, UserDirectory};

/// Counters for one provisioning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisioningReport {
    /// Entries created this run.
    pub created: usize,
    /// Identifiers that already had an entry.
    pub already_existed: usize,
    /// Identifiers whose create call failed for any other reason.
    pub failed: usize,
}

impl ProvisioningReport {
    pub fn total(&self) -> usize {
        self.created + self.already_existed + self.failed
    }
}

/// Batch job: one create-if-absent call per identifier in the source.
///
/// Per-identifier failures are logged and skipped; a single identifier never
/// aborts the batch. Only enumerating the source itself is fatal, since
/// without the listing there is nothing to provision. Restartable: re-running
/// after a partial failure converges (existing entries are skipped).
pub struct ProvisioningJob {
    source: Arc<dyn CpfSource>,
    directory: Arc<dyn UserDirectory>,
}

impl ProvisioningJob {
    pub fn new(source: Arc<dyn CpfSource>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { source, directory }
    }

    pub async fn run(&self) -> Result<ProvisioningReport, DirectoryError> {
        let cpfs = self.source.list_all_cpfs().await?;
        tracing::info!(count = cpfs.len(), "starting provisioning run");

        let mut report = ProvisioningReport::default();
        for cpf in &cpfs {
            match self.directory.create_if_absent(cpf).await {
                Ok(_) => {
                    tracing::info!(cpf = %cpf.masked(), "directory entry created");
                    report.created += 1;
                }
                Err(DirectoryError::AlreadyExists) => {
                    tracing::info!(cpf = %cpf.masked(), "directory entry already exists");
                    report.already_existed += 1;
                }
                Err(err) => {
                    tracing::error!(cpf = %cpf.masked(), error = %err, "failed to create directory entry");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            created = report.created,
            already_existed = report.already_existed,
            failed = report.failed,
            "provisioning run finished"
        );
        Ok(report)
    }
}
