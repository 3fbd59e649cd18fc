use std::sync::Arc;

use cpfauth_core::Cpf;
use cpfauth_directory::{InMemoryCpfSource, InMemoryDirectory};
use cpfauth_provisioning::ProvisioningJob;

/// Read the identifier listing from the file named by `CPF_LIST_PATH`,
/// one CPF per line. Stand-in for the relational system of record; a real
/// deployment binds a database-backed `CpfSource` here instead.
fn load_cpfs(path: &str) -> anyhow::Result<Vec<Cpf>> {
    let text = std::fs::read_to_string(path)?;
    let mut cpfs = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match Cpf::parse(line) {
            Ok(cpf) => cpfs.push(cpf),
            Err(_) => tracing::warn!("skipping structurally invalid identifier in listing"),
        }
    }
    Ok(cpfs)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cpfauth_observability::init();

    let path = std::env::var("CPF_LIST_PATH").unwrap_or_else(|_| {
        tracing::warn!("CPF_LIST_PATH not set; using ./cpfs.txt");
        "cpfs.txt".to_string()
    });

    let source = Arc::new(InMemoryCpfSource::new(load_cpfs(&path)?));
    // In-memory target for local runs; a real deployment binds the managed
    // identity provider's `UserDirectory` implementation here.
    let directory = Arc::new(InMemoryDirectory::new());

    let report = ProvisioningJob::new(source, directory).run().await?;

    tracing::info!(
        created = report.created,
        already_existed = report.already_existed,
        failed = report.failed,
        "provisioning complete"
    );
    Ok(())
}
