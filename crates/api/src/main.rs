use std::sync::Arc;

use cpfauth_api::config::AppConfig;
use cpfauth_directory::InMemoryDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cpfauth_observability::init();

    let config = AppConfig::from_env()?;
    tracing::info!(pool = %config.directory_pool_id, "directory pool configured");

    // In-memory directory for local runs; a real deployment binds the
    // managed identity provider's `UserDirectory` implementation, scoped to
    // `config.directory_pool_id`, in its place.
    let directory = Arc::new(InMemoryDirectory::new());

    let app = cpfauth_api::app::build_app(directory);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
