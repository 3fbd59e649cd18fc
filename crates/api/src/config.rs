//! Process configuration.
//!
//! Environment is read exactly once at startup and validated into an
//! explicit struct; nothing reads env vars mid-request.

use std::net::SocketAddr;

/// Startup configuration for the API process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Opaque identifier scoping all directory lookup/create calls.
    /// Consumed by the concrete `UserDirectory` implementation, never
    /// interpreted by the core.
    pub directory_pool_id: String,
    /// Listen address for the HTTP server.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read `DIRECTORY_POOL_ID` and `BIND_ADDR` from the environment.
    ///
    /// Falls back to dev defaults with a warning, matching local-run
    /// ergonomics; a malformed `BIND_ADDR` is a startup error.
    pub fn from_env() -> anyhow::Result<Self> {
        let directory_pool_id = std::env::var("DIRECTORY_POOL_ID").unwrap_or_else(|_| {
            tracing::warn!("DIRECTORY_POOL_ID not set; using dev default pool");
            "dev-pool".to_string()
        });

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;

        Ok(Self {
            directory_pool_id,
            bind_addr,
        })
    }
}
