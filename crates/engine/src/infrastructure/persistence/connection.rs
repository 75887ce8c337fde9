//! Postgres connection pool management

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::infrastructure::ports::RepoError;

/// How long a request waits for a pooled connection before the store counts as unavailable.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a pool that connects on first use.
///
/// Only a malformed URL fails here. An unreachable database surfaces later as
/// `RepoError::Database` on the first query, so the server can start and report
/// the store as unavailable instead of refusing to boot.
pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<PgPool, RepoError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
        .map_err(|e| RepoError::database("connect", e))?;

    tracing::info!(max_connections, "Postgres pool configured");
    Ok(pool)
}
