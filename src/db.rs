use anyhow::{Context, Result, anyhow};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::fs;
use std::path::Path;
use tracing::info;

// Embed migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/");

/// Connection pragmas applied to every run. A negative cache_size is in
/// KiB.
const CONNECTION_PRAGMAS: &str = "\
    PRAGMA cache_size = -64000; \
    PRAGMA synchronous = OFF; \
    PRAGMA foreign_keys = ON;";

/// Open a fresh store at `path`: any pre-existing file is deleted, then
/// the schema is created by running the embedded migrations. The special
/// `:memory:` path is passed through untouched (used by tests).
pub fn establish(path: &Path) -> Result<SqliteConnection> {
    if path.is_file() {
        info!("Removing existing database at {}", path.display());
        fs::remove_file(path)
            .with_context(|| format!("failed to remove existing database at {}", path.display()))?;
    }

    let database_url = path.to_string_lossy();
    let mut conn = SqliteConnection::establish(&database_url)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    conn.batch_execute(CONNECTION_PRAGMAS)
        .context("failed to apply connection pragmas")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("failed to create schema: {e}"))?;

    Ok(conn)
}
