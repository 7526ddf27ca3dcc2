//! Common test utilities for database-backed integration tests.
//!
//! Each test opens its own in-memory SQLite database with the embedded
//! migrations applied, so tests are fully isolated and can run in
//! parallel without interference.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

// Embed migrations at compile time
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/");

/// Open a fresh in-memory database with the schema created and the same
/// pragmas the binary applies.
pub fn memory_conn() -> SqliteConnection {
    let mut conn =
        SqliteConnection::establish(":memory:").expect("failed to open in-memory database");
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .expect("failed to apply pragmas");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("failed to run migrations");
    conn
}
