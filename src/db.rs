//! Per-operation SQLite connections and the transaction wrapper every query runs in.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;
use serde::Deserialize;

use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Connection type used throughout the crate.
pub type DbConnection = SqliteConnection;

fn default_busy_timeout_ms() -> u64 {
    5_000
}

define_sql_function! {
    /// Unicode-aware lowercase, registered on every connection.
    ///
    /// SQLite's built-in `lower` and `LIKE` only fold ASCII letters.
    fn unicode_lower(value: Nullable<Text>) -> Nullable<Text>;
}

/// Parameters needed to open a database connection.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

/// Opens a fresh connection for every unit of work.
///
/// Connections are not pooled; each one is closed when it is dropped at the
/// end of the operation that opened it.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: DatabaseConfig,
}

impl ConnectionProvider {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Open a new connection with foreign keys enforced.
    pub fn connect(&self) -> RepositoryResult<DbConnection> {
        let mut conn = SqliteConnection::establish(&self.config.database_url)?;
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.config.busy_timeout_ms
        ))?;
        unicode_lower_utils::register_impl(&mut conn, |value: Option<String>| {
            value.map(|v| v.to_lowercase())
        })?;
        Ok(conn)
    }

    /// Run `f` inside a transaction on a new connection.
    ///
    /// `Ok` commits, `Err` rolls back and is returned to the caller as is.
    pub fn with_transaction<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut DbConnection) -> RepositoryResult<T>,
    {
        let mut conn = self.connect()?;
        conn.transaction(f)
    }

    /// Check that the database accepts queries.
    pub fn ping(&self) -> RepositoryResult<()> {
        self.with_transaction(|conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok(())
        })
    }
}

/// Schema migrations compiled into the binary.
#[cfg(feature = "server")]
pub const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

/// Apply any migrations the database has not seen yet.
#[cfg(feature = "server")]
pub fn run_pending_migrations(provider: &ConnectionProvider) -> RepositoryResult<usize> {
    use diesel_migrations::MigrationHarness;

    let mut conn = provider.connect()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::MigrationError(e.to_string()))?;
    Ok(applied.len())
}
