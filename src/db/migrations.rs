//! Database schema migration management and versioning system.
//!
//! Provides a migration framework for evolving the database schema over time
//! while maintaining data integrity and consistency.
//!
//! ## Features
//!
//! - **Version Tracking**: Maintains precise records of applied migrations
//! - **Automatic Application**: Runs pending migrations during database initialization
//! - **Transaction Safety**: Pending migrations run within a database transaction
//! - **Rollback Support**: Development-time rollback capabilities (debug builds only)
//! - **History Tracking**: Complete audit trail of schema changes
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use habsync::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("habsync.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
///
/// Each migration is recorded with its version, name, and application
/// timestamp, providing an audit trail of schema changes.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Represents a single database migration with execution logic.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Central migration system manager that orchestrates schema evolution.
///
/// The `MigrationManager` maintains the complete registry of available
/// migrations and applies them in version order. It is designed for
/// single-threaded use during application startup.
pub struct MigrationManager {
    /// Ordered list of all available migrations
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// Creates a new migration manager with all registered migrations.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };

        // Register all migrations in chronological order
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    ///
    /// Migrations must be registered in sequential version order: each one
    /// builds upon the schema state created by its predecessors.
    fn register_migrations(&mut self) {
        // Version 1: Base tables and performance indices
        // Task identifiers come from the remote service and are stored as
        // opaque text, never reformatted or validated.
        self.add_migration(1, "create_initial_schema", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id TEXT NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL,
                    kind TEXT NOT NULL,
                    created_at TIMESTAMP,
                    completed_at TIMESTAMP,
                    last_synced TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tags (
                    id TEXT NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL
                )",
                [],
            )?;

            // Junction table for many-to-many task-tag relationships
            tx.execute(
                "CREATE TABLE IF NOT EXISTS task_tags (
                    task_id TEXT NOT NULL,
                    tag_id TEXT NOT NULL,
                    PRIMARY KEY (task_id, tag_id),
                    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE,
                    FOREIGN KEY (tag_id) REFERENCES tags(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // One history entry per task and date
            tx.execute(
                "CREATE TABLE IF NOT EXISTS history (
                    id INTEGER PRIMARY KEY,
                    task_id TEXT NOT NULL,
                    date DATE NOT NULL,
                    value REAL NOT NULL,
                    UNIQUE (task_id, date),
                    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // Index history by task and date for range queries
            tx.execute("CREATE INDEX IF NOT EXISTS idx_history_task_date ON history(task_id, date)", [])?;
            // Index tasks by kind for filtered listings
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_kind ON tasks(kind)", [])?;

            Ok(())
        });

        // Version 2: Checklist items attached to tasks
        // Items are replaced wholesale on every sync, position preserves
        // the order the remote service reports them in.
        self.add_migration(2, "add_checklist_items", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS checklist (
                    id INTEGER PRIMARY KEY,
                    task_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    completed BOOLEAN NOT NULL DEFAULT FALSE,
                    position INTEGER NOT NULL,
                    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_checklist_task ON checklist(task_id)", [])?;
            Ok(())
        });

        // Version 3: Provenance and trend tracking for history entries
        // Existing rows predate local synthesis, so they default to remote.
        self.add_migration(3, "add_history_provenance", |tx| {
            tx.execute("ALTER TABLE history ADD COLUMN origin TEXT NOT NULL DEFAULT 'remote'", [])?;
            tx.execute("ALTER TABLE history ADD COLUMN direction INTEGER NOT NULL DEFAULT 0", [])?;
            Ok(())
        });
    }

    /// Registers a single migration in the migration system.
    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in the correct order.
    ///
    /// Performs the complete migration process:
    /// 1. Creates the migrations tracking table if needed
    /// 2. Determines current database version
    /// 3. Identifies pending migrations
    /// 4. Applies pending migrations within a single transaction
    /// 5. Records successful migrations in the tracking table
    ///
    /// If any migration fails, the transaction is rolled back and the
    /// database stays at its previous version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        // Initialize the migrations tracking table
        conn.execute(MIGRATIONS_TABLE, [])?;

        // Determine the current schema version
        let current_version = self.get_current_version(conn)?;

        // Find all migrations that haven't been applied yet
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        // Exit early if no migrations are needed
        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        // Notify user about pending migrations
        msg_info!(Message::MigrationsFound(pending.len()));

        // Execute all pending migrations within a single transaction
        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    // Record successful migration in tracking table
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    // Log migration failure and propagate error
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        // Commit all successful migrations
        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Retrieves the current database schema version.
    ///
    /// Returns 0 when no migrations have been applied yet.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Checks if a specific migration version has been applied.
    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Retrieves the complete migration history with timestamps.
    ///
    /// Returns a vector of tuples containing (version, name, applied_at)
    /// for each applied migration, ordered by version number.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Rolls back migrations to a specific target version (debug builds only).
    ///
    /// This is a simplified rollback that removes migration records from the
    /// tracking table without reversing schema changes. Primarily useful for
    /// development and testing scenarios.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));

        // Remove migration records beyond the target version
        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;

        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

/// Initializes a database connection with all pending migrations applied.
///
/// This is the recommended way to ensure a database is up to date with the
/// latest schema.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> anyhow::Result<()> {
/// use habsync::db::migrations::init_with_migrations;
/// use rusqlite::Connection;
///
/// let mut conn = Connection::open("habsync.db")?;
/// init_with_migrations(&mut conn)?;
/// # Ok(())
/// # }
/// ```
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Retrieves the current database schema version.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Checks if the database requires migration to the latest schema version.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}
