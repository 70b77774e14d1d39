//! Schema version inspection for the local habit store (debug builds only).
//!
//! The store evolves through versioned migrations. Version 1 creates the
//! base tables (tasks, tags, task_tags, history). Version 2 adds per-task
//! checklist items and version 3 extends history rows with the origin and
//! direction columns.
//!
//! Both subcommands open the database without applying pending migrations,
//! so the reported state is exactly what is on disk.

#[cfg(debug_assertions)]
use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::messages::Message,
    msg_info, msg_print,
};
#[cfg(debug_assertions)]
use anyhow::Result;
#[cfg(debug_assertions)]
use clap::{Args, Subcommand};
#[cfg(debug_assertions)]
use rusqlite::Connection;

#[cfg(debug_assertions)]
#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[cfg(debug_assertions)]
#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Report the habit store's schema version and whether migrations are pending
    Status,
    /// List the migrations applied to the habit store with their timestamps
    History,
}

#[cfg(debug_assertions)]
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    // Inspection never alters the file, so pending migrations stay pending
    let conn = Db::new_without_migrations()?;

    match args.command {
        MigrationsCommand::Status => status(&conn),
        MigrationsCommand::History => history(&conn),
    }
}

#[cfg(debug_assertions)]
fn status(conn: &Connection) -> Result<()> {
    msg_print!(Message::DatabaseVersion(get_db_version(conn)?));

    if needs_migration(conn)? {
        msg_info!(Message::DatabaseNeedsUpdate);
    } else {
        msg_info!(Message::DatabaseUpToDate);
    }
    Ok(())
}

#[cfg(debug_assertions)]
fn history(conn: &Connection) -> Result<()> {
    let applied = MigrationManager::new().get_migration_history(conn)?;

    msg_print!(Message::MigrationHistory, true);
    for (version, name, applied_at) in applied {
        println!("  v{}: {} (applied: {})", version, name, applied_at);
    }
    Ok(())
}
