//! Database layer for the habsync application.
//!
//! Provides a data persistence layer built on SQLite, offering type-safe
//! database operations for all application entities. Implements a migration
//! system for schema evolution and provides specialized modules for the
//! different data types.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and migrations
//! - **Task Catalog**: Remote task mirror keyed by the service's identifiers
//! - **History**: Per-task per-date entries with provenance and trend
//! - **Organization**: Tags, tag links, and per-task checklists
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use habsync::db::{db::Db, histories::Histories, tasks::Tasks};
//! use habsync::libs::task::{Task, TaskKind};
//!
//! let db = Db::new()?;
//! let mut tasks = Tasks::new()?;
//! let task = Task::new("habitica-uuid", "Morning run", TaskKind::Habit);
//! tasks.upsert(&task)?;
//!
//! let mut histories = Histories::new()?;
//! let stored = histories.fetch_for_task(&task.id, &task.kind)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Data Integrity
//!
//! - **Upsert Semantics**: Synchronization never deletes history rows
//! - **Foreign Keys**: Tag links and checklists cascade with their task
//! - **Unique Constraints**: At most one history entry per task and date

/// Per-task checklist storage.
///
/// Mirrors the remote checklist of each task, replaced wholesale on every
/// synchronization run.
pub mod checklists;

/// Core database connection management.
///
/// Opens the SQLite database in the application data directory and brings
/// the schema up to date before handing out connections.
pub mod db;

/// Per-task history storage.
///
/// Stores one entry per task and date with value, provenance, and trend
/// direction. Writes are upsert-only.
pub mod histories;

/// Database schema migration system.
///
/// Tracks applied schema versions and applies pending migrations during
/// database initialization.
pub mod migrations;

/// Tag catalog and task-tag links.
///
/// Mirrors the remote tag list and the per-task tag assignments.
pub mod tags;

/// Task catalog operations.
///
/// Mirrors the remote task list keyed by the service's identifiers, with
/// filtering and lookup capabilities.
pub mod tasks;
