//! Core library modules for the habsync application.
//!
//! Serves as the main entry point for all habsync library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **History Reconciliation**: Date parsing and remote-wins merging
//! - **User Interface**: Console rendering and data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use habsync::libs::task::{Task, TaskKind};
//! use habsync::db::tasks::Tasks;
//!
//! let task = Task::new("habitica-uuid", "Morning run", TaskKind::Habit);
//! let mut tasks_db = Tasks::new()?;
//! tasks_db.upsert(&task)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod history;
pub mod messages;
pub mod reconcile;
pub mod task;
pub mod view;
