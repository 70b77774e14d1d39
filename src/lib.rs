//! # Habsync - Habit History Synchronization
//!
//! A command-line utility that fetches tags, tasks and per-task history from
//! a Habitica-compatible habit tracker and stores them in a local SQLite
//! database for later visualization.
//!
//! ## Features
//!
//! - **History Fetching**: Pulls every task's score history from the service
//! - **Reconciliation**: Merges remote history into the local store without
//!   duplicating or losing entries, even when the service returns partial or
//!   malformed data
//! - **Tag Tracking**: Mirrors the service's tag list, following renames
//! - **Checklists**: Keeps each task's current checklist
//! - **Data Export**: Export stored data to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use habsync::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
