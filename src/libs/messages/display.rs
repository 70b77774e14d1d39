//! Display implementation for habsync application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into human-readable text suitable
//! for terminal output. It serves as the central text formatting system for
//! all user-facing messages in the habsync application.
//!
//! ## Architecture Overview
//!
//! The display system follows a centralized message management approach:
//! - **Single Source of Truth**: All message text is defined in one location
//! - **Type Safety**: Compile-time verification of message parameter usage
//! - **Consistent Formatting**: Uniform message presentation across the application
//! - **Parameter Interpolation**: Safe string formatting with typed parameters
//!
//! ## Message Categories
//!
//! The implementation handles these message categories:
//! - **Configuration Messages**: Setup, validation, and module configuration
//! - **Remote Service Messages**: HTTP transport and API envelope failures
//! - **Sync Messages**: Batch synchronization progress and per-item outcomes
//! - **Show Messages**: Stored data inspection headers and lookups
//! - **Export Messages**: Data export operations and format handling
//! - **Migration Messages**: Database schema versioning and upgrades

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// The method uses a comprehensive match statement to handle each message
    /// variant individually, ensuring that all message types are explicitly
    /// handled and that new message types require explicit formatting
    /// decisions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use habsync::libs::messages::Message;
    ///
    /// // Automatic formatting through Display trait
    /// let message = Message::SyncComplete;
    /// println!("{}", message); // "Synchronization finished"
    ///
    /// // With parameters
    /// let fetched = Message::TasksFetched(12);
    /// println!("{}", fetched); // "Fetched 12 task(s) from the remote service"
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found, nothing to delete.".to_string(),
            Message::ConfigModuleHabitica => "Habitica module configuration".to_string(),
            Message::CredentialsNotConfigured => {
                "Habitica credentials are not configured. Run 'habsync init' or set HABSYNC_USER_ID and HABSYNC_API_KEY.".to_string()
            }
            Message::PromptSelectModules => "Select modules to configure".to_string(),

            // === REMOTE SERVICE MESSAGES ===
            Message::ServiceHttpStatus(status) => format!("Remote service returned HTTP status {}", status),
            Message::ServiceRequestRejected => "Remote service rejected the request".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncFetching(url) => format!("Synchronizing with {}", url),
            Message::TagsFetched(count) => format!("Fetched {} tag(s) from the remote service", count),
            Message::TagsFetchFailed(error) => format!("Failed to fetch tags, continuing without tag updates: {}", error),
            Message::TasksFetched(count) => format!("Fetched {} task(s) from the remote service", count),
            Message::TaskProcessFailed(name, error) => format!("Failed to process task '{}': {}", name, error),
            Message::HistoryDateSkipped(name, raw) => format!("Skipped history entry with unrecognized date '{}' for task '{}'", raw, name),
            Message::SyncComplete => "Synchronization finished".to_string(),
            Message::SyncSummaryHeader => "Synchronization summary:".to_string(),
            Message::StoredTotalsHeader => "Stored totals:".to_string(),

            // === SHOW MESSAGES ===
            Message::ShowTasksHeader => "Stored tasks:".to_string(),
            Message::ShowTagsHeader => "Stored tags:".to_string(),
            Message::ShowHistoryHeader(name) => format!("History for '{}':", name),
            Message::ShowChecklistHeader => "Checklist:".to_string(),
            Message::TaskNotFound(query) => format!("No stored task matches '{}'", query),
            Message::NoTasksStored => "No tasks stored yet. Run 'habsync sync' first.".to_string(),
            Message::NoTagsStored => "No tags stored yet. Run 'habsync sync' first.".to_string(),
            Message::NoHistoryStored(name) => format!("No history stored for '{}'", name),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} data in {} format...", data, format),
            Message::ExportingAllData => "Exporting all data...".to_string(),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration {} ({})", version, name),
            Message::MigrationCompleted(version) => format!("Migration {} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration {} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from version {} to {}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback completed, current version: {}", version),
        };
        write!(f, "{}", text)
    }
}
