//! Convenient macros for application messaging and logging.
//!
//! This module provides a set of macros that simplify message display and
//! logging throughout the application. The macros automatically handle the
//! distinction between debug mode (with structured logging) and normal mode
//! (with simple console output), providing a unified interface for all
//! message display needs.
//!
//! ## Core Features
//!
//! - **Dual Output Mode**: Automatic switching between tracing and console output
//! - **Debug Detection**: Runtime detection of debug mode configuration
//! - **Message Categorization**: Different macros for different message types
//! - **Error Handling**: Specialized macros for error creation and propagation
//!
//! ## Debug Mode Detection
//!
//! The system automatically detects debug mode based on environment variables:
//! - **`HABSYNC_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//! - **Caching**: Debug mode detection is cached for performance
//!
//! ## Macro Categories
//!
//! ### Display Macros
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//!
//! ### Error Handling Macros
//! - **`msg_error!`**: Error messages with ❌ prefix
//! - **`msg_error_anyhow!`**: Create anyhow::Error from messages
//! - **`msg_bail_anyhow!`**: Early return with error
//!
//! ### Debug Macros
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//!
//! ## Usage Examples
//!
//! ```rust
//! use habsync::{msg_info, msg_success, msg_error};
//! use habsync::libs::messages::Message;
//!
//! // Simple success message
//! msg_success!(Message::ConfigSaved);
//!
//! // Informational message with line breaks
//! msg_info!(Message::SyncComplete, true);
//!
//! // Error message
//! msg_error!(Message::ServiceRequestRejected);
//! ```

/// Convenience macros for common message operations with conditional tracing support
use std::sync::OnceLock;

/// Global cache for debug mode detection to avoid repeated environment variable checks.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if either of these environment variables is set:
/// - **`HABSYNC_DEBUG`**: Application-specific debug flag
/// - **`RUST_LOG`**: Standard Rust logging configuration
///
/// The result is cached using `OnceLock`, so environment variables are
/// checked only once per application run. All message macros use this
/// function to determine output routing: in debug mode messages go to the
/// tracing system, otherwise to simple console output.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("HABSYNC_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// - **Debug Mode**: Uses `tracing::info!` for structured logging
/// - **Normal Mode**: Uses `println!` for simple console output
///
/// The optional `true` argument wraps the message in blank lines:
///
/// ```rust
/// # use habsync::msg_print;
/// # use habsync::libs::messages::Message;
/// msg_print!(Message::SyncSummaryHeader);
/// msg_print!(Message::StoredTotalsHeader, true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// Designed for success notifications and positive confirmations such as
/// completed synchronization runs, configuration saves, and finished exports.
///
/// ```rust
/// # use habsync::msg_success;
/// # use habsync::libs::messages::Message;
/// msg_success!(Message::ConfigSaved);
/// // Output: "✅ Configuration saved successfully"
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// In debug mode errors are logged through the tracing system, while in
/// normal mode they are written to stderr so that scripts can separate
/// errors from regular output.
///
/// ```rust
/// # use habsync::msg_error;
/// # use habsync::libs::messages::Message;
/// msg_error!(Message::ServiceRequestRejected);
/// // Output to stderr: "❌ Remote service rejected the request"
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Warnings indicate situations requiring attention that do not prevent the
/// operation from continuing, such as skipped malformed history entries or
/// a failed tag fetch during an otherwise successful run.
///
/// ```rust
/// # use habsync::msg_warning;
/// # use habsync::libs::messages::Message;
/// # let name = "Morning run".to_string();
/// # let raw = "not-a-date".to_string();
/// msg_warning!(Message::HistoryDateSkipped(name, raw));
/// ```
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
///
/// Info messages provide status updates and progress information for
/// long-running operations.
///
/// ```rust
/// # use habsync::msg_info;
/// # use habsync::libs::messages::Message;
/// # let count = 12;
/// msg_info!(Message::TasksFetched(count));
/// // Output: "ℹ️ Fetched 12 task(s) from the remote service"
/// ```
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Messages are displayed using `tracing::debug!` when debug mode is
/// enabled and completely suppressed otherwise. Useful for troubleshooting
/// details such as raw payload fields and internal state transitions.
///
/// ```rust
/// # use habsync::msg_debug;
/// # let id = 42;
/// # let count = 7;
/// msg_debug!(format!("Task {} carries {} history entries", id, count));
/// // Debug mode output: "🔍 Task 42 carries 7 history entries"
/// // Normal mode output: (nothing)
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// Useful for error propagation in functions that return
/// `Result<T, anyhow::Error>` and need to convert application messages into
/// proper error types.
///
/// ```rust
/// # use habsync::msg_error_anyhow;
/// # use habsync::libs::messages::Message;
/// # use anyhow::Result;
/// # fn configured() -> bool { true }
/// fn require_config() -> Result<()> {
///     if !configured() {
///         return Err(msg_error_anyhow!(Message::CredentialsNotConfigured));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))` but more concise.
///
/// ```rust
/// # use habsync::msg_bail_anyhow;
/// # use habsync::libs::messages::Message;
/// # use anyhow::Result;
/// # use reqwest::StatusCode;
/// fn check_response(status: StatusCode) -> Result<()> {
///     if !status.is_success() {
///         msg_bail_anyhow!(Message::ServiceHttpStatus(status.to_string()));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
