//! API client modules for external service integrations.
//!
//! Provides the client for the Habitica habit-tracking service that habsync
//! synchronizes against. Authentication is stateless: every request carries
//! the user's credentials in headers, so there is no session lifecycle to
//! manage.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use habsync::api::{Habitica, HabiticaConfig};
//!
//! let habitica_module = HabiticaConfig::module();
//! # let existing_config = None;
//! let habitica_config = HabiticaConfig::init(&existing_config)?;
//! let client = Habitica::new(&habitica_config)?;
//! # Ok(())
//! # }
//! ```

// API client modules
pub mod habitica;

// Re-export for easier access from other modules
pub use habitica::{Habitica, HabiticaConfig};
