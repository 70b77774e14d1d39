//! Habitica API client for fetching tags, tasks, and per-task history.
//!
//! Provides integration with the Habitica v3 REST API (both habitica.com and
//! self-hosted instances) to retrieve the user's tags and the full task list
//! with embedded history, checklist, and tag assignments.
//!
//! ## Features
//!
//! - **Header Authentication**: Credentials travel with every request, no login flow
//! - **Envelope Handling**: Unwraps the `{success, data}` response envelope
//! - **Lenient Payloads**: Missing or oddly typed fields deserialize to defaults
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn run() -> anyhow::Result<()> {
//! use habsync::api::habitica::{Habitica, HabiticaConfig};
//!
//! let config = HabiticaConfig {
//!     user_id: "7c3d0556-3f7e-4d22-9b3f-35a9ee7ec207".to_string(),
//!     api_key: "a0534b21-6a3c-4272-a293-0271d9e9a93c".to_string(),
//!     api_url: "https://habitica.com/api/v3".to_string(),
//! };
//!
//! let client = Habitica::new(&config)?;
//! let tasks = client.fetch_tasks().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::ConfigModule;
use crate::libs::history::{parse_remote_date, Entry, Origin, Signal, TimestampError};
use crate::libs::messages::Message;
use crate::libs::task::TaskKind;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default public Habitica API endpoint.
pub const DEFAULT_API_URL: &str = "https://habitica.com/api/v3";

/// Habitica API client.
///
/// The client is stateless and thread-safe. Authentication headers are
/// attached to the underlying HTTP client at construction time, so every
/// request is ready to go without a separate login step.
#[derive(Debug)]
pub struct Habitica {
    /// HTTP client with default authentication headers attached
    client: Client,
    /// Configuration containing API endpoint and credentials
    config: HabiticaConfig,
}

/// Response envelope wrapping every Habitica API payload.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: T,
}

/// A tag as returned by `GET /tags`.
///
/// Tag names are occasionally absent or empty in real payloads, so the
/// field stays optional and callers decide how to treat missing names.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTag {
    pub id: String,
    pub name: Option<String>,
}

/// A task as returned by `GET /tasks/user`.
///
/// Only the fields habsync consumes are modeled. Unknown task types are
/// carried through as-is rather than rejected, and every embedded
/// collection defaults to empty when the service omits it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTask {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<Value>,
    #[serde(rename = "dateCompleted")]
    pub date_completed: Option<Value>,
    pub completed: Option<bool>,
    pub value: Option<f64>,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    #[serde(default)]
    pub checklist: Vec<ChecklistRecord>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RemoteTask {
    pub fn task_kind(&self) -> TaskKind {
        TaskKind::parse(&self.kind)
    }

    /// Present-moment signal of the task, used when the remote payload
    /// carries no history and a local entry for today has to be recorded.
    pub fn present_signal(&self) -> Signal {
        match self.task_kind() {
            TaskKind::Daily | TaskKind::Todo => Signal::Completed(self.completed.unwrap_or(false)),
            _ => Signal::Score(self.value.unwrap_or(0.0)),
        }
    }
}

/// One raw history record embedded in a task payload.
///
/// The `date` field arrives either as epoch milliseconds or as an ISO
/// string depending on the age of the record, hence the untyped value.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    pub date: Option<Value>,
    pub value: Option<f64>,
    pub completed: Option<bool>,
}

impl HistoryRecord {
    /// Converts the raw record into a dated history entry.
    ///
    /// Fails when the date field is absent or in neither accepted shape.
    pub fn to_entry(&self, kind: &TaskKind) -> Result<Entry, TimestampError> {
        let raw = self.date.as_ref().ok_or(TimestampError::Missing)?;
        let date = parse_remote_date(raw)?;
        let signal = match kind {
            TaskKind::Daily | TaskKind::Todo => Signal::Completed(self.completed.unwrap_or_else(|| self.value.unwrap_or(0.0) > 0.0)),
            _ => Signal::Score(self.value.unwrap_or(0.0)),
        };
        Ok(Entry::new(date, signal, Origin::Remote))
    }

    /// Raw date text for diagnostics when the record cannot be parsed.
    pub fn raw_date(&self) -> String {
        match &self.date {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

/// One checklist item embedded in a task payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistRecord {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Habitica {
    /// Creates a new Habitica API client.
    ///
    /// Builds the HTTP client with the `x-api-user`, `x-api-key`, and
    /// `x-client` headers the service requires on every call.
    pub fn new(config: &HabiticaConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-user", HeaderValue::from_str(&config.user_id)?);
        headers.insert("x-api-key", HeaderValue::from_str(&config.api_key)?);
        headers.insert("x-client", HeaderValue::from_str(&format!("{}-habsync", config.user_id))?);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetches all of the user's tags.
    ///
    /// # API Endpoint
    ///
    /// `GET /tags`
    pub async fn fetch_tags(&self) -> Result<Vec<RemoteTag>> {
        self.fetch("tags").await
    }

    /// Fetches the user's full task list with embedded history.
    ///
    /// # API Endpoint
    ///
    /// `GET /tasks/user`
    pub async fn fetch_tasks(&self) -> Result<Vec<RemoteTask>> {
        self.fetch("tasks/user").await
    }

    /// Performs a GET request and unwraps the response envelope.
    ///
    /// Non-success HTTP statuses and envelopes with `success: false` are
    /// both reported as errors so callers see a single failure channel.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            msg_bail_anyhow!(Message::ServiceHttpStatus(status.to_string()));
        }

        let envelope = response.json::<Envelope<T>>().await?;
        if !envelope.success {
            msg_bail_anyhow!(Message::ServiceRequestRejected);
        }

        Ok(envelope.data)
    }
}

/// Configuration for the Habitica API integration.
///
/// ## Security Notes
///
/// - The API token grants full account access, keep the config file private
/// - Tokens can be regenerated through Habitica's settings if compromised
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HabiticaConfig {
    /// Habitica user ID (Settings → API).
    pub user_id: String,

    /// Habitica API token (Settings → API).
    pub api_key: String,

    /// Base URL of the API, including the version path.
    ///
    /// Defaults to the public habitica.com endpoint. Self-hosted instances
    /// use their own host, e.g. `https://habitica.example.com/api/v3`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for HabiticaConfig {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl HabiticaConfig {
    /// Returns the configuration module metadata for Habitica.
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "habitica".to_string(),
            name: "Habitica".to_string(),
        }
    }

    /// Runs an interactive configuration setup for the Habitica integration.
    ///
    /// Prompts for the user ID, API token, and API URL, using existing
    /// configuration values as defaults when available.
    pub fn init(config: &Option<HabiticaConfig>) -> Result<Self> {
        // Use existing configuration as defaults, or start from empty credentials
        let config = config.clone().unwrap_or_default();

        // Display configuration module header
        msg_print!(Message::ConfigModuleHabitica);

        // Interactive configuration with existing values as defaults
        Ok(Self {
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter your Habitica user ID")
                .default(config.user_id)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter your Habitica API token")
                .default(config.api_key)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the Habitica API URL")
                .default(config.api_url)
                .interact_text()?,
        })
    }

    /// Applies environment variable overrides to the loaded configuration.
    ///
    /// `HABSYNC_USER_ID`, `HABSYNC_API_KEY`, and `HABSYNC_API_URL` take
    /// precedence over values from the configuration file, which lets the
    /// scheduler inject credentials without touching files on disk.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(user_id) = std::env::var("HABSYNC_USER_ID") {
            self.user_id = user_id;
        }
        if let Ok(api_key) = std::env::var("HABSYNC_API_KEY") {
            self.api_key = api_key;
        }
        if let Ok(api_url) = std::env::var("HABSYNC_API_URL") {
            self.api_url = api_url;
        }
    }

    /// True when both credential fields are present.
    pub fn is_configured(&self) -> bool {
        !self.user_id.is_empty() && !self.api_key.is_empty()
    }
}
