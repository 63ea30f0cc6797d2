//! Pixquest: a terminal client for paginated Pixabay image search.
//!
//! Pixquest drives a remote image search from the terminal:
//! - Submits search queries against the Pixabay REST API
//! - Pages through results twelve at a time, appending to a gallery
//! - Tracks loading/error/success status for the front-end to render
//! - Discards stale responses when a newer query supersedes an in-flight fetch
//! - Exports spans to a rotating OTLP JSON trace file
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! │  - stdin commands, tokio event loop                 │
//! │  - Action execution (fetch tasks, notices, scroll)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Fetch Layer   │   │ Notify Layer  │
//! │ (ui/)         │   │ (fetch/)      │   │ (notify/)     │
//! │ - Rendering   │   │ - Client seam │   │ - Notices     │
//! │ - View models │   │ - Req tokens  │   │ - Console out │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Image model (domain/image)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search session state machine with event/action model
//! - [`domain`]: Core domain types (images, result pages, errors)
//! - [`fetch`]: Fetch client seam, request tokens, Pixabay implementation
//! - [`notify`]: User notification seam with console implementation
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering from computed view models
//! - [`observability`]: OpenTelemetry tracing with file export
//!
//! # Configuration
//!
//! Pixquest reads a TOML file from the platform config directory
//! (`~/.config/pixquest/config.toml` on Linux):
//!
//! ```toml
//! api_key = "your-pixabay-api-key"
//! image_type = "photo"
//! orientation = "horizontal"
//! safe_search = true
//! trace_level = "info"
//! ```
//!
//! A missing file falls back to defaults; the `PIXQUEST_API_KEY` environment
//! variable overrides the file's `api_key` either way. The API key is the only
//! required value.
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Load configuration from the TOML file and environment
//!    - Initialize tracing (optional)
//!    - Build the Pixabay client and console notifier
//!
//! 2. **Event Loop**:
//!    - Read stdin lines (queries and `:more`/`:quit` commands)
//!    - Receive fetch completions from background tasks
//!
//! 3. **Transition**:
//!    - `handle_event` mutates the session and returns actions
//!
//! 4. **Execution**:
//!    - Spawn fetch tasks, print notices, re-render the gallery
//!
//! # Examples
//!
//! ## Driving the Session Core
//!
//! ```rust
//! use pixquest::{handle_event, Action, Event, SearchSession};
//!
//! let mut session = SearchSession::new();
//!
//! // Submitting a query resets the session and requests the first page.
//! let (changed, actions) = handle_event(&mut session, &Event::SubmitQuery("cats".into()))?;
//! assert!(changed);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! assert!(session.is_loading());
//! # Ok::<(), pixquest::PixquestError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure Transition Core
//!
//! `handle_event` performs no I/O. Fetches, notices, and viewport effects
//! leave the core as action descriptors executed by the binary:
//! - Every state transition is deterministic and unit-testable
//! - Test doubles replace the network and the notifier at trait seams
//! - The front-end stays a thin executor
//!
//! ## Request-Token Staleness
//!
//! Every issued fetch carries the `(query, page)` it targets:
//! - Completions are applied only while the session still awaits that token
//! - A late response for a superseded query cannot corrupt the new session
//! - In-flight fetches are never cancelled, only ignored on arrival
//!
//! ## Derived UI Signals
//!
//! Display booleans (show loader, offer load-more) are pure functions over
//! the session:
//! - No stored flags that could drift from `status`/`page`/`last_page`
//! - The renderer consumes a computed view model, never raw state
//!
//! # Platform Support
//!
//! - **Target**: any platform with a terminal and network access
//! - **Paths**: config and trace files resolve via platform conventions
//!   (XDG on Linux, Library on macOS, AppData on Windows)
//! - **Terminal**: any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod notify;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, Event, SearchSession, SearchStatus};
pub use domain::{Image, PixquestError, Result, ResultPage, PAGE_SIZE};
pub use fetch::{FetchClient, FetchOutcome, FetchRequest, PixabayClient};
pub use notify::{ConsoleNotifier, Notice, Notifier};

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Name of the environment variable overriding the configured API key.
const API_KEY_ENV: &str = "PIXQUEST_API_KEY";

/// Application configuration loaded from the platform config file.
///
/// Every field has a default, so a missing or partial file still yields a
/// usable configuration. Only the API key has no meaningful default and is
/// validated separately at startup via [`require_api_key`].
///
/// [`require_api_key`]: Config::require_api_key
///
/// # Example
///
/// ```toml
/// # ~/.config/pixquest/config.toml
/// api_key = "your-pixabay-api-key"
/// orientation = "vertical"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixabay API key sent with every request.
    ///
    /// Empty by default; the `PIXQUEST_API_KEY` environment variable takes
    /// precedence over the file. Default: `""`
    pub api_key: String,

    /// Base URL of the search API.
    ///
    /// Overridable for testing against a local stub.
    /// Default: `"https://pixabay.com/api/"`
    pub api_base: String,

    /// Image type filter sent to the API.
    ///
    /// Options: `all`, `photo`, `illustration`, `vector`. Default: `"photo"`
    pub image_type: String,

    /// Orientation filter sent to the API.
    ///
    /// Options: `all`, `horizontal`, `vertical`. Default: `"horizontal"`
    pub orientation: String,

    /// Whether to request only images suitable for all audiences.
    ///
    /// Default: `true`
    pub safe_search: bool,

    /// Tracing level for spans and log output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Overridable via
    /// the `RUST_LOG` environment variable. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: "https://pixabay.com/api/".to_string(),
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            safe_search: true,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the platform config file and environment.
    ///
    /// Reads the TOML file at the platform config path when it exists and
    /// falls back to defaults when it does not. The `PIXQUEST_API_KEY`
    /// environment variable overrides the file's `api_key` in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform config directory cannot be
    /// determined, the file exists but cannot be read, or its contents are
    /// not valid TOML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pixquest::Config;
    ///
    /// let config = Config::load()?;
    /// assert!(!config.api_base.is_empty());
    /// # Ok::<(), pixquest::PixquestError>(())
    /// ```
    pub fn load() -> Result<Self> {
        let path = infrastructure::paths::config_file_path()?;

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Some(key) = env_api_key() {
            config.api_key = key;
        }

        Ok(config)
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be read and a configuration
    /// error when its contents are not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;

        toml::from_str(&raw).map_err(|e| {
            PixquestError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Verifies that an API key is configured.
    ///
    /// Called once at startup so a missing key fails fast with a clear
    /// message instead of producing authorization errors on the first search.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the key is empty or whitespace.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(PixquestError::Config(format!(
                "no API key configured; set api_key in the config file \
                 or the {API_KEY_ENV} environment variable"
            )));
        }
        Ok(())
    }
}

/// Reads the API key override from the environment.
///
/// An empty value is treated the same as an unset variable.
fn env_api_key() -> Option<String> {
    let value = env::var(API_KEY_ENV).ok()?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_targets_the_public_api() {
        let config = Config::default();

        assert!(config.api_key.is_empty());
        assert_eq!(config.api_base, "https://pixabay.com/api/");
        assert_eq!(config.image_type, "photo");
        assert_eq!(config.orientation, "horizontal");
        assert!(config.safe_search);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn partial_config_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"abc123\"").unwrap();
        writeln!(file, "orientation = \"vertical\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.orientation, "vertical");
        assert_eq!(config.image_type, "photo");
        assert!(config.safe_search);
    }

    #[test]
    fn malformed_config_file_is_a_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = [not toml").unwrap();

        let error = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(error, PixquestError::Config(_)));
    }

    #[test]
    fn unreadable_config_file_is_an_io_error() {
        let error = Config::from_file(Path::new("/nonexistent/pixquest.toml")).unwrap_err();
        assert!(matches!(error, PixquestError::Io(_)));
    }

    #[test]
    fn api_key_is_required_at_startup() {
        let config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(PixquestError::Config(_))
        ));

        let config = Config {
            api_key: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.require_api_key().is_err());

        let config = Config {
            api_key: "abc123".to_string(),
            ..Config::default()
        };
        assert!(config.require_api_key().is_ok());
    }
}
