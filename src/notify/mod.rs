//! User notification seam.
//!
//! This module defines the [`Notice`] type emitted by the session core and the
//! [`Notifier`] trait through which notices reach the user. Notices are
//! fire-and-forget: the core never consumes a return value, and a notifier has
//! no way to influence session state.
//!
//! # Architecture
//!
//! - This module: notice type and the notifier trait
//! - [`console`]: Production implementation printing ANSI-colored lines

pub mod console;

pub use console::ConsoleNotifier;

/// A user-facing notice emitted by the session core.
///
/// Notices classify how a message should be presented (warning, success, or
/// failure styling); the text itself is decided at the emit site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Recoverable input problem, such as an empty search field.
    Warning(String),

    /// A search resolved with results.
    Success(String),

    /// A search resolved without results.
    Failure(String),
}

impl Notice {
    /// Returns the notice's message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Warning(message) | Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

/// Destination for user-facing notices.
///
/// Implementations decide presentation only. The provided [`notify`] method
/// routes a [`Notice`] to the channel matching its variant.
///
/// [`notify`]: Notifier::notify
pub trait Notifier: Send + Sync {
    /// Presents a warning to the user.
    fn warn(&self, message: &str);

    /// Presents a success message to the user.
    fn success(&self, message: &str);

    /// Presents a failure message to the user.
    fn failure(&self, message: &str);

    /// Routes a notice to the channel matching its variant.
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Warning(message) => self.warn(message),
            Notice::Success(message) => self.success(message),
            Notice::Failure(message) => self.failure(message),
        }
    }
}
