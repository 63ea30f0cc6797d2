//! Actions representing side effects to be executed by the front-end.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or fetch
//! completions. Actions bridge pure state transitions and effectful operations
//! like issuing HTTP requests, showing notifications, or adjusting the
//! viewport.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The front-end
//! executes these actions in sequence; the handler itself performs no I/O.

use crate::fetch::FetchRequest;
use crate::notify::Notice;

/// Commands representing side effects to be executed by the front-end.
///
/// Actions are produced by the event handler and executed by the action
/// processor in the binary. They represent the boundary between pure state
/// transitions and effectful operations like network fetches and user
/// notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues a fetch for the page named by the request token.
    ///
    /// The executor runs the fetch on a background task and feeds the outcome
    /// back into the event loop as a `FetchCompleted` event carrying the same
    /// token.
    Fetch(FetchRequest),

    /// Presents a notice to the user.
    ///
    /// Fire-and-forget: the notifier has no way to influence session state.
    Notify(Notice),

    /// Positions the viewport at the first newly appended results.
    ///
    /// Emitted once per successfully appended page, never on an initial
    /// search.
    ScrollToNewResults,
}
