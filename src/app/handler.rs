//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes search
//! submissions, pagination requests, and fetch completions, translating them
//! into session state changes and action sequences. It is the only place
//! session state is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front-end or from completed fetch tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. The session is mutated in place
//! 4. Actions are collected and returned for execution
//!
//! The handler performs no I/O itself. Fetches, notices, and viewport effects
//! all leave as [`Action`] values for the front-end to execute, which keeps
//! every transition deterministic and testable without a UI or network.
//!
//! # Staleness
//!
//! Every issued fetch carries a token naming the `(query, page)` it targets.
//! A completion is applied only while the session is still pending on exactly
//! that token; anything else is a stale response from a superseded search and
//! is discarded. In-flight fetches are never cancelled, only ignored.
//!
//! # Example
//!
//! ```
//! use pixquest::app::{handle_event, Action, Event, SearchSession};
//!
//! let mut session = SearchSession::new();
//! let (changed, actions) = handle_event(&mut session, &Event::SubmitQuery("cats".to_string()))?;
//! assert!(changed);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), pixquest::PixquestError>(())
//! ```

use crate::app::{Action, SearchSession, SearchStatus};
use crate::domain::error::Result;
use crate::fetch::{FetchOutcome, FetchRequest};
use crate::notify::Notice;

/// Events consumed by the session core.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user submitted the search form.
    ///
    /// Carries the raw input text; the handler trims it and decides whether a
    /// new search starts. Empty input warns and changes nothing, and a
    /// repeated identical query is a no-op.
    SubmitQuery(String),

    /// The user requested the next page of the active search.
    ///
    /// Ignored while a fetch is in flight or when pages are exhausted.
    LoadMore,

    /// A fetch task finished.
    ///
    /// Carries the token the fetch was issued with plus its outcome. Applied
    /// only while the session is still pending on exactly that token.
    FetchCompleted {
        /// Token the fetch was issued with.
        request: FetchRequest,
        /// The fetched page, or the failure message.
        outcome: FetchOutcome,
    },
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// This is the pure transition function at the heart of the application.
/// It pattern-matches on event types, applies session mutations, and collects
/// actions to be executed by the front-end.
///
/// # Parameters
///
/// * `session` - Mutable reference to the search session
/// * `event` - Event to process
///
/// # Returns
///
/// A `(changed, actions)` pair: whether the session changed (the front-end
/// re-renders when it did), and the actions to execute in sequence. The
/// action list may be empty when the event requires no side effects.
///
/// # Errors
///
/// All fetch failures are absorbed into session state rather than propagated,
/// so the returned `Result` is reserved for future transition failures; no
/// current event produces one.
pub fn handle_event(session: &mut SearchSession, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SubmitQuery(raw_query) => {
            let query = raw_query.trim();

            if query.is_empty() {
                tracing::debug!("rejecting empty search submission");
                return Ok((
                    false,
                    vec![Action::Notify(Notice::Warning(
                        "Search field is empty. Please, enter your request".to_string(),
                    ))],
                ));
            }

            if query == session.query {
                tracing::debug!(query = %query, "query unchanged, skipping refetch");
                return Ok((false, vec![]));
            }

            tracing::debug!(query = %query, "starting new search");

            session.query = query.to_string();
            session.page = 1;
            session.last_page = 0;
            session.images.clear();
            session.status = SearchStatus::Pending;

            Ok((true, vec![Action::Fetch(FetchRequest::new(query, 1))]))
        }
        Event::LoadMore => {
            if !session.can_load_more() {
                tracing::debug!(
                    page = session.page,
                    last_page = session.last_page,
                    status = ?session.status,
                    "load more unavailable"
                );
                return Ok((false, vec![]));
            }

            // A rejected fetch leaves `page` pointing at the page that
            // failed; only a resolved session advances to the next page.
            if session.status == SearchStatus::Resolved {
                session.page += 1;
            }
            session.status = SearchStatus::Pending;

            tracing::debug!(query = %session.query, page = session.page, "requesting next page");

            Ok((
                true,
                vec![Action::Fetch(FetchRequest::new(
                    session.query.clone(),
                    session.page,
                ))],
            ))
        }
        Event::FetchCompleted { request, outcome } => {
            let is_current =
                session.is_loading() && request.matches(&session.query, session.page);

            if !is_current {
                tracing::debug!(
                    request_query = %request.query,
                    request_page = request.page,
                    session_query = %session.query,
                    session_page = session.page,
                    session_status = ?session.status,
                    "discarding stale fetch response"
                );
                return Ok((false, vec![]));
            }

            match outcome {
                Err(message) => {
                    tracing::error!(
                        query = %session.query,
                        page = session.page,
                        error = %message,
                        "fetch failed"
                    );
                    session.status = SearchStatus::Rejected;
                    Ok((true, vec![]))
                }
                Ok(page) if request.page == 1 => {
                    if page.total_hits == 0 {
                        tracing::debug!(query = %session.query, "search matched nothing");
                        session.last_page = 1;
                        session.status = SearchStatus::Rejected;
                        return Ok((
                            true,
                            vec![Action::Notify(Notice::Failure(
                                "Sorry, there are no images matching your search request. \
                                 Please try another request."
                                    .to_string(),
                            ))],
                        ));
                    }

                    session.last_page = page.last_page();
                    session.images = page.hits.clone();
                    session.status = SearchStatus::Resolved;

                    tracing::debug!(
                        query = %session.query,
                        total_hits = page.total_hits,
                        last_page = session.last_page,
                        "search resolved"
                    );

                    Ok((
                        true,
                        vec![Action::Notify(Notice::Success(format!(
                            "Hurray! {} images found",
                            page.total_hits
                        )))],
                    ))
                }
                Ok(page) => {
                    session.images.extend(page.hits.iter().cloned());
                    session.status = SearchStatus::Resolved;

                    tracing::debug!(
                        query = %session.query,
                        page = session.page,
                        image_count = session.images.len(),
                        "page appended"
                    );

                    Ok((true, vec![Action::ScrollToNewResults]))
                }
            }
        }
    }
}
