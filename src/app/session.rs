//! Search session state and view model computation.
//!
//! This module defines [`SearchSession`], the sole stateful entity of the
//! application, along with the derived UI signals and gallery view model
//! computation. It is the single source of truth the front-end renders from.
//!
//! # State Components
//!
//! - **Query**: The active search term (empty until the first submission)
//! - **Page / Last Page**: Pagination cursor and the known page total
//! - **Status**: Where the session sits in the `Idle -> Pending ->
//!   {Resolved, Rejected}` machine
//! - **Images**: Every hit fetched for the active query, in API return order
//!
//! # Derived Signals
//!
//! The UI never stores display booleans; it derives them on demand from the
//! session via [`SearchSession::is_loading`] and
//! [`SearchSession::can_load_more`], so display state cannot drift from
//! session state.
//!
//! # Example
//!
//! ```
//! use pixquest::app::SearchSession;
//!
//! let session = SearchSession::new();
//! assert!(session.query.is_empty());
//! assert!(!session.is_loading());
//! assert!(!session.can_load_more());
//! ```

use crate::domain::Image;
use crate::ui::viewmodel::{EmptyState, FooterInfo, GalleryView, HeaderInfo, ImageRow};

/// Lifecycle status of the active search.
///
/// Transitions follow `Idle -> Pending -> {Resolved, Rejected}`; a new
/// submission or a valid load-more re-enters `Pending` from either terminal
/// state. There is no explicit "done" state: exhaustion of pages is the
/// condition `page == last_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has been submitted yet. Initial state only.
    Idle,

    /// A fetch is in flight for the session's current `(query, page)`.
    Pending,

    /// The most recent fetch resolved and its results were applied.
    Resolved,

    /// The most recent fetch failed, or the query matched zero results.
    Rejected,
}

/// The state of one search expedition.
///
/// Created fresh when a new query is submitted, mutated in place by
/// pagination, and replaced wholesale by the next distinct submission. The
/// session is exclusively owned and mutated by the event handler; everything
/// else reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    /// The active search term. Empty string means no active search.
    pub query: String,

    /// Highest page fetched (or being fetched) for the active query.
    ///
    /// Meaningful only when `query` is non-empty; never exceeds `last_page`
    /// once the page total is known.
    pub page: u32,

    /// Total number of pages available for the active query.
    ///
    /// Zero means unknown (no fetch for this query has resolved yet). A query
    /// that matched nothing still counts as one page.
    pub last_page: u32,

    /// Current lifecycle status.
    pub status: SearchStatus,

    /// Every hit fetched for the active query, in API return order.
    ///
    /// Replaced on a new query, appended to on pagination. Order defines the
    /// gallery order.
    pub images: Vec<Image>,
}

impl SearchSession {
    /// Creates an idle session with no active search.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 0,
            last_page: 0,
            status: SearchStatus::Idle,
            images: vec![],
        }
    }

    /// Reports whether a fetch is currently in flight.
    ///
    /// The UI shows a loader while this holds.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Pending
    }

    /// Reports whether requesting another page is currently allowed.
    ///
    /// Holds when no fetch is in flight and the session has not reached the
    /// known page total. Also covers the idle session (`page == last_page ==
    /// 0`) and the zero-result session (`page == last_page == 1`) without
    /// special cases.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.status != SearchStatus::Pending && self.page != self.last_page
    }

    /// Computes the gallery view model for rendering.
    ///
    /// Transforms the session into display-ready data: one row per image, a
    /// header with the pagination position, a footer hint matching the
    /// session's derived signals, and an empty-state message when there is
    /// nothing to show.
    #[must_use]
    pub fn compute_viewmodel(&self) -> GalleryView {
        let empty_state = if self.images.is_empty() {
            let (message, subtitle) = match self.status {
                SearchStatus::Idle => ("No search yet", "Type a search term and press Enter."),
                SearchStatus::Pending => ("Searching...", "Results will appear shortly."),
                SearchStatus::Resolved | SearchStatus::Rejected => {
                    ("Nothing to show", "Try another search request.")
                }
            };
            Some(EmptyState {
                message: message.to_string(),
                subtitle: subtitle.to_string(),
            })
        } else {
            None
        };

        let display_items = self
            .images
            .iter()
            .enumerate()
            .map(|(i, image)| ImageRow {
                index: i + 1,
                id: image.id,
                tags: image.tags.clone(),
                user: image.user.clone(),
                likes: image.likes,
                page_url: image.page_url.clone(),
            })
            .collect();

        let hint = if self.is_loading() {
            "Loading...".to_string()
        } else if self.status == SearchStatus::Rejected && self.can_load_more() {
            "Fetch failed. :more retries, :quit exits.".to_string()
        } else if self.can_load_more() {
            format!(
                "Page {} of {}. :more loads the next page, :quit exits.",
                self.page, self.last_page
            )
        } else if self.query.is_empty() {
            "Enter a search term, or :quit to exit.".to_string()
        } else {
            "End of results. Enter a new search term, or :quit to exit.".to_string()
        };

        GalleryView {
            display_items,
            header: HeaderInfo {
                query: self.query.clone(),
                page: self.page,
                last_page: self.last_page,
                image_count: self.images.len(),
            },
            footer: FooterInfo { hint },
            empty_state,
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
