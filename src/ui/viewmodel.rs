//! View model types representing renderable gallery state.
//!
//! This module defines immutable view models computed from session state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like row numbering and footer
//! hints.
//!
//! # Architecture
//!
//! View models are created via `SearchSession::compute_viewmodel()` and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data.
//!
//! # Example
//!
//! ```
//! use pixquest::ui::viewmodel::{FooterInfo, GalleryView, HeaderInfo};
//!
//! let vm = GalleryView {
//!     display_items: vec![],
//!     header: HeaderInfo {
//!         query: "cats".to_string(),
//!         page: 1,
//!         last_page: 3,
//!         image_count: 12,
//!     },
//!     footer: FooterInfo {
//!         hint: ":more loads the next page".to_string(),
//!     },
//!     empty_state: None,
//! };
//! assert_eq!(vm.header.query, "cats");
//! ```

/// Complete gallery view model for rendering.
///
/// Contains all display information needed to render one frame of the
/// terminal UI. The view model is computed from `SearchSession` and includes
/// pre-processed image rows, pagination position, and an optional empty
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    /// List of image rows to display in the gallery table.
    pub display_items: Vec<ImageRow>,

    /// Header information (query and pagination position).
    pub header: HeaderInfo,

    /// Footer information (input hints).
    pub footer: FooterInfo,

    /// Optional empty state message (when no images are available).
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single image result.
///
/// Represents one row in the gallery view. Rows carry a stable 1-based
/// position so appended pages continue the numbering of earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRow {
    /// 1-based position within the accumulated result list.
    pub index: usize,

    /// Pixabay image identifier.
    pub id: u64,

    /// Comma-separated tag list describing the image.
    pub tags: String,

    /// Name of the user who uploaded the image.
    pub user: String,

    /// Number of likes the image has received.
    pub likes: u32,

    /// Pixabay page URL for viewing the image in a browser.
    pub page_url: String,
}

/// Header display information.
///
/// Contains the active query and pagination position for the top of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// The active search query, empty before the first search.
    pub query: String,

    /// Highest page requested so far.
    pub page: u32,

    /// Total number of pages the search spans.
    pub last_page: u32,

    /// Number of images accumulated across all fetched pages.
    pub image_count: usize,
}

/// Footer display information.
///
/// Contains the input hint line for the bottom of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Input hint text (e.g., ":more loads the next page, :quit exits.").
    pub hint: String,
}

/// Empty state message display information.
///
/// Shown when no images are available (before the first search, while it is
/// in flight, or after it came back empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No search yet").
    pub message: String,

    /// Secondary explanatory text (e.g., "Type a search term and press Enter.").
    pub subtitle: String,
}
