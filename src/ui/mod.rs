//! User interface rendering layer.
//!
//! This module orchestrates the terminal-based UI, transforming view models
//! into ANSI-styled output. The gallery is line-oriented: renders append to
//! the scrollback rather than redrawing a fixed viewport.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! SearchSession → compute_viewmodel → GalleryView → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable gallery state
//! - [`renderer`]: Top-level rendering coordinator
//!
//! # Example
//!
//! ```
//! use pixquest::app::SearchSession;
//! use pixquest::ui::render;
//!
//! let session = SearchSession::new();
//! render(&session); // Renders to stdout
//! ```

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_new_results};
pub use viewmodel::{EmptyState, FooterInfo, GalleryView, HeaderInfo, ImageRow};
