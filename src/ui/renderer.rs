//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and line-oriented output. The gallery scrolls like a
//! log: each render appends below the previous one rather than redrawing a
//! fixed viewport.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `SearchSession` into [`GalleryView`]
//! 2. **Line Rendering**: Print header, image rows, and footer hint
//!
//! # Example
//!
//! ```
//! use pixquest::app::SearchSession;
//! use pixquest::ui::render;
//!
//! let session = SearchSession::new();
//! render(&session); // Prints the empty state to stdout
//! ```

use crate::app::SearchSession;
use crate::ui::viewmodel::{EmptyState, GalleryView, ImageRow};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Renders the full gallery to stdout.
///
/// Computes the view model from session state and prints the header, every
/// accumulated image row, and the footer hint. Falls back to a centered
/// empty-state message when there are no images to show.
///
/// # Parameters
///
/// * `session` - Current search session
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `println!`. Does not clear the
/// screen or manage cursor position.
pub fn render(session: &SearchSession) {
    let viewmodel = session.compute_viewmodel();

    render_viewmodel(&viewmodel);
}

/// Renders only the rows appended by the latest page, then the footer.
///
/// Used after a load-more completes so the terminal scrolls straight to the
/// new results instead of repeating rows the user has already seen.
///
/// # Parameters
///
/// * `session` - Current search session
/// * `first_new` - 1-based index of the first freshly appended row
pub fn render_new_results(session: &SearchSession, first_new: usize) {
    let viewmodel = session.compute_viewmodel();

    println!();
    for row in viewmodel
        .display_items
        .iter()
        .filter(|row| row.index >= first_new)
    {
        render_row(row);
    }
    println!("{DIM}{}{RESET}", viewmodel.footer.hint);
}

/// Renders a view model with mode-specific layout.
///
/// Chooses rendering strategy based on view model state:
/// - Empty state: Message and subtitle
/// - Gallery: Header, image rows, footer
fn render_viewmodel(vm: &GalleryView) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty);
        return;
    }

    println!();
    println!(
        "{BOLD}{}{RESET} {DIM}page {} of {}, {} images{RESET}",
        vm.header.query, vm.header.page, vm.header.last_page, vm.header.image_count
    );
    println!();
    for row in &vm.display_items {
        render_row(row);
    }
    println!("{DIM}{}{RESET}", vm.footer.hint);
}

fn render_row(row: &ImageRow) {
    println!(
        "{DIM}{:>4}.{RESET} {CYAN}#{}{RESET} {} {DIM}by {}, {} likes{RESET}",
        row.index, row.id, row.tags, row.user, row.likes
    );
    println!("      {DIM}{}{RESET}", row.page_url);
}

fn render_empty_state(empty: &EmptyState) {
    println!();
    println!("{BOLD}{}{RESET}", empty.message);
    println!("{DIM}{}{RESET}", empty.subtitle);
}
