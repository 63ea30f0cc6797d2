//! Application layer coordinating session state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (main.rs) and the domain/fetch layers. It implements the
//! event-driven architecture that powers the search loop.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Session Mutations → Actions → Side Effects
//!                           ↑                                    ↓
//!                           └──────── Fetch Completions ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`session`]: Search session state container and view model computation
//!
//! # Example
//!
//! ```
//! use pixquest::app::{handle_event, Event, SearchSession};
//!
//! let mut session = SearchSession::new();
//! let (changed, actions) = handle_event(&mut session, &Event::LoadMore)?;
//! assert!(!changed);
//! assert!(actions.is_empty());
//! # Ok::<(), pixquest::PixquestError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod session;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use session::{SearchSession, SearchStatus};
