//! Fetch layer bridging the session core and the remote search API.
//!
//! This module owns everything about issuing fetches: the request tokens that
//! make stale-response detection possible, the client trait the core talks
//! through, and the Pixabay-backed production implementation.
//!
//! # Architecture
//!
//! - `messages`: Request tokens with trace context propagation
//! - `client`: The [`FetchClient`] trait seam
//! - `pixabay`: Production implementation over the Pixabay REST API

pub mod client;
pub mod messages;
pub mod pixabay;

pub use client::FetchClient;
pub use messages::{FetchOutcome, FetchRequest, TraceContext};
pub use pixabay::PixabayClient;
