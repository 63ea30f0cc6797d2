//! The fetch client seam.
//!
//! This module defines the [`FetchClient`] trait, the only interface the
//! session core uses to reach the remote search API. Production code plugs in
//! the Pixabay-backed implementation, tests substitute scripted in-memory
//! doubles, and the core stays unaware of either.

use crate::domain::{Result, ResultPage};
use async_trait::async_trait;

/// Asynchronous client for the paginated image search API.
///
/// Implementations fetch one page of results for a query. The page size is
/// fixed at [`PAGE_SIZE`](crate::domain::PAGE_SIZE); callers select only the
/// page number. Transport and protocol failures surface as errors, while a
/// query with zero matches is a successful response with `total_hits == 0`.
#[async_trait]
pub trait FetchClient: Send + Sync {
    /// Fetches one page of results for `query`.
    ///
    /// `page` is 1-based. Implementations must preserve the API's result
    /// order within the returned page.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, non-success HTTP status codes,
    /// or malformed response bodies.
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage>;
}
