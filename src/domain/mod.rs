//! Domain layer for pixquest.
//!
//! This module contains the core domain types for the search session,
//! independent of HTTP, terminal, or infrastructure concerns. It follows
//! domain-driven design principles by keeping the result model and error
//! taxonomy isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image records, result pages, and page arithmetic
//!
//! # Examples
//!
//! ```
//! use pixquest::domain::{ResultPage, PAGE_SIZE};
//!
//! let page = ResultPage { total_hits: 30, hits: vec![] };
//! assert_eq!(PAGE_SIZE, 12);
//! assert_eq!(page.last_page(), 3);
//! ```

pub mod error;
pub mod image;

pub use error::{PixquestError, Result};
pub use image::{Image, ResultPage, PAGE_SIZE};
