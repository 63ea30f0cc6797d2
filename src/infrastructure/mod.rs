//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module keeps platform concerns out of the domain and application
//! layers. Currently that means one thing: resolving where the configuration
//! file and trace output live on each platform.

pub mod paths;

pub use paths::{config_file_path, ensure_parent_dir, trace_file_path};
