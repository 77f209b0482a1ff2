//! High-level API module for text grouping.
//!
//! This module provides the main public API for running the grouping
//! pipeline over detector output.
//!
//! # Example
//!
//! ```ignore
//! use textgrab_core::api::{GroupOptions, group_detections};
//!
//! let groups = group_detections(detections, &GroupOptions::default());
//! ```

pub mod high_level;

// Re-export for convenience
pub use high_level::{GroupOptions, extract_groups, group_detections};
