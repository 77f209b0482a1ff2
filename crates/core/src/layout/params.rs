//! Grouping parameters.
//!
//! Contains the GroupingParams struct for controlling line and paragraph
//! grouping behavior.

use crate::error::{GrabError, Result};

/// Parameters for grouping detections into lines and paragraphs.
///
/// All thresholds are in pixels at whatever scale the image was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingParams {
    /// Maximum horizontal gap between the right edge of the last group
    /// and the left edge of a detection for them to share a line.
    pub x_threshold: f64,

    /// Maximum difference between the top edges of the last group and a
    /// detection for them to share a line.
    pub y_threshold: f64,

    /// Maximum difference in box height (a proxy for font size) for two
    /// fragments to share a line.
    pub font_threshold: f64,

    /// Maximum gap between a paragraph's bottom edge and a line's top
    /// edge for the line to continue that paragraph.
    pub para_y_threshold: f64,

    /// Maximum difference between left edges for a line to be considered
    /// aligned with a paragraph.
    pub para_x_threshold: f64,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            x_threshold: 50.0,
            y_threshold: 90.0,
            font_threshold: 10.0,
            para_y_threshold: 5.0,
            para_x_threshold: 47.0,
        }
    }
}

impl GroupingParams {
    /// Creates new grouping parameters with the specified thresholds.
    ///
    /// # Panics
    /// Panics if any threshold is negative or not finite.
    pub fn new(
        x_threshold: f64,
        y_threshold: f64,
        font_threshold: f64,
        para_y_threshold: f64,
        para_x_threshold: f64,
    ) -> Self {
        let params = Self {
            x_threshold,
            y_threshold,
            font_threshold,
            para_y_threshold,
            para_x_threshold,
        };
        assert!(
            params.validate().is_ok(),
            "grouping thresholds should be finite and non-negative"
        );
        params
    }

    /// Checks that every threshold is finite and non-negative.
    ///
    /// Callers holding user-supplied values (CLI flags) should use this
    /// instead of [`GroupingParams::new`] to get a recoverable error.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("x_threshold", self.x_threshold),
            ("y_threshold", self.y_threshold),
            ("font_threshold", self.font_threshold),
            ("para_y_threshold", self.para_y_threshold),
            ("para_x_threshold", self.para_x_threshold),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(GrabError::InvalidThreshold(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
