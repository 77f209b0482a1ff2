//! High-level grouping API.
//!
//! Provides the main public API for the pipeline:
//! - `group_detections`: detections -> line groups -> paragraph groups
//! - `extract_groups`: run a detector over a frame, then group

use crate::detect::{Detector, ImageFrame};
use crate::error::Result;
use crate::layout::{Detection, GroupingParams, TextGroup, group_lines, group_paragraphs};

/// Options for running the grouping pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOptions {
    /// Thresholds for line and paragraph grouping.
    pub params: GroupingParams,

    /// Whether to merge line groups into paragraphs. When false the
    /// pipeline stops after line grouping.
    pub paragraphs: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            params: GroupingParams::default(),
            paragraphs: true,
        }
    }
}

/// Runs the grouping pipeline over raw detections.
///
/// Never fails: empty input yields an empty output, a single detection
/// yields one unchanged group.
pub fn group_detections(detections: Vec<Detection>, options: &GroupOptions) -> Vec<TextGroup> {
    let lines = group_lines(detections, &options.params);
    if !options.paragraphs {
        return lines;
    }
    group_paragraphs(lines, &options.params)
}

/// Runs the detector over a frame, then groups its output.
///
/// Detection is an opaque blocking call; its errors (an invalid frame,
/// an engine failure) propagate before any grouping is attempted.
pub fn extract_groups<D: Detector>(
    detector: &D,
    frame: &ImageFrame,
    options: &GroupOptions,
) -> Result<Vec<TextGroup>> {
    let detections = detector.detect(frame)?;
    Ok(group_detections(detections, options))
}
