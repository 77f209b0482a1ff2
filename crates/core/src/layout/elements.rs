//! Element types for text grouping.
//!
//! Contains the struct definitions flowing through the pipeline:
//! - Detection: one recognized text fragment as emitted by the detector
//! - TextGroup: an owned accumulator of merged fragments (a line, then
//!   possibly a paragraph)

use crate::utils::{Point, Quad};

// ============================================================================
// Detection
// ============================================================================

/// One text fragment as returned by the detection engine.
///
/// Read-only input to the pipeline: grouping copies its quad and text
/// into accumulators and never mutates the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Region the text was recognized in, corners in winding order.
    pub quad: Quad,
    /// Recognized text.
    pub text: String,
    /// Detector confidence, passed through unused by grouping.
    pub confidence: f64,
}

impl Detection {
    pub fn new(quad: Quad, text: &str, confidence: f64) -> Self {
        Self {
            quad,
            text: text.to_string(),
            confidence,
        }
    }

    /// Sort key approximating reading order: top-left y first, then x.
    pub fn reading_order_key(&self) -> (f64, f64) {
        let (x, y) = self.quad.top_left();
        (y, x)
    }
}

// ============================================================================
// TextGroup
// ============================================================================

/// A group of merged text fragments with its bounding extent.
///
/// Starts from a single detection and grows only through [`TextGroup::absorb`].
/// Owns its quad and text outright so later re-merging (line groups into
/// paragraphs) never aliases detector storage.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGroup {
    quad: Quad,
    text: String,
}

impl TextGroup {
    /// Seeds a group from a single detection.
    pub fn from_detection(det: &Detection) -> Self {
        Self {
            quad: det.quad,
            text: det.text.clone(),
        }
    }

    /// Returns the current bounding quad.
    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    /// Returns the accumulated text, members joined by single spaces in
    /// merge order.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text as handed to the clipboard: lowercased.
    pub fn copy_text(&self) -> String {
        self.text.to_lowercase()
    }

    /// Merges another fragment into this group: the text is appended
    /// space-separated and the quad replaced by the union of extents.
    pub fn absorb(&mut self, quad: &Quad, text: &str) {
        self.text.push(' ');
        self.text.push_str(text);
        self.quad = self.quad.merge(quad);
    }

    /// Returns true if the point lies within the group extent, inclusive
    /// on all four edges.
    pub fn contains(&self, pt: Point) -> bool {
        self.quad.contains(pt)
    }
}
