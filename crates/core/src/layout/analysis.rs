//! Grouping and hit-testing algorithms.
//!
//! Contains the geometric post-processing that turns a flat list of
//! detected fragments into readable groups:
//! - Grouping detections into text lines (greedy, single pass)
//! - Grouping text lines into paragraphs (first matching paragraph wins)
//! - Resolving a clicked point to the group under it

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::utils::Point;

use super::elements::{Detection, TextGroup};
use super::params::GroupingParams;

// ============================================================================
// Line grouping
// ============================================================================

/// Groups detections into text lines.
///
/// Detections are sorted by (top-left y, top-left x) to approximate
/// reading order, then merged in a single greedy pass. Each detection is
/// compared only against the most recently formed group:
///
///   +--------+  x_dist  +--------+   -
///   |  last  |<-------->|  next  |   | y_dist between top edges
///   +--------+          |        |   -
///                       +--------+
///
/// A detection joins the last group iff the horizontal gap, the top-edge
/// offset, and the height difference (font-size proxy) are all under
/// their thresholds; otherwise it seeds a new group. The compare-to-last
/// policy keeps the pass O(n) after the sort and makes merge order
/// deterministic. Empty input yields an empty output.
pub fn group_lines(detections: Vec<Detection>, params: &GroupingParams) -> Vec<TextGroup> {
    let total = detections.len();
    let mut groups: Vec<TextGroup> = Vec::new();

    let ordered = detections.into_iter().sorted_by_key(|det| {
        let (y, x) = det.reading_order_key();
        (OrderedFloat(y), OrderedFloat(x))
    });

    for det in ordered {
        match groups.last_mut() {
            Some(last) if is_nearby(last, &det, params) => {
                last.absorb(&det.quad, &det.text);
            }
            _ => groups.push(TextGroup::from_detection(&det)),
        }
    }

    tracing::debug!(detections = total, lines = groups.len(), "grouped lines");
    groups
}

/// Line-merge predicate: is the detection close enough to the last group?
fn is_nearby(last: &TextGroup, det: &Detection, params: &GroupingParams) -> bool {
    let (_, last_y0, last_x1, _) = last.quad().bounds();
    let (det_x0, det_y0, _, _) = det.quad.bounds();

    let x_dist = (last_x1 - det_x0).abs();
    let y_dist = (last_y0 - det_y0).abs();
    let font_ok = (last.quad().height() - det.quad.height()).abs() < params.font_threshold;

    x_dist < params.x_threshold && y_dist < params.y_threshold && font_ok
}

// ============================================================================
// Paragraph grouping
// ============================================================================

/// Groups text lines into paragraphs.
///
/// Unlike line grouping this scans every existing paragraph, in the
/// order they were formed, because a continuation line may attach to any
/// earlier paragraph, not just the most recent one. The first paragraph
/// whose bottom edge is within `para_y_threshold` of the line's top edge
/// and whose left edge is within `para_x_threshold` of the line's left
/// edge absorbs it; first match wins, not best match. Lines matching no
/// paragraph start new ones. O(n²) in line groups, which stay in the
/// tens per image.
pub fn group_paragraphs(lines: Vec<TextGroup>, params: &GroupingParams) -> Vec<TextGroup> {
    let total = lines.len();
    let mut paragraphs: Vec<TextGroup> = Vec::new();

    for line in lines {
        match paragraphs
            .iter()
            .position(|p| is_nearby_paragraph(p, &line, params))
        {
            Some(idx) => paragraphs[idx].absorb(line.quad(), line.text()),
            None => paragraphs.push(line),
        }
    }

    tracing::debug!(lines = total, paragraphs = paragraphs.len(), "grouped paragraphs");
    paragraphs
}

/// Paragraph-merge predicate: tight vertical gap, loosely aligned left edges.
fn is_nearby_paragraph(paragraph: &TextGroup, line: &TextGroup, params: &GroupingParams) -> bool {
    let (p_x0, _, _, p_y1) = paragraph.quad().bounds();
    let (l_x0, l_y0, _, _) = line.quad().bounds();

    let y_dist = (p_y1 - l_y0).abs();
    let x_dist = (p_x0 - l_x0).abs();

    y_dist < params.para_y_threshold && x_dist < params.para_x_threshold
}

// ============================================================================
// Hit testing
// ============================================================================

/// Resolves a point to the first group containing it, in list order.
///
/// Bounds are inclusive on all four edges. No match is a normal outcome,
/// not an error.
pub fn hit_test(groups: &[TextGroup], pt: Point) -> Option<&TextGroup> {
    groups.iter().find(|group| group.contains(pt))
}
