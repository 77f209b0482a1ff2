//! Tests for the grouping pipeline: line grouping, paragraph grouping,
//! hit testing, and the grouping parameters.

use textgrab_core::GrabError;
use textgrab_core::layout::{
    Detection, GroupingParams, TextGroup, group_lines, group_paragraphs, hit_test,
};
use textgrab_core::utils::{Quad, Rect};

fn det(rect: Rect, text: &str) -> Detection {
    Detection::new(Quad::from_rect(rect), text, 0.9)
}

fn group(rect: Rect, text: &str) -> TextGroup {
    TextGroup::from_detection(&det(rect, text))
}

// ============================================================================
// Line grouping
// ============================================================================

#[test]
fn test_adjacent_words_merge_into_one_line() {
    let dets = vec![det((0.0, 0.0, 40.0, 20.0), "cafe"), det((45.0, 0.0, 80.0, 20.0), "latte")];

    let lines = group_lines(dets, &GroupingParams::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "cafe latte");
    assert_eq!(lines[0].quad().bounds(), (0.0, 0.0, 80.0, 20.0));
}

#[test]
fn test_line_keeps_absorbing_along_the_row() {
    let dets = vec![
        det((0.0, 0.0, 40.0, 20.0), "cafe"),
        det((45.0, 0.0, 80.0, 20.0), "latte"),
        det((85.0, 1.0, 130.0, 21.0), "mocha"),
    ];

    let lines = group_lines(dets, &GroupingParams::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "cafe latte mocha");
}

#[test]
fn test_large_vertical_gap_prevents_line_merge() {
    // Horizontally these line up, but 200px of vertical distance means
    // they belong to different lines no matter what.
    let dets = vec![det((0.0, 0.0, 40.0, 20.0), "top"), det((0.0, 200.0, 40.0, 220.0), "bottom")];

    let lines = group_lines(dets, &GroupingParams::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "top");
    assert_eq!(lines[1].text(), "bottom");
}

#[test]
fn test_font_height_difference_prevents_line_merge() {
    // Heights 20 vs 30: at the default font threshold of 10 the
    // comparison is strict, so a difference of exactly 10 already splits.
    let dets = vec![det((0.0, 0.0, 40.0, 20.0), "body"), det((45.0, 0.0, 80.0, 30.0), "headline")];

    let lines = group_lines(dets, &GroupingParams::default());

    assert_eq!(lines.len(), 2);
}

#[test]
fn test_horizontal_gap_at_threshold_prevents_line_merge() {
    // Gap of exactly x_threshold (50) must not merge.
    let dets = vec![det((0.0, 0.0, 40.0, 20.0), "left"), det((90.0, 0.0, 130.0, 20.0), "right")];

    let lines = group_lines(dets, &GroupingParams::default());

    assert_eq!(lines.len(), 2);
}

#[test]
fn test_detections_are_sorted_into_reading_order() {
    let dets = vec![
        det((0.0, 100.0, 40.0, 120.0), "second"),
        det((0.0, 0.0, 40.0, 20.0), "first"),
    ];

    let lines = group_lines(dets, &GroupingParams::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "first");
    assert_eq!(lines[1].text(), "second");
}

#[test]
fn test_merge_test_only_considers_most_recent_group() {
    let dets = vec![
        det((0.0, 0.0, 40.0, 20.0), "one"),
        det((45.0, 1.0, 80.0, 21.0), "two"),
        det((300.0, 1.5, 340.0, 21.5), "far"),
        det((85.0, 2.0, 120.0, 22.0), "four"),
    ];

    let lines = group_lines(dets, &GroupingParams::default());

    // "four" sits right next to the first group, but by the time it is
    // processed the most recent group is "far", so it starts a new one.
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text(), "one two");
    assert_eq!(lines[1].text(), "far");
    assert_eq!(lines[2].text(), "four");
}

#[test]
fn test_empty_detections_yield_no_lines() {
    let lines = group_lines(Vec::new(), &GroupingParams::default());
    assert!(lines.is_empty());
}

#[test]
fn test_single_detection_passes_through_unchanged() {
    let lines = group_lines(
        vec![det((5.0, 5.0, 50.0, 25.0), "Solo")],
        &GroupingParams::default(),
    );

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "Solo");
    assert_eq!(lines[0].quad().bounds(), (5.0, 5.0, 50.0, 25.0));
}

// ============================================================================
// Paragraph grouping
// ============================================================================

#[test]
fn test_aligned_lines_merge_into_paragraph() {
    let lines = vec![
        group((10.0, 0.0, 100.0, 20.0), "first line"),
        group((12.0, 23.0, 90.0, 40.0), "second line"),
    ];

    let paragraphs = group_paragraphs(lines, &GroupingParams::default());

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text(), "first line second line");
    assert_eq!(paragraphs[0].quad().bounds(), (10.0, 0.0, 100.0, 40.0));
}

#[test]
fn test_paragraph_keeps_absorbing_aligned_lines_beneath_it() {
    let lines = vec![
        group((10.0, 0.0, 100.0, 20.0), "a"),
        group((11.0, 22.0, 95.0, 40.0), "b"),
        group((12.0, 43.0, 90.0, 60.0), "c"),
    ];

    let paragraphs = group_paragraphs(lines, &GroupingParams::default());

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text(), "a b c");
}

#[test]
fn test_vertical_gap_prevents_paragraph_merge() {
    // Gap of 6px between bottom and top edges exceeds the default 5.
    let lines = vec![
        group((10.0, 0.0, 100.0, 20.0), "first"),
        group((12.0, 26.0, 90.0, 40.0), "second"),
    ];

    let paragraphs = group_paragraphs(lines, &GroupingParams::default());

    assert_eq!(paragraphs.len(), 2);
}

#[test]
fn test_misaligned_left_edges_prevent_paragraph_merge() {
    let lines = vec![
        group((10.0, 0.0, 100.0, 20.0), "first"),
        group((60.0, 22.0, 150.0, 40.0), "indented"),
    ];

    let paragraphs = group_paragraphs(lines, &GroupingParams::default());

    assert_eq!(paragraphs.len(), 2);
}

#[test]
fn test_first_matching_paragraph_wins_over_later_candidates() {
    // Both seeds qualify for the third line; the earlier one absorbs it.
    let lines = vec![
        group((10.0, 0.0, 60.0, 20.0), "alpha"),
        group((40.0, 0.0, 90.0, 20.0), "beta"),
        group((12.0, 22.0, 60.0, 40.0), "gamma"),
    ];

    let paragraphs = group_paragraphs(lines, &GroupingParams::default());

    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].text(), "alpha gamma");
    assert_eq!(paragraphs[1].text(), "beta");
}

#[test]
fn test_empty_line_list_yields_no_paragraphs() {
    let paragraphs = group_paragraphs(Vec::new(), &GroupingParams::default());
    assert!(paragraphs.is_empty());
}

#[test]
fn test_single_line_passes_through_unchanged() {
    let line = group((10.0, 0.0, 100.0, 20.0), "only");
    let paragraphs = group_paragraphs(vec![line.clone()], &GroupingParams::default());
    assert_eq!(paragraphs, vec![line]);
}

// ============================================================================
// Pipeline properties
// ============================================================================

fn sample_page() -> Vec<Detection> {
    vec![
        det((0.0, 0.0, 40.0, 20.0), "cafe"),
        det((45.0, 0.0, 80.0, 20.0), "latte"),
        det((2.0, 22.0, 60.0, 42.0), "two euro"),
        det((0.0, 200.0, 90.0, 230.0), "closed on sunday"),
        det((400.0, 0.0, 460.0, 20.0), "menu"),
    ]
}

#[test]
fn test_every_input_word_lands_in_exactly_one_group() {
    let mut input_words: Vec<String> = sample_page()
        .iter()
        .flat_map(|d| d.text.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();

    let lines = group_lines(sample_page(), &GroupingParams::default());
    let paragraphs = group_paragraphs(lines, &GroupingParams::default());

    let mut output_words: Vec<String> = paragraphs
        .iter()
        .flat_map(|g| g.text().split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();

    input_words.sort();
    output_words.sort();
    assert_eq!(input_words, output_words);
}

#[test]
fn test_pipeline_is_deterministic() {
    let params = GroupingParams::default();

    let first = group_paragraphs(group_lines(sample_page(), &params), &params);
    let second = group_paragraphs(group_lines(sample_page(), &params), &params);

    assert_eq!(first, second);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_inside_box_returns_that_group() {
    let groups = vec![
        group((10.0, 10.0, 50.0, 30.0), "Hello World"),
        group((100.0, 100.0, 200.0, 150.0), "elsewhere"),
    ];

    let hit = hit_test(&groups, (20.0, 20.0)).expect("point lies inside the first group");
    assert_eq!(hit.text(), "Hello World");
    assert_eq!(hit.copy_text(), "hello world");
}

#[test]
fn test_hit_outside_every_box_returns_none() {
    let groups = vec![group((10.0, 10.0, 50.0, 30.0), "text")];
    assert!(hit_test(&groups, (75.0, 50.0)).is_none());
    assert!(hit_test(&groups, (10.0, 30.001)).is_none());
}

#[test]
fn test_hit_on_edge_counts_as_inside() {
    let groups = vec![group((10.0, 10.0, 50.0, 30.0), "edge")];
    assert!(hit_test(&groups, (50.0, 30.0)).is_some());
    assert!(hit_test(&groups, (10.0, 10.0)).is_some());
}

#[test]
fn test_overlapping_groups_resolve_to_first_in_list_order() {
    let groups = vec![
        group((0.0, 0.0, 50.0, 50.0), "first"),
        group((25.0, 25.0, 75.0, 75.0), "second"),
    ];

    let hit = hit_test(&groups, (30.0, 30.0)).expect("point lies inside both groups");
    assert_eq!(hit.text(), "first");
}

#[test]
fn test_hit_test_on_empty_groups() {
    assert!(hit_test(&[], (0.0, 0.0)).is_none());
}

#[test]
fn test_copy_text_lowercases() {
    let g = group((0.0, 0.0, 10.0, 10.0), "MiXeD Case TEXT");
    assert_eq!(g.copy_text(), "mixed case text");
    // the stored text is untouched
    assert_eq!(g.text(), "MiXeD Case TEXT");
}

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_default_thresholds() {
    let params = GroupingParams::default();
    assert_eq!(params.x_threshold, 50.0);
    assert_eq!(params.y_threshold, 90.0);
    assert_eq!(params.font_threshold, 10.0);
    assert_eq!(params.para_y_threshold, 5.0);
    assert_eq!(params.para_x_threshold, 47.0);
}

#[test]
fn test_validate_rejects_negative_threshold() {
    let params = GroupingParams {
        x_threshold: -1.0,
        ..GroupingParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(GrabError::InvalidThreshold(_))
    ));
}

#[test]
fn test_validate_rejects_non_finite_threshold() {
    let params = GroupingParams {
        para_y_threshold: f64::NAN,
        ..GroupingParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(GrabError::InvalidThreshold(_))
    ));
}

#[test]
#[should_panic]
fn test_new_panics_on_invalid_threshold() {
    GroupingParams::new(50.0, -90.0, 10.0, 5.0, 47.0);
}
