//! Frame geometry tests
//!
//! Covers containment, equality, translation, intersection across all
//! overlap configurations, union, corner-pair construction, and the
//! two iteration orders.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)]

use sheetview::{Frame, Point, SheetError};
use test_case::test_case;

fn frame(ox: i64, oy: i64, cx: i64, cy: i64) -> Frame {
    Frame::new(Point::new(ox, oy), Point::new(cx, cy)).unwrap()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_invalid_geometry_fails_construction() {
    assert!(matches!(
        Frame::new(Point::new(5, 0), Point::new(2, 4)),
        Err(SheetError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        Frame::new(Point::new(0, 9), Point::new(4, 2)),
        Err(SheetError::InvalidGeometry { .. })
    ));
}

#[test]
fn test_of_size_is_zero_indexed() {
    let f = Frame::of_size(7, 4).unwrap();
    assert_eq!(f.origin(), Point::new(0, 0));
    assert_eq!(f.corner(), Point::new(6, 3));
    assert!(Frame::of_size(0, 5).is_err());
}

#[test]
fn test_empty_sentinel() {
    let empty = Frame::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.area(), 0);
    assert_eq!(empty.size(), Point::new(0, 0));
    assert_eq!(empty.dimensions(), 0);

    // Distinct from a one-point frame with the same origin/corner
    let one_point = frame(0, 0, 0, 0);
    assert_ne!(empty, one_point);
    assert_eq!(one_point.area(), 1);
    assert_eq!(one_point.dimensions(), 1);
}

// =============================================================================
// CONTAINMENT AND EQUALITY
// =============================================================================

#[test]
fn test_contains_point_inclusive_bounds() {
    let f = frame(1, 1, 4, 3);
    assert!(f.contains(Point::new(1, 1)));
    assert!(f.contains(Point::new(4, 3)));
    assert!(f.contains(Point::new(2, 2)));
    assert!(!f.contains(Point::new(0, 1)));
    assert!(!f.contains(Point::new(5, 3)));
    assert!(!Frame::empty().contains(Point::new(0, 0)));
}

#[test]
fn test_contains_frame_requires_both_corners() {
    let outer = frame(0, 0, 10, 10);
    assert!(outer.contains_frame(&frame(2, 2, 8, 8)));
    assert!(outer.contains_frame(&outer));
    assert!(!outer.contains_frame(&frame(2, 2, 11, 8)));
    assert!(!outer.contains_frame(&Frame::empty()));
}

#[test]
fn test_equality() {
    assert_eq!(frame(1, 2, 3, 4), frame(1, 2, 3, 4));
    assert_ne!(frame(1, 2, 3, 4), frame(1, 2, 3, 5));
    assert_eq!(Frame::empty(), Frame::empty());
    assert_ne!(Frame::empty(), frame(1, 2, 3, 4));
}

// =============================================================================
// TRANSLATION
// =============================================================================

#[test]
fn test_translated_is_pure() {
    let f = frame(1, 1, 3, 3);
    let shifted = f.translated(Point::new(2, -1));
    assert_eq!(f, frame(1, 1, 3, 3));
    assert_eq!(shifted, frame(3, 0, 5, 2));
}

#[test]
fn test_translate_mutates_in_place() {
    let mut f = frame(1, 1, 3, 3);
    f.translate(Point::new(-1, 4));
    assert_eq!(f, frame(0, 5, 2, 7));
}

#[test]
fn test_translate_leaves_empty_untouched() {
    assert!(Frame::empty().translated(Point::new(5, 5)).is_empty());
    let mut empty = Frame::empty();
    empty.translate(Point::new(5, 5));
    assert!(empty.is_empty());
}

// =============================================================================
// INTERSECTION
// =============================================================================

#[test]
fn test_intersection_disjoint_is_empty() {
    /* AAAAAA
     * AAAAAA
     *       BBBBBB
     *       BBBBBB
     */
    let a = frame(0, 0, 5, 5);
    let b = frame(6, 6, 11, 11);
    assert!(a.intersection(&b).is_empty());
    assert!(b.intersection(&a).is_empty());
}

#[test]
fn test_intersection_of_far_apart_frames_is_cheap() {
    // Small data-absolute frames on a huge grid: the empty result must
    // come from the corner checks, never from a lattice scan
    let a = frame(0, 0, 2, 2);
    let b = frame(1_000_000_000, 1_000_000_000, 1_000_000_002, 1_000_000_002);
    assert!(a.intersection(&b).is_empty());
    assert!(b.intersection(&a).is_empty());

    // Disjoint on one axis only
    let c = frame(0, 1_000_000_000, 2, 1_000_000_002);
    assert!(a.intersection(&c).is_empty());
    assert!(c.intersection(&a).is_empty());
}

#[test]
fn test_intersection_of_equal_frames() {
    let a = frame(0, 0, 5, 5);
    let b = frame(0, 0, 5, 5);
    let result = a.intersection(&b);
    assert_eq!(result, a);
    assert!(!result.is_empty());
}

#[test]
fn test_intersection_nested() {
    /* AAAAA
     * ABBBA
     * ABBBA
     * AAAAA
     */
    let a = frame(0, 0, 4, 4);
    let b = frame(1, 1, 3, 3);
    assert_eq!(a.intersection(&b), b);
    assert_eq!(b.intersection(&a), b);
}

#[test]
fn test_intersection_band_overlap() {
    /* AAAAAA
     * AABBBBBB
     * AABBBBBB
     *   BBBBBB
     */
    let a = frame(0, 0, 5, 5);
    let b = frame(2, 2, 8, 8);
    let expected = frame(2, 2, 5, 5);
    assert_eq!(a.intersection(&b), expected);
    assert_eq!(b.intersection(&a), expected);
}

#[test_case(frame(0, 2, 5, 5), frame(3, 0, 8, 3), frame(3, 2, 5, 3); "top right overlap")]
#[test_case(frame(2, 2, 6, 6), frame(0, 0, 4, 3), frame(2, 2, 4, 3); "top left overlap")]
#[test_case(frame(0, 0, 5, 4), frame(3, 3, 9, 8), frame(3, 3, 5, 4); "bottom right overlap")]
#[test_case(frame(3, 0, 8, 4), frame(0, 3, 5, 9), frame(3, 3, 5, 4); "bottom left overlap")]
fn test_intersection_corner_overlaps(a: Frame, b: Frame, expected: Frame) {
    assert_eq!(a.intersection(&b), expected);
    assert_eq!(b.intersection(&a), expected);
}

#[test]
fn test_intersection_with_empty_operand() {
    let a = frame(0, 0, 5, 5);
    assert!(a.intersection(&Frame::empty()).is_empty());
    assert!(Frame::empty().intersection(&a).is_empty());
}

#[test_case(frame(0, 0, 5, 5); "square")]
#[test_case(frame(2, 3, 2, 3); "single point")]
#[test_case(frame(-4, -2, 10, 1); "negative origin")]
fn test_self_intersection_and_union_are_identity(a: Frame) {
    assert_eq!(a.intersection(&a), a);
    assert_eq!(a.union(&a), a);
}

// =============================================================================
// UNION
// =============================================================================

#[test]
fn test_union_spans_both() {
    let a = frame(0, 0, 2, 2);
    let b = frame(5, 6, 8, 9);
    let result = a.union(&b);
    assert_eq!(result, frame(0, 0, 8, 9));
}

#[test]
fn test_union_with_empty_operand() {
    let a = frame(1, 1, 4, 4);
    assert_eq!(a.union(&Frame::empty()), a);
    assert_eq!(Frame::empty().union(&a), a);
}

#[test]
fn test_containment_implies_union_and_intersection_identities() {
    let a = frame(0, 0, 9, 9);
    let b = frame(3, 4, 6, 7);
    assert!(a.contains_frame(&b));
    assert_eq!(a.union(&b), a);
    assert_eq!(a.intersection(&b), b);
}

// =============================================================================
// FROM POINT TO POINT
// =============================================================================

#[test_case(Point::new(0, 0), Point::new(4, 3); "a above left of b")]
#[test_case(Point::new(4, 3), Point::new(0, 0); "a below right of b")]
#[test_case(Point::new(4, 0), Point::new(0, 3); "a above right of b")]
#[test_case(Point::new(0, 3), Point::new(4, 0); "a below left of b")]
fn test_from_point_to_point_resolves_all_orientations(a: Point, b: Point) {
    let result = Frame::from_point_to_point(a, b);
    assert_eq!(result, frame(0, 0, 4, 3));
    // Order of the defining corners does not matter
    assert_eq!(result, Frame::from_point_to_point(b, a));
}

#[test]
fn test_from_point_to_point_collapses_to_single_point() {
    let p = Point::new(2, 5);
    let result = Frame::from_point_to_point(p, p);
    assert_eq!(result, frame(2, 5, 2, 5));
    assert!(!result.is_empty());
    assert_eq!(result.dimensions(), 1);
}

// =============================================================================
// ITERATION
// =============================================================================

#[test]
fn test_points_are_x_major() {
    let f = frame(0, 0, 1, 2);
    let points: Vec<Point> = f.points().collect();
    assert_eq!(
        points,
        vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 2),
        ]
    );
    assert_eq!(points.len() as i64, f.area());
}

#[test]
fn test_point_rows_are_y_major() {
    let f = frame(1, 5, 3, 6);
    let rows: Vec<(i64, Vec<Point>)> = f.point_rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, 5);
    assert_eq!(
        rows[0].1,
        vec![Point::new(1, 5), Point::new(2, 5), Point::new(3, 5)]
    );
    assert_eq!(rows[1].0, 6);
    assert_eq!(
        rows[1].1,
        vec![Point::new(1, 6), Point::new(2, 6), Point::new(3, 6)]
    );
}

#[test]
fn test_for_each_point_row_matches_iterator() {
    let f = frame(0, 0, 2, 1);
    let mut seen = Vec::new();
    f.for_each_point_row(|row, y| seen.push((y, row.to_vec())));
    let expected: Vec<(i64, Vec<Point>)> = f.point_rows().collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_map_points_accumulates_in_order() {
    let f = frame(0, 0, 1, 1);
    let keys = f.map_points(|p| format!("{},{}", p.x, p.y));
    assert_eq!(keys, vec!["0,0", "0,1", "1,0", "1,1"]);
}

// =============================================================================
// DERIVED ACCESSORS
// =============================================================================

#[test]
fn test_edges_and_corners() {
    let f = frame(1, 2, 7, 9);
    assert_eq!(f.left(), 1);
    assert_eq!(f.right(), 7);
    assert_eq!(f.top(), 2);
    assert_eq!(f.bottom(), 9);
    assert_eq!(f.top_left(), Point::new(1, 2));
    assert_eq!(f.top_right(), Point::new(7, 2));
    assert_eq!(f.bottom_left(), Point::new(1, 9));
    assert_eq!(f.bottom_right(), Point::new(7, 9));
}

#[test]
fn test_size_dimensions_area() {
    let f = frame(0, 0, 2, 3);
    assert_eq!(f.size(), Point::new(2, 3));
    assert_eq!(f.dimensions(), 2);
    assert_eq!(f.area(), 12);
}

#[test]
fn test_display_forms() {
    assert_eq!(frame(1, 2, 3, 4).to_string(), "Frame((1, 2), (3, 4))");
    assert_eq!(Frame::empty().to_string(), "Frame(empty)");
}
