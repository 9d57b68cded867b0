//! Tests for Rect operations.

use chart_common::Rect;

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_rect_new() {
    let rect = Rect::new(10, 20, 110, 220);
    assert_eq!(rect.left, 10);
    assert_eq!(rect.top, 20);
    assert_eq!(rect.right, 110);
    assert_eq!(rect.bottom, 220);
}

#[test]
fn test_rect_copy_semantics() {
    let a = Rect::new(0, 0, 10, 10);
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn test_rect_from_dimensions() {
    let rect = Rect::from_dimensions(1024, 400);
    assert_eq!(rect.width(), 1024);
    assert_eq!(rect.height(), 400);
    assert_eq!(rect.left, 0);
    assert_eq!(rect.top, 0);
}

// ============================================================================
// Dimension tests
// ============================================================================

#[test]
fn test_rect_width_height() {
    let rect = Rect::new(300, 100, 600, 400);
    assert_eq!(rect.width(), 300);
    assert_eq!(rect.height(), 300);
}

#[test]
fn test_rect_zero_dimensions() {
    let rect = Rect::new(5, 5, 5, 5);
    assert_eq!(rect.width(), 0);
    assert_eq!(rect.height(), 0);
}

#[test]
fn test_rect_inverted_does_not_panic() {
    // Inverted rect (left > right) - constructor doesn't validate
    let rect = Rect::new(10, 10, 0, 0);
    assert_eq!(rect.width(), -10);
    assert_eq!(rect.height(), -10);
}

// ============================================================================
// Containment tests
// ============================================================================

#[test]
fn test_rect_contains_inside_and_edges() {
    let rect = Rect::new(0, 0, 10, 10);
    assert!(rect.contains(5, 5));
    assert!(rect.contains(0, 5));
    assert!(rect.contains(10, 5));
    assert!(rect.contains(0, 0));
    assert!(rect.contains(10, 10));
}

#[test]
fn test_rect_contains_outside() {
    let rect = Rect::new(0, 0, 10, 10);
    assert!(!rect.contains(-1, 5));
    assert!(!rect.contains(11, 5));
    assert!(!rect.contains(5, -1));
    assert!(!rect.contains(5, 11));
}

// ============================================================================
// Center tests
// ============================================================================

#[test]
fn test_rect_center_truncates() {
    // Odd dimensions truncate toward the top-left, matching integer cell math
    let rect = Rect::new(0, 0, 5, 5);
    assert_eq!(rect.center_x(), 2);
    assert_eq!(rect.center_y(), 2);
}
