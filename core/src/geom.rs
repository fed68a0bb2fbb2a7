//! Axis-aligned boxes in world coordinates.

/// Axis-aligned rectangle: top-left corner + extent, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Interval-overlap test on both axes. Touching edges count as overlap.
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && b.x <= a.x + a.w && a.y <= b.y + b.h && b.y <= a.y + a.h
}
