//! Core geometry types for tailor.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = print with `{:?}`
//! - `Clone` / `Copy` = small values are copied implicitly
//! - `PartialEq` = compare with `==`
//! - `Serialize` = serde can turn it into JSON for `--json` output
//!
//! All coordinates are drawing units: 1 unit = 1 cm = 1 pixel, y grows down.

use serde::Serialize;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned box given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A copy of this point moved by (dx, dy).
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// The value halfway from `from` to `to`.
#[inline]
pub fn midway(from: f64, to: f64) -> f64 {
    from + (to - from) / 2.0
}

impl Rect {
    #[inline]
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    /// Shorthand for `Rect::new(Point::new(x0, y0), Point::new(x1, y1))`.
    #[inline]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Same box with corners swapped where needed so that
    /// `top_left` really is the minimum corner.
    pub fn normalized(&self) -> Rect {
        Rect::from_coords(
            self.top_left.x.min(self.bottom_right.x),
            self.top_left.y.min(self.bottom_right.y),
            self.top_left.x.max(self.bottom_right.x),
            self.top_left.y.max(self.bottom_right.y),
        )
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.bottom_right.x - self.top_left.x).abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.bottom_right.y - self.top_left.y).abs()
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            midway(self.top_left.x, self.bottom_right.x),
            midway(self.top_left.y, self.bottom_right.y),
        )
    }
}
