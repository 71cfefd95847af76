//! Draw primitives: the ordered instructions a draft hands to the renderer.

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// Stroke weight class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    /// Outline of the garment (width 5 by default).
    Structural,
    /// Construction helper lines (width 1 by default).
    Guide,
}

/// One thing to draw.
///
/// Arc angles are degrees measured clockwise from 3 o'clock (y points down).
/// The arc runs clockwise from `start_deg` to `end_deg`; when `end_deg` is not
/// past `start_deg` the sweep wraps through 360, so 270 to 0 is the upper
/// right quarter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    Arc {
        bounds: Rect,
        start_deg: f64,
        end_deg: f64,
        stroke: Stroke,
    },
    /// Filled square used to check print scale.
    ReferenceSquare { bounds: Rect },
    /// Text, one line per `\n`.
    Label { position: Point, text: String },
}

impl Primitive {
    /// Structural line from (x0, y0) to (x1, y1).
    pub fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Primitive::Line {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            stroke: Stroke::Structural,
        }
    }

    /// Guide line from (x0, y0) to (x1, y1).
    pub fn guide(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Primitive::Line {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            stroke: Stroke::Guide,
        }
    }

    /// Structural arc inscribed in `bounds`.
    pub fn arc(bounds: Rect, start_deg: f64, end_deg: f64) -> Self {
        Primitive::Arc {
            bounds,
            start_deg,
            end_deg,
            stroke: Stroke::Structural,
        }
    }

    pub fn label(position: Point, text: impl Into<String>) -> Self {
        Primitive::Label {
            position,
            text: text.into(),
        }
    }
}

/// Clockwise sweep in degrees from `start_deg` to `end_deg`, in (0, 360].
pub fn arc_sweep(start_deg: f64, end_deg: f64) -> f64 {
    let mut end = end_deg;
    while end <= start_deg {
        end += 360.0;
    }
    while end - start_deg > 360.0 {
        end -= 360.0;
    }
    end - start_deg
}

/// Point at `angle_deg` on the ellipse inscribed in `bounds`.
pub fn point_on_ellipse(bounds: &Rect, angle_deg: f64) -> Point {
    let rect = bounds.normalized();
    let center = rect.center();
    let theta = angle_deg.to_radians();
    Point::new(
        center.x + rect.width() / 2.0 * theta.cos(),
        center.y + rect.height() / 2.0 * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_wraps_through_zero() {
        assert_eq!(arc_sweep(270.0, 0.0), 90.0);
        assert_eq!(arc_sweep(100.0, 200.0), 100.0);
        assert_eq!(arc_sweep(0.0, 90.0), 90.0);
        assert_eq!(arc_sweep(45.0, 45.0), 360.0);
    }

    #[test]
    fn ellipse_points_follow_screen_angles() {
        let bounds = Rect::from_coords(0.0, 0.0, 20.0, 10.0);
        let right = point_on_ellipse(&bounds, 0.0);
        assert!((right.x - 20.0).abs() < 1e-9 && (right.y - 5.0).abs() < 1e-9);

        // 90 degrees is straight down on screen
        let bottom = point_on_ellipse(&bounds, 90.0);
        assert!((bottom.x - 10.0).abs() < 1e-9 && (bottom.y - 10.0).abs() < 1e-9);

        let top = point_on_ellipse(&bounds, 270.0);
        assert!((top.x - 10.0).abs() < 1e-9 && top.y.abs() < 1e-9);
    }

    #[test]
    fn constructors_pick_stroke() {
        assert!(matches!(
            Primitive::line(0.0, 0.0, 1.0, 1.0),
            Primitive::Line { stroke: Stroke::Structural, .. }
        ));
        assert!(matches!(
            Primitive::guide(0.0, 0.0, 1.0, 1.0),
            Primitive::Line { stroke: Stroke::Guide, .. }
        ));
    }
}
