//! T-shirt draft: body panel on the left, sleeve panel to its right.
//!
//! Both panels share the top edge (y = 0). The sleeve cap is drawn twice:
//! three guide segments through the derived control points, then three arcs
//! on top of them for the finished curve.

use crate::derive::{DRAWING_UNITS, LARGE_MARGIN, MEDIUM_MARGIN, SMALL_MARGIN, SleeveCurve};
use crate::error::Result;
use crate::geometry::Rect;
use crate::measurements::TShirtMeasurements;
use crate::primitive::Primitive;

use super::{Canvas, IMAGE_MARGIN};

pub(super) fn canvas(m: &TShirtMeasurements, sleeve: &SleeveCurve) -> Result<Canvas> {
    Canvas::fit(
        sleeve.sleeve_length + IMAGE_MARGIN * 2.0,
        m.stomach_scope + IMAGE_MARGIN,
    )
}

pub(super) fn primitives(m: &TShirtMeasurements, sleeve: &SleeveCurve) -> Vec<Primitive> {
    let mut prims = body(m);
    prims.extend(sleeve_panel(m, sleeve));
    prims
}

fn body(m: &TShirtMeasurements) -> Vec<Primitive> {
    vec![
        // shirt length
        Primitive::line(0.0, 0.0, m.length_of_shirt, 0.0),
        // stomach scope at the hem and at the armpit
        Primitive::line(m.length_of_shirt, 0.0, m.length_of_shirt, m.stomach_scope),
        Primitive::line(m.armpit_height, 0.0, m.armpit_height, m.stomach_scope),
        Primitive::line(m.length_of_shirt, m.stomach_scope, m.armpit_height, m.stomach_scope),
        // neck box
        Primitive::line(m.neck_depth, 0.0, m.neck_depth, m.neck_key),
        Primitive::line(0.0, m.neck_key, m.neck_depth, m.neck_key),
        Primitive::guide(0.0, m.neck_key, m.neck_depth, m.neck_key - m.neck_depth),
        // neckline
        Primitive::arc(
            Rect::from_coords(0.0, m.neck_key - m.neck_depth, m.neck_depth, m.neck_key),
            0.0,
            90.0,
        ),
        // neck to shoulder point
        Primitive::line(0.0, m.neck_key, m.lower_shoulder_line, m.distance_neck_to_shoulder),
        // shoulder down to the armpit
        Primitive::line(
            m.lower_shoulder_line,
            m.distance_neck_to_shoulder,
            m.armpit_height,
            m.distance_neck_to_shoulder,
        ),
        // armhole
        Primitive::arc(
            Rect::from_coords(
                m.armpit_height - (m.stomach_scope - m.distance_neck_to_shoulder),
                m.distance_neck_to_shoulder,
                m.armpit_height,
                m.stomach_scope,
            ),
            270.0,
            0.0,
        ),
    ]
}

fn sleeve_panel(m: &TShirtMeasurements, s: &SleeveCurve) -> Vec<Primitive> {
    // Arc boxes are padded by whole multiples of the margins so the three
    // arcs read as one curve. The values were tuned by eye.
    let unit = DRAWING_UNITS;
    let small = DRAWING_UNITS * SMALL_MARGIN;
    let medium = DRAWING_UNITS * MEDIUM_MARGIN;
    let large = DRAWING_UNITS * LARGE_MARGIN;

    vec![
        // sleeve length
        Primitive::line(0.0, 0.0, s.sleeve_length, 0.0),
        // arm scope
        Primitive::line(s.shoulder_to_armpit, 0.0, s.shoulder_to_armpit, m.arm_scope),
        // wrist scope
        Primitive::line(s.sleeve_length, 0.0, s.sleeve_length, m.wrist_scope),
        // underarm seam
        Primitive::line(s.shoulder_to_armpit, m.arm_scope, s.sleeve_length, m.wrist_scope),
        // cap guides
        Primitive::guide(s.sleeve_start, 0.0, s.x_quarter, s.y_quarter),
        Primitive::guide(s.x_quarter, s.y_quarter, s.x_half, s.y_half),
        Primitive::guide(s.x_half, s.y_half, s.shoulder_to_armpit, m.arm_scope),
        // cap curve
        Primitive::arc(
            Rect::from_coords(s.sleeve_start, 0.0 - large, s.x_quarter + unit, s.y_quarter + medium),
            100.0,
            200.0,
        ),
        Primitive::arc(
            Rect::from_coords(s.x_quarter - medium, s.y_quarter - large, s.x_half + (large + small), s.y_half),
            100.0,
            150.0,
        ),
        Primitive::arc(
            Rect::from_coords(s.x_half - (large + medium), s.y_half, s.shoulder_to_armpit, m.arm_scope + large),
            270.0,
            0.0,
        ),
    ]
}
