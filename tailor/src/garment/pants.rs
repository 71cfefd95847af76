//! Pants draft: one front panel laid out along the leg.
//!
//! x runs from the waist (0) to the hem (`length_of_pants`), y runs across
//! the leg from the side seam (0) to the quarter scopes.

use crate::error::Result;
use crate::geometry::Rect;
use crate::measurements::PantsMeasurements;
use crate::primitive::Primitive;

use super::{Canvas, IMAGE_MARGIN};

pub(super) fn canvas(m: &PantsMeasurements) -> Result<Canvas> {
    Canvas::fit(m.length_of_pants + IMAGE_MARGIN, m.thigh_scope + IMAGE_MARGIN)
}

pub(super) fn primitives(m: &PantsMeasurements) -> Vec<Primitive> {
    vec![
        // waist to hem along the side seam
        Primitive::line(0.0, 0.0, m.length_of_pants, 0.0),
        // crotch line
        Primitive::line(m.crotch_line, 0.0, m.crotch_line, m.thigh_scope),
        // lowered center front
        Primitive::line(m.lower_center, 0.0, 0.0, m.waist_scope),
        // ankle
        Primitive::line(m.length_of_pants, 0.0, m.length_of_pants, m.ankle_scope),
        // waist to crotch
        Primitive::line(0.0, m.waist_scope, m.crotch_line, m.waist_scope),
        // hip curve into the crotch
        Primitive::arc(
            Rect::from_coords(
                m.crotch_line - (m.thigh_scope - m.waist_scope),
                m.waist_scope,
                m.crotch_line,
                m.thigh_scope,
            ),
            270.0,
            0.0,
        ),
        // inseam
        Primitive::line(m.crotch_line, m.thigh_scope, m.length_of_pants, m.ankle_scope),
    ]
}
