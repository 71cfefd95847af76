//! Measurement fitting and drawing-unit conversion.
//!
//! Three steps, always in this order:
//!
//! 1. **Fit** body measurements into pattern measurements (quarter/half
//!    scopes plus ease margins). Size-table rows skip this step.
//! 2. **Scale** every field by [`DRAWING_UNITS`] into centimeters / pixels.
//! 3. **Construct** secondary points, currently only the sleeve-cap guides.
//!
//! ## Rust Lesson #9: Newtypes
//!
//! `Scaled<T>` wraps already-converted values. Its only constructors live in
//! this module and take unscaled input, so "scale twice" does not type-check.

use tracing::debug;

use crate::geometry::midway;
use crate::measurements::{Basis, MeasurementSet, PantsMeasurements, TShirtMeasurements};

/// Ease margins in input units.
pub const SMALL_MARGIN: f64 = 2.0;
pub const MEDIUM_MARGIN: f64 = 2.0;
pub const LARGE_MARGIN: f64 = 5.0;

/// Drawing units per input unit (1 m = 100 cm = 100 px).
pub const DRAWING_UNITS: f64 = 100.0;

/// Horizontal gap between the shirt body and the sleeve panel.
pub const SLEEVE_OFFSET: f64 = 100.0;

/// Fit raw pants measurements.
pub fn fit_pants(raw: &PantsMeasurements) -> PantsMeasurements {
    PantsMeasurements {
        thigh_scope: raw.thigh_scope / 4.0 + LARGE_MARGIN,
        waist_scope: raw.waist_scope / 4.0,
        ankle_scope: raw.ankle_scope / 2.0 + SMALL_MARGIN,
        ..*raw
    }
}

/// Fit raw t-shirt measurements, body then sleeve.
///
/// `distance_neck_to_shoulder` is built from the *fitted* neck key.
pub fn fit_tshirt(raw: &TShirtMeasurements) -> TShirtMeasurements {
    let neck_key = raw.neck_key / 4.0 + SMALL_MARGIN;
    TShirtMeasurements {
        stomach_scope: raw.stomach_scope / 4.0 + LARGE_MARGIN,
        neck_key,
        distance_neck_to_shoulder: raw.distance_neck_to_shoulder + neck_key + 3.0,
        distance_shoulder_to_armpit: raw.distance_shoulder_to_armpit + SMALL_MARGIN,
        arm_scope: raw.arm_scope / 2.0 + MEDIUM_MARGIN,
        wrist_scope: raw.wrist_scope / 2.0 + MEDIUM_MARGIN,
        ..*raw
    }
}

/// Values already converted to drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled<T>(T);

impl<T> Scaled<T> {
    pub fn values(&self) -> &T {
        &self.0
    }
}

pub fn scale_pants(pants: &PantsMeasurements) -> Scaled<PantsMeasurements> {
    Scaled(pants.map(|v| v * DRAWING_UNITS))
}

pub fn scale_tshirt(shirt: &TShirtMeasurements) -> Scaled<TShirtMeasurements> {
    Scaled(shirt.map(|v| v * DRAWING_UNITS))
}

/// Guide points for the sleeve cap, all in drawing units.
///
/// The sleeve panel sits to the right of the body, so its x positions are
/// shifted by the shirt length, the shoulder-to-armpit distance and
/// [`SLEEVE_OFFSET`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleeveCurve {
    /// Where the sleeve cap starts on the top edge.
    pub sleeve_start: f64,
    /// x of the wrist line.
    pub sleeve_length: f64,
    /// x of the arm-scope line, where the cap ends.
    pub shoulder_to_armpit: f64,
    pub x_half: f64,
    pub x_quarter: f64,
    pub y_half: f64,
    pub y_quarter: f64,
}

/// Derive the sleeve guides.
///
/// Reads only the prior (scaled, unshifted) `distance_shoulder_to_armpit`,
/// `length_of_shirt`, `sleeve_length` and `arm_scope`. Both shifted values
/// use the unshifted shoulder-to-armpit distance.
pub fn derive_sleeve(shirt: &Scaled<TShirtMeasurements>) -> SleeveCurve {
    let m = shirt.values();
    let prior_armpit = m.distance_shoulder_to_armpit;
    let shirt_length = m.length_of_shirt;

    let sleeve_start = prior_armpit + shirt_length + SLEEVE_OFFSET;
    let sleeve_length = m.sleeve_length + (shirt_length + prior_armpit + SLEEVE_OFFSET);
    let shoulder_to_armpit = prior_armpit + (shirt_length + prior_armpit + SLEEVE_OFFSET);

    let x_half = midway(sleeve_start, shoulder_to_armpit);
    let x_quarter = midway(sleeve_start, x_half);

    SleeveCurve {
        sleeve_start,
        sleeve_length,
        shoulder_to_armpit,
        x_half,
        x_quarter,
        y_half: m.arm_scope / 2.0,
        y_quarter: m.arm_scope / 4.0,
    }
}

/// Everything a garment needs to lay out its primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedGeometry {
    Pants(Scaled<PantsMeasurements>),
    TShirt {
        shirt: Scaled<TShirtMeasurements>,
        sleeve: SleeveCurve,
    },
}

/// Run fit (for body measurements), scale and construction.
///
/// The input is borrowed and never modified, so deriving twice from the same
/// set gives the same geometry.
pub fn derive(set: &MeasurementSet, basis: Basis) -> DerivedGeometry {
    match set {
        MeasurementSet::Pants(raw) => {
            let fitted = match basis {
                Basis::Body => fit_pants(raw),
                Basis::Drafted => *raw,
            };
            debug!(?basis, ?fitted, "fitted pants measurements");
            let scaled = scale_pants(&fitted);
            debug!(scaled = ?scaled.values(), "pants in drawing units");
            DerivedGeometry::Pants(scaled)
        }
        MeasurementSet::TShirt(raw) => {
            let fitted = match basis {
                Basis::Body => fit_tshirt(raw),
                Basis::Drafted => *raw,
            };
            debug!(?basis, ?fitted, "fitted t-shirt measurements");
            let shirt = scale_tshirt(&fitted);
            let sleeve = derive_sleeve(&shirt);
            debug!(scaled = ?shirt.values(), ?sleeve, "t-shirt in drawing units");
            DerivedGeometry::TShirt { shirt, sleeve }
        }
    }
}
