//! Garment types and drafting sessions.
//!
//! A [`GarmentPattern`] ties a name to one measurement set. Drafting it
//! derives the geometry and lays out the garment's primitives on a canvas
//! sized to fit them.

mod pants;
mod tshirt;

use std::fmt;

use serde::Serialize;

use crate::derive::{DerivedGeometry, derive};
use crate::error::{DraftError, Result};
use crate::geometry::Rect;
use crate::measurements::{
    Basis, Field, MeasurementRecord, MeasurementSet, PantsMeasurements, TShirtMeasurements,
};
use crate::primitive::Primitive;

/// Blank space added past the garment's extent, in drawing units.
pub const IMAGE_MARGIN: f64 = 50.0;

/// Side of the scale reference square, in drawing units.
pub const REFERENCE_SIDE: f64 = 100.0;

/// Vertical room left above the reference square for its label.
const REFERENCE_LABEL_HEIGHT: f64 = 30.0;

/// Available garment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Garment {
    Pants,
    #[serde(rename = "T-Shirt")]
    TShirt,
}

impl Garment {
    /// Get all available garments.
    pub fn all() -> &'static [Garment] {
        &[Garment::Pants, Garment::TShirt]
    }

    /// Display name, as accepted by [`Garment::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Garment::Pants => "Pants",
            Garment::TShirt => "T-Shirt",
        }
    }

    /// Parse a garment name (case-insensitive).
    ///
    /// Unknown names are an error, never a default garment.
    pub fn from_name(name: &str) -> Result<Garment> {
        match name.trim().to_lowercase().as_str() {
            "pants" => Ok(Garment::Pants),
            "t-shirt" | "tshirt" | "t_shirt" => Ok(Garment::TShirt),
            _ => Err(DraftError::UnsupportedGarmentType(name.to_string())),
        }
    }

    /// Measurement vocabulary, in prompt order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Garment::Pants => PantsMeasurements::FIELDS,
            Garment::TShirt => TShirtMeasurements::FIELDS,
        }
    }

    /// Pull this garment's measurements out of a record.
    pub fn read(&self, record: &impl MeasurementRecord) -> Result<MeasurementSet> {
        Ok(match self {
            Garment::Pants => MeasurementSet::Pants(PantsMeasurements::from_record(record)?),
            Garment::TShirt => MeasurementSet::TShirt(TShirtMeasurements::from_record(record)?),
        })
    }
}

impl fmt::Display for Garment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MeasurementSet {
    pub fn garment(&self) -> Garment {
        match self {
            MeasurementSet::Pants(_) => Garment::Pants,
            MeasurementSet::TShirt(_) => Garment::TShirt,
        }
    }
}

/// Raster size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Smallest integer canvas holding the given extents.
    ///
    /// Extents past `u32::MAX` (or NaN) are an error rather than a clamped,
    /// too-small canvas.
    pub fn fit(width: f64, height: f64) -> Result<Canvas> {
        let limit = u32::MAX as f64;
        let (w, h) = (width.ceil().max(1.0), height.ceil().max(1.0));
        if !(w <= limit && h <= limit) {
            return Err(DraftError::CanvasTooLarge { width, height });
        }
        Ok(Canvas {
            width: w as u32,
            height: h as u32,
        })
    }

    /// Scale reference square, inset by [`IMAGE_MARGIN`] from the
    /// bottom-right corner, with its label above it.
    pub fn reference_marker(&self) -> [Primitive; 2] {
        let right = self.width as f64 - IMAGE_MARGIN;
        let bottom = self.height as f64 - IMAGE_MARGIN;
        let bounds = Rect::from_coords(right - REFERENCE_SIDE, bottom - REFERENCE_SIDE, right, bottom);
        let label_at = bounds.top_left.offset(0.0, -REFERENCE_LABEL_HEIGHT);
        [
            Primitive::ReferenceSquare { bounds },
            Primitive::label(label_at, "cm\nSquare"),
        ]
    }
}

/// A drafted garment, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draft {
    pub name: String,
    pub garment: Garment,
    pub canvas: Canvas,
    pub primitives: Vec<Primitive>,
}

/// One drafting session: a name and the measurements to draft from.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentPattern {
    name: String,
    measurements: MeasurementSet,
    basis: Basis,
}

impl GarmentPattern {
    /// Start a session.
    ///
    /// The name becomes the output file stem, so it must be non-empty and
    /// must not contain path separators.
    pub fn new(name: impl Into<String>, measurements: MeasurementSet, basis: Basis) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DraftError::invalid("pattern_name", "must not be empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(DraftError::invalid("pattern_name", "must not contain path separators"));
        }
        Ok(Self { name, measurements, basis })
    }

    /// Session from hand-entered body measurements.
    pub fn from_body(name: impl Into<String>, garment: Garment, record: &impl MeasurementRecord) -> Result<Self> {
        Self::new(name, garment.read(record)?, Basis::Body)
    }

    /// Session from a size-table row.
    pub fn from_size_row(name: impl Into<String>, garment: Garment, record: &impl MeasurementRecord) -> Result<Self> {
        Self::new(name, garment.read(record)?, Basis::Drafted)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn garment(&self) -> Garment {
        self.measurements.garment()
    }

    /// Derive geometry and lay out the primitive sequence.
    ///
    /// Recomputed on every call; nothing is cached on the pattern. Fails only
    /// when the garment is too large for a canvas.
    pub fn draft(&self) -> Result<Draft> {
        let (canvas, body) = match derive(&self.measurements, self.basis) {
            DerivedGeometry::Pants(scaled) => {
                let canvas = pants::canvas(scaled.values())?;
                (canvas, pants::primitives(scaled.values()))
            }
            DerivedGeometry::TShirt { shirt, sleeve } => {
                let canvas = tshirt::canvas(shirt.values(), &sleeve)?;
                (canvas, tshirt::primitives(shirt.values(), &sleeve))
            }
        };

        let mut primitives = Vec::with_capacity(body.len() + 2);
        primitives.extend(canvas.reference_marker());
        primitives.extend(body);

        Ok(Draft {
            name: self.name.clone(),
            garment: self.garment(),
            canvas,
            primitives,
        })
    }
}

impl fmt::Display for GarmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Pattern: {}", self.garment(), self.name)
    }
}
