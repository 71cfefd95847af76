//! # tailor
//!
//! Sewing pattern drafting: body measurements in, a drawn pattern out.
//!
//! ```text
//! ManualEntry / SizeRow ──► MeasurementSet ──► derive (fit, scale, construct)
//!        ──► Draft (canvas + primitives) ──► render (SVG / PNG on disk)
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod derive;
pub mod error;
pub mod garment;
pub mod geometry;
pub mod measurements;
pub mod primitive;
pub mod render;
pub mod sizes;

// Re-export common types at crate root for convenience.
pub use derive::{DerivedGeometry, SleeveCurve, derive};
pub use error::{DraftError, Result};
pub use garment::{Canvas, Draft, Garment, GarmentPattern};
pub use geometry::{Point, Rect};
pub use measurements::{
    Basis, Field, ManualEntry, MeasurementRecord, MeasurementSet, PantsMeasurements,
    TShirtMeasurements,
};
pub use primitive::{Primitive, Stroke};
pub use render::{OutputFormat, RenderStyle, save};
pub use sizes::{SizeRow, SizeSource, SizeTable};
