//! Error type for drafting.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Every failure a draft can hit is one variant of `DraftError`. Callers get a
//! `Result<T, DraftError>` and bubble it up with `?`. `thiserror` writes the
//! `Display` and `std::error::Error` impls from the `#[error(...)]` attributes.

use thiserror::Error;

/// Everything that can stop a garment from being drafted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    /// A field the garment needs was not supplied.
    #[error("missing measurement: {0}")]
    MissingMeasurement(String),

    /// A field was supplied but is not usable.
    #[error("invalid measurement {field}: {reason}")]
    InvalidMeasurement { field: String, reason: String },

    /// The size table has no row for the requested size.
    #[error("size {size} not found in {source_name}")]
    SizeNotFound { size: String, source_name: String },

    /// The size table could not be read.
    #[error("size table unavailable: {0}")]
    SourceUnavailable(String),

    #[error("unsupported garment type: {0}")]
    UnsupportedGarmentType(String),

    /// The garment's extent does not fit in a raster canvas.
    #[error("canvas of {width} x {height} units is too large (limit {limit} per side)", limit = u32::MAX)]
    CanvasTooLarge { width: f64, height: f64 },

    /// The canvas could not be painted or the image could not be written.
    #[error("render failed: {0}")]
    RenderFailure(String),
}

impl DraftError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DraftError::InvalidMeasurement {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn render(reason: impl std::fmt::Display) -> Self {
        DraftError::RenderFailure(reason.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = DraftError::MissingMeasurement("waist_scope".into());
        assert_eq!(err.to_string(), "missing measurement: waist_scope");

        let err = DraftError::invalid("arm_scope", "not a number");
        assert_eq!(err.to_string(), "invalid measurement arm_scope: not a number");
    }

    #[test]
    fn size_not_found_mentions_source() {
        let err = DraftError::SizeNotFound {
            size: "52".into(),
            source_name: "sizes.csv".into(),
        };
        assert!(err.to_string().contains("52"));
        assert!(err.to_string().contains("sizes.csv"));
    }

    #[test]
    fn canvas_too_large_reports_extent() {
        let err = DraftError::CanvasTooLarge {
            width: 10_000_000_050.0,
            height: 565.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("10000000050"));
        assert!(msg.contains("too large"));
    }
}
