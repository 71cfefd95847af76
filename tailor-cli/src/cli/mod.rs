//! CLI command implementations.
//!
//! - `draft` - Draft a garment and write the pattern image
//! - `garments` - List garments and their measurement fields
//! - `sizes` - List the sizes in a size table

pub mod config;
pub mod draft;
pub mod entry;
pub mod list;

pub use draft::{DraftArgs, cmd_draft};
pub use list::{cmd_garments, cmd_sizes};
