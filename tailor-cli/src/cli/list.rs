//! Listing commands: garment vocabularies and size-table contents.

use std::path::Path;

use anyhow::Result;
use tailor::{Garment, SizeTable};

/// Print every garment with its measurement fields.
pub fn cmd_garments() {
    println!("Available garments:");
    for garment in Garment::all() {
        println!();
        println!("  {}", garment.name());
        for field in garment.fields() {
            println!("    {:<28} {}", field.name, field.prompt);
        }
    }
}

/// Print the sizes found in a size table, one per line.
pub fn cmd_sizes(table_path: &Path) -> Result<()> {
    let table = SizeTable::from_csv_path(table_path)?;
    for size in table.sizes() {
        println!("{}", size);
    }
    Ok(())
}
