//! Draft command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use tailor::{Garment, GarmentPattern, OutputFormat, RenderStyle, SizeSource, SizeTable, render};

use super::config::Config;
use super::entry;

/// Arguments of `tailor draft`.
#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Pattern name, also the output file name
    #[arg(short, long)]
    pub name: String,

    /// Garment type (Pants or T-Shirt)
    #[arg(short, long)]
    pub garment: String,

    /// Standard size to look up in the size table
    #[arg(short, long, conflicts_with_all = ["measures", "measurements"])]
    pub size: Option<String>,

    /// CSV size table (overrides `size_table` in the config)
    #[arg(long, value_name = "CSV")]
    pub size_table: Option<PathBuf>,

    /// Body measurement, repeatable
    #[arg(short = 'm', long = "measure", value_name = "FIELD=VALUE")]
    pub measures: Vec<String>,

    /// YAML file of body measurements
    #[arg(long, value_name = "YAML")]
    pub measurements: Option<PathBuf>,

    /// Output format: png or svg
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Also print the draft (canvas and primitives) as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_name(s)
        .ok_or_else(|| format!("unknown format \"{s}\": expected \"png\" or \"svg\""))
}

/// Execute the draft command.
pub fn cmd_draft(args: &DraftArgs) -> Result<()> {
    // Reject unknown garments before touching any input.
    let garment = Garment::from_name(&args.garment)?;
    let config = Config::load_or_default(args.config.as_deref())?;
    let style = config.style.merge_with(&RenderStyle::default());
    style.validate().context("invalid style in config")?;

    let pattern = match &args.size {
        Some(size) => {
            let Some(table_path) = args.size_table.as_ref().or(config.size_table.as_ref()) else {
                bail!("--size needs a size table (--size-table or size_table in the config)");
            };
            let table = SizeTable::from_csv_path(table_path)?;
            let row = table.lookup(size)?;
            info!(size = %size, source = %table.describe(), "using standard size");
            GarmentPattern::from_size_row(&args.name, garment, &row)?
        }
        None => {
            if args.measures.is_empty() && args.measurements.is_none() {
                bail!("give either --size or body measurements (--measure / --measurements)");
            }
            let entry = entry::collect(args.measurements.as_deref(), &args.measures)?;
            GarmentPattern::from_body(&args.name, garment, &entry)?
        }
    };
    info!("{}", pattern);

    let draft = pattern.draft()?;

    let format = args.format.or(config.format).unwrap_or_default();
    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = render::save(&draft, &out_dir, format, &style)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
