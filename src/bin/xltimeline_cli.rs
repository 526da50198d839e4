//! CLI tool for xltimeline - exports an XLSX events sheet as an SVG timeline
//!
//! Usage:
//!   xltimeline_cli --xlsx TimelineDB.xlsx                  # Events sheet, default output
//!   xltimeline_cli --xlsx db.xlsx --sheet Kings --out k.svg
//!
//! Set `RUST_LOG=debug` to see skipped rows and lane counts.

#![allow(clippy::exit)]

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use xltimeline::{export_sheet, TimelineLayout};

/// Export event nodes and titles from an XLSX sheet as SVG.
#[derive(Debug, Parser)]
#[command(name = "xltimeline_cli", version, about)]
struct Args {
    /// Path to source XLSX file
    #[arg(long, default_value = "TimelineDB.xlsx")]
    xlsx: PathBuf,

    /// Worksheet name
    #[arg(long, default_value = "Events")]
    sheet: String,

    /// Output SVG path
    #[arg(long, default_value = "figma-export/events-sheet-nodes.svg")]
    out: PathBuf,
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let source = absolute(&args.xlsx);
    let output = absolute(&args.out);

    let summary = match export_sheet(&source, &args.sheet, &output, &TimelineLayout::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error exporting {}: {}", source.display(), e);
            std::process::exit(1);
        }
    };

    println!("Source: {}", summary.source.display());
    println!("Sheet: {}", summary.sheet);
    println!("Events exported: {}", summary.event_count);
    println!("Lanes used: {}", summary.lane_count);
    println!("SVG: {}", summary.output.display());
}
