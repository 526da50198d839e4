//! xltimeline - XLSX events sheet to SVG timeline
//!
//! Reads one worksheet of an XLSX workbook, turns its rows into timeline
//! events and draws them as an SVG ready for a design tool:
//! - Shared-string and inline-string cells, padded rows
//! - Greedy first-fit lane packing so overlapping events never share a row
//! - Linear year-to-pixel mapping on a fixed BC scale
//! - `data-*` provenance on every event group, recoverable from the SVG
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use xltimeline::{export_sheet, TimelineLayout};
//!
//! let summary = export_sheet(
//!     Path::new("TimelineDB.xlsx"),
//!     "Events",
//!     Path::new("out/events.svg"),
//!     &TimelineLayout::default(),
//! )?;
//! println!("{} events in {} lanes", summary.event_count, summary.lane_count);
//! # Ok::<(), xltimeline::error::TimelineError>(())
//! ```

pub mod cell_ref;
pub mod error;
pub mod extract;
pub mod layout;
pub mod parser;
pub mod provenance;
pub mod render;
pub mod types;
pub mod xml_helpers;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::{Result, TimelineError};
pub use layout::{assign_lanes, TimelineLayout};
pub use render::render_svg;
pub use types::*;

/// A rendered timeline together with the events it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// Events in extraction order, lanes assigned
    pub events: Vec<Event>,
    pub lane_count: usize,
    pub svg: String,
}

/// Outcome of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub source: PathBuf,
    pub sheet: String,
    pub event_count: usize,
    pub lane_count: usize,
    pub output: PathBuf,
}

/// Pack and render already-extracted events.
pub fn build_timeline(mut events: Vec<Event>, layout: &TimelineLayout) -> Timeline {
    let lane_count = assign_lanes(&mut events);
    let svg = render_svg(&events, lane_count, layout);
    Timeline {
        events,
        lane_count,
        svg,
    }
}

/// Read `sheet` from XLSX bytes and render it.
///
/// # Errors
/// Fails if the sheet is missing, its header lacks the required columns,
/// or the package cannot be read.
pub fn timeline_from_xlsx(data: &[u8], sheet: &str, layout: &TimelineLayout) -> Result<Timeline> {
    let table = parser::read_sheet(data, sheet)?;
    let events = extract::extract_events(&table)?;
    Ok(build_timeline(events, layout))
}

/// Export `sheet` of the workbook at `source` as an SVG file at `output`.
///
/// Parent directories of `output` are created. The document is rendered in
/// full before anything is written, so a failed run leaves no output file.
///
/// # Errors
/// Propagates workbook, schema and I/O failures.
pub fn export_sheet(
    source: &Path,
    sheet: &str,
    output: &Path,
    layout: &TimelineLayout,
) -> Result<ExportSummary> {
    let table = parser::read_sheet_from_path(source, sheet)?;
    let events = extract::extract_events(&table)?;
    let timeline = build_timeline(events, layout);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, &timeline.svg)?;

    tracing::info!(
        source = %source.display(),
        sheet,
        events = timeline.events.len(),
        lanes = timeline.lane_count,
        output = %output.display(),
        "exported timeline"
    );

    Ok(ExportSummary {
        source: source.to_path_buf(),
        sheet: sheet.to_string(),
        event_count: timeline.events.len(),
        lane_count: timeline.lane_count,
        output: output.to_path_buf(),
    })
}

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
