//! XLSX reader
//!
//! Opens the ZIP package, resolves a worksheet by name and flattens it into
//! rows of plain strings. Nothing here knows about events; the extractor
//! gives the strings their meaning.

mod relationships;
mod worksheet;

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Result, TimelineError};

use relationships::{get_sheet_info, parse_shared_strings, parse_workbook_relationships};
use worksheet::parse_sheet_rows;

/// A worksheet flattened into rows of cell strings.
///
/// Rows keep sheet order; each row is padded with empty strings up to its
/// last populated column, so rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// List worksheet names in workbook order.
pub fn sheet_names(data: &[u8]) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let relationships = parse_workbook_relationships(&mut archive)?;
    let sheets = get_sheet_info(&mut archive, &relationships.worksheets)?;
    Ok(sheets.into_iter().map(|s| s.name).collect())
}

/// Read the worksheet called `sheet_name` from XLSX bytes.
///
/// # Errors
/// Returns [`TimelineError::NotFound`] when no sheet has that exact name or
/// the sheet has no worksheet relationship, or a ZIP/XML error when the
/// package is unreadable.
pub fn read_sheet(data: &[u8], sheet_name: &str) -> Result<SheetTable> {
    read_sheet_from(Cursor::new(data), sheet_name)
}

/// Read the worksheet called `sheet_name` from an XLSX file on disk.
///
/// The file handle is owned by the archive and closed when this returns,
/// on success and on every error path.
pub fn read_sheet_from_path(path: &Path, sheet_name: &str) -> Result<SheetTable> {
    let file = File::open(path)?;
    read_sheet_from(BufReader::new(file), sheet_name)
}

fn read_sheet_from<R: Read + Seek>(reader: R, sheet_name: &str) -> Result<SheetTable> {
    let mut archive = ZipArchive::new(reader)?;

    let relationships = parse_workbook_relationships(&mut archive)?;
    let sheets = get_sheet_info(&mut archive, &relationships.worksheets)?;

    let Some((name, part)) = sheets
        .into_iter()
        .find(|s| s.name == sheet_name)
        .and_then(|s| s.path.map(|part| (s.name, part)))
    else {
        return Err(TimelineError::NotFound {
            sheet: sheet_name.to_string(),
        });
    };
    tracing::debug!(sheet = %name, part = %part, "resolved worksheet");

    let shared_strings =
        parse_shared_strings(&mut archive, relationships.shared_strings.as_deref())?;
    tracing::debug!(count = shared_strings.len(), "loaded shared strings");

    let rows = parse_sheet_rows(&mut archive, &part, &shared_strings)?;
    tracing::debug!(rows = rows.len(), "parsed worksheet rows");

    Ok(SheetTable {
        name,
        rows,
    })
}
