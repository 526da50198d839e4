//! Test fixtures for generating valid XLSX files in memory.
//!
//! This module provides builders for creating events workbooks
//! programmatically, so tests control exactly how each cell is stored.
//!
//! # Example
//!
//! ```rust
//! use fixtures::{SheetBuilder, XlsxBuilder};
//!
//! let xlsx = XlsxBuilder::new()
//!     .sheet(
//!         SheetBuilder::new("Events")
//!             .row(["Name", "year", "endYear"])
//!             .row(["Kingdom A".into(), 2000.into(), 1500.into()]),
//!     )
//!     .build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

// ============================================================================
// Cell Value
// ============================================================================

/// Represents a cell value that can be added to a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A string stored in the shared strings table.
    String(String),
    /// An inline string (`t="inlineStr"`).
    InlineString(String),
    /// A numeric value.
    Number(f64),
    /// Raw `<v>` text with no type tag.
    Raw(String),
    /// A self-closing `<c r=".."/>` cell.
    Empty,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

// ============================================================================
// Sheet Builder
// ============================================================================

/// A worksheet as a list of rows; `None` leaves the cell out entirely.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    pub name: String,
    pub rows: Vec<Vec<Option<CellValue>>>,
}

impl SheetBuilder {
    /// Create an empty sheet.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }

    /// Append a row where every cell is present.
    #[must_use]
    pub fn row<I, V>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows
            .push(cells.into_iter().map(|v| Some(v.into())).collect());
        self
    }

    /// Append a row with gaps.
    #[must_use]
    pub fn sparse_row(mut self, cells: Vec<Option<CellValue>>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Standard events header: `Name`, `year`, `endYear`.
    #[must_use]
    pub fn events_header(self) -> Self {
        self.row(["Name", "year", "endYear"])
    }

    /// Append an event row with numeric years.
    #[must_use]
    pub fn event(self, title: &str, start: i32, end: i32) -> Self {
        self.row([
            CellValue::from(title),
            CellValue::from(start),
            CellValue::from(end),
        ])
    }
}

// ============================================================================
// XLSX Builder
// ============================================================================

/// Builder for a whole workbook.
#[derive(Debug, Clone, Default)]
pub struct XlsxBuilder {
    sheets: Vec<SheetBuilder>,
}

impl XlsxBuilder {
    /// Create a new XLSX builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet.
    #[must_use]
    pub fn sheet(mut self, sheet: SheetBuilder) -> Self {
        self.sheets.push(sheet);
        self
    }

    /// Build the XLSX file as bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let cursor = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(cursor);
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        // Collect shared strings in first-use order
        let mut shared_strings: Vec<String> = Vec::new();
        for sheet in &self.sheets {
            for cell in sheet.rows.iter().flatten().flatten() {
                if let CellValue::String(s) = cell {
                    if !shared_strings.contains(s) {
                        shared_strings.push(s.clone());
                    }
                }
            }
        }

        let _ = zip.start_file("[Content_Types].xml", options);
        let _ = zip.write_all(generate_content_types(self.sheets.len()).as_bytes());

        let _ = zip.start_file("_rels/.rels", options);
        let _ = zip.write_all(generate_rels().as_bytes());

        let _ = zip.start_file("xl/_rels/workbook.xml.rels", options);
        let _ = zip.write_all(generate_workbook_rels(self.sheets.len()).as_bytes());

        let _ = zip.start_file("xl/workbook.xml", options);
        let _ = zip.write_all(generate_workbook(&self.sheets).as_bytes());

        if !shared_strings.is_empty() {
            let _ = zip.start_file("xl/sharedStrings.xml", options);
            let _ = zip.write_all(generate_shared_strings(&shared_strings).as_bytes());
        }

        for (i, sheet) in self.sheets.iter().enumerate() {
            let path = format!("xl/worksheets/sheet{}.xml", i + 1);
            let _ = zip.start_file(&path, options);
            let _ = zip.write_all(generate_sheet_xml(sheet, &shared_strings).as_bytes());
        }

        let cursor = zip.finish().expect("Failed to finish ZIP");
        cursor.into_inner()
    }
}

/// Workbook with a single `Events` sheet holding the standard header and
/// the given `(title, start, end)` rows.
#[must_use]
pub fn events_workbook(rows: &[(&str, i32, i32)]) -> Vec<u8> {
    let mut sheet = SheetBuilder::new("Events").events_header();
    for &(title, start, end) in rows {
        sheet = sheet.event(title, start, end);
    }
    XlsxBuilder::new().sheet(sheet).build()
}

/// Package made of exactly the given `(part path, body)` entries, for
/// workbooks the builders cannot express.
#[must_use]
pub fn raw_package(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();
    for &(name, body) in parts {
        zip.start_file(name, options).expect("Failed to start part");
        zip.write_all(body.as_bytes()).expect("Failed to write part");
    }
    zip.finish().expect("Failed to finish ZIP").into_inner()
}

// ============================================================================
// XML generation
// ============================================================================

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generate [Content_Types].xml
fn generate_content_types(sheet_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#);

    for i in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            i
        ));
    }

    xml.push_str("</Types>");
    xml
}

/// Generate _rels/.rels
fn generate_rels() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#);
    xml.push_str("</Relationships>");
    xml
}

/// Generate xl/_rels/workbook.xml.rels
fn generate_workbook_rels(sheet_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );

    for i in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
        ));
    }

    xml.push_str(&format!(
        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
        sheet_count + 1
    ));

    xml.push_str("</Relationships>");
    xml
}

/// Generate xl/workbook.xml
fn generate_workbook(sheets: &[SheetBuilder]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
    xml.push_str("<sheets>");

    for (i, sheet) in sheets.iter().enumerate() {
        xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            escape_xml(&sheet.name),
            i + 1,
            i + 1
        ));
    }

    xml.push_str("</sheets>");
    xml.push_str("</workbook>");
    xml
}

/// Generate xl/sharedStrings.xml
fn generate_shared_strings(strings: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(&format!(
        r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
        strings.len(),
        strings.len()
    ));

    for s in strings {
        // Add xml:space="preserve" to preserve leading/trailing whitespace
        xml.push_str(&format!(
            r#"<si><t xml:space="preserve">{}</t></si>"#,
            escape_xml(s)
        ));
    }

    xml.push_str("</sst>");
    xml
}

/// Convert a 1-based column number to letters (1 -> A, 27 -> AA).
pub fn col_num_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    if result.is_empty() {
        result.push('A');
    }
    result
}

/// Generate a sheet XML file
fn generate_sheet_xml(sheet: &SheetBuilder, shared_strings: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );
    xml.push_str("<sheetData>");

    for (r, row) in sheet.rows.iter().enumerate() {
        let row_num = r + 1;
        xml.push_str(&format!(r#"<row r="{row_num}">"#));
        for (c, cell) in row.iter().enumerate() {
            let Some(value) = cell else {
                continue;
            };
            let cell_ref = format!("{}{}", col_num_to_letter(c as u32 + 1), row_num);
            match value {
                CellValue::String(s) => {
                    let idx = shared_strings.iter().position(|x| x == s).unwrap();
                    xml.push_str(&format!(r#"<c r="{cell_ref}" t="s"><v>{idx}</v></c>"#));
                }
                CellValue::InlineString(s) => xml.push_str(&format!(
                    r#"<c r="{cell_ref}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    escape_xml(s)
                )),
                CellValue::Number(n) => {
                    xml.push_str(&format!(r#"<c r="{cell_ref}"><v>{n}</v></c>"#));
                }
                CellValue::Raw(s) => xml.push_str(&format!(
                    r#"<c r="{cell_ref}"><v>{}</v></c>"#,
                    escape_xml(s)
                )),
                CellValue::Empty => xml.push_str(&format!(r#"<c r="{cell_ref}"/>"#)),
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData>");
    xml.push_str("</worksheet>");
    xml
}
