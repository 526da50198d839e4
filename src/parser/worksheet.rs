//! Worksheet parsing - flattens sheet XML into rows of string cells.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read, Seek};
use zip::ZipArchive;

use crate::cell_ref::parse_column_bytes;
use crate::error::Result;

/// Cell type tag from the `t` attribute of a `<c>` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum CellTypeTag {
    Shared,
    Inline,
    Default,
}

pub(super) fn parse_cell_type_tag(value: &[u8]) -> CellTypeTag {
    match value {
        b"s" => CellTypeTag::Shared,
        b"inlineStr" => CellTypeTag::Inline,
        _ => CellTypeTag::Default,
    }
}

/// Parse a worksheet part into rows of cell strings.
///
/// Each row is padded with empty strings up to its right-most populated
/// column. Rows without any `<c>` elements are dropped, so the first row
/// returned is the first row that actually carries cells.
pub(super) fn parse_sheet_rows<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
    shared_strings: &[String],
) -> Result<Vec<Vec<String>>> {
    let file = archive.by_name(path)?;
    read_rows(BufReader::new(file), shared_strings)
}

fn read_rows<B: BufRead>(reader: B, shared_strings: &[String]) -> Result<Vec<Vec<String>>> {
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(false);

    let mut rows = Vec::new();
    let mut current: BTreeMap<u32, String> = BTreeMap::new();
    let mut in_row = false;
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"row" => {
                    in_row = true;
                    current.clear();
                }
                b"c" if in_row => {
                    let (col, tag) = cell_attrs(e);
                    let raw = read_cell_body(&mut xml)?;
                    if let Some(col) = col {
                        current.insert(col, resolve_cell_value(raw, tag, shared_strings));
                    }
                }
                _ => {}
            },
            Event::Empty(ref e) if in_row && e.local_name().as_ref() == b"c" => {
                // Self-closing cells like <c r="A1"/> exist but carry no value
                if let (Some(col), _) = cell_attrs(e) {
                    current.insert(col, String::new());
                }
            }
            Event::End(ref e) if e.local_name().as_ref() == b"row" => {
                in_row = false;
                if let Some(row) = flatten_row(&mut current) {
                    rows.push(row);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}

fn cell_attrs(e: &BytesStart) -> (Option<u32>, CellTypeTag) {
    let mut col = None;
    let mut tag = CellTypeTag::Default;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => col = parse_column_bytes(&attr.value),
            b"t" => tag = parse_cell_type_tag(&attr.value),
            _ => {}
        }
    }
    (col, tag)
}

/// Raw text content found inside one `<c>` element.
#[derive(Debug, Default)]
struct CellBody {
    value: Option<String>,
    inline: Option<String>,
}

/// Consume events up to the closing `</c>`, collecting `<v>` and `<is>` text.
fn read_cell_body<B: BufRead>(xml: &mut Reader<B>) -> Result<CellBody> {
    let mut body = CellBody::default();
    let mut buf = Vec::new();
    let mut in_v = false;
    let mut in_is = false;
    let mut in_t = false;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"v" => {
                    in_v = true;
                    body.value.get_or_insert_with(String::new);
                }
                b"is" => {
                    in_is = true;
                    body.inline.get_or_insert_with(String::new);
                }
                b"t" if in_is => in_t = true,
                _ => {}
            },
            Event::Text(ref text) => {
                let text = text.unescape()?;
                if in_v {
                    if let Some(value) = body.value.as_mut() {
                        value.push_str(&text);
                    }
                } else if in_t {
                    if let Some(inline) = body.inline.as_mut() {
                        inline.push_str(&text);
                    }
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"v" => in_v = false,
                b"t" => in_t = false,
                b"is" => in_is = false,
                b"c" => break,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(body)
}

fn resolve_cell_value(body: CellBody, tag: CellTypeTag, shared_strings: &[String]) -> String {
    match tag {
        CellTypeTag::Shared => body
            .value
            .as_deref()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .and_then(|idx| shared_strings.get(idx))
            .cloned()
            .unwrap_or_default(),
        CellTypeTag::Inline => body.inline.unwrap_or_default(),
        CellTypeTag::Default => body.value.unwrap_or_default(),
    }
}

fn flatten_row(values: &mut BTreeMap<u32, String>) -> Option<Vec<String>> {
    let (&last, _) = values.last_key_value()?;
    let width = usize::try_from(last).ok()?.saturating_add(1);
    let mut row = vec![String::new(); width];
    for (col, value) in std::mem::take(values) {
        if let Some(slot) = usize::try_from(col).ok().and_then(|c| row.get_mut(c)) {
            *slot = value;
        }
    }
    Some(row)
}
