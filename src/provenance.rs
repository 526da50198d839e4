//! Recovery of source records from a rendered timeline.
//!
//! Each event group in the SVG carries `data-*` attributes naming the row it
//! came from. Reading them back needs no access to the original workbook.

use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

use crate::error::{Result, TimelineError};
use crate::render::EVENT_KIND;
use crate::types::Event;
use crate::xml_helpers::{attr_i64, attr_string, attr_unescaped, attr_usize};

/// Kind of shape drawn for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    RoundedRect,
}

/// One event group read back from a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEvent {
    /// Record rebuilt from the provenance attributes, lane included
    pub event: Event,
    pub shape: Option<ShapeKind>,
    /// Unescaped text of the label node
    pub label: String,
}

/// Read every event group from an SVG document, in document order.
///
/// # Errors
/// Returns [`TimelineError::Xml`] for malformed markup and
/// [`TimelineError::Parse`] when an event group lacks a provenance
/// attribute.
pub fn recover_events(svg: &str) -> Result<Vec<RenderedEvent>> {
    let mut xml = Reader::from_str(svg);
    xml.trim_text(false);

    let mut out = Vec::new();
    let mut current: Option<RenderedEvent> = None;
    let mut nested_groups = 0_usize;
    let mut in_text = false;

    loop {
        match xml.read_event()? {
            XmlEvent::Start(ref e) => match e.local_name().as_ref() {
                b"g" if current.is_some() => nested_groups += 1,
                b"g" if is_event_group(e) => {
                    current = Some(RenderedEvent {
                        event: event_from_attrs(e)?,
                        shape: None,
                        label: String::new(),
                    });
                }
                b"text" => in_text = current.is_some(),
                name => note_shape(current.as_mut(), name),
            },
            XmlEvent::Empty(ref e) => note_shape(current.as_mut(), e.local_name().as_ref()),
            XmlEvent::Text(ref t) if in_text => {
                if let Some(rendered) = current.as_mut() {
                    rendered.label.push_str(&t.unescape()?);
                }
            }
            XmlEvent::End(ref e) => match e.local_name().as_ref() {
                b"text" => in_text = false,
                b"g" if nested_groups > 0 => nested_groups -= 1,
                b"g" => {
                    if let Some(rendered) = current.take() {
                        out.push(rendered);
                    }
                }
                _ => {}
            },
            XmlEvent::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

fn note_shape(current: Option<&mut RenderedEvent>, name: &[u8]) {
    let Some(rendered) = current else {
        return;
    };
    match name {
        b"circle" => rendered.shape = Some(ShapeKind::Circle),
        b"rect" => rendered.shape = Some(ShapeKind::RoundedRect),
        _ => {}
    }
}

fn is_event_group(e: &BytesStart) -> bool {
    attr_string(e, b"data-kind").as_deref() == Some(EVENT_KIND)
}

fn event_from_attrs(e: &BytesStart) -> Result<Event> {
    let missing = |name: &str| TimelineError::Parse(format!("event group without valid {name}"));

    let title = attr_unescaped(e, b"data-title").ok_or_else(|| missing("data-title"))?;
    let start_year =
        attr_i64(e, b"data-start-year").ok_or_else(|| missing("data-start-year"))?;
    let end_year = attr_i64(e, b"data-end-year").ok_or_else(|| missing("data-end-year"))?;
    let lane = attr_usize(e, b"data-lane").ok_or_else(|| missing("data-lane"))?;

    let mut event = Event::new(title, start_year, end_year);
    event.lane = lane;
    Ok(event)
}
