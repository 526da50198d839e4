//! Rendering of laid-out events.
//!
//! This module provides:
//! - SVG serialization of events, shapes and labels
//! - The fixed palette and font settings of the export

pub mod colors;
mod svg;

// Re-export commonly used types
pub use colors::{palette, CssColor};
pub use svg::{render_svg, EVENT_KIND};
