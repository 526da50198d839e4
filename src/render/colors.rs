//! Fixed colors and fonts of the exported timeline.
//!
//! The export is meant to be dropped into a design tool, so everything is a
//! plain CSS hex string.

/// A CSS color string (e.g., "#FF0000")
pub type CssColor = &'static str;

pub mod palette {
    use super::CssColor;

    /// Canvas background (parchment)
    pub const BACKGROUND: CssColor = "#FAF6F0";

    /// Guide line under the last lane
    pub const TRACK_GUIDE: CssColor = "#D8CCB5";

    /// Fill of event markers and bars
    pub const NODE_FILL: CssColor = "#E6C7C0";

    /// Outline and label ink
    pub const INK: CssColor = "#2D241C";
}

/// Font stack set on the root element.
pub const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";
/// Label font size in pixels.
pub const LABEL_FONT_SIZE: u32 = 12;
/// Label font weight.
pub const LABEL_FONT_WEIGHT: u32 = 600;
/// Outline width of event shapes.
pub const NODE_STROKE_WIDTH: &str = "1.25";
