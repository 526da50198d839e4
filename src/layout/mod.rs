//! Layout engine for placing events on the timeline.
//!
//! This module handles:
//! - Packing events into non-overlapping lanes
//! - Mapping years and lanes to pixel coordinates
//! - Choosing the shape and label anchor for each event

mod geometry;
mod lanes;

pub use geometry::{
    CanvasSize, EventGeometry, Shape, TimelineLayout, CORNER_RADIUS, LABEL_GAP,
};
pub use lanes::{assign_lanes, packing_key, packing_order, LaneSet};
