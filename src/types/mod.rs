//! Data types shared by the extractor, the lane packer and the renderer.

mod event;
mod scale;

pub use event::*;
pub use scale::*;
