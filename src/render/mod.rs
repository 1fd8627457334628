//! Rendering — traits and time in, one SVG document out
//!
//! Palette, core shape, pathways and particles are separate generators, each
//! testable on its own; the compositor is the only part that knows about all
//! of them.

mod compositor;
mod document;
pub mod geometry;
pub mod palette;
pub mod particle;
pub mod pathway;
pub mod shape;
pub mod svg;

pub use compositor::{Compositor, FrameParams};
pub use document::Document;
pub use palette::{Hsl, Palette};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::genome::TraitRecord;

/// Render with the reference configuration; `frame` 0 is the static snapshot
pub fn render(record: &TraitRecord, now: u64, frame: u64) -> Result<Document> {
    Compositor::new(RenderConfig::reference())?.render(record, now, frame)
}
