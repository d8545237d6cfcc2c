//! Colormaps and 8-bit rendering
//!
//! Colormaps are a closed set resolved once from their name. Each one is
//! sampled into a lookup table that is passed explicitly to the renderer.

mod lut;
mod render;

pub use lut::{Colormap, ColormapLut, LUT_SIZE};
pub use render::{render_complex, render_real, ModulusScale};
