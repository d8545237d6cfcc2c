//! Field value types
//!
//! Complex fields, their HSV and RGB encodings, phase ramps and the 8-bit
//! rasters handed to the TIFF layer.

pub mod types;

pub use types::{ComplexField, HsvField, PhaseRamp, PixelLayout, RenderedImage, RgbField};
