//! Complex field imaging pipeline
//!
//! Colour encoding of complex fields (phase as hue, amplitude as value) and
//! its inverse, phase ramp removal, colormapped rendering of real data, and
//! TIFF reading and writing around them.

pub mod common;
pub mod field;
pub mod colorize;
pub mod phase_ramp;
pub mod colormap;
pub mod source;
pub mod tiff;
pub mod conversions;

pub use common::{
    ConversionError,
    Result,
};

pub use field::{
    ComplexField,
    HsvField,
    PhaseRamp,
    PixelLayout,
    RenderedImage,
    RgbField,
};

pub use colorize::{
    complex_to_hsv,
    complex_to_rgb,
    hsv_to_complex,
    hsv_to_rgb,
    hsv_to_rgb_float,
    rgb_to_complex,
    rgb_to_hsv,
    rgb_to_hsv_float,
};

pub use phase_ramp::{
    estimate_phase_ramp,
    phase_ramp,
    remove_phase_ramp,
    RampRemoval,
    RampWeight,
};

pub use colormap::{
    Colormap,
    ColormapLut,
    ModulusScale,
    render_complex,
    render_real,
};

pub use source::{
    FieldReader,
    TiffFieldReader,
};

pub use self::tiff::{
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    FieldToTiffPipeline,
    PipelineStep,
    PipelineTimings,
};
