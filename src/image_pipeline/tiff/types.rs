//! Rendering and TIFF output configuration types

use crate::image_pipeline::colormap::ModulusScale;
use crate::image_pipeline::phase_ramp::RampWeight;

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced (default)
    DeflateBalanced,
}

/// Configuration for rendering complex fields to TIFF
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    /// Note: Predictor adds processing time, set to None for maximum speed
    pub predictor: Option<u16>,
    /// Whether to validate field dimensions before rendering
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Lower amplitude clip, 0 when unset
    pub vmin: Option<f64>,
    /// Upper amplitude clip, field maximum when unset
    pub vmax: Option<f64>,
    /// Remove the phase ramp with this weighting before rendering
    pub remove_ramp: Option<RampWeight>,
    /// Modulus compression applied before rendering
    pub modulus: ModulusScale,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            max_dimension: None,
            vmin: None,
            vmax: None,
            remove_ramp: None,
            modulus: ModulusScale::Linear,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    vmin: Option<Option<f64>>,
    vmax: Option<Option<f64>>,
    remove_ramp: Option<Option<RampWeight>>,
    modulus: Option<ModulusScale>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }
    
    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }
    
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max_dimension: Option<usize>) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn vmin(mut self, vmin: Option<f64>) -> Self {
        self.vmin = Some(vmin);
        self
    }

    pub fn vmax(mut self, vmax: Option<f64>) -> Self {
        self.vmax = Some(vmax);
        self
    }
    
    pub fn remove_ramp(mut self, weight: Option<RampWeight>) -> Self {
        self.remove_ramp = Some(weight);
        self
    }

    pub fn modulus(mut self, modulus: ModulusScale) -> Self {
        self.modulus = Some(modulus);
        self
    }
    
    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            vmin: self.vmin.unwrap_or(default.vmin),
            vmax: self.vmax.unwrap_or(default.vmax),
            remove_ramp: self.remove_ramp.unwrap_or(default.remove_ramp),
            modulus: self.modulus.unwrap_or(default.modulus),
        }
    }
}
