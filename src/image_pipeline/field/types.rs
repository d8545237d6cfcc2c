//! Array-backed value types shared by the encoder, the ramp filter and the TIFF layer

use ndarray::{Array2, Array3, ArrayD, ArrayView2, Axis, Ix2};
use num_complex::Complex64;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Two-dimensional complex samples, indexed `[row, col]` with shape (height, width).
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    data: Array2<Complex64>,
}

impl ComplexField {
    pub fn new(data: Array2<Complex64>) -> Self {
        Self { data }
    }

    /// Builds a field from a flat row-major sample vector.
    ///
    /// Fails with `ShapeMismatch` if `shape` is not two-dimensional or does not
    /// account for exactly `values.len()` samples.
    pub fn from_shape_vec(shape: &[usize], values: Vec<Complex64>) -> Result<Self> {
        let data = ArrayD::from_shape_vec(shape.to_vec(), values).map_err(|_| {
            ConversionError::ShapeMismatch {
                expected: "(height, width) covering every sample",
                found: shape.to_vec(),
            }
        })?;
        Self::from_dyn(data)
    }

    /// Accepts an array of any dimensionality, rejecting everything but 2-D.
    pub fn from_dyn(data: ArrayD<Complex64>) -> Result<Self> {
        let found = data.shape().to_vec();
        data.into_dimensionality::<Ix2>()
            .map(Self::new)
            .map_err(|_| ConversionError::ShapeMismatch {
                expected: "(height, width)",
                found,
            })
    }

    pub fn zeros(height: usize, width: usize) -> Self {
        Self::new(Array2::zeros((height, width)))
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn data(&self) -> &Array2<Complex64> {
        &self.data
    }

    pub fn modulus(&self) -> Array2<f64> {
        self.data.mapv(|c| c.norm())
    }

    /// Largest modulus in the field, 0 for an empty field.
    pub fn max_modulus(&self) -> f64 {
        self.data.fold(0.0_f64, |acc, c| acc.max(c.norm()))
    }
}

impl From<Array2<Complex64>> for ComplexField {
    fn from(data: Array2<Complex64>) -> Self {
        Self::new(data)
    }
}

/// Hue, saturation and value planes stacked on the first axis: shape (3, height, width).
#[derive(Debug, Clone, PartialEq)]
pub struct HsvField {
    data: Array3<f64>,
}

impl HsvField {
    pub fn new(data: Array3<f64>) -> Result<Self> {
        if data.len_of(Axis(0)) != 3 {
            return Err(ConversionError::ShapeMismatch {
                expected: "(3, height, width)",
                found: data.shape().to_vec(),
            });
        }
        Ok(Self { data })
    }

    pub(crate) fn from_array(data: Array3<f64>) -> Self {
        debug_assert_eq!(data.len_of(Axis(0)), 3);
        Self { data }
    }

    pub fn from_channels(hue: &Array2<f64>, saturation: &Array2<f64>, value: &Array2<f64>) -> Result<Self> {
        let data = ndarray::stack(Axis(0), &[hue.view(), saturation.view(), value.view()])
            .map_err(|_| ConversionError::ShapeMismatch {
                expected: "three channels of equal shape",
                found: hue.shape().to_vec(),
            })?;
        Ok(Self { data })
    }

    pub fn hue(&self) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), 0)
    }

    pub fn saturation(&self) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), 1)
    }

    pub fn value(&self) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), 2)
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        let (_, height, width) = self.data.dim();
        (height, width)
    }

    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }
}

/// 8-bit colour image with the channel axis last: shape (height, width, 3).
#[derive(Debug, Clone, PartialEq)]
pub struct RgbField {
    data: Array3<u8>,
}

impl RgbField {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        if data.len_of(Axis(2)) != 3 {
            return Err(ConversionError::ShapeMismatch {
                expected: "(height, width, 3)",
                found: data.shape().to_vec(),
            });
        }
        Ok(Self { data })
    }

    pub(crate) fn from_array(data: Array3<u8>) -> Self {
        debug_assert_eq!(data.len_of(Axis(2)), 3);
        Self { data }
    }

    /// Wraps interleaved `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_interleaved(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let found = vec![bytes.len()];
        let data = Array3::from_shape_vec((height, width, 3), bytes).map_err(|_| {
            ConversionError::ShapeMismatch {
                expected: "height * width * 3 bytes",
                found,
            }
        })?;
        Ok(Self { data })
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        let (height, width, _) = self.data.dim();
        (height, width)
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn to_float(&self) -> Array3<f64> {
        self.data.mapv(f64::from)
    }

    /// Row-major interleaved bytes.
    pub fn to_interleaved(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }
}

/// Planar phase gradient `exp(-i(ax*row + ay*col))` of unit modulus.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRamp {
    data: Array2<Complex64>,
    slope: (f64, f64),
}

impl PhaseRamp {
    pub fn new(data: Array2<Complex64>, slope: (f64, f64)) -> Self {
        Self { data, slope }
    }

    /// Phase change per pixel along rows and columns.
    pub fn slope(&self) -> (f64, f64) {
        self.slope
    }

    pub fn data(&self) -> &Array2<Complex64> {
        &self.data
    }
}

/// Pixel layout of a rendered raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// One byte per pixel
    Gray8,
    /// Three interleaved bytes per pixel
    Rgb8,
}

impl PixelLayout {
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Gray8 => 1,
            PixelLayout::Rgb8 => 3,
        }
    }
}

/// 8-bit raster ready to be written out
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    pub layout: PixelLayout,
    /// Row-major pixel bytes, interleaved when `layout` is `Rgb8`
    pub data: Vec<u8>,
}

impl RenderedImage {
    pub fn from_rgb(rgb: &RgbField) -> Self {
        let (height, width) = rgb.dim();
        Self {
            width,
            height,
            layout: PixelLayout::Rgb8,
            data: rgb.to_interleaved(),
        }
    }

    pub fn gray(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            layout: PixelLayout::Gray8,
            data,
        }
    }
}
