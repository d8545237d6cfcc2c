use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, info};

use crate::image_pipeline::colorize::complex_to_rgb;
use crate::image_pipeline::colormap::Colormap;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::field::types::{ComplexField, PixelLayout, RenderedImage};

/// Compression applied to the modulus before rendering, phase is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModulusScale {
    #[default]
    Linear,
    /// `sqrt(|a|)`
    Sqrt,
    /// `log10(|a| + 1)`, useful for diffraction patterns
    Log,
}

impl ModulusScale {
    pub fn apply(self, field: &ComplexField) -> ComplexField {
        let rescale = |f: fn(f64) -> f64| {
            ComplexField::new(field.data().mapv(|c| Complex64::from_polar(f(c.norm()), c.arg())))
        };
        match self {
            ModulusScale::Linear => field.clone(),
            ModulusScale::Sqrt => rescale(f64::sqrt),
            ModulusScale::Log => rescale(|m| (m + 1.0).log10()),
        }
    }
}

/// Renders a real array to 8-bit grey levels, or colours when a colormap is given.
///
/// Values are clipped to `[vmin, vmax]`, defaulting to the array minimum and
/// maximum. A constant array rendered with both defaults comes out black.
///
/// # Errors
///
/// `InvalidRange` when the resolved `vmin >= vmax` and at least one bound was given.
pub fn render_real(
    a: &Array2<f64>,
    vmin: Option<f64>,
    vmax: Option<f64>,
    cmap: Option<Colormap>,
) -> Result<RenderedImage> {
    let (height, width) = a.dim();
    let lo = vmin.unwrap_or_else(|| a.fold(f64::INFINITY, |acc, &x| acc.min(x)));
    let hi = vmax.unwrap_or_else(|| a.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x)));

    let levels: Vec<u8> = if lo < hi {
        let span = hi - lo;
        a.iter().map(|&x| (255.0 * (x.clamp(lo, hi) - lo) / span) as u8).collect()
    } else if vmin.is_none() && vmax.is_none() {
        debug!("Constant image, rendering black");
        vec![0; a.len()]
    } else {
        return Err(ConversionError::InvalidRange { vmin: lo, vmax: hi });
    };

    let image = match cmap {
        None => RenderedImage::gray(width, height, levels),
        Some(cmap) => {
            let lut = cmap.lut();
            let data = levels.iter().flat_map(|&level| lut.map_byte(level)).collect();
            RenderedImage {
                width,
                height,
                layout: PixelLayout::Rgb8,
                data,
            }
        }
    };

    Ok(image)
}

/// Renders a complex field with phase as hue and amplitude as value.
///
/// Colormaps do not apply to complex data and are ignored.
pub fn render_complex(
    field: &ComplexField,
    vmin: Option<f64>,
    vmax: Option<f64>,
    cmap: Option<Colormap>,
) -> Result<RenderedImage> {
    if let Some(cmap) = cmap {
        info!(?cmap, "Ignoring provided colormap, input is complex");
    }
    let rgb = complex_to_rgb(field, vmin, vmax)?;
    Ok(RenderedImage::from_rgb(&rgb))
}
