use std::f64::consts::PI;

use ndarray::{Array2, Zip};
use num_complex::Complex64;
use tracing::debug;

use crate::image_pipeline::colorize::{hsv_to_rgb, rgb_to_hsv};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::field::types::{ComplexField, HsvField, RgbField};

/// Encodes a complex field as hue (phase), saturation (1) and value (amplitude).
///
/// The amplitude is clipped to `[vmin, vmax]` and rescaled to `[0, 1]`.
/// `vmin` defaults to 0 and `vmax` to the largest modulus in the field.
///
/// # Errors
///
/// `InvalidRange` when the resolved `vmin >= vmax`. A field whose amplitude is
/// zero everywhere, encoded with `vmax` unset and `vmin` at 0, is not an
/// error: its value channel is zero.
pub fn complex_to_hsv(field: &ComplexField, vmin: Option<f64>, vmax: Option<f64>) -> Result<HsvField> {
    let data = field.data();
    let hue = data.mapv(|c| 0.5 * c.arg() / PI + 0.5);
    let saturation = Array2::<f64>::ones(data.raw_dim());

    let lo = vmin.unwrap_or(0.0);
    let hi = vmax.unwrap_or_else(|| field.max_modulus());

    let value = if lo < hi {
        let span = hi - lo;
        data.mapv(|c| (c.norm().clamp(lo, hi) - lo) / span)
    } else if vmax.is_none() && lo == 0.0 && hi == 0.0 {
        debug!("Field amplitude is zero everywhere, value channel left empty");
        Array2::zeros(data.raw_dim())
    } else {
        return Err(ConversionError::InvalidRange { vmin: lo, vmax: hi });
    };

    HsvField::from_channels(&hue, &saturation, &value)
}

/// Inverse of [`complex_to_hsv`].
///
/// Returns `v * exp(2πi(h - 0.5)) / max(v)`. The division by the global
/// maximum of the value channel discards the absolute amplitude: callers that
/// need the original scale must keep the `vmin`/`vmax` they encoded with.
/// A value channel that is zero everywhere decodes to a zero field.
pub fn hsv_to_complex(hsv: &HsvField) -> ComplexField {
    let value = hsv.value();
    let vmax = value.fold(0.0_f64, |acc, &v| acc.max(v));
    let scale = if vmax > 0.0 { 1.0 / vmax } else { 0.0 };

    let data = Zip::from(hsv.hue())
        .and(value)
        .map_collect(|&h, &v| Complex64::from_polar(v * scale, 2.0 * PI * (h - 0.5)));

    ComplexField::new(data)
}

pub fn complex_to_rgb(field: &ComplexField, vmin: Option<f64>, vmax: Option<f64>) -> Result<RgbField> {
    Ok(hsv_to_rgb(&complex_to_hsv(field, vmin, vmax)?))
}

pub fn rgb_to_complex(rgb: &RgbField) -> ComplexField {
    hsv_to_complex(&rgb_to_hsv(rgb))
}
