use ndarray::{Array2, Axis, Zip};
use num_complex::Complex64;
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::field::types::{ComplexField, PhaseRamp};
use crate::image_pipeline::phase_ramp::gradient;

/// How local phase gradients are averaged into a single ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampWeight {
    /// Plain mean over every pixel
    #[default]
    None,
    /// Mean weighted by the modulus of the field
    Modulus,
}

/// Result of [`remove_phase_ramp`]
#[derive(Debug, Clone)]
pub struct RampRemoval {
    /// Input multiplied by the ramp
    pub field: ComplexField,
    /// The ramp itself, when requested
    pub ramp: Option<PhaseRamp>,
    /// Estimated phase change per pixel along rows and columns
    pub slope: (f64, f64),
}

/// Estimates the mean phase change per pixel along rows (axis 0) and columns (axis 1).
///
/// Works on the unit-phase field `exp(i*angle(a))`, so it is insensitive to
/// phase wrapping. Zero samples contribute angle 0. With `RampWeight::Modulus`
/// and a field that is zero everywhere the slope is `(0, 0)`.
///
/// # Errors
///
/// `InvalidDimensions` when either axis has fewer than two samples.
pub fn estimate_phase_ramp(field: &ComplexField, weight: RampWeight) -> Result<(f64, f64)> {
    let ph = field.data().mapv(|c| Complex64::from_polar(1.0, c.arg()));
    let d_rows = gradient(ph.view(), Axis(0))?;
    let d_cols = gradient(ph.view(), Axis(1))?;

    let local_rate = |d: &Array2<Complex64>| {
        Zip::from(d)
            .and(&ph)
            .map_collect(|&d, &p| -(Complex64::i() * d / p).re)
    };
    let gx = local_rate(&d_rows);
    let gy = local_rate(&d_cols);

    let slope = match weight {
        RampWeight::None => (gx.mean().unwrap_or(0.0), gy.mean().unwrap_or(0.0)),
        RampWeight::Modulus => {
            let w = field.modulus();
            let norm = w.sum();
            if norm > 0.0 {
                ((&gx * &w).sum() / norm, (&gy * &w).sum() / norm)
            } else {
                debug!("Zero total weight, assuming no phase ramp");
                (0.0, 0.0)
            }
        }
    };

    debug!(agx = slope.0, agy = slope.1, "Estimated phase ramp");
    Ok(slope)
}

/// Builds `exp(-i(ax*row + ay*col))` over a (height, width) grid.
pub fn phase_ramp(dim: (usize, usize), slope: (f64, f64)) -> PhaseRamp {
    let (ax, ay) = slope;
    let data = Array2::from_shape_fn(dim, |(x, y)| {
        Complex64::from_polar(1.0, -(ax * x as f64 + ay * y as f64))
    });
    PhaseRamp::new(data, slope)
}

/// Estimates the phase ramp of `field` and multiplies it out.
pub fn remove_phase_ramp(field: &ComplexField, weight: RampWeight, return_ramp: bool) -> Result<RampRemoval> {
    let slope = estimate_phase_ramp(field, weight)?;
    let ramp = phase_ramp(field.dim(), slope);

    let corrected = Zip::from(field.data())
        .and(ramp.data())
        .map_collect(|&a, &p| a * p);

    Ok(RampRemoval {
        field: ComplexField::new(corrected),
        ramp: if return_ramp { Some(ramp) } else { None },
        slope,
    })
}
