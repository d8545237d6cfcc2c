use ndarray::{Array3, ArrayView3, Axis, Zip};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::field::types::{HsvField, RgbField};

/// Guards every division in the max/min decomposition
const EPS: f64 = 1e-6;

#[inline]
fn pixel_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    let s = if maxc <= EPS { 0.0 } else { (maxc - minc) / (maxc + EPS) };

    // greyscale has no hue
    if minc == maxc {
        return (0.0, s, v);
    }

    let span = maxc - minc + EPS;
    let rc = (maxc - r) / span;
    let gc = (maxc - g) / span;
    let bc = (maxc - b) / span;

    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0), s, v)
}

fn hsv_from_view(rgb: ArrayView3<'_, f64>) -> HsvField {
    let (height, width, _) = rgb.dim();
    let mut hsv = Array3::<f64>::zeros((3, height, width));

    Zip::from(hsv.lanes_mut(Axis(0)))
        .and(rgb.lanes(Axis(2)))
        .for_each(|mut out, px| {
            let (h, s, v) = pixel_hsv(px[0] / 255.0, px[1] / 255.0, px[2] / 255.0);
            out[0] = h;
            out[1] = s;
            out[2] = v;
        });

    HsvField::from_array(hsv)
}

/// 8-bit RGB (H, W, 3) back to HSV (3, H, W) with every channel in `[0, 1]`.
pub fn rgb_to_hsv(rgb: &RgbField) -> HsvField {
    hsv_from_view(rgb.to_float().view())
}

/// Float RGB (H, W, 3) in `[0, 255]`, as produced by `hsv_to_rgb_float`, back to HSV.
pub fn rgb_to_hsv_float(rgb: &Array3<f64>) -> Result<HsvField> {
    if rgb.len_of(Axis(2)) != 3 {
        return Err(ConversionError::ShapeMismatch {
            expected: "(height, width, 3)",
            found: rgb.shape().to_vec(),
        });
    }
    Ok(hsv_from_view(rgb.view()))
}
