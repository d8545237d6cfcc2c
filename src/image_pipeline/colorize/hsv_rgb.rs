use ndarray::{Array3, Axis, Zip};

use crate::image_pipeline::field::types::{HsvField, RgbField};

/// Red, green and blue in `[0, 1]` for one HSV sample.
///
/// The sector is `floor(6h) mod 6`, so `h = 1` wraps onto sector 0 with `h = 0`.
#[inline]
fn sector_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let scaled = 6.0 * h;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSV (3, H, W) to RGB (H, W, 3) as floats in `[0, 255]`.
pub fn hsv_to_rgb_float(hsv: &HsvField) -> Array3<f64> {
    let (height, width) = hsv.dim();
    let mut rgb = Array3::<f64>::zeros((height, width, 3));

    Zip::from(rgb.lanes_mut(Axis(2)))
        .and(hsv.hue())
        .and(hsv.saturation())
        .and(hsv.value())
        .for_each(|mut px, &h, &s, &v| {
            let (r, g, b) = sector_rgb(h, s, v);
            px[0] = 255.0 * r;
            px[1] = 255.0 * g;
            px[2] = 255.0 * b;
        });

    rgb
}

/// HSV (3, H, W) to 8-bit RGB (H, W, 3). Channels are truncated, not rounded.
pub fn hsv_to_rgb(hsv: &HsvField) -> RgbField {
    RgbField::from_array(hsv_to_rgb_float(hsv).mapv(|c| c as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn single(h: f64, s: f64, v: f64) -> HsvField {
        HsvField::from_channels(
            &Array2::from_elem((1, 1), h),
            &Array2::from_elem((1, 1), s),
            &Array2::from_elem((1, 1), v),
        )
        .unwrap()
    }

    fn pixel(h: f64, s: f64, v: f64) -> [u8; 3] {
        let rgb = hsv_to_rgb(&single(h, s, v));
        let data = rgb.data();
        [data[[0, 0, 0]], data[[0, 0, 1]], data[[0, 0, 2]]]
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(pixel(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(pixel(0.5, 1.0, 1.0), [0, 255, 255]);
        assert_eq!(pixel(1.0, 1.0, 1.0), [255, 0, 0]);
    }

    #[test]
    fn test_sector_table() {
        // f = 0.5 in every sector: p = 0, q = t = 0.5
        assert_eq!(pixel(0.5 / 6.0, 1.0, 1.0), [255, 127, 0]);
        assert_eq!(pixel(1.5 / 6.0, 1.0, 1.0), [127, 255, 0]);
        assert_eq!(pixel(2.5 / 6.0, 1.0, 1.0), [0, 255, 127]);
        assert_eq!(pixel(3.5 / 6.0, 1.0, 1.0), [0, 127, 255]);
        assert_eq!(pixel(4.5 / 6.0, 1.0, 1.0), [127, 0, 255]);
        assert_eq!(pixel(5.5 / 6.0, 1.0, 1.0), [255, 0, 127]);
    }

    #[test]
    fn test_unsaturated_is_grey() {
        assert_eq!(pixel(0.3, 0.0, 0.5), [127, 127, 127]);
        assert_eq!(pixel(0.7, 1.0, 0.0), [0, 0, 0]);
    }

    #[test]
    fn test_float_stage_keeps_fraction() {
        let rgb = hsv_to_rgb_float(&single(0.25, 1.0, 1.0));
        assert!((rgb[[0, 0, 0]] - 127.5).abs() < 1e-9);
        assert_eq!(rgb[[0, 0, 1]], 255.0);
        assert_eq!(rgb[[0, 0, 2]], 0.0);
    }
}
