//! Complex field colour encoding
//!
//! Phase is mapped to hue, amplitude to value, saturation is kept at its
//! maximum. The decode path inverts the mapping up to a global amplitude scale.

mod complex_hsv;
mod hsv_rgb;
mod rgb_hsv;

pub use complex_hsv::{complex_to_hsv, complex_to_rgb, hsv_to_complex, rgb_to_complex};
pub use hsv_rgb::{hsv_to_rgb, hsv_to_rgb_float};
pub use rgb_hsv::{rgb_to_hsv, rgb_to_hsv_float};
