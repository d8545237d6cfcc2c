use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Number of entries in a sampled colormap
pub const LUT_SIZE: usize = 256;

/// `(x, y0, y1)` anchors: `y0` is approached from the left, `y1` leaves to the right.
type Segments = &'static [(f64, f64, f64)];

const GRAY: Segments = &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];

const FRANZ_RED: Segments = &[
    (0.0, 0.0, 0.0),
    (0.35, 0.0, 0.0),
    (0.66, 1.0, 1.0),
    (0.89, 1.0, 1.0),
    (1.0, 0.5, 0.5),
];

const FRANZ_GREEN: Segments = &[
    (0.0, 0.0, 0.0),
    (0.12, 0.0, 0.0),
    (0.16, 0.2, 0.2),
    (0.375, 1.0, 1.0),
    (0.64, 1.0, 1.0),
    (0.91, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];

const FRANZ_BLUE: Segments = &[
    (0.0, 0.0, 0.0),
    (0.15, 1.0, 1.0),
    (0.34, 1.0, 1.0),
    (0.65, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];

/// Colormaps available for real-valued images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Linear black to white
    Gray,
    /// Franz's map: black, blue, cyan, yellow, red, dark red
    Franz,
}

impl Colormap {
    fn segments(self) -> [Segments; 3] {
        match self {
            Colormap::Gray => [GRAY, GRAY, GRAY],
            Colormap::Franz => [FRANZ_RED, FRANZ_GREEN, FRANZ_BLUE],
        }
    }

    pub fn lut(self) -> ColormapLut {
        let [red, green, blue] = self.segments();
        let (red, green, blue) = (sample_segments(red), sample_segments(green), sample_segments(blue));
        let entries = (0..LUT_SIZE).map(|i| [red[i], green[i], blue[i]]).collect();
        ColormapLut { entries }
    }
}

impl FromStr for Colormap {
    type Err = ConversionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(Colormap::Gray),
            "franz" | "franzmap" => Ok(Colormap::Franz),
            other => Err(ConversionError::UnsupportedFormat(format!("colormap '{}'", other))),
        }
    }
}

/// Piecewise-linear interpolation of one channel at `LUT_SIZE` evenly spaced points.
fn sample_segments(segments: Segments) -> Vec<f64> {
    let last = segments.len() - 1;
    let mut table = vec![0.0; LUT_SIZE];
    table[0] = segments[0].2;
    table[LUT_SIZE - 1] = segments[last].1;

    for (k, slot) in table.iter_mut().enumerate().take(LUT_SIZE - 1).skip(1) {
        let x = k as f64 / (LUT_SIZE - 1) as f64;
        let ind = segments.partition_point(|&(anchor, _, _)| anchor < x);
        let (x0, _, left) = segments[ind - 1];
        let (x1, right, _) = segments[ind];
        let distance = (x - x0) / (x1 - x0);
        *slot = (distance * (right - left) + left).clamp(0.0, 1.0);
    }

    table
}

/// Sampled colormap, RGB in `[0, 1]`
#[derive(Debug, Clone)]
pub struct ColormapLut {
    entries: Vec<[f64; 3]>,
}

impl ColormapLut {
    pub fn entry(&self, index: usize) -> [f64; 3] {
        self.entries[index.min(LUT_SIZE - 1)]
    }

    /// Colour for a normalised position in `[0, 1]`.
    pub fn sample(&self, x: f64) -> [f64; 3] {
        let index = (x.clamp(0.0, 1.0) * LUT_SIZE as f64) as usize;
        self.entry(index)
    }

    /// Colour bytes for an 8-bit grey level.
    pub fn map_byte(&self, level: u8) -> [u8; 3] {
        let [r, g, b] = self.sample(f64::from(level) / 255.0);
        [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
    }
}
