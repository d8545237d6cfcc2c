//! Complex field reader for 8-bit TIFF images.
//!
//! Colour images are decoded through the inverse HSV mapping, so a file
//! written from a complex field reads back with its phase intact and its
//! amplitude normalised to a maximum of 1.

use std::io::Cursor;

use ndarray::Array2;
use num_complex::Complex64;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;
use tracing::debug;

use crate::image_pipeline::colorize::rgb_to_complex;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::field::types::{ComplexField, RgbField};
use crate::image_pipeline::source::reader::FieldReader;

/// Reads RGB8, RGBA8 and Gray8 TIFF images.
///
/// * RGB: hue is phase, value is amplitude (see `rgb_to_complex`)
/// * RGBA: alpha is discarded, then as RGB
/// * Gray: zero-phase field with amplitude `level / 255`
pub struct TiffFieldReader;

impl FieldReader for TiffFieldReader {
    fn read_field(&self, data: &[u8]) -> Result<ComplexField> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let color = decoder
            .colortype()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!("Decoded header: {}x{} {:?}", width, height, color);

        if !matches!(color, ColorType::RGB(8) | ColorType::RGBA(8) | ColorType::Gray(8)) {
            return Err(ConversionError::UnsupportedFormat(format!("TIFF color type {:?}", color)));
        }

        let samples = match decoder
            .read_image()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(samples) => samples,
            _ => return Err(ConversionError::UnsupportedFormat(format!("TIFF sample format for {:?}", color))),
        };

        let (width, height) = (width as usize, height as usize);
        let field = match color {
            ColorType::RGBA(_) => {
                let rgb = samples
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                rgb_to_complex(&RgbField::from_interleaved(width, height, rgb)?)
            }
            ColorType::Gray(_) => {
                let amplitude = samples
                    .iter()
                    .map(|&level| Complex64::new(f64::from(level) / 255.0, 0.0))
                    .collect();
                let data = Array2::from_shape_vec((height, width), amplitude)
                    .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
                ComplexField::new(data)
            }
            _ => rgb_to_complex(&RgbField::from_interleaved(width, height, samples)?),
        };

        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::colorize::complex_to_rgb;
    use crate::image_pipeline::field::types::RenderedImage;
    use crate::image_pipeline::tiff::{ConversionConfig, StandardTiffWriter, TiffWriter};

    fn encode(image: &RenderedImage) -> Vec<u8> {
        let mut out = Vec::new();
        StandardTiffWriter
            .write_tiff(image, &mut out, &ConversionConfig::default())
            .unwrap();
        out
    }

    #[test]
    fn test_rgb_tiff_reads_back_phase() {
        let field = ComplexField::new(Array2::from_shape_fn((4, 6), |(i, j)| {
            Complex64::from_polar(1.0, -2.5 + 0.2 * (i * 6 + j) as f64)
        }));
        let image = RenderedImage::from_rgb(&complex_to_rgb(&field, None, None).unwrap());

        let back = TiffFieldReader.read_field(&encode(&image)).unwrap();
        assert_eq!(back.dim(), (4, 6));
        for (a, b) in field.data().iter().zip(back.data().iter()) {
            assert!((a.arg() - b.arg()).sin().abs() < 0.03);
            assert!((b.norm() - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_gray_tiff_is_real_amplitude() {
        let image = RenderedImage::gray(2, 1, vec![255, 51]);
        let back = TiffFieldReader.read_field(&encode(&image)).unwrap();
        assert_eq!(back.data()[[0, 0]], Complex64::new(1.0, 0.0));
        assert!((back.data()[[0, 1]].re - 0.2).abs() < 1e-12);
        assert_eq!(back.data()[[0, 1]].im, 0.0);
    }

    #[test]
    fn test_sixteen_bit_is_unsupported() {
        let mut bytes = Vec::new();
        {
            let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut bytes)).unwrap();
            encoder
                .write_image::<tiff::encoder::colortype::Gray16>(2, 2, &[0u16, 1, 2, 3])
                .unwrap();
        }

        let result = TiffFieldReader.read_field(&bytes);
        assert!(matches!(result.unwrap_err(), ConversionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let result = TiffFieldReader.read_field(b"not a tiff");
        assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
    }
}
