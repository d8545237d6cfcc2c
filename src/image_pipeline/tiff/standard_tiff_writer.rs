use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::field::types::{PixelLayout, RenderedImage};
use crate::image_pipeline::tiff::types::{ConversionConfig, TiffCompression};
use crate::image_pipeline::tiff::writer::TiffWriter;

pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, image: &RenderedImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{} {:?}", image.width, image.height, image.layout);

        let expected = image.width * image.height * image.layout.channels();
        if image.data.len() != expected {
            return Err(ConversionError::EncodeError(format!(
                "expected {} bytes for {}x{} {:?}, got {}",
                expected, image.width, image.height, image.layout, image.data.len()
            )));
        }
        
        let mut buffer = Vec::new();
        
        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };
        
        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);
        
        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        let (width, height) = (image.width as u32, image.height as u32);
        let written = match image.layout {
            PixelLayout::Gray8 => encoder.write_image::<tiff::encoder::colortype::Gray8>(width, height, &image.data),
            PixelLayout::Rgb8 => encoder.write_image::<tiff::encoder::colortype::RGB8>(width, height, &image.data),
        };
        written.map_err(|e| ConversionError::EncodeError(e.to_string()))?;
        
        output.write_all(&buffer)?;
        
        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode(bytes: Vec<u8>) -> (u32, u32, tiff::ColorType, Vec<u8>) {
        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(bytes)).unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        let color = decoder.colortype().unwrap();
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U8(data) => (width, height, color, data),
            _ => panic!("expected 8-bit samples"),
        }
    }

    #[test]
    fn test_write_rgb() {
        let image = RenderedImage {
            width: 2,
            height: 2,
            layout: PixelLayout::Rgb8,
            data: (0..12).collect(),
        };
        let mut output = Vec::new();
        StandardTiffWriter.write_tiff(&image, &mut output, &ConversionConfig::default()).unwrap();

        let (width, height, color, data) = decode(output);
        assert_eq!((width, height), (2, 2));
        assert_eq!(color, tiff::ColorType::RGB(8));
        assert_eq!(data, image.data);
    }

    #[test]
    fn test_write_gray_compressed() {
        let image = RenderedImage::gray(4, 3, (0..12).map(|v| v * 20).collect());
        for compression in [TiffCompression::Lzw, TiffCompression::DeflateBest] {
            let config = ConversionConfig::builder()
                .compression(compression)
                .predictor(Some(2))
                .build();
            let mut output = Vec::new();
            StandardTiffWriter.write_tiff(&image, &mut output, &config).unwrap();

            let (width, height, color, data) = decode(output);
            assert_eq!((width, height), (4, 3));
            assert_eq!(color, tiff::ColorType::Gray(8));
            assert_eq!(data, image.data);
        }
    }

    #[test]
    fn test_rejects_short_buffer() {
        let image = RenderedImage::gray(4, 4, vec![0; 10]);
        let mut output = Vec::new();
        let result = StandardTiffWriter.write_tiff(&image, &mut output, &ConversionConfig::default());
        assert!(matches!(result.unwrap_err(), ConversionError::EncodeError(_)));
        assert!(output.is_empty());
    }
}
