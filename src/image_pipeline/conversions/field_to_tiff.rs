use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    colormap::render_complex,
    common::error::{ConversionError, Result},
    conversions::timing::{PipelineStep, PipelineTimings},
    field::types::{ComplexField, RenderedImage},
    phase_ramp::remove_phase_ramp,
    source::{FieldReader, TiffFieldReader},
    tiff::{TiffWriter, StandardTiffWriter, ConversionConfig},
};

pub struct FieldToTiffPipeline<R: FieldReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl FieldToTiffPipeline<TiffFieldReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: TiffFieldReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: FieldReader, W: TiffWriter> FieldToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Ramp removal, modulus scaling and colour encoding of an in-memory field.
    #[instrument(skip(self, field), fields(width = field.width(), height = field.height()))]
    pub fn render(&self, field: &ComplexField) -> Result<RenderedImage> {
        self.render_timed(field, &mut PipelineTimings::new())
    }

    fn render_timed(&self, field: &ComplexField, timings: &mut PipelineTimings) -> Result<RenderedImage> {
        self.validate_dimensions(field.width(), field.height())?;

        let ramp_free;
        let field = match self.config.remove_ramp {
            Some(weight) => {
                let removal = timings.time(PipelineStep::RemovePhaseRamp, || {
                    remove_phase_ramp(field, weight, false)
                })?;
                info!(?weight, agx = removal.slope.0, agy = removal.slope.1, "Removed phase ramp");
                ramp_free = removal.field;
                &ramp_free
            }
            None => field,
        };

        let scaled = timings.time(PipelineStep::ScaleModulus, || self.config.modulus.apply(field));

        timings.time(PipelineStep::EncodeColors, || {
            render_complex(&scaled, self.config.vmin, self.config.vmax, None)
        })
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        info!("Starting field to TIFF conversion");
        let mut timings = PipelineTimings::new();

        let field = timings.time(PipelineStep::DecodeField, || self.reader.read_field(input_data))?;
        let image = self.render_timed(&field, &mut timings)?;
        timings.time(PipelineStep::EncodeTiff, || {
            self.writer.write_tiff(&image, output, &self.config)
        })?;

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)
    }

    /// Renders a field produced in memory and writes it to `output_path`.
    #[instrument(skip(self, field, output_path))]
    pub fn save_field<P: AsRef<Path>>(&self, field: &ComplexField, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        let image = self.render(field)?;

        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        self.writer.write_tiff(&image, &mut output_file, &self.config)?;

        info!(output = %output_path.display(), "Field saved");
        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
