use ptyviz_rs::image_pipeline::{ConversionConfig, FieldToTiffPipeline, RampWeight, TiffCompression};
use ptyviz_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting ptyviz...");

    let config = ConversionConfig::builder()
        .compression(TiffCompression::DeflateBalanced)
        .remove_ramp(Some(RampWeight::Modulus))
        .build();
    let pipeline = FieldToTiffPipeline::new(config);

    info!("Field to TIFF pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);
    info!(
        "Phase ramp removal: {}",
        match pipeline.config().remove_ramp {
            Some(RampWeight::Modulus) => "modulus weighted",
            Some(RampWeight::None) => "unweighted",
            None => "disabled",
        }
    );

    match pipeline.convert_file("input.tiff", "output.tiff") {
        Ok(timings) => {
            info!("Conversion successful!");
            timings.log_summary();
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
