//! Pipeline conversions module
//!
//! This module contains orchestration logic for rendering complex fields to TIFF.

mod field_to_tiff;
mod timing;


pub use field_to_tiff::FieldToTiffPipeline;
pub use timing::{PipelineStep, PipelineTimings, StepTiming};
