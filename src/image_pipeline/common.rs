//! Common utilities module
//!
//! Error type shared by the transforms, the TIFF layer and the pipeline.

pub mod error;

pub use error::{ConversionError, Result};
