//! Field reading module
//!
//! Turns encoded images back into complex fields.

mod reader;
mod tiff_reader;

pub use reader::FieldReader;
pub use tiff_reader::TiffFieldReader;
