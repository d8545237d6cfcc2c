use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::field::types::ComplexField;

pub trait FieldReader {
    fn read_field(&self, data: &[u8]) -> Result<ComplexField>;
}
