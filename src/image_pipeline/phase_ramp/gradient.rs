use ndarray::{Array2, ArrayView2, Axis, Slice, Zip};
use num_complex::Complex64;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Discrete derivative of `a` along `axis` with unit sample spacing.
///
/// Central differences in the interior, first-order one-sided differences on
/// the two edges. The axis needs at least two samples.
pub fn gradient(a: ArrayView2<'_, Complex64>, axis: Axis) -> Result<Array2<Complex64>> {
    let n = a.len_of(axis);
    if n < 2 {
        return Err(ConversionError::InvalidDimensions(a.ncols(), a.nrows()));
    }

    let mut out = Array2::<Complex64>::zeros(a.raw_dim());

    if n > 2 {
        Zip::from(out.slice_axis_mut(axis, Slice::from(1..n - 1)))
            .and(a.slice_axis(axis, Slice::from(2..n)))
            .and(a.slice_axis(axis, Slice::from(0..n - 2)))
            .for_each(|o, &ahead, &behind| *o = (ahead - behind) * 0.5);
    }

    Zip::from(out.index_axis_mut(axis, 0))
        .and(a.index_axis(axis, 1))
        .and(a.index_axis(axis, 0))
        .for_each(|o, &next, &here| *o = next - here);

    Zip::from(out.index_axis_mut(axis, n - 1))
        .and(a.index_axis(axis, n - 1))
        .and(a.index_axis(axis, n - 2))
        .for_each(|o, &here, &prev| *o = here - prev);

    Ok(out)
}
