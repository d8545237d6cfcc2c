//! Phase ramp estimation and removal
//!
//! Normalises complex fields before display by estimating the mean linear
//! phase gradient and multiplying it out.

mod gradient;
mod ramp;

pub use gradient::gradient;
pub use ramp::{estimate_phase_ramp, phase_ramp, remove_phase_ramp, RampRemoval, RampWeight};
