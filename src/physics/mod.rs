//! The gravitational n-body core.

pub mod body;
pub mod energy;
pub mod integrators;
pub mod math;
