//! Orrery prelude module
//!
//! Re-exports the most commonly used types and functions across the crate
//! to reduce import boilerplate.

pub use crate::config::SimulationConfig;
pub use crate::physics::body::{Body, offset_momentum, solar_system};
pub use crate::physics::energy::total_energy;
pub use crate::physics::integrators::{Integrator, SymplecticEuler};
pub use crate::physics::math::{DAYS_PER_YEAR, SOLAR_MASS, Scalar, Vector};
pub use crate::simulation::Simulation;
