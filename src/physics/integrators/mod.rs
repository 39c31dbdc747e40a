//! Numerical integration methods for the n-body system

use crate::physics::body::Body;
use crate::physics::math::Scalar;

pub mod symplectic_euler;

pub use symplectic_euler::SymplecticEuler;

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Advance every body by one time step.
    ///
    /// Each call is a complete, independent transition of the collection
    /// from one state to the next. Implementations may keep scratch storage
    /// between calls for throughput, but no information survives from one
    /// step to another.
    ///
    /// # Arguments
    /// * `bodies` - The full body collection, mutated in place
    /// * `dt` - Time step
    fn advance(&mut self, bodies: &mut [Body], dt: Scalar);

    /// Get the name of this integrator
    fn name(&self) -> &'static str;

    /// Get the order of this integrator
    fn convergence_order(&self) -> usize;
}
