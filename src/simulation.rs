//! Simulation driver: owns the bodies and walks them through time.

use crate::config::SimulationConfig;
use crate::physics::body::{self, Body};
use crate::physics::energy;
use crate::physics::integrators::{Integrator, SymplecticEuler};
use crate::physics::math::Scalar;
use tracing::debug;

/// One running simulation: a body collection, an integrator with its
/// scratch buffers, and a fixed time step.
///
/// Everything here is exclusively owned; running simulations concurrently
/// means one `Simulation` per thread.
pub struct Simulation {
    bodies: Vec<Body>,
    integrator: Box<dyn Integrator>,
    dt: Scalar,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>, integrator: Box<dyn Integrator>, dt: Scalar) -> Self {
        Self {
            bodies,
            integrator,
            dt,
        }
    }

    /// The fixed five-body solar system under the configured time step.
    pub fn solar_system(config: &SimulationConfig) -> Self {
        let bodies = body::solar_system();
        let integrator = Box::new(SymplecticEuler::new(bodies.len()));
        Self::new(bodies, integrator, config.physics.dt)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn dt(&self) -> Scalar {
        self.dt
    }

    /// Zero the system's total momentum by adjusting the primary body.
    /// Call once, before the first energy report.
    pub fn offset_momentum(&mut self) {
        body::offset_momentum(&mut self.bodies);
    }

    pub fn total_energy(&self) -> Scalar {
        energy::total_energy(&self.bodies)
    }

    /// Advance the system by one time step.
    pub fn advance(&mut self) {
        self.integrator.advance(&mut self.bodies, self.dt);
    }

    /// Advance the system by `steps` time steps.
    pub fn run(&mut self, steps: usize) {
        debug!(
            steps,
            dt = self.dt,
            integrator = self.integrator.name(),
            "advancing system"
        );
        for _ in 0..steps {
            self.advance();
        }
    }
}
