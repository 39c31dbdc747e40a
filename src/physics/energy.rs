//! Total mechanical energy of the system.

use crate::physics::body::Body;
use crate::physics::math::Scalar;

/// Kinetic energy of every body minus the potential of every unordered
/// pair, enumerated i-outer/j-inner so the floating-point summation order
/// is fixed.
///
/// Pure: identical input always gives an identical result. Two coincident
/// bodies divide by zero here; the fixed solar-system configuration cannot
/// reach that state and the case is deliberately left unguarded.
pub fn total_energy(bodies: &[Body]) -> Scalar {
    let mut energy = 0.0;
    for (i, body_i) in bodies.iter().enumerate() {
        energy += body_i.kinetic_energy();
        for body_j in &bodies[i + 1..] {
            let dx = body_i.position - body_j.position;
            energy -= body_i.mass() * body_j.mass() / libm::sqrt(dx.length_squared());
        }
    }
    energy
}
