//! Body state and the fixed solar-system configuration.

use crate::physics::math::{DAYS_PER_YEAR, SOLAR_MASS, Scalar, Vector};

/// A point mass with position and velocity in heliocentric units.
///
/// Positions are astronomical-unit-like, velocities per year, and masses
/// multiples of [`SOLAR_MASS`]. Mass is fixed at construction; position and
/// velocity are mutated in place by the integrator every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    mass: Scalar,
}

impl Body {
    pub fn new(position: Vector, velocity: Vector, mass: Scalar) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// The Sun plus the four gas giants in their canonical configuration.
///
/// Velocity literals are tabulated per day and converted to per-year units
/// here, at construction. Index 0 is the primary body; the ordering is part
/// of the reproducibility contract because pair enumeration follows it.
pub fn solar_system() -> Vec<Body> {
    vec![
        // Sun
        Body::new(Vector::ZERO, Vector::ZERO, SOLAR_MASS),
        // Jupiter
        Body::new(
            Vector::new(
                4.84143144246472090e+00,
                -1.16032004402742839e+00,
                -1.03622044471123109e-01,
            ),
            Vector::new(
                1.66007664274403694e-03,
                7.69901118419740425e-03,
                -6.90460016972063023e-05,
            ) * DAYS_PER_YEAR,
            9.54791938424326609e-04 * SOLAR_MASS,
        ),
        // Saturn
        Body::new(
            Vector::new(
                8.34336671824457987e+00,
                4.12479856412430479e+00,
                -4.03523417114321381e-01,
            ),
            Vector::new(
                -2.76742510726862411e-03,
                4.99852801234917238e-03,
                2.30417297573763929e-05,
            ) * DAYS_PER_YEAR,
            2.85885980666130812e-04 * SOLAR_MASS,
        ),
        // Uranus
        Body::new(
            Vector::new(
                1.28943695621391310e+01,
                -1.51111514016986312e+01,
                -2.23307578892655734e-01,
            ),
            Vector::new(
                2.96460137564761618e-03,
                2.37847173959480950e-03,
                -2.96589568540237556e-05,
            ) * DAYS_PER_YEAR,
            4.36624404335156298e-05 * SOLAR_MASS,
        ),
        // Neptune
        Body::new(
            Vector::new(
                1.53796971148509165e+01,
                -2.59193146099879641e+01,
                1.79258772950371181e-01,
            ),
            Vector::new(
                2.68067772490389322e-03,
                1.62824170038242295e-03,
                -9.51592254519715870e-05,
            ) * DAYS_PER_YEAR,
            5.15138902046611451e-05 * SOLAR_MASS,
        ),
    ]
}

/// Adjust the primary body's velocity so the system's total momentum, in
/// reference-mass units, is approximately zero.
///
/// Runs once, before the first energy evaluation and before any integration
/// step. Only the velocity of the body at index 0 is mutated.
pub fn offset_momentum(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        let correction = bodies[i].velocity * bodies[i].mass / SOLAR_MASS;
        bodies[0].velocity -= correction;
    }
}
