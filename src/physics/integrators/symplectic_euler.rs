//! Symplectic Euler integration of the pairwise gravitational forces
//!
//! First-order but symplectic: velocities absorb every pairwise impulse
//! first, then positions advance on the *updated* velocities. That ordering
//! gives bounded long-run energy oscillation where explicit Euler drifts,
//! and it must not be interleaved.

use super::Integrator;
use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

/// Number of unordered pairs among `n` bodies.
#[inline]
fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Single-precision seed for 1/√d², refined by Newton-Raphson in the
/// magnitude pass.
#[inline]
fn rsqrt_seed(d_squared: Scalar) -> Scalar {
    (1.0f32 / libm::sqrtf(d_squared as f32)) as Scalar
}

/// Pairwise symplectic Euler kernel with reusable scratch buffers.
///
/// Holds one displacement vector and one step magnitude per unordered body
/// pair. The buffers are fully overwritten on every [`advance`] call and
/// exist only to avoid reallocation; they carry no state between steps.
/// They are resized to N·(N−1)/2 on each call, so a changed body count can
/// never silently truncate.
///
/// A single instance must not be shared across threads: the scratch buffers
/// are mutated in place. Independent simulations need one instance each.
///
/// [`advance`]: Integrator::advance
pub struct SymplecticEuler {
    displacements: Vec<Vector>,
    magnitudes: Vec<Scalar>,
}

impl SymplecticEuler {
    /// Create a kernel with scratch capacity for `body_count` bodies.
    pub fn new(body_count: usize) -> Self {
        let pairs = pair_count(body_count);
        Self {
            displacements: vec![Vector::ZERO; pairs],
            magnitudes: vec![0.0; pairs],
        }
    }
}

impl Default for SymplecticEuler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Integrator for SymplecticEuler {
    fn advance(&mut self, bodies: &mut [Body], dt: Scalar) {
        let n = bodies.len();
        let pairs = pair_count(n);
        self.displacements.resize(pairs, Vector::ZERO);
        self.magnitudes.resize(pairs, 0.0);

        // Displacement pass. The i-outer/j-inner enumeration fixes the
        // floating-point summation order everywhere downstream; every later
        // pass walks the buffers in this exact order.
        let mut k = 0;
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                self.displacements[k] = bodies[i].position - bodies[j].position;
                k += 1;
            }
        }

        // Magnitude pass, two pairs per iteration. Each lane starts from a
        // fast single-precision 1/sqrt estimate and applies the
        // Newton-Raphson refinement y <- y*1.5 - 0.5*d^2*y^3 twice; the
        // result is not required to be bit-exact against a direct
        // 1/sqrt(d^2), only to hold the energy drift inside its tolerance.
        for (dx, mag) in self
            .displacements
            .chunks_exact(2)
            .zip(self.magnitudes.chunks_exact_mut(2))
        {
            let d_squared = [dx[0].length_squared(), dx[1].length_squared()];
            let mut y = [rsqrt_seed(d_squared[0]), rsqrt_seed(d_squared[1])];
            for _ in 0..2 {
                for lane in 0..2 {
                    y[lane] = y[lane] * 1.5 - (0.5 * d_squared[lane] * y[lane]) * (y[lane] * y[lane]);
                }
            }
            mag[0] = dt / d_squared[0] * y[0];
            mag[1] = dt / d_squared[1] * y[1];
        }
        // Leftover pair when the pair count is odd: same arithmetic, one lane.
        if pairs % 2 == 1 {
            let dx = self.displacements[pairs - 1];
            let d_squared = dx.length_squared();
            let mut y = rsqrt_seed(d_squared);
            for _ in 0..2 {
                y = y * 1.5 - (0.5 * d_squared * y) * (y * y);
            }
            self.magnitudes[pairs - 1] = dt / d_squared * y;
        }

        // Velocity pass: re-walk the same pair order and apply one
        // equal-and-opposite impulse per pair, so each interaction is
        // computed once instead of twice.
        let mut k = 0;
        for i in 0..n.saturating_sub(1) {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let body_i = &mut head[i];
            for body_j in tail.iter_mut() {
                let dx = self.displacements[k];
                let mag = self.magnitudes[k];
                body_i.velocity -= dx * body_j.mass() * mag;
                body_j.velocity += dx * body_i.mass() * mag;
                k += 1;
            }
        }

        // Position pass runs only after every pairwise impulse has landed,
        // advancing on the already-updated velocities.
        for body in bodies.iter_mut() {
            body.position += body.velocity * dt;
        }
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }

    fn convergence_order(&self) -> usize {
        1
    }
}
