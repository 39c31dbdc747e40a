//! Conservation-law checks for the pairwise kernel.
//!
//! These assert tolerance bands rather than bit-exact values: the kernel's
//! approximate reciprocal square root is allowed to differ from a direct
//! evaluation as long as the physics stays put.

use orrery::prelude::*;

#[test]
fn normalization_zeroes_total_momentum() {
    let mut bodies = solar_system();
    offset_momentum(&mut bodies);

    let total: Vector = bodies.iter().map(Body::momentum).sum();
    let largest_term = bodies
        .iter()
        .map(|b| b.momentum().length())
        .fold(0.0, Scalar::max);

    assert!(
        total.length() <= 1e-10 * largest_term,
        "residual momentum {} exceeds 1e-10 of largest term {}",
        total.length(),
        largest_term
    );
}

#[test]
fn total_momentum_is_conserved_across_steps() {
    let mut bodies = solar_system();
    offset_momentum(&mut bodies);
    let mut integrator = SymplecticEuler::new(bodies.len());

    let before: Vector = bodies.iter().map(Body::momentum).sum();
    for _ in 0..100 {
        integrator.advance(&mut bodies, 0.01);
    }
    let after: Vector = bodies.iter().map(Body::momentum).sum();

    // Pairwise impulses cancel exactly up to rounding, so the drift over a
    // hundred steps stays near machine epsilon at this momentum scale.
    assert!((after - before).length() < 1e-12);
}

#[test]
fn pairwise_impulses_are_equal_and_opposite() {
    let mut bodies = vec![
        Body::new(Vector::new(-1.0, 0.25, 0.0), Vector::ZERO, 3.0),
        Body::new(Vector::new(2.0, -0.5, 0.75), Vector::ZERO, 0.125),
    ];
    let velocities_before: Vec<Vector> = bodies.iter().map(|b| b.velocity).collect();
    let mut integrator = SymplecticEuler::new(bodies.len());

    integrator.advance(&mut bodies, 0.01);

    let impulse_a = (bodies[0].velocity - velocities_before[0]) * bodies[0].mass();
    let impulse_b = (bodies[1].velocity - velocities_before[1]) * bodies[1].mass();

    assert!(
        (impulse_a + impulse_b).length() <= 1e-12 * impulse_a.length(),
        "impulses not equal and opposite: {impulse_a:?} vs {impulse_b:?}"
    );
}

#[test]
fn energy_drift_stays_bounded_over_ten_thousand_steps() {
    let mut simulation = Simulation::solar_system(&SimulationConfig::default());
    simulation.offset_momentum();

    let initial = simulation.total_energy();
    simulation.run(10_000);
    let settled = simulation.total_energy();

    let drift = ((settled - initial) / initial).abs();
    assert!(
        drift < 0.01,
        "energy drift too large over 10k steps: {:.4}%",
        drift * 100.0
    );
}
