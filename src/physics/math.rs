//! Scalar and vector types shared across the physics core.

use std::f64::consts::PI;

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and displacements
pub type Vector = glam::DVec3;

/// Unit mass. Choosing 4π² makes the gravitational constant 1 in
/// astronomical-unit and year units, so it never appears in the force
/// calculation.
pub const SOLAR_MASS: Scalar = 4.0 * PI * PI;

/// Conversion factor for velocity literals tabulated per day.
pub const DAYS_PER_YEAR: Scalar = 365.24;
