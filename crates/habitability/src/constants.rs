//! Physical constants shared by every calculation.
//!
//! Unit conversion factors (solar mass in kg, AU in meters, seconds per day)
//! live with their quantity types in the `units` crate; this module holds the
//! constants that appear directly in the formulas.

/// Gravitational constant in m³ kg⁻¹ s⁻² (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Stefan-Boltzmann constant in W m⁻² K⁻⁴
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Inner habitable-zone edge for a 1 L☉ star, in AU.
///
/// Empirical runaway-greenhouse boundary (Kasting et al. 1993); a
/// configuration constant, not derived in-model.
pub const HZ_INNER_AU: f64 = 0.95;

/// Outer habitable-zone edge for a 1 L☉ star, in AU.
///
/// Empirical maximum-greenhouse boundary; a configuration constant, not
/// derived in-model.
pub const HZ_OUTER_AU: f64 = 1.67;
