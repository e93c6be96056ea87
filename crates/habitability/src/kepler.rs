//! Kepler's third law.

use std::f64::consts::PI;

use units::{Length, Mass, Time};

use crate::constants::GRAVITATIONAL_CONSTANT;

/// Semi-major axis from stellar mass and orbital period
///
/// Kepler's third law for a planet of negligible mass:
/// a = (G·M·P² / 4π²)^(1/3). The result depends on neither eccentricity nor
/// inclination.
///
/// # Examples
/// ```
/// use units::{Mass, Time};
/// use habitability::kepler::semi_major_axis;
///
/// // Earth-like orbit: 365 days around 1 M☉ lands at ~1 AU
/// let a = semi_major_axis(Mass::from_solar_masses(1.0), Time::from_days(365.0));
/// assert!((a.to_au() - 1.0).abs() < 0.01);
/// ```
pub fn semi_major_axis(star_mass: Mass, period: Time) -> Length {
    let gm = GRAVITATIONAL_CONSTANT * star_mass.to_kg();
    let p = period.to_seconds();
    Length::from_meters((gm * p * p / (4.0 * PI * PI)).cbrt())
}
