//! The single-planet Keplerian radial-velocity relation.
//!
//! One physical relation, solved for either unknown: the reflex velocity a
//! planet induces on its star, or the planet mass behind an observed
//! velocity. Which direction runs depends on which quantity the caller
//! already has; both share the factors below rather than duplicating the
//! formula.

use std::f64::consts::TAU;

use units::{Mass, Time, Velocity};

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::orbit::Orbit;

/// sqrt(1 - e²), the eccentricity correction to the velocity amplitude.
///
/// Callers validate e < 1 first; at the documented limit of 0.99 this is
/// still a well-conditioned 0.141.
fn eccentricity_factor(eccentricity: f64) -> f64 {
    (1.0 - eccentricity * eccentricity).sqrt()
}

/// (P / 2πG)^(1/3) in SI units, the period leverage common to both directions
fn period_factor(period: Time) -> f64 {
    (period.to_seconds() / (TAU * GRAVITATIONAL_CONSTANT)).cbrt()
}

/// Planet mass from an observed radial-velocity semi-amplitude
///
/// M_p = K · sqrt(1 − e²) · M★^(2/3) · (P / 2πG)^(1/3) / sin i
///
/// Treats the star as dominating the system mass, the leading-order form
/// used when the planet mass is the unknown.
///
/// # Examples
/// ```
/// use units::{Mass, Time, Velocity};
/// use habitability::orbit::Orbit;
/// use habitability::radial_velocity::planet_mass_from_amplitude;
///
/// // A 10 m/s signal with a one-year period around a Sun-like star
/// let orbit = Orbit::circular_edge_on(Time::from_days(365.0));
/// let mass = planet_mass_from_amplitude(
///     Velocity::from_meters_per_sec(10.0),
///     Mass::from_solar_masses(1.0),
///     &orbit,
/// );
/// assert!((mass.to_earth_masses() - 112.0).abs() < 2.0);
/// ```
pub fn planet_mass_from_amplitude(
    amplitude: Velocity,
    star_mass: Mass,
    orbit: &Orbit,
) -> Mass {
    let k = amplitude.to_meters_per_sec();
    let mass_kg = k
        * eccentricity_factor(orbit.eccentricity)
        * star_mass.to_kg().powf(2.0 / 3.0)
        * period_factor(orbit.period)
        / orbit.sin_inclination();
    Mass::from_kg(mass_kg)
}

/// Radial-velocity semi-amplitude a planet of known mass induces on its star
///
/// K = (2πG / P)^(1/3) · M_p·sin i / (M★ + M_p)^(2/3) / sqrt(1 − e²)
///
/// The denominator carries the total system mass, so this direction stays
/// accurate even for companions that are not negligible next to their star.
pub fn amplitude_from_planet_mass(
    planet_mass: Mass,
    star_mass: Mass,
    orbit: &Orbit,
) -> Velocity {
    let total_mass = star_mass + planet_mass;
    let k = planet_mass.to_kg() * orbit.sin_inclination()
        / period_factor(orbit.period)
        / total_mass.to_kg().powf(2.0 / 3.0)
        / eccentricity_factor(orbit.eccentricity);
    Velocity::from_meters_per_sec(k)
}
