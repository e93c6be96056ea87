//! Radiation balance: incident flux and equilibrium temperature.

use std::f64::consts::PI;

use units::{Length, Luminosity, Temperature};

use crate::constants::STEFAN_BOLTZMANN;

/// Stellar flux arriving at the planet's orbit, in W/m²
///
/// F = L / 4πa². At 1 AU from a 1 L☉ star this reproduces the solar
/// constant, ~1361 W/m².
pub fn incident_flux(luminosity: Luminosity, orbital_radius: Length) -> f64 {
    let distance_m = orbital_radius.to_m();
    luminosity.to_watts() / (4.0 * PI * distance_m * distance_m)
}

/// Blackbody equilibrium temperature
///
/// T_eq = (F·(1 − A) / 4σ)^(1/4): absorbed flux balanced against thermal
/// re-radiation over the full sphere. Assumes isotropic re-radiation and no
/// greenhouse effect. Earth comes out at ~255 K against a measured surface
/// mean of ~288 K; the gap is the omitted greenhouse warming, not an error.
///
/// # Examples
/// ```
/// use units::{Length, Luminosity};
/// use habitability::temperature::equilibrium_temperature;
///
/// let t = equilibrium_temperature(
///     Length::from_au(1.0),
///     Luminosity::from_solar(1.0),
///     0.3,
/// );
/// assert!((t.to_kelvin() - 255.0).abs() < 3.0);
/// ```
pub fn equilibrium_temperature(
    orbital_radius: Length,
    luminosity: Luminosity,
    albedo: f64,
) -> Temperature {
    let flux = incident_flux(luminosity, orbital_radius);
    let absorbed = flux * (1.0 - albedo);
    Temperature::from_kelvin((absorbed / (4.0 * STEFAN_BOLTZMANN)).powf(0.25))
}
