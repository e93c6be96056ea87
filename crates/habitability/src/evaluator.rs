//! The evaluation pipeline: validate, derive, classify.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Length, Mass, Temperature, Velocity};

use crate::error::{ensure_finite, Error, Result};
use crate::kepler::semi_major_axis;
use crate::orbit::Orbit;
use crate::radial_velocity::{amplitude_from_planet_mass, planet_mass_from_amplitude};
use crate::star::HostStar;
use crate::temperature::equilibrium_temperature;
use crate::zone::HabitableZone;

/// Which side of the radial-velocity relation the caller already knows.
///
/// The relation links planet mass and stellar reflex velocity; one is
/// supplied and the other derived. Radial-velocity surveys start from an
/// observed amplitude, transit-timing and direct-imaging work often starts
/// from a mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KnownQuantity {
    /// Observed stellar radial-velocity semi-amplitude; planet mass derived
    RadialVelocity(Velocity),
    /// Known planet mass; radial-velocity amplitude derived
    PlanetMass(Mass),
}

/// Derived properties of a single planet
///
/// Both sides of the radial-velocity relation are present; one echoes the
/// input, the other is the derived value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Planet mass (minimum mass M·sin i when derived from velocity)
    pub planet_mass: Mass,
    /// Stellar radial-velocity semi-amplitude
    pub radial_velocity: Velocity,
    /// Orbital semi-major axis
    pub orbital_radius: Length,
    /// Blackbody equilibrium temperature
    pub equilibrium_temperature: Temperature,
    /// Habitable-zone boundaries of the host star
    pub habitable_zone: HabitableZone,
    /// Whether the orbit sits inside the habitable zone (inclusive edges)
    pub in_habitable_zone: bool,
}

/// Evaluate a planet against its host star and orbit.
///
/// Pure and stateless: the same inputs always produce the same outputs, and
/// nothing is retained between calls. All inputs are validated before any
/// formula runs; a non-finite intermediate that survives validation aborts
/// the evaluation with [`Error::Domain`] instead of leaking NaN or infinity
/// into the output.
///
/// # Errors
/// [`Error::Validation`] if any input is outside its documented domain,
/// [`Error::Domain`] if the computation degenerates anyway.
pub fn evaluate(
    star: &HostStar,
    orbit: &Orbit,
    albedo: f64,
    known: KnownQuantity,
) -> Result<Evaluation> {
    star.validate()?;
    orbit.validate()?;
    validate_albedo(albedo)?;
    validate_known(known)?;

    let (planet_mass, radial_velocity) = match known {
        KnownQuantity::RadialVelocity(amplitude) => {
            let mass = planet_mass_from_amplitude(amplitude, star.mass, orbit);
            (mass, amplitude)
        }
        KnownQuantity::PlanetMass(mass) => {
            let amplitude = amplitude_from_planet_mass(mass, star.mass, orbit);
            (mass, amplitude)
        }
    };

    let orbital_radius = semi_major_axis(star.mass, orbit.period);
    let temperature = equilibrium_temperature(orbital_radius, star.luminosity, albedo);
    let habitable_zone = HabitableZone::from_luminosity(star.luminosity);

    ensure_finite(planet_mass.to_earth_masses(), "planet mass")?;
    ensure_finite(radial_velocity.to_meters_per_sec(), "radial velocity amplitude")?;
    ensure_finite(orbital_radius.to_au(), "orbital radius")?;
    ensure_finite(temperature.to_kelvin(), "equilibrium temperature")?;

    let evaluation = Evaluation {
        planet_mass,
        radial_velocity,
        orbital_radius,
        equilibrium_temperature: temperature,
        habitable_zone,
        in_habitable_zone: habitable_zone.contains(orbital_radius),
    };

    debug!(
        mass_earth = evaluation.planet_mass.to_earth_masses(),
        amplitude_m_s = evaluation.radial_velocity.to_meters_per_sec(),
        sma_au = evaluation.orbital_radius.to_au(),
        eq_temp_k = evaluation.equilibrium_temperature.to_kelvin(),
        in_zone = evaluation.in_habitable_zone,
        "evaluated planet"
    );

    Ok(evaluation)
}

fn validate_albedo(albedo: f64) -> Result<()> {
    if !albedo.is_finite() || !(0.0..=1.0).contains(&albedo) {
        return Err(Error::validation(
            "albedo",
            format!("must be within [0, 1], got {albedo}"),
        ));
    }
    Ok(())
}

fn validate_known(known: KnownQuantity) -> Result<()> {
    match known {
        KnownQuantity::RadialVelocity(amplitude) => {
            let k = amplitude.to_meters_per_sec();
            if !k.is_finite() || k <= 0.0 {
                return Err(Error::validation(
                    "radial_velocity_amplitude",
                    format!("must be a positive number of m/s, got {k}"),
                ));
            }
        }
        KnownQuantity::PlanetMass(mass) => {
            let m = mass.to_earth_masses();
            if !m.is_finite() || m <= 0.0 {
                return Err(Error::validation(
                    "planet_mass_earth",
                    format!("must be a positive number of Earth masses, got {m}"),
                ));
            }
        }
    }
    Ok(())
}
