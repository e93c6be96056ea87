//! Physical quantity types for exoplanet calculations.
//!
//! Each quantity is a newtype over `f64` with a fixed base unit chosen for
//! the exoplanet domain (solar masses, AU, days, kelvin, m/s, solar
//! luminosities). Constructors and accessors convert to and from the other
//! units that show up in observational data.

pub mod length;
pub mod luminosity;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod mass_test;

pub use length::{Length, AU_M};
pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_W};
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use temperature::Temperature;
pub use time::{Time, SECONDS_PER_DAY};
pub use velocity::Velocity;
