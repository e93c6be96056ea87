use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Luminosity of the Sun in watts (3.828 × 10²⁶ W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// A stellar luminosity quantity using f64 precision.
///
/// The `Luminosity` struct represents luminosity with solar luminosities as
/// the base unit. Stellar catalogs frequently publish luminosity as
/// log10(L/L☉), so a logarithmic constructor and accessor are provided
/// alongside the linear ones.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar(1.0);
/// let same_sun = Luminosity::from_log10_solar(0.0);
/// assert_eq!(sun, same_sun);
///
/// // A bright F star, catalogued as log10(L/L☉) = 0.5
/// let f_star = Luminosity::from_log10_solar(0.5);
/// assert!((f_star.to_solar() - 3.162).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: Solar Luminosities

impl Luminosity {
    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a catalog log10(L/L☉) value.
    pub fn from_log10_solar(value: f64) -> Self {
        Self(10.0_f64.powf(value))
    }

    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_W)
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar(&self) -> f64 {
        self.0
    }

    /// Returns the luminosity as log10(L/L☉).
    pub fn to_log10_solar(&self) -> f64 {
        self.0.log10()
    }

    /// Converts the luminosity to watts.
    pub fn to_watts(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_W
    }

    /// Square root (of the solar-unit value, used for habitable-zone scaling)
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Luminosity {
    type Output = Luminosity;

    fn add(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 + rhs.0)
    }
}

impl Sub for Luminosity {
    type Output = Luminosity;

    fn sub(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}

impl Div<f64> for Luminosity {
    type Output = Luminosity;

    fn div(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 / rhs)
    }
}

/// Division of Luminosity by Luminosity returns a dimensionless ratio
impl Div for Luminosity {
    type Output = f64;

    fn div(self, rhs: Luminosity) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Luminosity (commutative multiplication)
impl Mul<Luminosity> for f64 {
    type Output = Luminosity;

    fn mul(self, rhs: Luminosity) -> Luminosity {
        rhs * self
    }
}
