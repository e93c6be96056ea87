//! Orbit geometry inputs.

use serde::{Deserialize, Serialize};
use units::Time;

use crate::error::{Error, Result};

/// Highest eccentricity the radial-velocity relation accepts.
///
/// sqrt(1 - e²) is undefined at e = 1; the input domain stops short of it.
pub const MAX_ECCENTRICITY: f64 = 0.99;

/// Orbital parameters of the planet under evaluation
///
/// Inclination is stored in degrees, as it is reported; the evaluator
/// converts to radians at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Orbital period
    pub period: Time,
    /// Orbital eccentricity (0 = circle)
    pub eccentricity: f64,
    /// Orbital inclination in degrees (90 = edge-on)
    pub inclination_deg: f64,
}

impl Orbit {
    /// Create a new orbit
    pub fn new(period: Time, eccentricity: f64, inclination_deg: f64) -> Self {
        Self {
            period,
            eccentricity,
            inclination_deg,
        }
    }

    /// Circular edge-on orbit with the given period, the most common
    /// starting point for radial-velocity work.
    pub fn circular_edge_on(period: Time) -> Self {
        Self::new(period, 0.0, 90.0)
    }

    /// Inclination in radians
    pub fn inclination_rad(&self) -> f64 {
        self.inclination_deg.to_radians()
    }

    /// sin(i), the projection factor between true and line-of-sight motion
    pub fn sin_inclination(&self) -> f64 {
        self.inclination_rad().sin()
    }

    /// Check that all three parameters are inside their documented domains.
    ///
    /// An inclination of exactly 0° or 180° puts sin(i) at zero and the
    /// mass-from-velocity relation at a division by zero, so both endpoints
    /// are rejected here rather than left to produce infinities.
    pub fn validate(&self) -> Result<()> {
        let period = self.period.to_days();
        if !period.is_finite() || period <= 0.0 {
            return Err(Error::validation(
                "orbital_period_days",
                format!("must be a positive number of days, got {period}"),
            ));
        }

        let e = self.eccentricity;
        if !e.is_finite() || !(0.0..=MAX_ECCENTRICITY).contains(&e) {
            return Err(Error::validation(
                "eccentricity",
                format!("must be within [0, {MAX_ECCENTRICITY}], got {e}"),
            ));
        }

        let i = self.inclination_deg;
        if !i.is_finite() || !(0.0..=180.0).contains(&i) {
            return Err(Error::validation(
                "inclination_deg",
                format!("must be within [0, 180] degrees, got {i}"),
            ));
        }
        if i == 0.0 || i == 180.0 {
            return Err(Error::validation(
                "inclination_deg",
                "face-on orbit (sin i = 0) has no line-of-sight velocity signal",
            ));
        }

        Ok(())
    }
}
