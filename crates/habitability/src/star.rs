//! Host star properties.

use serde::{Deserialize, Serialize};
use units::{Luminosity, Mass};

use crate::error::{Error, Result};

/// Host star properties for planet characterization
///
/// Groups the stellar parameters the evaluator needs: mass for the orbital
/// dynamics, luminosity for the radiation balance and habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostStar {
    /// Stellar mass
    pub mass: Mass,
    /// Stellar luminosity
    pub luminosity: Luminosity,
}

impl HostStar {
    /// Create a new host star context
    pub fn new(mass: Mass, luminosity: Luminosity) -> Self {
        Self { mass, luminosity }
    }

    /// Solar values (M = 1 M☉, L = 1 L☉)
    pub fn solar() -> Self {
        Self {
            mass: Mass::from_solar_masses(1.0),
            luminosity: Luminosity::from_solar(1.0),
        }
    }

    /// Check that both parameters are physically valid.
    ///
    /// Zero or negative mass or luminosity cannot describe a star; both are
    /// rejected before any formula runs.
    pub fn validate(&self) -> Result<()> {
        let mass = self.mass.to_solar_masses();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::validation(
                "star_mass",
                format!("must be a positive number of solar masses, got {mass}"),
            ));
        }

        let luminosity = self.luminosity.to_solar();
        if !luminosity.is_finite() || luminosity <= 0.0 {
            return Err(Error::validation(
                "star_luminosity",
                format!("must be a positive number of solar luminosities, got {luminosity}"),
            ));
        }

        Ok(())
    }
}
