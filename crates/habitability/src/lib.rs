//! Exoplanet habitability evaluation.
//!
//! This crate derives basic physical properties of a single planet from its
//! host star and orbit: planet mass or radial-velocity semi-amplitude
//! (whichever is not supplied), orbital semi-major axis, blackbody
//! equilibrium temperature, and habitable-zone membership. Every evaluation
//! is a pure function of its inputs; the only shared state is the read-only
//! constants module.

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod kepler;
pub mod orbit;
pub mod radial_velocity;
pub mod star;
pub mod temperature;
pub mod zone;

#[cfg(test)]
mod radial_velocity_test;
#[cfg(test)]
mod zone_test;

// Re-export key types at crate root
pub use error::{Error, Result};
pub use evaluator::{evaluate, Evaluation, KnownQuantity};
pub use orbit::Orbit;
pub use star::HostStar;
pub use zone::HabitableZone;
