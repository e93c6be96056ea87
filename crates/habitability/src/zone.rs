//! Habitable-zone boundaries and membership.

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity};

use crate::constants::{HZ_INNER_AU, HZ_OUTER_AU};

/// Liquid-water habitable zone of a star
///
/// Both edges scale with the square root of stellar luminosity, so a star
/// four times as bright as the Sun pushes its zone out by a factor of two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    /// Inner edge (runaway greenhouse)
    pub inner: Length,
    /// Outer edge (maximum greenhouse)
    pub outer: Length,
}

impl HabitableZone {
    /// Zone boundaries for a star of the given luminosity
    pub fn from_luminosity(luminosity: Luminosity) -> Self {
        let scale = luminosity.sqrt();
        Self {
            inner: Length::from_au(HZ_INNER_AU * scale),
            outer: Length::from_au(HZ_OUTER_AU * scale),
        }
    }

    /// Whether an orbit at this distance sits inside the zone.
    ///
    /// Inclusive at both edges: a planet exactly on a boundary counts as
    /// inside.
    pub fn contains(&self, orbital_radius: Length) -> bool {
        self.inner <= orbital_radius && orbital_radius <= self.outer
    }

    /// Zone width
    pub fn width(&self) -> Length {
        self.outer - self.inner
    }
}
