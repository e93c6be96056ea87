//! Educational exoplanet facts with uniform-random selection.

use rand::Rng;


/// The fixed fact list. Selection is uniform; there is no state between
/// draws and no weighting.
pub const FACTS: &[&str] = &[
    "The first exoplanet around a Sun-like star, 51 Pegasi b, was found in \
     1995 by measuring a 59 m/s wobble in its host star's spectrum.",
    "A planet's radial-velocity signal only reveals its minimum mass: the \
     orbit's unknown tilt hides the rest behind a factor of sin(i).",
    "Earth's blackbody equilibrium temperature is about 255 K; the extra \
     33 K at the surface is entirely greenhouse warming.",
    "The habitable zone of a red dwarf can sit closer to the star than \
     Mercury orbits the Sun.",
    "Jupiter tugs the Sun around at roughly 12.5 m/s, while Earth manages \
     only about 9 cm/s, which is why giants were discovered first.",
    "Kepler's third law lets one year of period data fix an orbit's size \
     without ever seeing the planet itself.",
    "TRAPPIST-1 packs seven roughly Earth-sized planets inside a region \
     smaller than Mercury's orbit.",
    "A planet's albedo can swing its equilibrium temperature by well over \
     50 K: fresh ice reflects most sunlight, basalt absorbs it.",
    "Hot Jupiters complete an orbit in days and can run hotter than some \
     low-mass stars.",
    "More luminous stars push their habitable zones outward with the square \
     root of luminosity: four times the light, twice the distance.",
    "Proxima Centauri b, the nearest known exoplanet, receives about \
     two-thirds of the stellar flux Earth does.",
    "An orbital eccentricity of 0.99 would swing a planet between a searing \
     close pass and a deep freeze every single orbit.",
];

/// Draw one fact, uniformly at random.
///
/// # Examples
/// ```
/// let fact = facts::random_fact(&mut rand::rng());
/// assert!(facts::FACTS.contains(&fact));
/// ```
pub fn random_fact(rng: &mut impl Rng) -> &'static str {
    FACTS[rng.random_range(0..FACTS.len())]
}
