mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

    #[test]
    fn test_mass_conversions() {
        // One solar mass in kilograms
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);

        // One Earth mass round trip through kilograms
        let earth = Mass::from_earth_masses(1.0);
        assert_relative_eq!(earth.to_kg(), EARTH_MASS_KG, max_relative = 1e-12);

        // The Sun is about 333,000 Earth masses
        assert_relative_eq!(sun.to_earth_masses(), 333_054.0, max_relative = 1e-3);
    }

    #[test]
    fn test_jupiter_conversions() {
        let jupiter = Mass::from_jupiter_masses(1.0);
        assert_relative_eq!(jupiter.to_earth_masses(), 317.8, max_relative = 1e-2);
        assert_relative_eq!(jupiter.to_jupiter_masses(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_round_trips() {
        let original = 5.972e24;
        let mass = Mass::from_kg(original);
        assert_relative_eq!(mass.to_kg(), original, max_relative = 1e-12);
        assert_relative_eq!(mass.to_earth_masses(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_arithmetic() {
        let star = Mass::from_solar_masses(1.0);
        let planet = Mass::from_solar_masses(0.001);

        // Total system mass for the velocity-from-mass relation
        let total = star + planet;
        assert_relative_eq!(total.to_solar_masses(), 1.001);

        // Mass ratio is dimensionless
        let ratio = planet / star;
        assert_relative_eq!(ratio, 0.001);

        let doubled = star * 2.0;
        assert_relative_eq!(doubled.to_solar_masses(), 2.0);
    }
}
