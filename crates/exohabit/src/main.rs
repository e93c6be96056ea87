//! # ExoHabit
//!
//! Command-line exoplanet habitability calculator.
//!
//! ## Usage
//!
//! ```bash
//! # Evaluate with Earth-like defaults (10 m/s signal, one-year orbit)
//! exohabit
//!
//! # A hot Jupiter: big signal, four-day orbit
//! exohabit --rv-amplitude 59.0 --period 4.2
//!
//! # Known planet mass; derive the radial-velocity amplitude instead
//! exohabit --planet-mass 1.0 --period 365.25
//!
//! # Luminosity given as a catalog log10(L/L☉) value
//! exohabit --star-luminosity -1.8 --log-luminosity --period 11.2
//!
//! # Reference table of known exoplanets, as a table or CSV
//! exohabit catalog
//! exohabit catalog --csv > exoplanets.csv
//!
//! # One random exoplanet fact
//! exohabit fact
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use habitability::{evaluate, HostStar, KnownQuantity, Orbit};
use units::{Luminosity, Mass, Time, Velocity};

mod report;

#[cfg(test)]
mod report_test;

/// Radial-velocity amplitude assumed when neither side of the relation is
/// supplied, matching a comfortably detectable survey signal.
const DEFAULT_RV_AMPLITUDE: f64 = 10.0;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "exohabit")]
#[command(about = "Estimate exoplanet properties and habitable-zone membership")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    inputs: EvaluateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the reference table of known exoplanets
    Catalog {
        /// Emit delimited text instead of an aligned table
        #[arg(long)]
        csv: bool,
    },
    /// Print one random exoplanet fact
    Fact,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Star mass in solar masses
    #[arg(long, default_value_t = 1.0)]
    star_mass: f64,

    /// Star luminosity in solar luminosities
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    star_luminosity: f64,

    /// Interpret --star-luminosity as log10(L/L☉)
    #[arg(long)]
    log_luminosity: bool,

    /// Observed radial-velocity semi-amplitude in m/s; the planet mass is
    /// derived from it
    #[arg(long, conflicts_with = "planet_mass")]
    rv_amplitude: Option<f64>,

    /// Known planet mass in Earth masses; the radial-velocity amplitude is
    /// derived from it
    #[arg(long)]
    planet_mass: Option<f64>,

    /// Orbital period in days
    #[arg(long, default_value_t = 365.0)]
    period: f64,

    /// Orbital eccentricity (0 = circle)
    #[arg(long, default_value_t = 0.0)]
    eccentricity: f64,

    /// Orbital inclination in degrees (90 = edge-on)
    #[arg(long, default_value_t = 90.0)]
    inclination: f64,

    /// Planetary albedo (fraction of light reflected)
    #[arg(long, default_value_t = 0.3)]
    albedo: f64,

    /// Emit the evaluation as JSON instead of the formatted report
    #[arg(long)]
    json: bool,
}

// ============================================================================
// Entry point
// ============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Command::Catalog { csv }) => run_catalog(csv),
        Some(Command::Fact) => run_fact(),
        None => run_evaluate(&cli.inputs),
    }
}

fn run_evaluate(args: &EvaluateArgs) -> Result<()> {
    let luminosity = if args.log_luminosity {
        Luminosity::from_log10_solar(args.star_luminosity)
    } else {
        Luminosity::from_solar(args.star_luminosity)
    };
    let star = HostStar::new(Mass::from_solar_masses(args.star_mass), luminosity);
    let orbit = Orbit::new(
        Time::from_days(args.period),
        args.eccentricity,
        args.inclination,
    );

    let known = match args.planet_mass {
        Some(mass_earth) => KnownQuantity::PlanetMass(Mass::from_earth_masses(mass_earth)),
        None => KnownQuantity::RadialVelocity(Velocity::from_meters_per_sec(
            args.rv_amplitude.unwrap_or(DEFAULT_RV_AMPLITUDE),
        )),
    };
    debug!(?known, "starting evaluation");

    let evaluation = evaluate(&star, &orbit, args.albedo, known)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!("{}", report::render(&evaluation));
    }
    Ok(())
}

fn run_catalog(csv: bool) -> Result<()> {
    if csv {
        print!("{}", catalog::to_csv());
    } else {
        print!("{}", report::catalog_table());
        eprintln!("{} known exoplanets", catalog::CATALOG.len());
    }
    Ok(())
}

fn run_fact() -> Result<()> {
    let mut rng = rand::rng();
    println!("{}", facts::random_fact(&mut rng));
    Ok(())
}
