//! Particlekit: particle symbol lookups and a fuzzing harness for them.
//!
//! Particlekit resolves particle symbols ("Fe", "He-4 2+", "e-", "alpha")
//! into atomic numbers, element names, and rest masses, and packages those
//! lookups as a libFuzzer harness (`fuzz/`) that hammers them with arbitrary
//! bytes. Malformed symbols are a *normal* outcome and come back as one of
//! two [`ParticleError`] kinds; a panic anywhere in a lookup is a bug, and
//! the fuzzer's job is to find it.
//!
//! # Modules
//!
//! - [`element`]: periodic-table data and element lookups
//! - [`particle`]: particle symbol parsing, masses, the public lookup API
//! - [`driver`]: byte decoding and the per-iteration lookup round
//! - [`error`]: error types for particlekit lookups

pub mod driver;
pub mod element;
pub mod error;
pub mod particle;

use clap::{Parser, Subcommand};

pub use element::element_name;
pub use error::ParticleError;
pub use particle::{atomic_number, particle_mass, Particle, ParticleInfo, ParticleKind};

/// The particlekit CLI application.
#[derive(Parser)]
#[command(name = "particlekit")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Look up a particle symbol and print what is known about it.
    Info(InfoArgs),

    /// Print the element name for an atomic number.
    Name(NameArgs),
}

/// Arguments for the info subcommand.
#[derive(clap::Args)]
struct InfoArgs {
    /// Particle symbol ('Fe', 'He-4 2+', 'e-', 'alpha', ...).
    symbol: String,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the name subcommand.
#[derive(clap::Args)]
struct NameArgs {
    /// Atomic number (1..=118).
    atomic_number: u64,
}

/// Run the particlekit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ParticleError> {
    driver::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Info(args)) => run_info(args),
        Some(Commands::Name(args)) => run_name(args),
        None => {
            // No subcommand: print a short banner and exit successfully.
            println!("particlekit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Particle symbol lookups and a fuzzing harness for them.");
            println!();
            println!("Run 'particlekit --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the info subcommand.
fn run_info(args: InfoArgs) -> Result<(), ParticleError> {
    let particle = Particle::parse(&args.symbol)?;
    let info = particle.info();

    match args.output.as_str() {
        "json" => {
            // serde_json can't fail on this shape; fall back to the Display
            // error path rather than panicking if it ever does.
            let rendered = serde_json::to_string_pretty(&info).map_err(|e| {
                ParticleError::invalid(&args.symbol, format!("could not render info: {}", e))
            })?;
            println!("{}", rendered);
        }
        _ => {
            println!("symbol:        {}", info.symbol);
            println!("name:          {}", info.name);
            println!("kind:          {:?}", info.kind);
            match info.atomic_number {
                Some(z) => println!("atomic number: {}", z),
                None => println!("atomic number: -"),
            }
            if let Some(a) = info.mass_number {
                println!("mass number:   {}", a);
            }
            println!("charge:        {:+}", info.charge_number);
            match info.mass_kg {
                Some(mass) => println!("mass:          {:.6e} kg", mass),
                None => println!("mass:          not tabulated"),
            }
        }
    }

    Ok(())
}

/// Execute the name subcommand.
fn run_name(args: NameArgs) -> Result<(), ParticleError> {
    println!("{}", element_name(args.atomic_number)?);
    Ok(())
}
