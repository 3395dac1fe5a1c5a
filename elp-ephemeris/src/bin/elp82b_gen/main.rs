#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
mod analyze;
#[cfg(feature = "cli")]
mod download;

#[cfg(feature = "cli")]
use analyze::{analyze_tables, print_analysis};
#[cfg(feature = "cli")]
use download::{default_client, download_all};
#[cfg(feature = "cli")]
use elp_ephemeris::{CoefficientTables, Elp82bMoon};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "elp82b-gen")]
#[command(about = "ELP2000-82B lunar theory data tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Download the ELP1..ELP36 tables from the Paris Observatory archive.
    /// Downloading into elp-ephemeris/data/elp82b compiles them into the next build.
    Download {
        /// Output directory for downloaded files
        #[arg(short, long, default_value = "./elp82b")]
        output: PathBuf,
    },
    /// Print per-table term statistics
    Analyze {
        /// Directory containing the ELP files (defaults to the compiled-in tables, then ELP82B_DATA or the standard locations)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Amplitude threshold for counting terms
        #[arg(short, long, default_value = "1e-5")]
        threshold: f64,
    },
    /// Print geocentric X, Y, Z (km, J2000 ecliptic) for Julian Dates (TDB)
    Position {
        /// Directory containing the ELP files (defaults to the compiled-in tables, then ELP82B_DATA or the standard locations)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Julian Dates
        #[arg(required = true, allow_negative_numbers = true)]
        jd: Vec<f64>,
    },
}

#[cfg(feature = "cli")]
fn load_tables(input: Option<PathBuf>) -> Result<CoefficientTables, String> {
    let tables = match &input {
        Some(dir) => {
            println!("Parsing ELP2000-82B tables from {}...", dir.display());
            CoefficientTables::from_dir(dir)
        }
        None if CoefficientTables::has_embedded() => CoefficientTables::embedded(),
        None => CoefficientTables::from_default_location(),
    };
    tables.map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
fn cmd_download(output: PathBuf) -> Result<(), String> {
    std::fs::create_dir_all(&output).map_err(|e| format!("Failed to create output dir: {}", e))?;
    let client = default_client()?;
    download_all(&client, &output)
}

#[cfg(feature = "cli")]
fn cmd_analyze(input: Option<PathBuf>, threshold: f64) -> Result<(), String> {
    let tables = load_tables(input)?;
    println!("Loaded {} terms", tables.total_terms());
    print_analysis(&analyze_tables(&tables, threshold), threshold);
    Ok(())
}

#[cfg(feature = "cli")]
fn format_position(jd: f64, pos: [f64; 3]) -> String {
    format!(
        "JD {:.1}  X = {:.5}  Y = {:.5}  Z = {:.5} km",
        jd, pos[0], pos[1], pos[2]
    )
}

#[cfg(feature = "cli")]
fn cmd_position(input: Option<PathBuf>, jds: Vec<f64>) -> Result<(), String> {
    let moon = Elp82bMoon::new(load_tables(input)?);
    for jd in jds {
        if !jd.is_finite() {
            return Err(format!("Invalid Julian Date: {}", jd));
        }
        println!("{}", format_position(jd, moon.compute_position(jd)));
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Download { output } => cmd_download(output),
        Commands::Analyze { input, threshold } => cmd_analyze(input, threshold),
        Commands::Position { input, jd } => cmd_position(input, jd),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("elp82b-gen requires the 'cli' feature.");
    eprintln!("Run with: cargo run --features cli --bin elp82b-gen -- <args>");
    std::process::exit(1);
}
