use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use svy21::{batch::convert_csv, testcase::run_cases, LatLon, Svy21, SVY21};

/// Convert between WGS84 latitude/longitude and SVY21
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert latitude/longitude (degrees) to northing/easting (meters)
    #[command(allow_negative_numbers = true)]
    ToSvy21 { lat: f64, lon: f64 },

    /// Convert northing/easting (meters) to latitude/longitude (degrees)
    #[command(allow_negative_numbers = true)]
    ToLatlon { northing: f64, easting: f64 },

    /// Run `direction,input1,input2,expected1,expected2` test cases
    Check {
        /// Test case file, stdin if omitted
        file: Option<PathBuf>,
    },

    /// Convert a CSV of SVY21 points (Y/northing, X/easting columns) to lat/lon
    Csv { input: PathBuf, output: PathBuf },

    /// Project a sample point and convert it back
    Demo,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::ToSvy21 { lat, lon } => {
            println!("{}", LatLon::new(lat, lon).to_svy21());
        }
        Command::ToLatlon { northing, easting } => {
            println!("{}", Svy21::new(northing, easting).to_latlon());
        }
        Command::Check { file } => {
            let stdout = io::stdout().lock();
            let summary = match file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    run_cases(BufReader::new(file), stdout, &SVY21)?
                }
                None => run_cases(io::stdin().lock(), stdout, &SVY21)?,
            };

            if !summary.all_passed() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Csv { input, output } => {
            let reader = File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let writer = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let count = convert_csv(reader, writer, &SVY21)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
            info!("Converted {count} points into {}", output.display());
            println!("Done! Check {} for the results", output.display());
        }
        Command::Demo => {
            let coord = LatLon::new(1.2949192688485278, 103.77367436885834);
            let projected = coord.to_svy21();
            println!("{projected:?}");
            println!("{:?}", projected.to_latlon());
        }
    }

    Ok(ExitCode::SUCCESS)
}
