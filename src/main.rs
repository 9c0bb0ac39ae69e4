//! CLI entry point for the coursetools suite.
//!
//! Provides subcommands for processing a batch of student marks, logging
//! current weather for a city, generating primes, and computing an age from
//! a birth date.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use coursetools::weather::OpenWeatherClient;
use coursetools::{age, marks, primes, weather};
use tracing::error;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "coursetools")]
#[command(about = "Batch utilities for coursework data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a batch of student marks into a graded, sorted report
    Marks {
        /// Input file with one RegNo,Exam,Coursework record per line
        #[arg(short, long, default_value = "student_input.txt")]
        input: PathBuf,

        /// Report destination; defaults to students_output.txt next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch current weather for a city and append it to a CSV log
    Weather {
        /// City to query
        #[arg(value_name = "CITY", default_value = "London")]
        city: String,

        /// CSV file to append the reading to
        #[arg(short, long, default_value = "weather_log.csv")]
        output: PathBuf,
    },
    /// List the prime numbers in an inclusive range
    Primes {
        /// Start of the range (positive integer)
        start: u64,

        /// End of the range (positive integer)
        end: u64,
    },
    /// Compute an age from a birth date
    Age {
        /// Birth date in mm/dd/yyyy format
        #[arg(value_name = "BIRTH_DATE")]
        birth_date: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/coursetools.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("coursetools.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    // Every subcommand failure is caught and reported; the process always
    // finishes with exit code 0.
    match cli.command {
        Commands::Marks { input, output } => {
            let output = output.unwrap_or_else(|| input.with_file_name("students_output.txt"));
            if let Err(e) = marks::run(&input, &output) {
                error!(error = %e, "marks processing aborted");
            }
        }
        Commands::Weather { city, output } => {
            let run = weather::api_key_from_env().and_then(|key| {
                let client = OpenWeatherClient::new(key);
                weather::run(&client, &city, &output)
            });
            if let Err(e) = run {
                error!(error = %e, "weather logging aborted");
            }
        }
        Commands::Primes { start, end } => match primes::primes_in_range(start, end) {
            Ok(primes) if primes.is_empty() => {
                println!("No prime numbers found in the given range.");
            }
            Ok(primes) => {
                println!("Prime numbers in the given range:");
                println!();
                print!("{}", primes::format_grid(&primes));
            }
            Err(e) => error!(error = %e, "prime generation aborted"),
        },
        Commands::Age { birth_date } => {
            let result = age::parse_birth_date(&birth_date).and_then(|birth| {
                let today = Local::now().date_naive();
                age::age_on(birth, today).map(|years| (birth, years))
            });
            match result {
                Ok((birth, years)) => {
                    println!("Your current age is: {years} years");
                    println!(
                        "Your birth date in Indian format is: {}",
                        age::indian_format(birth)
                    );
                }
                Err(e) => error!(error = %e, "age calculation aborted"),
            }
        }
    }

    Ok(())
}
