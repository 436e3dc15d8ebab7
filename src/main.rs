// src/main.rs

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, warn};

use polycalc::cli::{calculate, Operation, Session};
use polycalc::config::CalculatorConfig;

#[derive(Parser)]
#[command(author, version, about = "Interactive calculator for real-coefficient polynomials", long_about = None)]
struct Cli {
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Configuration file (defaults to polycalc.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one operation and print the result
    Calc {
        /// Operation to apply to P1 and P2
        #[arg(value_enum)]
        operation: Operation,

        /// Coefficients of P1, constant term first (e.g. "-5 2 3")
        #[arg(long, allow_hyphen_values = true)]
        p1: String,

        /// Coefficients of P2, constant term first
        #[arg(long, allow_hyphen_values = true)]
        p2: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => CalculatorConfig::load_from_file(path),
        None => CalculatorConfig::load(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (CalculatorConfig::default(), Some(e)),
    };

    // Initialize the logger; RUST_LOG overrides the configured level
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str())).init();

    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    let mut options = config.display;
    if cli.no_color {
        options.color = false;
    }
    debug!("render options: {:?}", options);

    match cli.command {
        Some(Commands::Calc {
            operation,
            p1,
            p2,
            json,
        }) => match calculate(operation, &p1, &p2, &options, json) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), options);
            if let Err(e) = session.run() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
