use clap::{Parser, Subcommand};
use pulse_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every package in a batch (default)
    Run {
        /// CSV package file (defaults to the built-in sample packages)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Report failed packages and continue with the rest
        #[arg(long)]
        keep_going: bool,
    },

    /// Compute a single workout
    Calc {
        /// Activity code (SWM, RUN, WLK)
        code: String,

        /// Positional parameters: action_count duration_hours weight_kg [extra...]
        #[arg(allow_hyphen_values = true)]
        params: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    pulse_core::logging::init_with_level(&config.logging.level);

    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Some(Commands::Run { input, keep_going }) => {
            let on_error = if keep_going {
                OnError::Skip
            } else {
                config.batch.on_error
            };
            cmd_run(input, on_error, format)
        }
        Some(Commands::Calc { code, params }) => cmd_calc(&code, &params, format),
        None => {
            // Default to the built-in packages
            cmd_run(None, config.batch.on_error, format)
        }
    }
}

fn cmd_run(input: Option<PathBuf>, on_error: OnError, format: OutputFormat) -> Result<()> {
    let packages = match input {
        Some(path) => load_packages(&path)?,
        None => default_packages(),
    };
    tracing::debug!("Processing {} packages ({:?})", packages.len(), on_error);

    let summary = run_batch_with(&packages, on_error, |report| {
        println!("{}", render(report, format)?);
        Ok(())
    })?;

    for failure in &summary.failures {
        eprintln!(
            "Package #{} ({}) failed: {}",
            failure.index + 1,
            failure.package.code,
            failure.error
        );
    }

    summary.into_result().map(|_| ())
}

fn cmd_calc(code: &str, params: &[String], format: OutputFormat) -> Result<()> {
    let params = parse_params(params)?;
    let report = read_package(code, &params)?.report()?;
    println!("{}", render(&report, format)?);
    Ok(())
}
