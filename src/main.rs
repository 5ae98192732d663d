use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use vanc_dosing::batch::BatchProcessor;
use vanc_dosing::output;
use vanc_dosing::{Config, DosingCalculator, OutputFormat, PatientInput, Sex};

#[derive(Parser)]
#[command(name = "vanc-dose")]
#[command(about = "Vancomycin dose calculator adjusted for weight and renal function")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the regimen for a single patient
    Dose {
        /// Patient's age (years)
        #[arg(long)]
        age: u32,

        /// Patient's weight (kg)
        #[arg(long)]
        weight: f64,

        /// Patient's last serum creatinine (umol/L)
        #[arg(long)]
        creatinine: f64,

        #[arg(long, value_enum)]
        sex: Sex,

        /// Overrides the format from the configuration file
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Calculate regimens for every patient in a CSV file
    Batch {
        /// CSV with columns id,age,weight,creatinine,sex
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::from_file(path)
                .with_context(|| format!("failed to load configuration from {:?}", path))?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };
    let calculator = DosingCalculator::new(config.rounding);

    match cli.command {
        Command::Dose { age, weight, creatinine, sex, format } => {
            let patient = PatientInput::new(age, weight, creatinine, sex)?;
            let assessment = calculator.assess(&patient);
            let rendered = match format.unwrap_or(config.format) {
                OutputFormat::Text => output::render_text(&assessment),
                OutputFormat::Json => output::render_json(&assessment)?,
            };
            println!("{}", rendered.trim_end());
        }
        Command::Batch { input, output: output_dir } => {
            info!("Dosing patients from {:?}", input);
            let outcome = BatchProcessor::new(calculator)
                .process_file(&input)
                .with_context(|| format!("failed to process {:?}", input))?;

            std::fs::create_dir_all(&output_dir)
                .with_context(|| format!("failed to create {:?}", output_dir))?;
            let summary = output::save_results(&outcome, &output_dir)?;
            info!(
                "Dosed {} patients ({} rejected), results in {:?}",
                summary.n_patients, summary.n_rejected, output_dir
            );
        }
    }

    Ok(())
}
