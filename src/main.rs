use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use job_scraper::app::FilterUseCase;
use job_scraper::config::Config;
use job_scraper::constants::{
    FIELD_COMPANY, FIELD_LOCATION, FIELD_POSTED_DATE, FIELD_TITLE, UNKNOWN_SENTINEL,
};
use job_scraper::infra::{load_jobs, FileJobOutputAdapter};
use job_scraper::logging::init_logging;

const SAMPLE_SIZE: usize = 5;

#[derive(Parser)]
#[command(name = "job_scraper")]
#[command(about = "Filter and deduplicate scraped job postings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a JSON file of scraped jobs
    Filter {
        /// JSON array of job records
        #[arg(long, short)]
        input: PathBuf,
        /// Where to write the filtered jobs
        #[arg(long, short, default_value = "filtered_jobs.json")]
        output: PathBuf,
        /// Config file (defaults to $JOB_SCRAPER_CONFIG, then config.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Keep near-duplicate postings
        #[arg(long)]
        include_duplicates: bool,
        /// Debug-level logging
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the effective configuration as TOML
    ShowConfig {
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    let path = Config::resolve_path(explicit.map(PathBuf::as_path));
    Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn run_filter(
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    include_duplicates: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = load_config(config.as_ref())?;
    if include_duplicates {
        config.output.include_duplicates = true;
    }
    let _log_guard = init_logging(&config.logging, verbose);

    let records = load_jobs(&input)
        .with_context(|| format!("Failed to load jobs from {}", input.display()))?;
    info!("Filtering {} jobs from {}", records.len(), input.display());

    let use_case = FilterUseCase::new(config, Box::new(FileJobOutputAdapter::new(&output)));
    let result = use_case.run(records)?;

    println!("\n📊 Filter Results:");
    println!("   Input jobs: {}", result.input_count);
    for stage in &result.report.stages {
        println!(
            "   {}: {} → {} (-{})",
            stage.stage, stage.before, stage.after, stage.filtered_out
        );
        for (name, count) in &stage.stats.counts {
            println!("      {}: {}", name, count);
        }
    }
    println!("   Output jobs: {}", result.output_count());
    println!("   Output file: {}", output.display());

    if result.records.is_empty() {
        println!("\n⚠️  No jobs matched the configured filters");
        return Ok(());
    }

    println!("\n🔎 Sample jobs:");
    for record in result.records.iter().take(SAMPLE_SIZE) {
        println!(
            "   • {} at {} ({}) posted {}",
            record.known(FIELD_TITLE).unwrap_or(UNKNOWN_SENTINEL),
            record.known(FIELD_COMPANY).unwrap_or(UNKNOWN_SENTINEL),
            record.known(FIELD_LOCATION).unwrap_or(UNKNOWN_SENTINEL),
            record.known(FIELD_POSTED_DATE).unwrap_or(UNKNOWN_SENTINEL),
        );
    }
    if result.output_count() > SAMPLE_SIZE {
        println!("   ... and {} more", result.output_count() - SAMPLE_SIZE);
    }

    println!("\n✅ Filtering completed");
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            input,
            output,
            config,
            include_duplicates,
            verbose,
        } => run_filter(input, output, config, include_duplicates, verbose),
        Commands::ShowConfig { config } => {
            let config = load_config(config.as_ref())?;
            let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
