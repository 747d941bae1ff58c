//! Resume insight: rule-based resume analysis and ATS compatibility scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeInsightError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::{save_report_to_file, ReportGenerator};
use output::report::AnalysisReport;
use processing::analyzer::AnalysisEngine;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            // Validate input file
            cli::validate_file_extension(&file, &["pdf", "txt", "text", "md", "markdown"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;

            // Resolve output format (CLI flag wins over configured default)
            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(|e| ResumeInsightError::InvalidInput(e))?
                }
                None => config.output.format.clone(),
            };

            // Extract text
            let mut input_manager = InputManager::new()
                .with_cache(config.input.enable_caching)
                .with_max_size(config.max_file_size_bytes());

            let started = Instant::now();
            let resume_text = input_manager.extract_text(&file).await?;
            info!(
                "Extracted {} characters from {}",
                resume_text.len(),
                file.display()
            );

            // Run the analysis
            let engine = AnalysisEngine::new()?;
            let analysis = engine.analyze(&resume_text);
            let breakdown = engine.score_breakdown(&resume_text);
            let processing_time_ms = started.elapsed().as_millis() as u64;
            info!(
                "Analysis finished in {}ms (score {}%, ATS {}%)",
                processing_time_ms, analysis.score, analysis.ats_compatibility
            );

            let mut report = AnalysisReport::new(
                analysis,
                breakdown,
                file.display().to_string(),
                processing_time_ms,
                engine.catalog_size(),
            );

            if !config.output.include_recommendations {
                report.analysis.recommendations.clear();
            }

            // Render and emit
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("\nInput:");
                println!("  Caching: {}", config.input.enable_caching);
                println!("  Max file size: {} MB", config.input.max_file_size_mb);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Recommendations: {}", config.output.include_recommendations);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
