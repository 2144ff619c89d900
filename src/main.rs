//! Resume tailor: builds a job-specific resume from a master list of career history

mod cli;
mod config;
mod error;
mod input;
mod output;
mod ranking;

use clap::Parser;
use cli::{CacheAction, Cli, Commands, ConfigAction};
use colored::Colorize;
use config::{Config, OutputFormat};
use error::{Result, ResumeTailorError};
use input::job::JobPosting;
use input::masterlist::MasterList;
use log::{error, info};
use ranking::cache::ResultCache;
use ranking::embedder::Model2VecEmbedder;
use ranking::engine::{TailorEngine, TailorOptions};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match load_config(&cli) {
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

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Build {
            master,
            job,
            title,
            company,
            bullets,
            skills,
            projects,
            embedding,
            force_rebuild,
            output,
            save,
        } => {
            info!("Starting resume tailoring");

            // Validate input files
            cli::validate_file_extension(&master, &["json"])
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Master list: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Job description file: {}", e)))?;

            // Parse output format
            let output_format = cli::parse_output_format(&output)
                .map_err(ResumeTailorError::InvalidInput)?;

            // Apply CLI overrides
            if let Some(bullets) = bullets {
                config.selection.bullets_per_experience = bullets;
            }
            if let Some(skills) = skills {
                config.selection.skills_count = skills;
            }
            if let Some(projects) = projects {
                config.selection.projects_count = projects;
            }
            if let Some(embedding_model) = embedding {
                config.models.embedding_model = embedding_model;
            }

            println!("🚀 Resume tailoring");
            println!("📋 Master list: {}", master.display());
            println!("💼 Job: {} at {}", title, company);
            println!("🧠 Embedding model: {}", config.models.embedding_model);
            if force_rebuild {
                println!("🔄 Force rebuild enabled, ignoring cached rankings");
            }

            // Load inputs
            let master_list = MasterList::from_file(&master).await?;
            let job_posting = JobPosting::from_file(&title, &company, &job).await?;

            println!(
                "📂 Loaded {} experiences, {} skills, {} projects",
                master_list.experiences.len(),
                master_list.all_skills().len(),
                master_list.projects.len()
            );

            // Rank and select content
            let embedder = Model2VecEmbedder::new(&config.models.embedding_model);
            let cache = ResultCache::new(config.cache_dir(), config.cache.enable_caching)?;
            let mut options = TailorOptions::from_config(&config);
            options.force_rebuild = force_rebuild;

            let mut engine = TailorEngine::new(embedder, cache, options);
            let content = engine.tailor(&job_posting, &master_list)?;

            println!(
                "🎯 Selected {} experience groups, {} skills, {} projects",
                content.groups.len(),
                content.skills.len(),
                content.projects.len()
            );

            // Render the resume
            let rendered = match output_format {
                OutputFormat::Markdown => output::markdown::render_markdown(&master_list, &job_posting, &content),
                OutputFormat::Html => output::html::render_html(&master_list, &job_posting, &content)?,
                OutputFormat::Json => output::render_json(&master_list, &job_posting, &content)?,
            };

            // Save to the requested file or the output directory
            let save_path = match save {
                Some(path) => path,
                None => {
                    config.ensure_output_dir()?;
                    config.output.output_dir.join(default_file_name(&company, &title, output_format))
                }
            };
            tokio::fs::write(&save_path, &rendered).await?;

            println!("💾 Resume saved to {}", save_path.display());
            println!("{}", "✅ Resume tailoring complete!".green());
        }

        Commands::Cache { action } => {
            match action {
                CacheAction::Info => {
                    let cache_dir = config.cache_dir();
                    println!("📦 Ranking cache: {}", cache_dir.display());

                    let entries = list_cache_entries(cache_dir)?;
                    if entries.is_empty() {
                        println!("   No cached ranking results");
                    } else {
                        println!("   {} cached ranking results:", entries.len());
                        for entry in entries {
                            println!("   • {}", entry.display());
                        }
                    }
                }

                CacheAction::Clear => {
                    let entries = list_cache_entries(config.cache_dir())?;
                    let count = entries.len();
                    for entry in &entries {
                        std::fs::remove_file(entry)?;
                    }
                    println!("🗑️  Removed {} cached ranking results", count);
                }
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Embedding Model: {}", config.models.embedding_model);
                    println!("Cache Directory: {}", config.cache_dir().display());
                    println!("Output Directory: {}", config.output.output_dir.display());
                    println!("\nSelection Quotas:");
                    println!("  Bullets per experience: {}", config.selection.bullets_per_experience);
                    println!("  Skills: {}", config.selection.skills_count);
                    println!("  Projects: {}", config.selection.projects_count);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset successfully!");
                }
            }
        }
    }

    Ok(())
}

/// Cached result files in the cache directory, if it exists
fn list_cache_entries(cache_dir: &PathBuf) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    if !cache_dir.is_dir() {
        return Ok(entries);
    }

    for entry in std::fs::read_dir(cache_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            entries.push(path);
        }
    }

    entries.sort();
    Ok(entries)
}

fn default_file_name(company: &str, title: &str, format: OutputFormat) -> String {
    let extension = match format {
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
        OutputFormat::Json => "json",
    };
    format!(
        "{}_{}_resume.{}",
        ranking::cache::prepare_text_for_filename(company),
        ranking::cache::prepare_text_for_filename(title),
        extension
    )
}
