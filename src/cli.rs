//! CLI interface for the resume tailor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-tailor")]
#[command(about = "AI-powered resume tailoring tool")]
#[command(long_about = "Rank master-list bullets, skills, and projects against a job description using embeddings and build a tailored resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a tailored resume for a job posting
    Build {
        /// Path to the master list JSON file
        #[arg(short, long)]
        master: PathBuf,

        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Job title being applied to
        #[arg(short, long)]
        title: String,

        /// Company name being applied to
        #[arg(long)]
        company: String,

        /// Bullets kept per experience (0 drops low-scoring experiences)
        #[arg(short, long)]
        bullets: Option<usize>,

        /// Number of top skills to keep
        #[arg(short, long)]
        skills: Option<usize>,

        /// Number of top projects to keep
        #[arg(short, long)]
        projects: Option<usize>,

        /// Embedding model to use
        #[arg(short, long)]
        embedding: Option<String>,

        /// Recompute rankings even if cached results exist
        #[arg(long)]
        force_rebuild: bool,

        /// Output format: markdown, html, json
        #[arg(short, long, default_value = "markdown")]
        output: String,

        /// Save output to a specific file instead of the output directory
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Ranking cache management commands
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// Show cache location and stored entries
    Info,

    /// Remove all stored ranking results
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: markdown, html, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
