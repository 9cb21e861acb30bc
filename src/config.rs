// src/config.rs
use crate::error::AppError;
use crate::types::{ApiToken, ApiUrl};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which remote representation(s) to fetch and how to assemble them.
///
/// Fixed for the whole run; every bookmark is processed the same way.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Article text as markdown.
    Text,
    /// Article text plus its images.
    TextImages,
    /// Article text plus highlights.
    TextAnnotations,
    /// Article text, images and highlights.
    TextImagesAnnotations,
    /// Highlights only.
    Annotations,
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Base URL of the Readeck instance (e.g. "https://readeck.example.com")
    pub api_url: String,

    /// Folder where notes are written
    #[arg(short, long, default_value = "Readeck")]
    pub folder: String,

    /// Which content to import per bookmark
    #[arg(short, long, value_enum, default_value_t = Mode::Text)]
    pub mode: Mode,

    /// Overwrite notes that already exist (default: keep existing files)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration — validated and ready to drive a run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub api_url: ApiUrl,
    pub token: ApiToken,
    pub folder: PathBuf,
    pub mode: Mode,
    pub overwrite: bool,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete configuration from CLI input and environment.
    ///
    /// The API token comes from `READECK_API_TOKEN`; tokens on the command
    /// line would leak into shell history.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token_str = std::env::var("READECK_API_TOKEN").map_err(|_| {
            AppError::MissingConfiguration(
                "READECK_API_TOKEN environment variable not set".to_string(),
            )
        })?;

        let token = ApiToken::new(token_str)?;
        let api_url = ApiUrl::parse(&cli.api_url)?;

        Ok(PipelineConfig {
            api_url,
            token,
            folder: PathBuf::from(cli.folder),
            mode: cli.mode,
            overwrite: cli.overwrite,
            verbose: cli.verbose,
        })
    }
}
