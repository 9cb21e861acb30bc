// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use readeck2notes::{
    AppError, CommandLineInput, ConsoleNotifier, FsNoteStore, ImportPipeline, PipelineConfig,
    ReadeckHttpClient,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("readeck2notes.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the collaborators and runs one import.
async fn execute_import(config: &PipelineConfig) -> Result<(), AppError> {
    let client = ReadeckHttpClient::new(config.api_url.clone(), &config.token)?;
    let store = FsNoteStore::new();
    let notifier = ConsoleNotifier::new();

    let pipeline = ImportPipeline::new(config, &client, &store, &notifier);
    let report = pipeline.run().await?;

    println!(
        "Imported {} bookmark(s): {} notes created, {} overwritten, {} skipped",
        report.bookmarks_processed,
        report.notes_created,
        report.notes_overwritten,
        report.notes_skipped,
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match PipelineConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = execute_import(&config).await {
        log::error!("Import failed: {}", e);
        eprintln!("Import failed: {}", e);
        std::process::exit(1);
    }
}
