// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, Tone};
use app_controller::Controller;

mod app_config;
mod translation;
mod text_processor;
mod file_utils;
mod app_controller;
mod providers;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text to Tagalog (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for tagasalin
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input text file; omit to read from stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the translation; omit to print to stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = "tagasalin.json")]
    config_path: String,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Use a more formal Tagalog tone
    #[arg(long)]
    formal: bool,

    /// Comma-separated terms to keep in original form
    #[arg(short, long)]
    glossary: Option<String>,

    /// Maximum words packed into a single translation request
    #[arg(long, value_name = "N")]
    max_words: Option<usize>,

    /// Maximum number of chunks translated concurrently
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Tagasalin - English to Tagalog translation with AI
///
/// A text translation tool that splits documents into paragraph-aligned
/// chunks and translates them to Tagalog (Filipino) through an
/// OpenAI-compatible backend.
#[derive(Parser, Debug)]
#[command(name = "tagasalin")]
#[command(author = "Tagasalin Team")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered English to Tagalog text translation")]
#[command(long_about = "Tagasalin translates English text into Tagalog (Filipino) using an OpenAI-compatible backend.

EXAMPLES:
    tagasalin -i article.txt -o article.tl.txt   # Translate a file
    cat notes.txt | tagasalin                    # Read stdin, print to stdout
    tagasalin -i draft.txt --formal              # Use the formal tone
    tagasalin -i draft.txt -g \"Blue Butterfly\"   # Keep glossary terms verbatim
    tagasalin -i book.txt --max-words 2000       # Pack smaller chunks
    tagasalin --log-level debug -i article.txt   # Show chunking diagnostics
    tagasalin completions bash > tagasalin.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in tagasalin.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically. The API key is read from
    translation.api_key or the OPENAI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file; omit to read from stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the translation; omit to print to stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = "tagasalin.json")]
    config_path: String,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Use a more formal Tagalog tone
    #[arg(long)]
    formal: bool,

    /// Comma-separated terms to keep in original form
    #[arg(short, long)]
    glossary: Option<String>,

    /// Maximum words packed into a single translation request
    #[arg(long, value_name = "N")]
    max_words: Option<usize>,

    /// Maximum number of chunks translated concurrently
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "tagasalin", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => {
            // Use the explicit translate subcommand args
            run_translate(args).await
        }
        None => {
            // Default behavior - use top-level args
            let translate_args = TranslateArgs {
                input: cli.input,
                output: cli.output,
                config_path: cli.config_path,
                model: cli.model,
                formal: cli.formal,
                glossary: cli.glossary,
                max_words: cli.max_words,
                concurrency: cli.concurrency,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }

    if options.formal {
        config.tone = Tone::Formal;
    }

    if let Some(glossary) = &options.glossary {
        config.glossary = glossary
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(max_words) = options.max_words {
        config.translation.max_words_per_chunk = max_words;
    }

    if let Some(concurrency) = options.concurrency {
        config.translation.concurrent_requests = concurrency;
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        let log_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };

        // Just update the max level without reinitializing the logger
        log::set_max_level(log_level);
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the translation pipeline
    controller.run(options.input, options.output).await?;

    Ok(())
}
