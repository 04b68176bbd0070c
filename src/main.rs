// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::Result;
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;
use events::EventLog;

mod app_config;
mod app_controller;
mod errors;
mod events;
mod streaming;
mod typography;

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

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the typography and streaming demos (default command)
    #[command(alias = "demo")]
    Run(RunArgs),

    /// Generate shell completions for rendergate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "rendergate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Run only the typography demo
    #[arg(short, long, conflicts_with = "streaming_only")]
    typography_only: bool,

    /// Run only the streaming demo
    #[arg(short, long, conflicts_with = "typography_only")]
    streaming_only: bool,
}

/// rendergate - shared appearances and gated streaming
///
/// A demo runner that typesets a document through a shared appearance cache
/// and plays streaming scenarios through a tier-gated content proxy.
#[derive(Parser, Debug)]
#[command(name = "rendergate")]
#[command(version = "0.3.0")]
#[command(about = "Shared-appearance rendering and tier-gated streaming demos")]
#[command(long_about = "rendergate typesets a document through a shared appearance cache and
plays streaming scenarios through a tier-gated content proxy.

EXAMPLES:
    rendergate                                  # Run both demos with default config
    rendergate -t                               # Typography demo only
    rendergate -s                               # Streaming demo only
    rendergate -c my-demo.json                  # Use a specific config file
    rendergate --log-level debug                # Show cache hits and play attempts
    rendergate completions bash > rendergate.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in rendergate.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "rendergate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Run only the typography demo
    #[arg(short, long, conflicts_with = "streaming_only")]
    typography_only: bool,

    /// Run only the streaming demo
    #[arg(short, long, conflicts_with = "typography_only")]
    streaming_only: bool,
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "rendergate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Run(args)) => run_demo(args),
        None => {
            // Default behavior - use top-level args
            let run_args = RunArgs {
                config_path: cli.config_path,
                log_level: cli.log_level,
                typography_only: cli.typography_only,
                streaming_only: cli.streaming_only,
            };
            run_demo(run_args)
        }
    }
}

fn run_demo(options: RunArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        let mut config = Config::from_file(config_path)?;

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config.to_file(config_path)?;

        config
    };

    log::set_max_level(level_filter_for(&config.log_level));

    let controller = Controller::with_config(config)?;
    let events = EventLog::new();

    if options.typography_only {
        let (glyphs, appearances) = controller.run_typography(&events)?;
        info!("Typography demo done: {} glyphs over {} shared appearances", glyphs, appearances);
    } else if options.streaming_only {
        let (allowed, denied) = controller.run_streaming(&events)?;
        info!("Streaming demo done: {} plays allowed, {} denied", allowed, denied);
    } else {
        let summary = controller.run(&events)?;
        info!(
            "Demo done: {} glyphs over {} appearances; {} plays allowed, {} denied; {} events recorded",
            summary.glyph_count,
            summary.appearance_count,
            summary.plays_allowed,
            summary.plays_denied,
            events.len()
        );
    }

    Ok(())
}
