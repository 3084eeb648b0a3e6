//! TypeCard CLI Binary
//!
//! The command-line interface for TypeCard, a reference card for scalar
//! types: their kinds, default values, literal spellings, and storage
//! classes.
//!
//! # Usage
//!
//! ```bash
//! # Show the variables reference card
//! typecard show
//!
//! # Show one entry with its literal and value
//! typecard show --entry hex
//!
//! # Spell a number in every notation
//! typecard literal 1000000
//!
//! # List the scalar kinds with widths and defaults
//! typecard kinds
//!
//! # List the storage classes
//! typecard storage
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use typecard_cli::{
    cli::CliConfig,
    commands::{
        self, completions::CompletionsArgs, kinds::KindsArgs, literal::LiteralArgs,
        show::ShowArgs, storage::StorageArgs,
    },
    diagnostics::setup_error_reporting,
    Result,
};

#[derive(Parser)]
#[command(
    name = "typecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "TypeCard: scalar type reference cards in the terminal",
    long_about = r#"
TypeCard renders a reference card for scalar types: the nine kinds with
their widths and default values, the four integer literal notations,
and the four storage classes that govern sharing and reassignment.

EXAMPLES:
    typecard show                         # Render the variables card
    typecard show --entry big             # One entry with its spelling
    typecard literal 26 --notation hex    # 0x1a
    typecard kinds --format json          # Kind table as JSON
    "#
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the variables reference card or a single entry
    Show(ShowArgs),

    /// List the scalar kinds with widths, defaults, and descriptions
    Kinds(KindsArgs),

    /// Spell an integer in its literal notations
    Literal(LiteralArgs),

    /// List the storage classes and their rules
    Storage(StorageArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up error reporting
    setup_error_reporting()?;

    // Configure logging
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;

    if !config.output.color {
        console::set_colors_enabled(false);
    }

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show_command(args, &config),
        Commands::Kinds(args) => commands::kinds_command(args, &config),
        Commands::Literal(args) => commands::literal_command(args, &config),
        Commands::Storage(args) => commands::storage_command(args, &config),
        Commands::Completions(args) => commands::completions_command(args, &config),
    };

    match result {
        Ok(_) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            use tracing::error;
            if !typecard_cli::diagnostics::render_cli_error(&e) {
                // Emit via structured logging rather than printing directly
                error!("{}", e);
            }
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
