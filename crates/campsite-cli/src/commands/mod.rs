//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod context;
pub mod init;
pub mod list;
pub mod show;

use anyhow::Result;
use campsite_core::campsite::Directory;
use campsite_core::store::DirectoryStorage;
use campsite_core::CampsiteError;
use campsite_storage::FileSystemStorage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use context::Context;

/// campsite-info - Campsite details and comments in the terminal
#[derive(Debug, Parser)]
#[command(name = "campsite-info")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CAMPSITE_INFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data file path (overrides the config)
    #[arg(short, long, global = true, env = "CAMPSITE_INFO_DATA")]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write sample campsites and a default configuration
    Init(init::InitArgs),

    /// List campsites
    List(list::ListArgs),

    /// Show the detail screen for a campsite
    Show(show::ShowArgs),

    /// Submit a comment for a campsite
    Comment(comment::CommentArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file
    let log_file = match &cli.command {
        Commands::Show(args) if !args.no_tui => Some(log_file_path()),
        _ => None,
    };
    setup_logging(cli.verbose, log_file);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Commands::Config(cmd) = cli.command {
        let config_path = cli.config.unwrap_or_else(context::default_config_path);
        return config::execute(cmd, &config_path);
    }

    let ctx = Context::load(cli.config, cli.data)?;

    // Dispatch to command handler
    match cli.command {
        Commands::Init(args) => init::execute(args, &ctx),
        Commands::List(args) => list::execute(args, &ctx),
        Commands::Show(args) => show::execute(args, &ctx),
        Commands::Comment(args) => comment::execute(args, &ctx),
        Commands::Config(_) => Ok(()),
    }
}

/// Load the directory, pointing at `init` when there is no data yet
pub(crate) fn load_directory(storage: &FileSystemStorage) -> Result<Directory> {
    match storage.load() {
        Ok(directory) => Ok(directory),
        Err(CampsiteError::DataFileNotFound(path)) => anyhow::bail!(
            "No data at {}. Run 'campsite-info init' to create sample data.",
            path.display()
        ),
        Err(e) => Err(e.into()),
    }
}

fn log_file_path() -> PathBuf {
    FileSystemStorage::default_path().with_file_name("campsite-info.log")
}

fn setup_logging(verbosity: u8, log_file: Option<PathBuf>) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    };

    let file = path
        .parent()
        .map(std::fs::create_dir_all)
        .transpose()
        .and_then(|_| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        });

    match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        // Logging is best effort while the TUI runs
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}
