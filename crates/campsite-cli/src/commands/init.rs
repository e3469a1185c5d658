//! Init command
//!
//! Write a sample data file and a default configuration.

use anyhow::{Context as _, Result};
use campsite_core::campsite::Directory;
use campsite_core::config::Config;
use campsite_core::store::DirectoryStorage;
use campsite_storage::{FileSystemStorage, DATA_FILE_NAME};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use super::context::{Context, CONFIG_FILE_NAME};

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Directory to hold config.toml and campsites.json
    /// (default: the configured locations)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Execute the init command
pub fn execute(args: InitArgs, ctx: &Context) -> Result<()> {
    use colored::Colorize;

    let (config_path, data_path) = match &args.path {
        Some(dir) => (dir.join(CONFIG_FILE_NAME), dir.join(DATA_FILE_NAME)),
        None => (ctx.config_path.clone(), ctx.data_path.clone()),
    };

    println!("Initializing campsite-info...");

    if (config_path.exists() || data_path.exists()) && !args.force {
        eprintln!(
            "{} campsite-info already initialized. Use --force to reinitialize.",
            "⚠".yellow()
        );
        return Ok(());
    }

    let storage = FileSystemStorage::new(&data_path)?;
    let directory = Directory::sample();
    storage.save(&directory)?;
    println!(
        "{} Wrote {} campsites to {}",
        "✓".green(),
        directory.campsites.len(),
        data_path.display()
    );

    write_config(&config_path, &data_path)?;
    println!("{} Wrote configuration to {}", "✓".green(), config_path.display());

    println!("\n{}", "Next steps:".bold());
    let config_flag = if args.path.is_some() {
        format!(" --config {}", config_path.display())
    } else {
        String::new()
    };
    println!("  {}", format!("campsite-info{} list", config_flag).cyan());
    println!("  {}", format!("campsite-info{} show 0", config_flag).cyan());

    Ok(())
}

fn write_config(config_path: &Path, data_path: &Path) -> Result<()> {
    let mut config = Config::default();
    config.data.path = Some(data_path_for(config_path, data_path));

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = format!("# campsite-info configuration\n\n{}", config.to_toml()?);
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

/// Data path as written into the config: bare file name when it sits next to it
fn data_path_for(config_path: &Path, data_path: &Path) -> PathBuf {
    match (config_path.parent(), data_path.parent(), data_path.file_name()) {
        (Some(a), Some(b), Some(name)) if a == b => PathBuf::from(name),
        _ => data_path.to_path_buf(),
    }
}
