//! List command
//!
//! Print the campsite directory.

use anyhow::Result;
use campsite_core::campsite::Directory;
use clap::Args;

use super::context::Context;
use super::load_directory;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, ctx: &Context) -> Result<()> {
    let storage = ctx.storage()?;
    let directory = load_directory(&storage)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries(&directory))?);
    } else {
        print_directory(&directory);
    }
    Ok(())
}

/// Print one line per campsite with its comment count
pub fn print_directory(directory: &Directory) {
    use colored::Colorize;

    println!("{}", "Campsites".bold().underline());
    if directory.campsites.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for campsite in &directory.campsites {
        let count = directory.comment_count(campsite.id);
        let marker = if campsite.featured { "★".yellow() } else { " ".normal() };
        println!(
            "  {} {:>3}  {}  {}",
            marker,
            campsite.id.to_string().cyan(),
            campsite.name,
            format!("({} comments)", count).dimmed()
        );
    }
}

fn summaries(directory: &Directory) -> Vec<serde_json::Value> {
    directory
        .campsites
        .iter()
        .map(|campsite| {
            serde_json::json!({
                "id": campsite.id,
                "name": campsite.name,
                "featured": campsite.featured,
                "comments": directory.comment_count(campsite.id),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campsite_core::types::CampsiteId;

    #[test]
    fn test_summaries_include_counts() {
        let summaries = summaries(&Directory::sample());
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0]["name"], "React Lake Campground");
        assert_eq!(summaries[0]["comments"], 2);
        assert_eq!(summaries[1]["id"], CampsiteId(1).0);
        assert_eq!(summaries[1]["comments"], 0);
    }
}
