//! Comment command
//!
//! Submit a comment through the same form the TUI uses.

use anyhow::{bail, Result};
use campsite_core::comment::{CommentForm, Field, FieldErrors, SubmitOutcome};
use campsite_core::types::{CampsiteId, Rating};
use campsite_core::view::DetailView;
use campsite_ui::app::DirectorySink;
use clap::Args;
use std::io::IsTerminal;

use super::context::Context;
use super::load_directory;

/// Arguments for the comment command
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Campsite ID
    pub id: String,

    /// Rating from 1 to 5
    #[arg(long, short)]
    pub rating: Option<String>,

    /// Your name
    #[arg(long, short)]
    pub author: Option<String>,

    /// Comment text
    #[arg(long, short)]
    pub text: Option<String>,
}

/// Execute the comment command
pub fn execute(args: CommentArgs, ctx: &Context) -> Result<()> {
    use colored::Colorize;

    let id = CampsiteId::parse(&args.id)?;
    let storage = ctx.storage()?;
    let mut directory = load_directory(&storage)?;

    let Some(campsite) = directory.campsite(id) else {
        bail!("No campsite with ID {}", id);
    };
    let name = campsite.name.clone();

    let interactive = std::io::stdin().is_terminal();
    let mut form = DetailView::from_config(&ctx.config).comment_form(id);
    form.open();
    fill_form(&mut form, args, interactive)?;

    let mut sink = DirectorySink::new(&mut directory, &storage);
    match form.submit(&mut sink) {
        SubmitOutcome::Submitted => match sink.result.take() {
            Some(Ok(comment_id)) => {
                println!(
                    "{} Comment #{} added to {}",
                    "✓".green(),
                    comment_id,
                    name.cyan()
                );
                Ok(())
            }
            Some(Err(e)) => bail!("Comment not saved: {}", e),
            None => Ok(()),
        },
        SubmitOutcome::Rejected(errors) => {
            print_errors(&errors);
            bail!("Comment rejected");
        }
    }
}

/// Copy flags into the form, prompting for missing ones on a terminal
fn fill_form(form: &mut CommentForm, args: CommentArgs, interactive: bool) -> Result<()> {
    use dialoguer::{Input, Select};

    let rating = match args.rating {
        Some(rating) => rating,
        None if interactive => {
            let items: Vec<String> = (Rating::MIN..=Rating::MAX)
                .map(|n| format!("{} {}", n, Rating(n).stars()))
                .collect();
            let index = Select::new()
                .with_prompt("Rating")
                .items(&items)
                .default(items.len() - 1)
                .interact()?;
            (index as u8 + Rating::MIN).to_string()
        }
        None => String::new(),
    };
    form.update_field(Field::Rating, rating);

    let author = match args.author {
        Some(author) => author,
        None if interactive => Input::<String>::new()
            .with_prompt(Field::Author.label())
            .interact_text()?,
        None => String::new(),
    };
    form.update_field(Field::Author, author);

    let text = match args.text {
        Some(text) => text,
        None if interactive => Input::<String>::new()
            .with_prompt(Field::Text.label())
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };
    form.update_field(Field::Text, text);

    Ok(())
}

fn print_errors(errors: &FieldErrors) {
    use colored::Colorize;

    for field in errors.fields() {
        eprintln!(
            "{} {}: {}",
            "✗".red(),
            field.label(),
            errors.get(field).join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rating: Option<&str>, author: Option<&str>) -> CommentArgs {
        CommentArgs {
            id: "0".to_string(),
            rating: rating.map(str::to_string),
            author: author.map(str::to_string),
            text: None,
        }
    }

    #[test]
    fn test_fill_form_without_prompts() {
        let mut form = CommentForm::new(CampsiteId(0));
        form.open();
        fill_form(&mut form, args(Some("4"), Some("Alice")), false).unwrap();
        assert_eq!(form.draft().rating, Rating(4));
        assert_eq!(form.draft().author, "Alice");
        assert_eq!(form.draft().text, "");
        assert!(form.is_valid());
    }

    #[test]
    fn test_missing_flags_fail_validation() {
        let mut form = CommentForm::new(CampsiteId(0));
        form.open();
        fill_form(&mut form, args(None, Some("A")), false).unwrap();
        assert!(!form.is_valid());
        assert_eq!(form.visible_errors(Field::Rating), vec!["Please select a rating"]);
        assert_eq!(
            form.visible_errors(Field::Author),
            vec!["Must be at least 2 characters"]
        );
    }

    #[test]
    fn test_non_numeric_rating_is_unselected() {
        let mut form = CommentForm::new(CampsiteId(0));
        fill_form(&mut form, args(Some("five"), Some("Alice")), false).unwrap();
        assert_eq!(form.draft().rating, Rating::UNSELECTED);
    }
}
