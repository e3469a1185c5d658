//! Show command
//!
//! Open the detail screen for one campsite.

use anyhow::{bail, Result};
use campsite_core::store::DirectoryStorage;
use campsite_core::types::CampsiteId;
use campsite_core::view::{DetailContent, DetailProps, DetailState, DetailView};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

use super::context::Context;
use super::list::print_directory;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Campsite ID
    pub id: String,

    /// Print the detail screen as text instead of starting the TUI
    #[arg(long)]
    pub no_tui: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = CampsiteId::parse(&args.id)?;
    let view = DetailView::from_config(&ctx.config);
    let storage = ctx.storage()?;

    if args.no_tui {
        let state = load_state(&view, &storage, id);
        return print_state(&state, id);
    }

    run_tui(view, id, Arc::new(storage), ctx)
}

/// Load synchronously and select the detail state
fn load_state(view: &DetailView, storage: &dyn DirectoryStorage, id: CampsiteId) -> DetailState {
    match storage.load() {
        Ok(directory) => {
            let comments = directory.comments_for(id);
            view.select(&DetailProps {
                is_loading: false,
                error_message: None,
                campsite: directory.campsite(id),
                comments: Some(&comments),
            })
        }
        Err(e) => {
            let message = e.to_string();
            view.select(&DetailProps {
                error_message: Some(&message),
                ..DetailProps::default()
            })
        }
    }
}

fn print_state(state: &DetailState, id: CampsiteId) -> Result<()> {
    match state {
        DetailState::Content(content) => {
            print!("{}", format_content(content));
            Ok(())
        }
        DetailState::Error(message) => {
            bail!("{}\nRun 'campsite-info init' to create sample data.", message)
        }
        DetailState::Empty => bail!("No campsite with ID {}", id),
        DetailState::Loading => Ok(()),
    }
}

/// Plain-text rendition of the detail screen
fn format_content(content: &DetailContent) -> String {
    let mut out = String::new();

    let trail: Vec<&str> = content
        .breadcrumb
        .items
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    out.push_str(&trail.join(" / "));
    out.push('\n');
    out.push_str(&content.heading);
    out.push('\n');
    out.push_str(&"=".repeat(content.heading.chars().count()));
    out.push_str("\n\n");

    out.push_str(&format!("[image: {}] {}\n", content.card.image_alt, content.card.image_url));
    out.push_str(&content.card.description);
    out.push_str("\n\n");

    if let Some(comments) = &content.comments {
        out.push_str("Comments\n--------\n");
        for comment in comments {
            out.push_str(&comment.text);
            out.push('\n');
            out.push_str(&format!("{} {}\n\n", comment.rating.stars(), comment.byline));
        }
    }

    out.push_str(&format!(
        "Submit Comment: campsite-info comment {}\n",
        content.campsite_id
    ));
    out
}

fn run_tui(
    view: DetailView,
    id: CampsiteId,
    storage: Arc<dyn DirectoryStorage>,
    ctx: &Context,
) -> Result<()> {
    use campsite_ui::App;

    let navigate_to = {
        let mut app = App::new(
            view,
            id,
            Arc::clone(&storage),
            ctx.config.ui.animate_comments,
            Duration::from_millis(ctx.config.ui.tick_rate_ms),
        )?;
        app.run()?
    };

    if let Some(link) = navigate_to {
        tracing::info!("Followed {}", link);
        print_directory(&storage.load_or_default()?);
    }
    Ok(())
}
