//! Detail view module
//!
//! Pure view-model for the campsite detail screen: which state to show and
//! what goes into it. Drawing is left to the UI crate.

mod assets;
mod detail;

pub use assets::AssetResolver;
pub use detail::{
    Breadcrumb, BreadcrumbItem, CampsiteCard, CommentLine, DetailContent, DetailProps,
    DetailState, DetailView, DIRECTORY_LABEL,
};
