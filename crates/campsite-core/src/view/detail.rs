//! Campsite detail view state selection
//!
//! [`DetailView::select`] is a pure decision table over the view inputs. The
//! first matching row wins:
//!
//! | loading | error message | campsite | result    |
//! |---------|---------------|----------|-----------|
//! | yes     | any           | any      | `Loading` |
//! | no      | non-empty     | any      | `Error`   |
//! | no      | none / empty  | present  | `Content` |
//! | no      | none / empty  | absent   | `Empty`   |

use super::assets::AssetResolver;
use crate::campsite::Campsite;
use crate::comment::{Comment, CommentForm, ValidatorTable};
use crate::config::Config;
use crate::types::{CampsiteId, CommentId, Rating};

/// Label of the breadcrumb's parent item
pub const DIRECTORY_LABEL: &str = "Directory";

/// Inputs supplied by the host on every render
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailProps<'a> {
    pub is_loading: bool,
    pub error_message: Option<&'a str>,
    pub campsite: Option<&'a Campsite>,
    pub comments: Option<&'a [Comment]>,
}

/// One breadcrumb entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    /// Navigation target; `None` for the active item
    pub link: Option<String>,
    pub active: bool,
}

/// Breadcrumb trail above the heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub items: Vec<BreadcrumbItem>,
}

impl Breadcrumb {
    /// `Directory` link followed by the campsite name as the active item
    pub fn for_campsite(campsite: &Campsite, directory_link: &str) -> Self {
        Self {
            items: vec![
                BreadcrumbItem {
                    label: DIRECTORY_LABEL.to_string(),
                    link: Some(directory_link.to_string()),
                    active: false,
                },
                BreadcrumbItem {
                    label: campsite.name.clone(),
                    link: None,
                    active: true,
                },
            ],
        }
    }

    pub fn active(&self) -> Option<&BreadcrumbItem> {
        self.items.iter().find(|item| item.active)
    }

    /// Link target of the first non-active item
    pub fn parent_link(&self) -> Option<&str> {
        self.items
            .iter()
            .filter(|item| !item.active)
            .find_map(|item| item.link.as_deref())
    }
}

/// Image and description block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampsiteCard {
    pub image_url: String,
    pub image_alt: String,
    pub description: String,
}

/// One rendered comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    pub id: CommentId,
    pub text: String,
    pub rating: Rating,
    pub byline: String,
}

impl From<&Comment> for CommentLine {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text.clone(),
            rating: comment.rating,
            byline: comment.byline(),
        }
    }
}

/// Everything shown in the content state
///
/// The comment form is always part of the content; `comments` is `None` when
/// there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub campsite_id: CampsiteId,
    pub breadcrumb: Breadcrumb,
    pub heading: String,
    pub card: CampsiteCard,
    pub comments: Option<Vec<CommentLine>>,
}

/// The mutually exclusive visual states of the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Error(String),
    Content(DetailContent),
    Empty,
}

/// Detail view composer
#[derive(Debug, Clone)]
pub struct DetailView {
    assets: AssetResolver,
    directory_link: String,
    validators: ValidatorTable,
}

impl DetailView {
    pub fn new(assets: AssetResolver, directory_link: impl Into<String>) -> Self {
        Self {
            assets,
            directory_link: directory_link.into(),
            validators: ValidatorTable::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            assets: AssetResolver::from_config(&config.assets),
            directory_link: config.navigation.directory_link.clone(),
            validators: ValidatorTable::from_config(&config.form),
        }
    }

    pub fn directory_link(&self) -> &str {
        &self.directory_link
    }

    /// Pick the visual state for the given inputs
    pub fn select(&self, props: &DetailProps<'_>) -> DetailState {
        if props.is_loading {
            return DetailState::Loading;
        }

        if let Some(message) = props.error_message.filter(|m| !m.is_empty()) {
            return DetailState::Error(message.to_string());
        }

        match props.campsite {
            Some(campsite) => DetailState::Content(self.content(campsite, props.comments)),
            None => DetailState::Empty,
        }
    }

    /// Comment form bound to a campsite, using this view's validators
    pub fn comment_form(&self, campsite_id: CampsiteId) -> CommentForm {
        CommentForm::with_validators(campsite_id, self.validators.clone())
    }

    fn content(&self, campsite: &Campsite, comments: Option<&[Comment]>) -> DetailContent {
        let comments = comments
            .filter(|list| !list.is_empty())
            .map(|list| list.iter().map(CommentLine::from).collect());

        DetailContent {
            campsite_id: campsite.id,
            breadcrumb: Breadcrumb::for_campsite(campsite, &self.directory_link),
            heading: campsite.name.clone(),
            card: CampsiteCard {
                image_url: self.assets.resolve(&campsite.image),
                image_alt: campsite.name.clone(),
                description: campsite.description.clone(),
            },
            comments,
        }
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campsite::Directory;
    use pretty_assertions::assert_eq;

    fn content_of(state: DetailState) -> DetailContent {
        match state {
            DetailState::Content(content) => content,
            other => panic!("expected content, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_dominates() {
        let dir = Directory::sample();
        let view = DetailView::default();
        for error in [None, Some("boom")] {
            for campsite in [None, dir.campsite(CampsiteId(0))] {
                let props = DetailProps {
                    is_loading: true,
                    error_message: error,
                    campsite,
                    comments: Some(&dir.comments),
                };
                assert_eq!(view.select(&props), DetailState::Loading);
            }
        }
    }

    #[test]
    fn test_error_dominates_content() {
        let dir = Directory::sample();
        let props = DetailProps {
            is_loading: false,
            error_message: Some("Failed to fetch"),
            campsite: dir.campsite(CampsiteId(0)),
            comments: Some(&dir.comments),
        };
        assert_eq!(
            DetailView::default().select(&props),
            DetailState::Error("Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_empty_error_message_is_absent() {
        let dir = Directory::sample();
        let props = DetailProps {
            error_message: Some(""),
            campsite: dir.campsite(CampsiteId(0)),
            ..Default::default()
        };
        assert!(matches!(DetailView::default().select(&props), DetailState::Content(_)));
    }

    #[test]
    fn test_nothing_selected_is_empty() {
        assert_eq!(DetailView::default().select(&DetailProps::default()), DetailState::Empty);
    }

    #[test]
    fn test_content_name_in_breadcrumb_and_heading() {
        let dir = Directory::sample();
        let comments = dir.comments_for(CampsiteId(0));
        let props = DetailProps {
            campsite: dir.campsite(CampsiteId(0)),
            comments: Some(&comments),
            ..Default::default()
        };

        let content = content_of(DetailView::default().select(&props));

        assert_eq!(content.heading, "React Lake Campground");
        assert_eq!(content.breadcrumb.active().unwrap().label, "React Lake Campground");
        assert_eq!(content.breadcrumb.items[0].label, DIRECTORY_LABEL);
        assert_eq!(content.breadcrumb.parent_link(), Some("/directory"));
        assert_eq!(content.card.image_url, "assets/images/react-lake.jpg");
        assert_eq!(content.card.image_alt, "React Lake Campground");
        assert_eq!(content.comments.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_comment_lines() {
        let dir = Directory::sample();
        let comments = dir.comments_for(CampsiteId(0));
        let props = DetailProps {
            campsite: dir.campsite(CampsiteId(0)),
            comments: Some(&comments),
            ..Default::default()
        };

        let lines = content_of(DetailView::default().select(&props)).comments.unwrap();
        assert_eq!(lines[0].text, "What a magnificent view!");
        assert_eq!(lines[0].byline, "-- Tinus Lorvaldes Oct 25, 2018");
        assert_eq!(lines[1].rating, Rating(4));
    }

    #[test]
    fn test_absent_or_empty_comments_omit_list() {
        let dir = Directory::sample();
        let campsite = dir.campsite(CampsiteId(1));
        let empty: Vec<Comment> = Vec::new();

        for comments in [None, Some(empty.as_slice())] {
            let props = DetailProps {
                campsite,
                comments,
                ..Default::default()
            };
            let content = content_of(DetailView::default().select(&props));
            assert!(content.comments.is_none());
            assert_eq!(content.campsite_id, CampsiteId(1));
        }
    }

    #[test]
    fn test_custom_directory_link() {
        let mut config = Config::default();
        config.navigation.directory_link = "/campsites".to_string();
        config.assets.base_url = String::new();
        let view = DetailView::from_config(&config);
        let dir = Directory::sample();
        let props = DetailProps {
            campsite: dir.campsite(CampsiteId(0)),
            ..Default::default()
        };
        let content = content_of(view.select(&props));
        assert_eq!(content.breadcrumb.parent_link(), Some("/campsites"));
        assert_eq!(content.card.image_url, "images/react-lake.jpg");
    }

    #[test]
    fn test_comment_form_uses_configured_bounds() {
        let mut config = Config::default();
        config.form.author_max_length = 3;
        let view = DetailView::from_config(&config);
        let mut form = view.comment_form(CampsiteId(0));
        form.open();
        form.update_field(crate::comment::Field::Author, "Alice");
        assert_eq!(
            form.errors(crate::comment::Field::Author),
            vec!["Must be 3 characters or less"]
        );
    }
}
