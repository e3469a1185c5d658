//! Comment form validation
//!
//! Validators are held in an explicit table mapping each form field to an
//! ordered list of `(validator, message)` rules. Fields are checked
//! independently; the form is valid only when every rule on every field passes.

use super::form::FormDraft;
use crate::config::FormConfig;
use crate::types::Rating;
use std::collections::BTreeMap;
use std::fmt;

/// Default minimum author length
pub const AUTHOR_MIN_LENGTH: usize = 2;

/// Default maximum author length
pub const AUTHOR_MAX_LENGTH: usize = 15;

/// Fields of the comment form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Star rating select
    Rating,
    /// Author name input
    Author,
    /// Comment body textarea
    Text,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Rating, Field::Author, Field::Text];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Rating => "Rating",
            Field::Author => "Your Name",
            Field::Text => "Comment",
        }
    }

    /// Next field in tab order, wrapping
    pub fn next(self) -> Self {
        match self {
            Field::Rating => Field::Author,
            Field::Author => Field::Text,
            Field::Text => Field::Rating,
        }
    }

    /// Previous field in tab order, wrapping
    pub fn prev(self) -> Self {
        match self {
            Field::Rating => Field::Text,
            Field::Author => Field::Rating,
            Field::Text => Field::Author,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Rating => write!(f, "rating"),
            Field::Author => write!(f, "author"),
            Field::Text => write!(f, "text"),
        }
    }
}

/// Current value of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text
    Text(&'a str),
    /// Rating select
    Rating(Rating),
}

/// A single predicate over a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Length is at least `n` characters
    MinLength(usize),
    /// Length is at most `n` characters; empty passes
    MaxLength(usize),
    /// Rating is within 1..=5
    HasRating,
}

impl Validator {
    /// Evaluate against a value
    pub fn passes(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Validator::MinLength(n), FieldValue::Text(s)) => s.chars().count() >= *n,
            (Validator::MaxLength(n), FieldValue::Text(s)) => s.chars().count() <= *n,
            (Validator::HasRating, FieldValue::Rating(r)) => r.is_selected(),
            // registered against the wrong kind of field
            _ => false,
        }
    }
}

/// A validator paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub validator: Validator,
    pub message: String,
}

impl Rule {
    pub fn new(validator: Validator, message: impl Into<String>) -> Self {
        Self {
            validator,
            message: message.into(),
        }
    }
}

/// Field-to-rules table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorTable {
    rules: BTreeMap<Field, Vec<Rule>>,
}

impl ValidatorTable {
    /// Create an empty table (every draft is valid)
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Build the comment form table with the given author bounds
    pub fn with_author_bounds(min: usize, max: usize) -> Self {
        Self::empty()
            .rule(Field::Rating, Validator::HasRating, "Please select a rating")
            .rule(
                Field::Author,
                Validator::MinLength(min),
                format!("Must be at least {} characters", min),
            )
            .rule(
                Field::Author,
                Validator::MaxLength(max),
                format!("Must be {} characters or less", max),
            )
    }

    /// Build the table from form configuration
    pub fn from_config(config: &FormConfig) -> Self {
        Self::with_author_bounds(config.author_min_length, config.author_max_length)
    }

    /// Append a rule for a field
    pub fn rule(mut self, field: Field, validator: Validator, message: impl Into<String>) -> Self {
        self.rules
            .entry(field)
            .or_default()
            .push(Rule::new(validator, message));
        self
    }

    /// Rules registered for a field, in evaluation order
    pub fn rules(&self, field: Field) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Messages of every failing rule on one field
    pub fn field_errors(&self, field: Field, value: FieldValue<'_>) -> Vec<&str> {
        self.rules(field)
            .iter()
            .filter(|rule| !rule.validator.passes(value))
            .map(|rule| rule.message.as_str())
            .collect()
    }

    /// Validate every field of a draft
    pub fn validate(&self, draft: &FormDraft) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            let messages = self.field_errors(field, draft.value(field));
            if !messages.is_empty() {
                errors
                    .by_field
                    .insert(field, messages.into_iter().map(str::to_string).collect());
            }
        }
        errors
    }

    /// Conjunction of all rules on all fields
    pub fn is_valid(&self, draft: &FormDraft) -> bool {
        Field::ALL.iter().all(|field| {
            let value = draft.value(*field);
            self.rules(*field).iter().all(|rule| rule.validator.passes(value))
        })
    }
}

impl Default for ValidatorTable {
    fn default() -> Self {
        Self::with_author_bounds(AUTHOR_MIN_LENGTH, AUTHOR_MAX_LENGTH)
    }
}

/// Failing messages grouped by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<Field, Vec<String>>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Messages for one field
    pub fn get(&self, field: Field) -> &[String] {
        self.by_field.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields with at least one failing rule
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.by_field.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .by_field
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
