//! Comment form state machine
//!
//! [`CommentForm`] owns two independent pieces of state: whether the modal is
//! open, and the in-progress [`FormDraft`] together with the set of fields the
//! user has touched. Every transition is a plain method so any UI binding can
//! drive it. Validation messages for a field stay hidden until that field is
//! touched; submission is forwarded to the [`CommentSink`] only when the whole
//! draft validates, after which the draft is discarded and the modal closes.

use super::model::CommentSubmission;
use super::sink::CommentSink;
use super::validator::{Field, FieldErrors, FieldValue, ValidatorTable};
use crate::types::{CampsiteId, Rating};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// In-progress form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    /// Selected rating, [`Rating::UNSELECTED`] until chosen
    pub rating: Rating,
    /// Author name
    pub author: String,
    /// Comment body
    pub text: String,
}

impl FormDraft {
    /// Value of one field, for validation
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Rating => FieldValue::Rating(self.rating),
            Field::Author => FieldValue::Text(&self.author),
            Field::Text => FieldValue::Text(&self.text),
        }
    }

    /// Whether every field holds its initial value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were handed to the sink; the form is closed and reset
    Submitted,
    /// Validation failed; nothing was forwarded
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Comment form bound to one campsite
#[derive(Debug, Clone)]
pub struct CommentForm {
    campsite_id: CampsiteId,
    modal_open: bool,
    draft: FormDraft,
    touched: BTreeSet<Field>,
    validators: ValidatorTable,
}

impl CommentForm {
    /// Create a closed, empty form with the default validators
    pub fn new(campsite_id: CampsiteId) -> Self {
        Self::with_validators(campsite_id, ValidatorTable::default())
    }

    /// Create a closed, empty form with a custom validator table
    pub fn with_validators(campsite_id: CampsiteId, validators: ValidatorTable) -> Self {
        Self {
            campsite_id,
            modal_open: false,
            draft: FormDraft::default(),
            touched: BTreeSet::new(),
            validators,
        }
    }

    pub fn campsite_id(&self) -> CampsiteId {
        self.campsite_id
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn validators(&self) -> &ValidatorTable {
        &self.validators
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Open the modal
    pub fn open(&mut self) {
        if !self.modal_open {
            debug!(campsite = %self.campsite_id, "Comment form opened");
        }
        self.modal_open = true;
    }

    /// Close the modal and discard the draft
    pub fn close(&mut self) {
        if self.modal_open {
            debug!(campsite = %self.campsite_id, "Comment form closed");
        }
        self.modal_open = false;
        self.reset();
    }

    /// Open when closed, close when open
    pub fn toggle(&mut self) {
        if self.modal_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replace a field's value and mark it touched
    ///
    /// Rating input that is not a number becomes the unselected sentinel.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Rating => self.draft.rating = Rating::parse_lenient(&value),
            Field::Author => self.draft.author = value,
            Field::Text => self.draft.text = value,
        }
        self.touch_field(field);
    }

    /// Select a rating directly and mark the rating touched
    pub fn select_rating(&mut self, rating: Rating) {
        self.draft.rating = rating;
        self.touch_field(Field::Rating);
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.text_value(field);
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: Field) {
        let mut value = self.text_value(field);
        value.pop();
        self.update_field(field, value);
    }

    fn text_value(&self, field: Field) -> String {
        match field {
            Field::Rating => self.draft.rating.to_string(),
            Field::Author => self.draft.author.clone(),
            Field::Text => self.draft.text.clone(),
        }
    }

    /// Mark a field as interacted with (blur)
    pub fn touch_field(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Every failing message for a field, regardless of touched state
    pub fn errors(&self, field: Field) -> Vec<&str> {
        self.validators.field_errors(field, self.draft.value(field))
    }

    /// Failing messages for a field once it has been touched
    pub fn visible_errors(&self, field: Field) -> Vec<&str> {
        if self.is_touched(field) {
            self.errors(field)
        } else {
            Vec::new()
        }
    }

    /// Whether every validator on every field passes
    pub fn is_valid(&self) -> bool {
        self.validators.is_valid(&self.draft)
    }

    /// Attempt to submit the draft
    ///
    /// On failure every field is marked touched so its messages show, and the
    /// sink is not called. On success the sink is called exactly once, then
    /// the modal closes and the draft is discarded.
    pub fn submit<S: CommentSink + ?Sized>(&mut self, sink: &mut S) -> SubmitOutcome {
        let errors = self.validators.validate(&self.draft);
        if !errors.is_empty() {
            debug!(campsite = %self.campsite_id, %errors, "Comment submit rejected");
            self.touched.extend(Field::ALL);
            return SubmitOutcome::Rejected(errors);
        }

        let draft = std::mem::take(&mut self.draft);
        let submission = CommentSubmission {
            campsite_id: self.campsite_id,
            rating: draft.rating,
            author: draft.author,
            text: draft.text,
        };
        info!(campsite = %submission.campsite_id, rating = %submission.rating, "Comment submitted");
        sink.submit_comment(submission);

        self.close();
        SubmitOutcome::Submitted
    }

    fn reset(&mut self) {
        self.draft = FormDraft::default();
        self.touched.clear();
    }
}
