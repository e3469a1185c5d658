//! Comment system module
//!
//! Handles the comment model, the comment form state machine, and validation.

pub mod date;
pub mod form;
pub mod model;
pub mod sink;
pub mod validator;

pub use form::{CommentForm, FormDraft, SubmitOutcome};
pub use model::*;
pub use sink::{CollectingSink, CommentSink};
pub use validator::{Field, FieldErrors, FieldValue, Rule, Validator, ValidatorTable};
