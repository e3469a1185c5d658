//! Submission sink seam between the comment form and its host

use super::model::CommentSubmission;

/// Receiver of validated comment submissions
///
/// Called synchronously and exactly once per successful submit. Persisting the
/// comment and feeding the updated list back into the view is the
/// implementor's job; the form never observes a failure here.
pub trait CommentSink {
    fn submit_comment(&mut self, submission: CommentSubmission);
}

impl<F> CommentSink for F
where
    F: FnMut(CommentSubmission),
{
    fn submit_comment(&mut self, submission: CommentSubmission) {
        self(submission)
    }
}

/// Sink that keeps submissions in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub submissions: Vec<CommentSubmission>,
}

impl CommentSink for CollectingSink {
    fn submit_comment(&mut self, submission: CommentSubmission) {
        self.submissions.push(submission);
    }
}
