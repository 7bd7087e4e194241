use crate::{AnswerRecord, FeedError, SubmitError};

/// Trait for collaborators that transmit a completed survey.
///
/// `submit` is called exactly once per completed session, from the last
/// question step. Implementations should hand the record off and return
/// without waiting for the remote side: `Ok(())` means "dispatched", not
/// "delivered". Whatever the result, the survey proceeds to its final step.
pub trait SubmissionAdapter {
    /// Hand a completed record off for delivery.
    fn submit(&mut self, record: &AnswerRecord) -> Result<(), SubmitError>;

    /// Wait for dispatched submissions to settle. Called before the process
    /// exits; adapters without background work keep the default.
    fn flush(&mut self) {}
}

impl<A: SubmissionAdapter + ?Sized> SubmissionAdapter for Box<A> {
    fn submit(&mut self, record: &AnswerRecord) -> Result<(), SubmitError> {
        (**self).submit(record)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

impl<A: SubmissionAdapter + ?Sized> SubmissionAdapter for &mut A {
    fn submit(&mut self, record: &AnswerRecord) -> Result<(), SubmitError> {
        (**self).submit(record)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

/// Keyword lists suggested for the "best thing" and "worst thing" questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFeed {
    pub best: Vec<String>,
    pub worst: Vec<String>,
}

/// Trait for an optional remote source of answer suggestions, read once at
/// session start.
pub trait KeywordSource {
    /// Fetch the current keyword lists.
    fn fetch(&self) -> Result<KeywordFeed, FeedError>;
}
