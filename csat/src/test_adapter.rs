//! Test doubles for the survey's external collaborators.
//!
//! `TestAdapter` records every submitted record instead of sending it, and
//! can be told to fail. `StaticKeywords` serves a fixed keyword feed.
//!
//! # Example
//!
//! ```rust
//! use csat::{Field, Step, SurveyMachine, TestAdapter};
//!
//! let mut survey = SurveyMachine::new(TestAdapter::new());
//! survey.advance();
//! survey.input(Field::TaxId, "11144477735").unwrap();
//! survey.advance();
//!
//! assert_eq!(survey.step(), Step::Name);
//! assert_eq!(survey.record().tax_id, "111.444.777-35");
//! ```

use crate::{AnswerRecord, FeedError, KeywordFeed, KeywordSource, SubmissionAdapter, SubmitError};

/// A submission adapter that keeps submitted records in memory.
#[derive(Debug, Clone, Default)]
pub struct TestAdapter {
    submissions: Vec<AnswerRecord>,
    failure: Option<String>,
}

impl TestAdapter {
    /// Create an adapter that accepts every submission.
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            failure: None,
        }
    }

    /// Make every submission fail with `message` (the record is still kept).
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// All records submitted so far, oldest first.
    pub fn submissions(&self) -> &[AnswerRecord] {
        &self.submissions
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    pub fn last_submission(&self) -> Option<&AnswerRecord> {
        self.submissions.last()
    }
}

impl SubmissionAdapter for TestAdapter {
    fn submit(&mut self, record: &AnswerRecord) -> Result<(), SubmitError> {
        self.submissions.push(record.clone());
        match &self.failure {
            Some(message) => Err(SubmitError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}

/// A keyword source that returns a fixed feed, or fails.
#[derive(Debug, Clone, Default)]
pub struct StaticKeywords {
    feed: Option<KeywordFeed>,
}

impl StaticKeywords {
    /// Serve these keyword lists.
    pub fn new<S: Into<String>>(
        best: impl IntoIterator<Item = S>,
        worst: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            feed: Some(KeywordFeed {
                best: best.into_iter().map(Into::into).collect(),
                worst: worst.into_iter().map(Into::into).collect(),
            }),
        }
    }

    /// Fail every fetch.
    pub fn unavailable() -> Self {
        Self { feed: None }
    }
}

impl KeywordSource for StaticKeywords {
    fn fetch(&self) -> Result<KeywordFeed, FeedError> {
        self.feed
            .clone()
            .ok_or_else(|| FeedError::unavailable(anyhow::anyhow!("no keyword feed configured")))
    }
}
