//! Core types for the csat crate.
//!
//! This crate provides the foundational types of the satisfaction survey:
//! - `Step` - The ordered wizard steps and their gating rules
//! - `Field`, `FieldValue` and `Score` - What each step collects
//! - `AnswerRecord` - The answers of one survey session
//! - `GatingRule` and `Rejection` - What must hold before a step may be left
//! - `SubmissionAdapter` and `KeywordSource` traits - For the external collaborators

mod score;
pub use score::{SCORE_MAX, SCORE_MIN, Score, ScoreError};

mod field;
pub use field::{Field, FieldKind, FieldValue};

mod record;
pub use record::{AnswerRecord, RecordError};

mod step;
pub use step::Step;

mod gating;
pub use gating::{GatingRule, Rejection, ValidationOutcome};

mod error;
pub use error::{FeedError, SubmitError};

mod traits;
pub use traits::{KeywordFeed, KeywordSource, SubmissionAdapter};
