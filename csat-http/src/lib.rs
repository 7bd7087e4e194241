//! HTTP collaborators for the csat survey wizard.
//!
//! - [`HttpSubmitter`] posts each completed survey to a collection endpoint
//!   from a background thread.
//! - [`LogSubmitter`] builds the same payload and only logs it.
//! - [`HttpKeywordSource`] reads the answer keyword feed.
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use csat::{OptionCatalog, SurveyMachine};
//! use csat_http::{HttpKeywordSource, HttpSubmitter};
//!
//! # fn main() -> Result<(), csat_http::HttpError> {
//! let keywords = HttpKeywordSource::new("https://example.com/exec?action=keywords", Duration::from_secs(5))?;
//! let submitter = HttpSubmitter::new("https://example.com/exec", Duration::from_secs(10))?;
//!
//! let survey = SurveyMachine::new(submitter).with_options(OptionCatalog::load(&keywords));
//! # let _ = survey;
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::HttpError;

mod id;
pub use id::submission_id;

mod payload;
pub use payload::{SubmissionPayload, format_timestamp};

mod submitter;
pub use submitter::{HttpSubmitter, LogSubmitter};

mod keywords;
pub use keywords::{HttpKeywordSource, parse_feed};
