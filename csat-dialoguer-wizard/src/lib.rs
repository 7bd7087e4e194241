//! # csat-dialoguer-wizard
//!
//! Terminal front end for the csat satisfaction survey.
//!
//! Questions are presented one at a time with `dialoguer` prompts, driving a
//! [`csat::SurveyMachine`]. The `csat` binary adds configuration, logging
//! and the HTTP collaborators from `csat-http`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use csat::{SurveyMachine, TestAdapter};
//! use csat_dialoguer_wizard::{DialoguerWizard, SessionEnd};
//!
//! fn main() -> anyhow::Result<()> {
//!     let wizard = DialoguerWizard::new();
//!     let mut survey = SurveyMachine::new(TestAdapter::new());
//!     if wizard.run(&mut survey)? == SessionEnd::Completed {
//!         println!("{:?}", survey.adapter().last_submission());
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
pub mod config;
pub mod prompts;

pub use backend::{DialoguerWizard, SessionEnd, WizardError};
pub use config::{ConfigError, WizardConfig};
