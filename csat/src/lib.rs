//! # csat
//!
//! Core of a customer satisfaction survey wizard. Presentation-agnostic.
//!
//! The survey asks one question per step, in a fixed order, and only lets the
//! respondent move forward once the current answer passes its step's
//! gating rule:
//!
//! | Step             | Field              | Gating rule                         |
//! |------------------|--------------------|-------------------------------------|
//! | `TaxId`          | `tax_id`           | valid CPF or CNPJ                   |
//! | `Name`           | `full_name`        | at least 3 characters               |
//! | `Phone`          | `phone`            | plausible Brazilian phone number    |
//! | `ServiceScore`   | `service_score`    | score chosen                        |
//! | `WaitScore`      | `wait_score`       | score chosen                        |
//! | `RecommendScore` | `recommend_score`  | score chosen                        |
//! | `BestThing`      | `best_thing`       | option chosen or text typed         |
//! | `WorstThing`     | `worst_thing`      | option chosen or text typed         |
//! | `Suggestion`     | `suggestion`       | none                                |
//!
//! ## Usage
//!
//! ```rust
//! use csat::{Field, Step, SurveyMachine, TestAdapter, Transition};
//!
//! let mut survey = SurveyMachine::new(TestAdapter::new());
//! survey.advance(); // Intro -> TaxId
//!
//! survey.input(Field::TaxId, "111.444.777-36").unwrap();
//! assert!(matches!(survey.advance(), Transition::Rejected(_)));
//!
//! survey.input(Field::TaxId, "11144477735").unwrap();
//! survey.advance();
//! assert_eq!(survey.step(), Step::Name);
//! ```
//!
//! ## Modules
//!
//! - [`mask`] - as-you-type formatting of tax ids and phones
//! - [`document`] - CPF / CNPJ check digits
//! - [`phone`] - phone number plausibility
//! - [`gating`] - evaluation of each step's rule
//! - [`options`] - the "best/worst thing" option lists
//!
//! ## Collaborators
//!
//! Submission and keyword suggestions are external. Implementations live in
//! separate crates (`csat-http`); this crate ships [`TestAdapter`] and
//! [`StaticKeywords`] for tests.

// Re-export all types from csat-types
pub use csat_types::*;

pub mod document;
pub mod gating;
pub mod mask;
pub mod options;
pub mod phone;

mod machine;
pub use machine::{SurveyMachine, Transition};

pub use document::{TaxIdKind, is_valid_tax_id, tax_id_kind};
pub use mask::{mask_phone, mask_tax_id};
pub use options::{NONE_OPTION, OptionCatalog, OptionOrigin};
pub use phone::{PhoneError, is_valid_phone, validate_phone};

// Test doubles for driving surveys without a user or a network
mod test_adapter;
pub use test_adapter::{StaticKeywords, TestAdapter};
