//! Evaluation of the per-step gating rules.

use csat_types::{AnswerRecord, GatingRule, Rejection, Step, ValidationOutcome};

use crate::document::is_valid_tax_id;
use crate::phone::validate_phone;

const FILL_IN: &str = "Por favor, preencha o campo.";
const INVALID_TAX_ID: &str = "CPF ou CNPJ inválido.";
const NAME_MISSING: &str = "Por favor, informe seu nome.";
const PHONE_MISSING: &str = "Por favor, informe seu telefone.";
const SCORE_MISSING: &str = "Selecione uma nota.";
const CHOICE_MISSING: &str = "Selecione ou digite.";

/// Check whether `step` may be left going forward with the answers in `record`.
///
/// Steps without a rule (`Intro`, `Final`) always pass.
pub fn check_step(step: Step, record: &AnswerRecord) -> ValidationOutcome {
    match step.gating_rule() {
        Some(rule) => check_rule(step, rule, record),
        None => Ok(()),
    }
}

/// Evaluate one rule against the record on behalf of `step`.
pub fn check_rule(step: Step, rule: GatingRule, record: &AnswerRecord) -> ValidationOutcome {
    let reject = |reason: &str| Err(Rejection::new(step, reason));

    match rule {
        GatingRule::TaxId(field) => {
            let value = record.text(field);
            if value.is_empty() {
                return reject(FILL_IN);
            }
            if !is_valid_tax_id(value) {
                return reject(INVALID_TAX_ID);
            }
        }
        GatingRule::MinChars { field, min } => {
            let value = record.text(field);
            if value.is_empty() {
                return reject(NAME_MISSING);
            }
            if value.trim().chars().count() < min {
                return reject(&format!("Mínimo {min} caracteres."));
            }
        }
        GatingRule::Phone(field) => {
            let value = record.text(field);
            if value.is_empty() {
                return reject(PHONE_MISSING);
            }
            if let Err(err) = validate_phone(value) {
                return reject(&err.to_string());
            }
        }
        GatingRule::ScoreSet(field) => {
            if record.score(field).is_none() {
                return reject(SCORE_MISSING);
            }
        }
        GatingRule::NonEmpty(field) => {
            if record.text(field).is_empty() {
                return reject(CHOICE_MISSING);
            }
        }
        GatingRule::Open(_) => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csat_types::{Field, Score};

    fn reason(outcome: ValidationOutcome) -> String {
        outcome.expect_err("expected a rejection").reason
    }

    #[test]
    fn steps_without_rule_pass() {
        let record = AnswerRecord::new();
        assert_eq!(check_step(Step::Intro, &record), Ok(()));
        assert_eq!(check_step(Step::Final, &record), Ok(()));
    }

    #[test]
    fn tax_id_rule() {
        let mut record = AnswerRecord::new();
        assert_eq!(reason(check_step(Step::TaxId, &record)), FILL_IN);

        record.tax_id = "111.444.777-36".into();
        assert_eq!(reason(check_step(Step::TaxId, &record)), INVALID_TAX_ID);

        record.tax_id = "111.444.777-35".into();
        assert_eq!(check_step(Step::TaxId, &record), Ok(()));
    }

    #[test]
    fn name_rule_counts_trimmed_characters() {
        let mut record = AnswerRecord::new();
        assert_eq!(reason(check_step(Step::Name, &record)), NAME_MISSING);

        record.full_name = "  Jo  ".into();
        assert_eq!(
            reason(check_step(Step::Name, &record)),
            "Mínimo 3 caracteres."
        );

        record.full_name = "Zé ".into();
        assert!(check_step(Step::Name, &record).is_err());

        record.full_name = "Zoé".into();
        assert_eq!(check_step(Step::Name, &record), Ok(()));
    }

    #[test]
    fn phone_rule_surfaces_validator_reason() {
        let mut record = AnswerRecord::new();
        assert_eq!(reason(check_step(Step::Phone, &record)), PHONE_MISSING);

        record.phone = "(20) 98765-4321".into();
        assert_eq!(reason(check_step(Step::Phone, &record)), "DDD 20 inválido.");

        record.phone = "(11) 98765-4321".into();
        assert_eq!(check_step(Step::Phone, &record), Ok(()));
    }

    #[test]
    fn score_rules() {
        let mut record = AnswerRecord::new();
        for step in [Step::ServiceScore, Step::WaitScore, Step::RecommendScore] {
            assert_eq!(reason(check_step(step, &record)), SCORE_MISSING);
        }
        record.set(Field::WaitScore, Score::new(1).unwrap()).unwrap();
        assert_eq!(check_step(Step::WaitScore, &record), Ok(()));
        assert!(check_step(Step::ServiceScore, &record).is_err());
    }

    #[test]
    fn choice_rules() {
        let mut record = AnswerRecord::new();
        assert_eq!(reason(check_step(Step::BestThing, &record)), CHOICE_MISSING);
        assert_eq!(reason(check_step(Step::WorstThing, &record)), CHOICE_MISSING);
        record.best_thing = "Agilidade".into();
        assert_eq!(check_step(Step::BestThing, &record), Ok(()));
    }

    #[test]
    fn suggestion_is_open() {
        assert_eq!(check_step(Step::Suggestion, &AnswerRecord::new()), Ok(()));
    }

    #[test]
    fn rejection_names_the_step() {
        let rejection = check_step(Step::Phone, &AnswerRecord::new()).unwrap_err();
        assert_eq!(rejection.step, Step::Phone);
        assert_eq!(rejection.to_string(), PHONE_MISSING);
    }
}
