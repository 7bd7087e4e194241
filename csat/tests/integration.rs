//! Integration tests for the csat survey wizard

use csat::{
    Field, OptionCatalog, OptionOrigin, Score, StaticKeywords, Step, SurveyMachine, TestAdapter,
    Transition,
};

fn score(value: u8) -> Score {
    Score::new(value).unwrap()
}

/// Drive a fresh survey up to (and including) the suggestion step.
fn fill_survey(survey: &mut SurveyMachine<TestAdapter>) {
    assert_eq!(survey.advance(), Transition::Moved { from: Step::Intro, to: Step::TaxId });

    survey.input(Field::TaxId, "11222333000181").unwrap();
    survey.advance();
    survey.input(Field::FullName, "Maria Oliveira").unwrap();
    survey.advance();
    survey.input(Field::Phone, "11987654321").unwrap();
    survey.advance();
    survey.select_score(Field::ServiceScore, score(9)).unwrap();
    survey.advance();
    survey.select_score(Field::WaitScore, score(6)).unwrap();
    survey.advance();
    survey.select_score(Field::RecommendScore, score(10)).unwrap();
    survey.advance();
    survey.select_option(Field::BestThing, "Agilidade").unwrap();
    survey.advance();
    survey.input(Field::WorstThing, "Fila no caixa").unwrap();
    survey.advance();

    assert_eq!(survey.step(), Step::Suggestion);
}

#[test]
fn test_full_walkthrough_submits_record() {
    let mut survey = SurveyMachine::new(TestAdapter::new());
    fill_survey(&mut survey);

    assert!(survey.submits_on_advance());
    assert_eq!(survey.advance(), Transition::Submitted);
    assert_eq!(survey.step(), Step::Final);
    assert_eq!(survey.progress(), 100);

    let adapter = survey.adapter();
    assert_eq!(adapter.submission_count(), 1);

    let record = adapter.last_submission().unwrap();
    assert_eq!(record.tax_id, "11.222.333/0001-81");
    assert_eq!(record.full_name, "Maria Oliveira");
    assert_eq!(record.phone, "(11) 98765-4321");
    assert_eq!(record.service_score, Some(score(9)));
    assert_eq!(record.wait_score, Some(score(6)));
    assert_eq!(record.recommend_score, Some(score(10)));
    assert_eq!(record.best_thing, "Agilidade");
    assert_eq!(record.worst_thing, "Fila no caixa");
    assert_eq!(record.suggestion, "");
}

#[test]
fn test_adapter_failure_is_not_surfaced() {
    let mut survey = SurveyMachine::new(TestAdapter::new().failing_with("connection refused"));
    fill_survey(&mut survey);

    assert_eq!(survey.advance(), Transition::Submitted);
    assert_eq!(survey.step(), Step::Final);
    assert!(survey.outcome().is_none());
    assert_eq!(survey.adapter().submission_count(), 1);
}

#[test]
fn test_gating_blocks_each_empty_question() {
    let mut survey = SurveyMachine::new(TestAdapter::new());
    survey.advance();

    for step in Step::QUESTIONS {
        if step == Step::Suggestion {
            break;
        }
        let transition = survey.advance();
        assert!(
            matches!(transition, Transition::Rejected(ref r) if r.step == step),
            "{step:?} should reject an empty answer"
        );
        assert_eq!(survey.step(), step);

        match step {
            Step::TaxId => survey.input(Field::TaxId, "52998224725").unwrap(),
            Step::Name => survey.input(Field::FullName, "Joao").unwrap(),
            Step::Phone => survey.input(Field::Phone, "1133334444").unwrap(),
            Step::BestThing | Step::WorstThing => {
                let field = step.field().unwrap();
                survey.select_option(field, "Nada").unwrap();
            }
            _ => {
                let field = step.field().unwrap();
                survey.select_score(field, score(5)).unwrap();
            }
        }
        assert!(survey.outcome().is_none());
        assert!(matches!(survey.advance(), Transition::Moved { .. }));
    }

    assert_eq!(survey.step(), Step::Suggestion);
}

#[test]
fn test_short_name_rejected_with_minimum() {
    let mut survey = SurveyMachine::new(TestAdapter::new());
    survey.advance();
    survey.input(Field::TaxId, "111.444.777-35").unwrap();
    survey.advance();

    survey.input(Field::FullName, "Al").unwrap();
    let transition = survey.advance();
    match transition {
        Transition::Rejected(rejection) => assert_eq!(rejection.reason, "Mínimo 3 caracteres."),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn test_retreat_keeps_answers() {
    let mut survey = SurveyMachine::new(TestAdapter::new());
    survey.advance();
    survey.input(Field::TaxId, "11144477735").unwrap();
    survey.advance();

    survey.retreat();
    assert_eq!(survey.step(), Step::TaxId);
    assert_eq!(survey.record().tax_id, "111.444.777-35");

    survey.retreat();
    assert_eq!(survey.step(), Step::Intro);
    assert_eq!(survey.retreat(), Transition::Stayed);
}

#[test]
fn test_new_survey_after_final() {
    let mut survey = SurveyMachine::new(TestAdapter::new());
    fill_survey(&mut survey);
    survey.advance();

    survey.reset();
    assert_eq!(survey.step(), Step::Intro);
    assert!(survey.record().is_empty());

    fill_survey(&mut survey);
    survey.advance();
    assert_eq!(survey.adapter().submission_count(), 2);
}

#[test]
fn test_question_numbers() {
    let mut survey = SurveyMachine::new(TestAdapter::new());
    assert_eq!(survey.question_number(), None);
    survey.advance();
    assert_eq!(survey.question_number(), Some(1));
    assert_eq!(survey.progress(), 0);
}

#[test]
fn test_options_from_keyword_feed() {
    let source = StaticKeywords::new(["preço justo", "Preço justo"], Vec::<&str>::new());
    let options = OptionCatalog::load(&source);

    assert_eq!(options.origin(), OptionOrigin::Feed);
    assert_eq!(options.best(), ["Preço justo", "Nada"]);
    assert!(options.worst().iter().any(|o| o == "Demora"));

    let survey = SurveyMachine::new(TestAdapter::new()).with_options(options.clone());
    assert_eq!(survey.options(), &options);
}

#[test]
fn test_options_fall_back_when_feed_unavailable() {
    let options = OptionCatalog::load(&StaticKeywords::unavailable());
    assert_eq!(options, OptionCatalog::built_in());
    assert_eq!(options.origin(), OptionOrigin::BuiltIn);
}
