//! Tests for the submission payload and HTTP adapters

use std::time::Duration;

use anyhow::Context;

use chrono::{FixedOffset, TimeZone};
use csat::{AnswerRecord, Field, Score, Step, SubmissionAdapter, SurveyMachine};
use csat_http::{HttpError, HttpSubmitter, LogSubmitter, SubmissionPayload};
use pretty_assertions::assert_eq;
use serde_json::json;

fn answered_record() -> AnswerRecord {
    let mut record = AnswerRecord::new();
    record.set(Field::TaxId, "111.444.777-35").unwrap();
    record.set(Field::FullName, "Carlos Lima").unwrap();
    record.set(Field::Phone, "(61) 3333-4444").unwrap();
    record.set(Field::ServiceScore, Score::new(8).unwrap()).unwrap();
    record.set(Field::RecommendScore, Score::new(10).unwrap()).unwrap();
    record.set(Field::BestThing, "Agilidade").unwrap();
    record.set(Field::WorstThing, "Nada").unwrap();
    record
}

#[test]
fn test_payload_contract() -> anyhow::Result<()> {
    let brasilia = FixedOffset::west_opt(3 * 3600).context("offset out of range")?;
    let at = brasilia
        .with_ymd_and_hms(2025, 11, 4, 16, 30, 0)
        .single()
        .context("ambiguous timestamp")?;

    let payload = SubmissionPayload::build(
        &answered_record(),
        "3f2b8c1e-7d4a-4e0b-9c61-2a5d8e7f9b10",
        &at,
    );
    let value: serde_json::Value = serde_json::from_str(&payload.to_json()?)?;

    assert_eq!(
        value,
        json!({
            "id": "3f2b8c1e-7d4a-4e0b-9c61-2a5d8e7f9b10",
            "tel": "(61) 3333-4444",
            "nome": "Carlos Lima",
            "cpfcnpj_autor": "111.444.777-35",
            "nota_atendimento": 8,
            "nota_comprando": 0,
            "nota_recomendar": 10,
            "melhor_": "Agilidade",
            "pior_": "Nada",
            "sugest": "",
            "dtpesquisa": "04/11/2025, 16:30:00"
        })
    );
    Ok(())
}

#[test]
fn test_log_submitter_accepts_records() -> anyhow::Result<()> {
    let mut submitter = LogSubmitter::new();
    submitter.submit(&answered_record())?;
    Ok(())
}

#[test]
fn test_invalid_endpoints_rejected() {
    assert!(matches!(
        HttpSubmitter::new("script.google.com/exec", Duration::from_secs(1)),
        Err(HttpError::InvalidUrl(_))
    ));
    assert!(matches!(
        HttpSubmitter::new("https://example.com/exec", Duration::ZERO),
        Err(HttpError::ZeroTimeout)
    ));
}

#[test]
fn test_refused_connection_still_reaches_final() -> anyhow::Result<()> {
    let submitter = HttpSubmitter::new("http://127.0.0.1:9/exec", Duration::from_secs(2))?;
    assert_eq!(submitter.url(), "http://127.0.0.1:9/exec");
    let mut survey = SurveyMachine::new(submitter);

    survey.advance();
    survey.input(Field::TaxId, "52998224725")?;
    survey.advance();
    survey.input(Field::FullName, "Bia")?;
    survey.advance();
    survey.input(Field::Phone, "21912345678")?;
    survey.advance();
    for field in [Field::ServiceScore, Field::WaitScore, Field::RecommendScore] {
        survey.select_score(field, Score::new(3)?)?;
        survey.advance();
    }
    survey.select_option(Field::BestThing, "Nada")?;
    survey.advance();
    survey.select_option(Field::WorstThing, "Demora")?;
    survey.advance();
    survey.advance();

    assert_eq!(survey.step(), Step::Final);
    assert!(survey.outcome().is_none());

    survey.adapter_mut().flush();
    assert_eq!(survey.adapter().pending(), 0);
    Ok(())
}
