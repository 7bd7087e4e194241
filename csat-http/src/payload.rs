use chrono::{DateTime, Local, TimeZone};
use csat::{AnswerRecord, Score};
use serde::Serialize;

use crate::submission_id;

/// The JSON object the collection endpoint expects.
///
/// Text answers are sent as typed (masked). An unanswered score is sent as
/// `0`, which the endpoint reads as "no answer".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub id: String,
    #[serde(rename = "tel")]
    pub phone: String,
    #[serde(rename = "nome")]
    pub full_name: String,
    #[serde(rename = "cpfcnpj_autor")]
    pub tax_id: String,
    #[serde(rename = "nota_atendimento")]
    pub service_score: u8,
    #[serde(rename = "nota_comprando")]
    pub wait_score: u8,
    #[serde(rename = "nota_recomendar")]
    pub recommend_score: u8,
    #[serde(rename = "melhor_")]
    pub best_thing: String,
    #[serde(rename = "pior_")]
    pub worst_thing: String,
    #[serde(rename = "sugest")]
    pub suggestion: String,
    /// Local time the payload was built, `dd/mm/yyyy, HH:MM:SS`.
    #[serde(rename = "dtpesquisa")]
    pub submitted_at: String,
}

impl SubmissionPayload {
    /// Build a payload with a fresh id, stamped with the current local time.
    pub fn new(record: &AnswerRecord) -> Self {
        Self::build(record, submission_id(), &Local::now())
    }

    /// Build a payload with a given id and timestamp.
    pub fn build<Tz>(record: &AnswerRecord, id: impl Into<String>, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: id.into(),
            phone: record.phone.clone(),
            full_name: record.full_name.clone(),
            tax_id: record.tax_id.clone(),
            service_score: score_or_zero(record.service_score),
            wait_score: score_or_zero(record.wait_score),
            recommend_score: score_or_zero(record.recommend_score),
            best_thing: record.best_thing.clone(),
            worst_thing: record.worst_thing.clone(),
            suggestion: record.suggestion.clone(),
            submitted_at: format_timestamp(at),
        }
    }

    /// The JSON body sent to the endpoint.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn score_or_zero(score: Option<Score>) -> u8 {
    score.map(Score::get).unwrap_or(0)
}

/// Format a timestamp the Brazilian way: `dd/mm/yyyy, HH:MM:SS`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}
