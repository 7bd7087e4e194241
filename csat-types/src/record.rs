use crate::{Field, FieldKind, FieldValue, Score};

/// Error type for record access operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Type mismatch at field '{field}': expected {expected:?}, got {actual}")]
    KindMismatch {
        field: Field,
        expected: FieldKind,
        actual: &'static str,
    },
}

/// The answers of one survey session.
///
/// Text fields hold the display strings exactly as the respondent sees them
/// (masked document and phone included). Scores are `None` until answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    pub tax_id: String,
    pub full_name: String,
    pub phone: String,
    pub service_score: Option<Score>,
    pub wait_score: Option<Score>,
    pub recommend_score: Option<Score>,
    pub best_thing: String,
    pub worst_thing: String,
    pub suggestion: String,
}

impl AnswerRecord {
    /// Create a record with every field empty or unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value to a field.
    ///
    /// Fails only when the value's kind does not match the field's kind.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        match (field, value.into()) {
            (Field::TaxId, FieldValue::Text(text)) => self.tax_id = text,
            (Field::FullName, FieldValue::Text(text)) => self.full_name = text,
            (Field::Phone, FieldValue::Text(text)) => self.phone = text,
            (Field::BestThing, FieldValue::Text(text)) => self.best_thing = text,
            (Field::WorstThing, FieldValue::Text(text)) => self.worst_thing = text,
            (Field::Suggestion, FieldValue::Text(text)) => self.suggestion = text,
            (Field::ServiceScore, FieldValue::Score(score)) => self.service_score = score,
            (Field::WaitScore, FieldValue::Score(score)) => self.wait_score = score,
            (Field::RecommendScore, FieldValue::Score(score)) => self.recommend_score = score,
            (field, other) => {
                return Err(RecordError::KindMismatch {
                    field,
                    expected: field.kind(),
                    actual: other.type_name(),
                });
            }
        }
        Ok(())
    }

    /// Get the current value of a field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field.kind() {
            FieldKind::Text => FieldValue::Text(self.text(field).to_string()),
            FieldKind::Score => FieldValue::Score(self.score(field)),
        }
    }

    /// Get a text field. Score fields read as the empty string.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::TaxId => &self.tax_id,
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::BestThing => &self.best_thing,
            Field::WorstThing => &self.worst_thing,
            Field::Suggestion => &self.suggestion,
            Field::ServiceScore | Field::WaitScore | Field::RecommendScore => "",
        }
    }

    /// Get a score field. Text fields read as unset.
    pub fn score(&self, field: Field) -> Option<Score> {
        match field {
            Field::ServiceScore => self.service_score,
            Field::WaitScore => self.wait_score,
            Field::RecommendScore => self.recommend_score,
            _ => None,
        }
    }

    /// Check if a field holds an answer: non-empty text or a set score.
    pub fn has_value(&self, field: Field) -> bool {
        match field.kind() {
            FieldKind::Text => !self.text(field).is_empty(),
            FieldKind::Score => self.score(field).is_some(),
        }
    }

    /// Check if no field holds an answer.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| !self.has_value(*field))
    }
}
