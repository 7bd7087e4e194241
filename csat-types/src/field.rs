use std::fmt;

use crate::Score;

/// One field of the [`AnswerRecord`](crate::AnswerRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TaxId,
    FullName,
    Phone,
    ServiceScore,
    WaitScore,
    RecommendScore,
    BestThing,
    WorstThing,
    Suggestion,
}

/// The kind of value a [`Field`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Score,
}

impl Field {
    /// All fields in record order.
    pub const ALL: [Field; 9] = [
        Field::TaxId,
        Field::FullName,
        Field::Phone,
        Field::ServiceScore,
        Field::WaitScore,
        Field::RecommendScore,
        Field::BestThing,
        Field::WorstThing,
        Field::Suggestion,
    ];

    /// Which kind of value this field accepts.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::ServiceScore | Field::WaitScore | Field::RecommendScore => FieldKind::Score,
            Field::TaxId
            | Field::FullName
            | Field::Phone
            | Field::BestThing
            | Field::WorstThing
            | Field::Suggestion => FieldKind::Text,
        }
    }

    /// Stable snake_case name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::TaxId => "tax_id",
            Field::FullName => "full_name",
            Field::Phone => "phone",
            Field::ServiceScore => "service_score",
            Field::WaitScore => "wait_score",
            Field::RecommendScore => "recommend_score",
            Field::BestThing => "best_thing",
            Field::WorstThing => "worst_thing",
            Field::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value assigned to a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A text answer (masked document, name, phone, free text).
    Text(String),

    /// A rating answer; `None` clears it.
    Score(Option<Score>),
}

impl FieldValue {
    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Score(_) => "Score",
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Score> for FieldValue {
    fn from(score: Score) -> Self {
        Self::Score(Some(score))
    }
}

impl From<Option<Score>> for FieldValue {
    fn from(score: Option<Score>) -> Self {
        Self::Score(score)
    }
}
