use std::fmt;

/// Lowest score a respondent can give.
pub const SCORE_MIN: u8 = 1;

/// Highest score a respondent can give.
pub const SCORE_MAX: u8 = 10;

/// Error returned when constructing a [`Score`] outside the rating scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("Score {0} is outside the scale {SCORE_MIN}..={SCORE_MAX}")]
    OutOfRange(i64),
}

/// A rating on the closed 1..=10 scale.
///
/// "Not answered yet" is modelled as `Option<Score>::None`, never as a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Create a score, rejecting values outside the rating scale.
    pub fn new(value: impl Into<i64>) -> Result<Self, ScoreError> {
        let value = value.into();
        if (i64::from(SCORE_MIN)..=i64::from(SCORE_MAX)).contains(&value) {
            // In range, so the narrowing cannot truncate.
            Ok(Self(value as u8))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }

    /// The numeric value of this score.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every score on the scale, lowest first.
    pub fn all() -> impl Iterator<Item = Score> {
        (SCORE_MIN..=SCORE_MAX).map(Score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_whole_scale() {
        for n in 1u8..=10 {
            assert_eq!(Score::new(n).unwrap().get(), n);
        }
        assert_eq!(Score::all().count(), 10);
    }

    #[test]
    fn rejects_zero_and_eleven() {
        assert_eq!(Score::new(0), Err(ScoreError::OutOfRange(0)));
        assert_eq!(Score::new(11), Err(ScoreError::OutOfRange(11)));
        assert!(Score::new(-3).is_err());
    }
}
