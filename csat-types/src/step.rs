use crate::{Field, GatingRule};

/// Minimum length, in characters after trimming, of the respondent's name.
const NAME_MIN_CHARS: usize = 3;

/// A step of the survey wizard.
///
/// Steps are totally ordered: `Intro` first, `Final` last, and the question
/// steps listed in [`Step::QUESTIONS`] in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    Intro,
    TaxId,
    Name,
    Phone,
    ServiceScore,
    WaitScore,
    RecommendScore,
    BestThing,
    WorstThing,
    Suggestion,
    Final,
}

impl Step {
    /// Every step in wizard order.
    pub const ALL: [Step; 11] = [
        Step::Intro,
        Step::TaxId,
        Step::Name,
        Step::Phone,
        Step::ServiceScore,
        Step::WaitScore,
        Step::RecommendScore,
        Step::BestThing,
        Step::WorstThing,
        Step::Suggestion,
        Step::Final,
    ];

    /// The steps that ask a question. Progress and question numbering are
    /// measured over this slice only.
    pub const QUESTIONS: [Step; 9] = [
        Step::TaxId,
        Step::Name,
        Step::Phone,
        Step::ServiceScore,
        Step::WaitScore,
        Step::RecommendScore,
        Step::BestThing,
        Step::WorstThing,
        Step::Suggestion,
    ];

    /// First question step.
    pub const FIRST_QUESTION: Step = Step::QUESTIONS[0];

    /// Last question step; leaving it submits the survey.
    pub const LAST_QUESTION: Step = Step::QUESTIONS[Step::QUESTIONS.len() - 1];

    fn position(self) -> usize {
        // `ALL` lists the variants in declaration order.
        self as usize
    }

    /// The step after this one, or `None` at `Final`.
    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.position() + 1).copied()
    }

    /// The step before this one, or `None` at `Intro`.
    pub fn previous(self) -> Option<Step> {
        self.position().checked_sub(1).map(|i| Step::ALL[i])
    }

    /// Zero-based position among the question steps.
    pub fn question_index(self) -> Option<usize> {
        Step::QUESTIONS.iter().position(|q| *q == self)
    }

    /// One-based question number, for "question n of m" labels.
    pub fn question_number(self) -> Option<usize> {
        self.question_index().map(|i| i + 1)
    }

    /// Completion percentage of this step within the question steps.
    ///
    /// 0 at the first question and 100 at the last; steps before the
    /// questions clamp to 0 and steps after them to 100.
    pub fn progress(self) -> u8 {
        let last = Step::QUESTIONS.len() - 1;
        match self.question_index() {
            Some(index) => (index * 100 / last) as u8,
            None if self < Step::FIRST_QUESTION => 0,
            None => 100,
        }
    }

    /// The record field this step collects.
    pub fn field(self) -> Option<Field> {
        self.gating_rule().map(|rule| rule.field())
    }

    /// The rule that must hold before this step may be left going forward.
    ///
    /// `Intro` and `Final` have no rule: `Intro` always advances and
    /// `Final` never does.
    pub fn gating_rule(self) -> Option<GatingRule> {
        let rule = match self {
            Step::Intro | Step::Final => return None,
            Step::TaxId => GatingRule::TaxId(Field::TaxId),
            Step::Name => GatingRule::MinChars {
                field: Field::FullName,
                min: NAME_MIN_CHARS,
            },
            Step::Phone => GatingRule::Phone(Field::Phone),
            Step::ServiceScore => GatingRule::ScoreSet(Field::ServiceScore),
            Step::WaitScore => GatingRule::ScoreSet(Field::WaitScore),
            Step::RecommendScore => GatingRule::ScoreSet(Field::RecommendScore),
            Step::BestThing => GatingRule::NonEmpty(Field::BestThing),
            Step::WorstThing => GatingRule::NonEmpty(Field::WorstThing),
            Step::Suggestion => GatingRule::Open(Field::Suggestion),
        };
        Some(rule)
    }
}
