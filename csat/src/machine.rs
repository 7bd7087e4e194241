//! The survey wizard state machine.

use csat_types::{
    AnswerRecord, Field, FieldValue, RecordError, Rejection, Score, Step, SubmissionAdapter,
};

use crate::gating::check_step;
use crate::mask::{limit_free_text, mask_phone, mask_tax_id, sanitize_name};
use crate::options::OptionCatalog;

/// What a wizard operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The wizard moved to another step.
    Moved { from: Step, to: Step },

    /// The last question was answered: the record was handed to the
    /// submission adapter and the wizard is now at `Final`.
    Submitted,

    /// The current step's gating rule refused to let it be left.
    Rejected(Rejection),

    /// Nothing changed.
    Stayed,
}

/// A survey session: current step, answers, last rejection and the
/// submission adapter the finished record is handed to.
///
/// Operations take `&mut self` and run one at a time. The machine never
/// waits on the adapter's delivery: once the last question passes, the
/// session reaches [`Step::Final`] whatever the adapter returns.
#[derive(Debug)]
pub struct SurveyMachine<A> {
    step: Step,
    record: AnswerRecord,
    outcome: Option<Rejection>,
    submitting: bool,
    options: OptionCatalog,
    adapter: A,
}

impl<A: SubmissionAdapter> SurveyMachine<A> {
    /// Start a session at [`Step::Intro`] with an empty record and the
    /// built-in option lists.
    pub fn new(adapter: A) -> Self {
        Self {
            step: Step::Intro,
            record: AnswerRecord::new(),
            outcome: None,
            submitting: false,
            options: OptionCatalog::built_in(),
            adapter,
        }
    }

    /// Use these option lists for the "best/worst thing" questions.
    pub fn with_options(mut self, options: OptionCatalog) -> Self {
        self.options = options;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// The reason the last advance was refused, until the next edit or move.
    pub fn outcome(&self) -> Option<&Rejection> {
        self.outcome.as_ref()
    }

    /// Whether the record is currently being handed to the adapter.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn options(&self) -> &OptionCatalog {
        &self.options
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Completion percentage over the question steps. See [`Step::progress`].
    pub fn progress(&self) -> u8 {
        self.step.progress()
    }

    /// One-based number of the current question, if the step asks one.
    pub fn question_number(&self) -> Option<usize> {
        self.step.question_number()
    }

    /// Whether the next successful advance submits the survey.
    pub fn submits_on_advance(&self) -> bool {
        self.step == Step::LAST_QUESTION
    }

    /// Try to move forward.
    ///
    /// `Intro` always advances. A question step advances only if its gating
    /// rule passes; otherwise the rejection is stored and returned. Leaving
    /// the last question submits the record exactly once and lands on
    /// `Final` even when the adapter fails.
    pub fn advance(&mut self) -> Transition {
        if self.submitting {
            return Transition::Stayed;
        }

        match self.step {
            Step::Final => Transition::Stayed,
            Step::Intro => self.move_to(Step::FIRST_QUESTION),
            step => {
                if let Err(rejection) = check_step(step, &self.record) {
                    tracing::debug!(step = ?step, reason = %rejection.reason, "Advance rejected");
                    self.outcome = Some(rejection.clone());
                    return Transition::Rejected(rejection);
                }
                self.outcome = None;

                if step == Step::LAST_QUESTION {
                    self.submit();
                    return Transition::Submitted;
                }
                match step.next() {
                    Some(next) => self.move_to(next),
                    None => Transition::Stayed,
                }
            }
        }
    }

    /// Move back one step.
    ///
    /// From the first question this returns to `Intro`. `Intro` and `Final`
    /// stay where they are.
    pub fn retreat(&mut self) -> Transition {
        if self.submitting {
            return Transition::Stayed;
        }

        match self.step {
            Step::Intro | Step::Final => Transition::Stayed,
            step => match step.previous() {
                Some(previous) => self.move_to(previous),
                None => Transition::Stayed,
            },
        }
    }

    /// Assign a value to a field and clear any pending rejection.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), RecordError> {
        self.outcome = None;
        self.record.set(field, value)
    }

    /// Assign typed text to a field after normalizing it the way the field
    /// expects: tax ids and phones are masked, names lose digits and
    /// symbols, and free-text answers are cut to their maximum length.
    ///
    /// Score fields do not take text and report a kind mismatch.
    pub fn input(&mut self, field: Field, raw: &str) -> Result<(), RecordError> {
        let value = match field {
            Field::TaxId => mask_tax_id(raw),
            Field::Phone => mask_phone(raw),
            Field::FullName => sanitize_name(raw),
            Field::BestThing | Field::WorstThing => limit_free_text(raw),
            Field::Suggestion
            | Field::ServiceScore
            | Field::WaitScore
            | Field::RecommendScore => raw.to_string(),
        };
        self.update_field(field, value)
    }

    /// Pick a score; picking the score that is already selected clears it.
    pub fn select_score(&mut self, field: Field, score: Score) -> Result<(), RecordError> {
        let value = if self.record.score(field) == Some(score) {
            None
        } else {
            Some(score)
        };
        self.update_field(field, value)
    }

    /// Pick a listed option; picking the option that is already selected
    /// clears the answer.
    pub fn select_option(&mut self, field: Field, option: &str) -> Result<(), RecordError> {
        let value = if self.record.text(field) == option {
            String::new()
        } else {
            option.to_string()
        };
        self.update_field(field, value)
    }

    /// Start over: back to `Intro` with an empty record.
    pub fn reset(&mut self) {
        self.step = Step::Intro;
        self.record = AnswerRecord::new();
        self.outcome = None;
        self.submitting = false;
    }

    fn move_to(&mut self, to: Step) -> Transition {
        let from = self.step;
        self.step = to;
        self.outcome = None;
        tracing::debug!(from = ?from, to = ?to, "Survey step changed");
        Transition::Moved { from, to }
    }

    fn submit(&mut self) {
        self.submitting = true;
        match self.adapter.submit(&self.record) {
            Ok(()) => tracing::info!("Survey response dispatched"),
            Err(err) => tracing::warn!("Survey response not dispatched: {err}"),
        }
        self.submitting = false;
        self.step = Step::Final;
    }
}
