//! Dialoguer driver for the survey state machine.

use csat::{
    Field, FieldKind, OptionCatalog, RecordError, Score, Step, SubmissionAdapter, SurveyMachine,
    Transition, tax_id_kind,
};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

use crate::prompts;

/// Error type for the Dialoguer driver.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the survey (e.g., pressed Ctrl+C).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// An answer did not fit the field it was stored in.
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn interact<T>(result: dialoguer::Result<T>) -> Result<T, WizardError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if is_cancelled(&e) => Err(WizardError::Cancelled),
        Err(e) => Err(WizardError::Dialoguer(e)),
    }
}

/// How a survey session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The respondent answered every question and the survey was submitted.
    Completed,
    /// The respondent chose not to start.
    Declined,
}

/// What the respondent did at a question.
enum Answer {
    Next,
    Back,
}

/// Step-by-step terminal survey.
///
/// Each question is one prompt. Text questions accept `<` to go back;
/// score and option lists have a "back" entry and also go back on Escape.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Run one session, from the intro screen to the thank-you message.
    pub fn run<A: SubmissionAdapter>(
        &self,
        survey: &mut SurveyMachine<A>,
    ) -> Result<SessionEnd, WizardError> {
        loop {
            match survey.step() {
                Step::Intro => {
                    if !self.intro()? {
                        return Ok(SessionEnd::Declined);
                    }
                    survey.advance();
                }
                Step::Final => {
                    println!();
                    println!("{}", prompts::FINAL_TITLE);
                    println!("{}", prompts::FINAL_TEXT);
                    return Ok(SessionEnd::Completed);
                }
                step => {
                    let answer = self.ask(step, survey)?;
                    let transition = match answer {
                        Answer::Next => survey.advance(),
                        Answer::Back => survey.retreat(),
                    };
                    if let Transition::Submitted = transition {
                        tracing::debug!("Survey completed");
                    }
                }
            }
        }
    }

    /// Ask whether to start another survey.
    pub fn confirm_restart(&self) -> Result<bool, WizardError> {
        let theme = self.theme();
        interact(
            Confirm::with_theme(theme.as_ref())
                .with_prompt(prompts::RESTART)
                .default(true)
                .interact(),
        )
    }

    fn intro(&self) -> Result<bool, WizardError> {
        println!("{}", prompts::INTRO_TITLE);
        println!("{}", prompts::INTRO_TEXT);
        println!();

        let theme = self.theme();
        let choice = interact(
            Select::with_theme(theme.as_ref())
                .items(&[prompts::START, prompts::QUIT])
                .default(0)
                .interact_opt(),
        )?;
        Ok(choice == Some(0))
    }

    fn ask<A: SubmissionAdapter>(
        &self,
        step: Step,
        survey: &mut SurveyMachine<A>,
    ) -> Result<Answer, WizardError> {
        let Some(field) = step.field() else {
            return Ok(Answer::Next);
        };

        println!();
        if let Some(number) = survey.question_number() {
            println!("[{number}/{}] {}%", Step::QUESTIONS.len(), survey.progress());
        }
        if let Some(rejection) = survey.outcome() {
            println!("! {}", rejection.reason);
        }
        let prompt = prompts::question(step).unwrap_or_default();

        match (field, field.kind()) {
            (Field::BestThing | Field::WorstThing, _) => self.ask_choice(field, prompt, survey),
            (_, FieldKind::Score) => self.ask_score(field, prompt, survey),
            (_, FieldKind::Text) => {
                if let Some(hint) = prompts::hint(step) {
                    println!("({hint})");
                }
                if survey.submits_on_advance() {
                    println!("({})", prompts::FINISH_HINT);
                }
                self.ask_text(field, prompt, survey)
            }
        }
    }

    fn ask_text<A: SubmissionAdapter>(
        &self,
        field: Field,
        prompt: &str,
        survey: &mut SurveyMachine<A>,
    ) -> Result<Answer, WizardError> {
        let theme = self.theme();
        let current = survey.record().text(field).to_string();
        let raw: String = interact(
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text(),
        )?;

        if raw.trim() == prompts::BACK_INPUT {
            return Ok(Answer::Back);
        }
        survey.input(field, &raw)?;

        if field == Field::TaxId {
            if let Some(kind) = tax_id_kind(survey.record().text(field)) {
                println!("{}: {}", prompts::document_label(kind), survey.record().tax_id);
            }
        }
        Ok(Answer::Next)
    }

    fn ask_score<A: SubmissionAdapter>(
        &self,
        field: Field,
        prompt: &str,
        survey: &mut SurveyMachine<A>,
    ) -> Result<Answer, WizardError> {
        let scores: Vec<Score> = Score::all().collect();
        let mut items: Vec<String> = scores.iter().map(Score::to_string).collect();
        items.push(prompts::BACK.to_string());

        let current = survey
            .record()
            .score(field)
            .and_then(|score| scores.iter().position(|s| *s == score))
            .unwrap_or(0);

        let theme = self.theme();
        let choice = interact(
            Select::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&items)
                .default(current)
                .interact_opt(),
        )?;

        match choice.and_then(|i| scores.get(i).copied()) {
            Some(score) => {
                survey.update_field(field, score)?;
                Ok(Answer::Next)
            }
            None => Ok(Answer::Back),
        }
    }

    fn ask_choice<A: SubmissionAdapter>(
        &self,
        field: Field,
        prompt: &str,
        survey: &mut SurveyMachine<A>,
    ) -> Result<Answer, WizardError> {
        let options: Vec<String> = match field {
            Field::WorstThing => survey.options().worst().to_vec(),
            _ => survey.options().best().to_vec(),
        };
        let mut items = options.clone();
        items.push(prompts::OTHER.to_string());
        items.push(prompts::BACK.to_string());

        let default = choice_default(&options, survey.record().text(field));

        let theme = self.theme();
        let choice = interact(
            Select::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&items)
                .default(default)
                .interact_opt(),
        )?;

        match choice {
            Some(i) if i < options.len() => {
                survey.update_field(field, options[i].clone())?;
                Ok(Answer::Next)
            }
            Some(i) if i == options.len() => {
                let raw: String = interact(
                    Input::<String>::with_theme(theme.as_ref())
                        .with_prompt(prompts::OTHER_PROMPT)
                        .allow_empty(true)
                        .interact_text(),
                )?;
                survey.input(field, &raw)?;
                Ok(Answer::Next)
            }
            _ => Ok(Answer::Back),
        }
    }
}

/// Index to preselect in an option list followed by "Outro...": the current
/// answer if listed, "Outro..." for typed text, otherwise the first option.
fn choice_default(options: &[String], current: &str) -> usize {
    if current.is_empty() {
        0
    } else if OptionCatalog::is_listed(options, current) {
        options.iter().position(|o| o == current).unwrap_or_default()
    } else {
        options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_creation() {
        let _wizard = DialoguerWizard::new();
        let _plain = DialoguerWizard::plain();
    }

    #[test]
    fn error_types() {
        let err = WizardError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");

        let err = WizardError::from(RecordError::KindMismatch {
            field: Field::WaitScore,
            expected: FieldKind::Score,
            actual: "Text",
        });
        assert!(err.to_string().starts_with("Record error: "));
    }

    #[test]
    fn interrupted_io_is_cancellation() {
        let interrupted = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(interact::<()>(Err(interrupted)), Err(WizardError::Cancelled)));

        let other = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(matches!(interact::<()>(Err(other)), Err(WizardError::Dialoguer(_))));
    }

    #[test]
    fn choice_default_points_at_current_answer() {
        let options: Vec<String> = ["Atendimento", "Demora", "Nada"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(choice_default(&options, ""), 0);
        assert_eq!(choice_default(&options, "Demora"), 1);
        // typed text preselects "Outro..."
        assert_eq!(choice_default(&options, "Fila longa"), 3);
    }
}
