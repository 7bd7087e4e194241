//! csat - satisfaction survey in the terminal

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use csat::{OptionCatalog, SubmissionAdapter, SurveyMachine};
use csat_dialoguer_wizard::config::DEFAULT_CONFIG_FILE;
use csat_dialoguer_wizard::{DialoguerWizard, SessionEnd, WizardConfig, WizardError};
use csat_http::{HttpKeywordSource, HttpSubmitter, LogSubmitter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "csat")]
#[command(author, version, about = "Step-by-step customer satisfaction survey", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "CSAT_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Endpoint completed surveys are posted to
    #[arg(long, env = "CSAT_SUBMIT_URL")]
    submit_url: Option<String>,

    /// Endpoint answer keywords are read from
    #[arg(long, env = "CSAT_KEYWORDS_URL")]
    keywords_url: Option<String>,

    /// Log responses instead of posting them
    #[arg(long)]
    dry_run: bool,

    /// Exit after one completed survey
    #[arg(long)]
    once: bool,

    /// Disable colors in prompts
    #[arg(long)]
    plain: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = WizardConfig::load(&cli.config)?;
    config.override_urls(cli.submit_url, cli.keywords_url);

    let options = match &config.keywords.url {
        Some(url) => {
            let source = HttpKeywordSource::new(url.as_str(), config.keywords.timeout())
                .context("Invalid keyword feed endpoint")?;
            OptionCatalog::load(&source)
        }
        None => OptionCatalog::built_in(),
    };

    let adapter: Box<dyn SubmissionAdapter> = match &config.submission.url {
        Some(url) if !cli.dry_run => {
            let submitter = HttpSubmitter::new(url.as_str(), config.submission.timeout())
                .context("Invalid submission endpoint")?;
            tracing::info!("Posting responses to {}", submitter.url());
            Box::new(submitter)
        }
        _ => Box::new(LogSubmitter::new()),
    };

    let wizard = if cli.plain {
        DialoguerWizard::plain()
    } else {
        DialoguerWizard::new()
    };
    let mut survey = SurveyMachine::new(adapter).with_options(options);

    let result = run_sessions(&wizard, &mut survey, cli.once);
    survey.adapter_mut().flush();

    match result {
        Err(WizardError::Cancelled) => {
            tracing::debug!("Survey cancelled");
            Ok(())
        }
        other => Ok(other?),
    }
}

fn run_sessions<A: SubmissionAdapter>(
    wizard: &DialoguerWizard,
    survey: &mut SurveyMachine<A>,
    once: bool,
) -> Result<(), WizardError> {
    loop {
        match wizard.run(survey)? {
            SessionEnd::Declined => return Ok(()),
            SessionEnd::Completed if once => return Ok(()),
            SessionEnd::Completed => {
                if !wizard.confirm_restart()? {
                    return Ok(());
                }
                survey.reset();
            }
        }
    }
}
