//! Submission adapters built on [`SubmissionPayload`].

use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Context;
use csat::{AnswerRecord, SubmissionAdapter, SubmitError};

use crate::error::build_client;
use crate::{HttpError, SubmissionPayload};

/// Posts each completed survey to a collection endpoint.
///
/// The POST runs on a detached worker thread: `submit` returns as soon as
/// the worker is spawned, and the outcome of the request is only logged.
/// The body is the payload JSON sent as `text/plain`, which the collection
/// script accepts without a CORS preflight.
#[derive(Debug)]
pub struct HttpSubmitter {
    url: String,
    client: reqwest::blocking::Client,
    pending: Vec<JoinHandle<()>>,
}

impl HttpSubmitter {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, HttpError> {
        let url = url.into();
        let client = build_client(&url, timeout)?;
        Ok(Self {
            url,
            client,
            pending: Vec::new(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of dispatched requests that have not finished yet.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl SubmissionAdapter for HttpSubmitter {
    fn submit(&mut self, record: &AnswerRecord) -> Result<(), SubmitError> {
        let payload = SubmissionPayload::new(record);
        let body = encode(&payload)?;

        let client = self.client.clone();
        let url = self.url.clone();
        let id = payload.id;

        let handle = std::thread::Builder::new()
            .name("csat-submit".to_string())
            .spawn(move || {
                let response = client
                    .post(&url)
                    .header(reqwest::header::CONTENT_TYPE, "text/plain")
                    .body(body)
                    .send();
                match response {
                    Ok(response) => {
                        tracing::info!(id = %id, status = %response.status(), "Survey response delivered")
                    }
                    Err(err) => tracing::warn!(id = %id, "Survey response delivery failed: {err}"),
                }
            })
            .context("Failed to spawn submission worker")?;

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
        Ok(())
    }

    fn flush(&mut self) {
        for handle in self.pending.drain(..) {
            if handle.join().is_err() {
                tracing::warn!("Submission worker panicked");
            }
        }
    }
}

/// Builds the submission payload and logs it instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogSubmitter;

impl LogSubmitter {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionAdapter for LogSubmitter {
    fn submit(&mut self, record: &AnswerRecord) -> Result<(), SubmitError> {
        let body = encode(&SubmissionPayload::new(record))?;
        tracing::info!(payload = %body, "Survey response not sent (no submission endpoint)");
        Ok(())
    }
}

fn encode(payload: &SubmissionPayload) -> anyhow::Result<String> {
    payload
        .to_json()
        .with_context(|| format!("Failed to encode survey response {}", payload.id))
}
