/// Error returned by a [`SubmissionAdapter`](crate::SubmissionAdapter).
///
/// The state machine logs these and carries on to the final step; they are
/// never shown to the respondent.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The adapter refused the record before sending anything.
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// Transport-specific failure (encoding, connection, worker spawn, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

impl SubmitError {
    /// Create a transport error from any error type.
    pub fn transport(err: impl Into<anyhow::Error>) -> Self {
        Self::Transport(err.into())
    }
}

/// Error returned by a [`KeywordSource`](crate::KeywordSource).
///
/// Any of these makes the survey fall back to its built-in option lists.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The feed answered, but did not report success.
    #[error("Keyword feed reported '{0}' instead of success")]
    NotSuccess(String),

    /// Transport or decoding failure.
    #[error("Keyword feed unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

impl FeedError {
    /// Create an unavailability error from any error type.
    pub fn unavailable(err: impl Into<anyhow::Error>) -> Self {
        Self::Unavailable(err.into())
    }
}
