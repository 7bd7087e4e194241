/// Errors raised while setting up an HTTP collaborator.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("URL must use http or https: {0}")]
    InvalidUrl(String),

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Check an endpoint URL and build a blocking client with `timeout`.
pub(crate) fn build_client(
    url: &str,
    timeout: std::time::Duration,
) -> Result<reqwest::blocking::Client, HttpError> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(HttpError::InvalidUrl(url.to_string()));
    }
    if timeout.is_zero() {
        return Err(HttpError::ZeroTimeout);
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    Ok(client)
}
