use std::time::Duration;

use csat::{FeedError, KeywordFeed, KeywordSource};
use serde::Deserialize;

use crate::HttpError;
use crate::error::build_client;

/// What the keyword endpoint answers.
#[derive(Debug, Deserialize)]
struct KeywordResponse {
    result: String,
    #[serde(default)]
    best: Vec<String>,
    #[serde(default)]
    worst: Vec<String>,
}

/// Reads answer keywords with a GET request.
#[derive(Debug)]
pub struct HttpKeywordSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpKeywordSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, HttpError> {
        let url = url.into();
        let client = build_client(&url, timeout)?;
        Ok(Self { url, client })
    }
}

impl KeywordSource for HttpKeywordSource {
    fn fetch(&self) -> Result<KeywordFeed, FeedError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(FeedError::unavailable)?;
        parse_feed(&body)
    }
}

/// Decode a keyword endpoint body. Only `result: "success"` is accepted.
pub fn parse_feed(body: &str) -> Result<KeywordFeed, FeedError> {
    let response: KeywordResponse = serde_json::from_str(body).map_err(FeedError::unavailable)?;
    if response.result != "success" {
        return Err(FeedError::NotSuccess(response.result));
    }
    Ok(KeywordFeed {
        best: response.best,
        worst: response.worst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_are_empty() {
        let feed = parse_feed(r#"{"result":"success","best":["Preço"]}"#).unwrap();
        assert_eq!(feed.best, vec!["Preço".to_string()]);
        assert!(feed.worst.is_empty());
    }

    #[test]
    fn error_result_is_rejected() {
        let err = parse_feed(r#"{"result":"error","message":"quota"}"#).unwrap_err();
        assert!(matches!(err, FeedError::NotSuccess(ref r) if r == "error"));
    }

    #[test]
    fn garbage_is_unavailable() {
        assert!(matches!(
            parse_feed("<html>"),
            Err(FeedError::Unavailable(_))
        ));
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            HttpKeywordSource::new("ftp://example.com", Duration::from_secs(1)),
            Err(HttpError::InvalidUrl(_))
        ));
    }
}
