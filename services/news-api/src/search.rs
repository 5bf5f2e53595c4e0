//! Client for the external news search API.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use shared::dto::Language;
use shared::error::AppError;

#[derive(Clone)]
pub struct NewsSearchClient {
    http: Client,
    api_url: String,
    api_key: String,
}

/// Composes the search string for a category, biased by the caller's
/// location when one is known. An empty location is omitted entirely.
pub fn search_term(category: &str, location: &str) -> String {
    if location.is_empty() {
        category.to_string()
    } else {
        format!("{category} {location}")
    }
}

impl NewsSearchClient {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building news search client")?;
        Ok(Self {
            http,
            api_url,
            api_key,
        })
    }

    /// Issues a single search attempt and returns the raw upstream payload.
    /// `refresh` appends a timestamp token to defeat upstream caching.
    pub async fn fetch(
        &self,
        term: &str,
        language: Language,
        refresh: bool,
    ) -> Result<Value, AppError> {
        let mut query: Vec<(&str, String)> = vec![
            ("engine", "google_news".to_string()),
            ("q", term.to_string()),
            ("hl", language.locale().to_string()),
            ("num", "10".to_string()),
            ("api_key", self.api_key.clone()),
        ];
        if refresh {
            query.push(("t", Utc::now().timestamp().to_string()));
        }

        let resp = self
            .http
            .get(format!("{}/search", self.api_url))
            .query(&query)
            .send()
            .await
            .map_err(|err| AppError::UpstreamUnreachable(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        resp.json().await.map_err(|err| AppError::UpstreamError {
            status: status.as_u16(),
            body: format!("unparseable payload: {err}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_biases_the_search_term() {
        assert_eq!(
            search_term("agriculture", "Rampur, Uttar Pradesh"),
            "agriculture Rampur, Uttar Pradesh"
        );
    }

    #[test]
    fn empty_location_is_omitted() {
        assert_eq!(search_term("local news", ""), "local news");
    }
}
