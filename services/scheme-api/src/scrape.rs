//! Client for the scrape API that harvests scheme listings from the
//! government portal.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use shared::error::AppError;

#[derive(Clone)]
pub struct ScrapeClient {
    http: Client,
    api_url: String,
    api_key: String,
    site_origin: String,
}

impl ScrapeClient {
    pub fn new(
        api_url: String,
        api_key: String,
        site_origin: String,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building scrape client")?;
        Ok(Self {
            http,
            api_url,
            api_key,
            site_origin,
        })
    }

    pub fn site_origin(&self) -> &str {
        &self.site_origin
    }

    /// Resolves the portal page to scrape. A non-empty search query wins
    /// over the category mapping; unmapped categories scrape the site root.
    pub fn target_url(&self, category: &str, search_query: &str) -> String {
        if !search_query.is_empty() {
            return format!(
                "{}/schemes/search?keyword={}",
                self.site_origin,
                urlencoding::encode(search_query)
            );
        }
        match category.to_lowercase().as_str() {
            "agriculture" => format!("{}/schemes/domain/agriculture-and-allied", self.site_origin),
            "healthcare" => format!("{}/schemes/domain/health-and-wellness", self.site_origin),
            "education" => format!(
                "{}/schemes/domain/skill-development-and-employment",
                self.site_origin
            ),
            _ => format!("{}/", self.site_origin),
        }
    }

    /// Issues a single scrape attempt and returns the raw upstream payload.
    /// No retries; the caller-facing refresh action is the only retry path.
    pub async fn fetch(&self, target: &str) -> Result<Value, AppError> {
        let body = serde_json::json!({
            "url": target,
            "selector": ".scheme-card",
            "maxPages": 3,
            "limit": 10,
            "actions": [{
                "type": "extractData",
                "config": {
                    "title": ".scheme-title",
                    "description": ".scheme-description",
                    "link": { "selector": ".scheme-link", "attribute": "href" },
                    "deadline": ".scheme-deadline",
                    "category": ".scheme-category"
                }
            }]
        });

        let resp = self
            .http
            .post(format!("{}/scrape", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
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

        let payload: Value = resp.json().await.map_err(|err| AppError::UpstreamError {
            status: status.as_u16(),
            body: format!("unparseable payload: {err}"),
        })?;

        // The API reports its own failures inside a 200 response.
        if payload.get("success").and_then(Value::as_bool) != Some(true) {
            let detail = payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(AppError::UpstreamError {
                status: status.as_u16(),
                body: detail.to_string(),
            });
        }

        Ok(payload)
    }
}
