//! Client for the external profile store. Location is an optimization, not
//! a requirement: every failure here degrades to an empty context.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::dto::LocationContext;
use crate::error::AppError;

#[derive(Clone)]
pub struct ProfileClient {
    http: Client,
    base_url: String,
    service_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileRow {
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    district: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

impl ProfileClient {
    pub fn new(base_url: String, service_key: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building profile client")?;
        Ok(Self {
            http,
            base_url,
            service_key,
        })
    }

    /// Resolves the caller's location context. Lookup failures are logged
    /// and resolve to an empty context so the pipeline proceeds without
    /// location bias.
    pub async fn location_for(&self, caller_id: &str) -> LocationContext {
        match self.fetch(caller_id).await {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!(%caller_id, error = %err, "continuing without location bias");
                LocationContext::default()
            }
        }
    }

    async fn fetch(&self, caller_id: &str) -> Result<LocationContext, AppError> {
        let url = format!("{}/rest/v1/profiles", self.base_url);
        let rows: Vec<ProfileRow> = self
            .http
            .get(url)
            .query(&[
                ("id", format!("eq.{caller_id}")),
                ("select", "village,district,state".to_string()),
            ])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|err| AppError::LocationLookupFailed(err.to_string()))?
            .error_for_status()
            .map_err(|err| AppError::LocationLookupFailed(err.to_string()))?
            .json()
            .await
            .map_err(|err| AppError::LocationLookupFailed(err.to_string()))?;

        let row = rows.into_iter().next().unwrap_or_default();
        Ok(LocationContext {
            village: row.village,
            district: row.district,
            state: row.state,
        })
    }
}
