//! Client for the external identity provider.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Clone)]
pub struct IdentityClient {
    http: Client,
    base_url: String,
    service_key: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
}

impl IdentityClient {
    pub fn new(base_url: String, service_key: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building identity client")?;
        Ok(Self {
            http,
            base_url,
            service_key,
        })
    }

    /// Verifies a bearer token against the provider and resolves the opaque
    /// caller id. A single attempt; any rejection is final.
    pub async fn verify(&self, token: &str) -> Result<String, AppError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .header("apikey", &self.service_key)
            .send()
            .await
            .map_err(|err| AppError::Internal(format!("identity provider unreachable: {err}")))?;

        if resp.status() != StatusCode::OK {
            return Err(AppError::AuthRejected(format!(
                "status {}",
                resp.status().as_u16()
            )));
        }

        let user: UserResponse = resp
            .json()
            .await
            .map_err(|err| AppError::AuthRejected(format!("malformed user payload: {err}")))?;
        Ok(user.id)
    }
}
