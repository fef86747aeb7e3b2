use crate::domain::model::{SerpRequest, SerpResponse};
use crate::domain::ports::SerpProvider;
use crate::utils::error::{Result, SerpError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "https://api.dataforseo.com";
pub const LIVE_ORGANIC_PATH: &str = "/v3/serp/google/organic/live/advanced";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Basic-auth JSON client for the DataForSEO API, shared by both flows.
/// One request per submission; errors are never retried.
pub struct RestClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl RestClient {
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(SerpError::ApiStatusError {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SerpProvider for RestClient {
    async fn live_organic(&self, request: &SerpRequest) -> Result<SerpResponse> {
        self.post(LIVE_ORGANIC_PATH, request).await
    }
}
