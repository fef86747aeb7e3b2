use crate::domain::model::{SerpRequest, SerpResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam between the flows and the live API, so the flows can run against a
/// mock provider in tests.
#[async_trait]
pub trait SerpProvider: Send + Sync {
    /// Issues one live organic SERP request. Single attempt, no retry.
    async fn live_organic(&self, request: &SerpRequest) -> Result<SerpResponse>;
}
