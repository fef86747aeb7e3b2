use crate::core::pixel_rank::pixel_rank;
use crate::domain::model::{PixelRank, RankRow, SerpRequest, SerpResponse};
use crate::domain::ports::SerpProvider;
use crate::utils::domains::registrable_domain;
use crate::utils::error::Result;

/// Drives one submission: a single provider call, then row reduction.
/// Both flows share the fetch; they differ only in how rows are derived
/// from the parsed response.
pub struct SerpAnalysis<P: SerpProvider> {
    provider: P,
}

impl<P: SerpProvider> SerpAnalysis<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// General flow: one row per returned result, carrying the
    /// provider-reported `pixel_rank`.
    pub async fn run_general(&self, request: &SerpRequest) -> Result<Vec<RankRow>> {
        let response = self.fetch(request).await?;

        Ok(flatten_results(&response)
            .map(|result| RankRow {
                keyword: result.keyword.clone().unwrap_or_default(),
                pixel_rank: result.pixel_rank,
            })
            .collect())
    }

    /// Domain-targeted flow: per result, scan the rendered item list and
    /// compute the pixel offset of the target domain locally.
    pub async fn run_for_domain(&self, request: &SerpRequest, target: &str) -> Result<Vec<RankRow>> {
        let target = registrable_domain(target);
        tracing::info!("Computing pixel ranks for domain: {}", target);

        let response = self.fetch(request).await?;

        Ok(flatten_results(&response)
            .map(|result| {
                let keyword = result.keyword.clone().unwrap_or_default();
                let rank = pixel_rank(&result.items, &target);

                if let PixelRank::NotFound { scanned_height } = rank {
                    tracing::debug!(
                        "'{}': {} not found within {} scanned pixels",
                        keyword,
                        target,
                        scanned_height
                    );
                }

                RankRow {
                    keyword,
                    pixel_rank: rank.found(),
                }
            })
            .collect())
    }

    /// Single attempt against the live endpoint; transport and API errors
    /// propagate unchanged for the caller to surface.
    async fn fetch(&self, request: &SerpRequest) -> Result<SerpResponse> {
        tracing::info!(
            "Requesting live SERP data for {} keyword(s) ({}, {}, {})",
            request.keywords.len(),
            request.language,
            request.country,
            request.device
        );

        self.provider.live_organic(request).await
    }
}

fn flatten_results(
    response: &SerpResponse,
) -> impl Iterator<Item = &crate::domain::model::TaskResult> {
    response.tasks.iter().flat_map(|task| task.result.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Device, Rectangle, SerpItem, SerpTask, TaskResult};
    use crate::utils::error::{Result, SerpError};
    use async_trait::async_trait;

    struct MockProvider {
        response: Option<SerpResponse>,
    }

    #[async_trait]
    impl SerpProvider for MockProvider {
        async fn live_organic(&self, _request: &SerpRequest) -> Result<SerpResponse> {
            self.response
                .clone()
                .ok_or_else(|| SerpError::ApiStatusError {
                    status: 500,
                    path: "/test".to_string(),
                })
        }
    }

    fn request(keywords: &[&str]) -> SerpRequest {
        SerpRequest {
            language: "English".to_string(),
            country: "United States".to_string(),
            device: Device::Desktop,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn item(domain: Option<&str>, height: Option<f64>) -> SerpItem {
        SerpItem {
            domain: domain.map(str::to_string),
            rectangle: height.map(|h| Rectangle { height: Some(h) }),
        }
    }

    fn response_with(results: Vec<TaskResult>) -> SerpResponse {
        SerpResponse {
            tasks: vec![SerpTask { result: results }],
        }
    }

    #[tokio::test]
    async fn test_general_flow_reports_api_pixel_rank() {
        let provider = MockProvider {
            response: Some(response_with(vec![
                TaskResult {
                    keyword: Some("rust serp".to_string()),
                    pixel_rank: Some(220),
                    items: vec![],
                },
                TaskResult {
                    keyword: Some("pixel rank".to_string()),
                    pixel_rank: None,
                    items: vec![],
                },
            ])),
        };

        let rows = SerpAnalysis::new(provider)
            .run_general(&request(&["rust serp", "pixel rank"]))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keyword, "rust serp");
        assert_eq!(rows[0].pixel_rank, Some(220));
        assert_eq!(rows[1].pixel_rank, None);
    }

    #[tokio::test]
    async fn test_domain_flow_computes_offset() {
        let provider = MockProvider {
            response: Some(response_with(vec![TaskResult {
                keyword: Some("rust serp".to_string()),
                pixel_rank: None,
                items: vec![
                    item(None, Some(40.0)),
                    item(None, Some(60.0)),
                    item(Some("example.com"), Some(120.0)),
                ],
            }])),
        };

        let rows = SerpAnalysis::new(provider)
            .run_for_domain(&request(&["rust serp"]), "example.com")
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pixel_rank, Some(100));
    }

    #[tokio::test]
    async fn test_domain_flow_normalizes_target_url() {
        let provider = MockProvider {
            response: Some(response_with(vec![TaskResult {
                keyword: Some("rust serp".to_string()),
                pixel_rank: None,
                items: vec![
                    item(None, Some(50.0)),
                    item(Some("www.example.com"), Some(80.0)),
                ],
            }])),
        };

        let rows = SerpAnalysis::new(provider)
            .run_for_domain(&request(&["rust serp"]), "https://www.example.com/page?x=1")
            .await
            .unwrap();

        assert_eq!(rows[0].pixel_rank, Some(50));
    }

    #[tokio::test]
    async fn test_domain_flow_reports_not_found_as_absent() {
        let provider = MockProvider {
            response: Some(response_with(vec![TaskResult {
                keyword: Some("rust serp".to_string()),
                pixel_rank: None,
                items: vec![item(Some("other.org"), Some(90.0))],
            }])),
        };

        let rows = SerpAnalysis::new(provider)
            .run_for_domain(&request(&["rust serp"]), "example.com")
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pixel_rank, None);
    }

    #[tokio::test]
    async fn test_provider_error_is_propagated() {
        let provider = MockProvider { response: None };
        let analysis = SerpAnalysis::new(provider);

        let err = analysis
            .run_general(&request(&["rust serp"]))
            .await
            .unwrap_err();
        assert!(matches!(err, SerpError::ApiStatusError { status: 500, .. }));

        let err = analysis
            .run_for_domain(&request(&["rust serp"]), "example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, SerpError::ApiStatusError { .. }));
    }
}
