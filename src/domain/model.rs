use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Mobile,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Desktop => write!(f, "desktop"),
            Device::Mobile => write!(f, "mobile"),
        }
    }
}

/// Body of one live organic SERP request. Rebuilt from scratch on every
/// submission, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SerpRequest {
    pub language: String,
    pub country: String,
    pub device: Device,
    pub keywords: Vec<String>,
}

/// Wire shape of the provider response: `tasks[].result[].items[]`, with
/// every field the reducer cares about optional.
#[derive(Debug, Clone, Deserialize)]
pub struct SerpResponse {
    #[serde(default)]
    pub tasks: Vec<SerpTask>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerpTask {
    #[serde(default)]
    pub result: Vec<TaskResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskResult {
    pub keyword: Option<String>,
    pub pixel_rank: Option<u32>,
    #[serde(default)]
    pub items: Vec<SerpItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerpItem {
    pub domain: Option<String>,
    pub rectangle: Option<Rectangle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rectangle {
    pub height: Option<f64>,
}

/// Outcome of one pixel-rank reduction. A missing domain is reported as a
/// distinct variant rather than the accumulated height, so a legitimate
/// zero-offset rank cannot be confused with "not on the page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelRank {
    Found(u32),
    NotFound { scanned_height: u32 },
}

impl PixelRank {
    pub fn found(&self) -> Option<u32> {
        match self {
            PixelRank::Found(offset) => Some(*offset),
            PixelRank::NotFound { .. } => None,
        }
    }
}

/// One row of the final keyword table.
#[derive(Debug, Clone, Serialize)]
pub struct RankRow {
    pub keyword: String,
    pub pixel_rank: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Device::Desktop).unwrap(), "\"desktop\"");
        assert_eq!(serde_json::to_string(&Device::Mobile).unwrap(), "\"mobile\"");
    }

    #[test]
    fn test_request_body_shape() {
        let request = SerpRequest {
            language: "English".to_string(),
            country: "United States".to_string(),
            device: Device::Mobile,
            keywords: vec!["rust serp".to_string()],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "language": "English",
                "country": "United States",
                "device": "mobile",
                "keywords": ["rust serp"]
            })
        );
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: SerpResponse = serde_json::from_str(r#"{"tasks":[{}]}"#).unwrap();
        assert_eq!(response.tasks.len(), 1);
        assert!(response.tasks[0].result.is_empty());

        let empty: SerpResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.tasks.is_empty());
    }

    #[test]
    fn test_pixel_rank_found() {
        assert_eq!(PixelRank::Found(0).found(), Some(0));
        assert_eq!(PixelRank::NotFound { scanned_height: 310 }.found(), None);
    }
}
