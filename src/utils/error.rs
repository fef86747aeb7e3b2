use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerpError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {path}")]
    ApiStatusError { status: u16, path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl SerpError {
    /// Message suitable for terminal output, without internal detail.
    pub fn user_message(&self) -> String {
        match self {
            SerpError::ApiError(e) => format!("Could not reach the SERP API: {}", e),
            SerpError::ApiStatusError { status, .. } => {
                format!("The SERP API rejected the request (HTTP {})", status)
            }
            SerpError::ValidationError { message } => message.clone(),
            SerpError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            SerpError::ConfigError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Validation failures abort before any network call is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SerpError::ValidationError { .. }
                | SerpError::InvalidConfigValueError { .. }
                | SerpError::ConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SerpError>;
