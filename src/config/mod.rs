pub mod file;
pub mod options;

pub use file::FileConfig;

use crate::core::client::DEFAULT_HOST;
use crate::domain::model::{Device, SerpRequest};
use crate::utils::error::{Result, SerpError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "serp-pixelrank")]
#[command(about = "Pixel-rank analysis of Google SERPs via the DataForSEO live API")]
pub struct CliConfig {
    #[arg(long, env = "DATAFORSEO_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "DATAFORSEO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, help = "Search interface language, e.g. \"English\"")]
    pub language: Option<String>,

    #[arg(long, help = "Search location, e.g. \"United States\"")]
    pub country: Option<String>,

    #[arg(long, value_enum)]
    pub device: Option<Device>,

    #[arg(long, help = "Keywords, comma- or newline-separated (repeatable)")]
    pub keywords: Vec<String>,

    #[arg(long, help = "CSV/TSV file with a keyword column")]
    pub keywords_file: Option<PathBuf>,

    #[arg(long, help = "API host override")]
    pub host: Option<String>,

    #[arg(long, help = "Write the result table as CSV to this file or directory")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "TOML config file supplying defaults")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Flow,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Flow {
    /// Report the provider-computed pixel rank for each keyword
    General,
    /// Compute the pixel offset of a target domain for each keyword
    Domain {
        /// Target site, as a URL or bare domain
        target: String,
    },
}

/// Parameters of one submission after merging flags, config file and
/// defaults. Flags win over the file; the file wins over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub language: String,
    pub country: String,
    pub device: Device,
    pub keywords: Vec<String>,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&FileConfig>, keywords: Vec<String>) -> Self {
        let api = file.and_then(|f| f.api.as_ref());
        let search = file.and_then(|f| f.search.as_ref());

        let pick = |flag: &Option<String>, file_value: Option<&String>, default: &str| {
            flag.clone()
                .or_else(|| file_value.cloned())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            host: pick(&cli.host, api.and_then(|a| a.host.as_ref()), DEFAULT_HOST),
            username: pick(&cli.username, api.and_then(|a| a.username.as_ref()), ""),
            password: pick(&cli.password, api.and_then(|a| a.password.as_ref()), ""),
            language: pick(
                &cli.language,
                search.and_then(|s| s.language.as_ref()),
                "English",
            ),
            country: pick(
                &cli.country,
                search.and_then(|s| s.country.as_ref()),
                "United States",
            ),
            device: cli
                .device
                .or(search.and_then(|s| s.device))
                .unwrap_or(Device::Mobile),
            keywords,
        }
    }

    pub fn request(&self) -> SerpRequest {
        SerpRequest {
            language: self.language.clone(),
            country: self.country.clone(),
            device: self.device,
            keywords: self.keywords.clone(),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("host", &self.host)?;
        validate_non_empty_string("username", &self.username)?;
        validate_non_empty_string("password", &self.password)?;

        if self.keywords.is_empty() {
            return Err(SerpError::ValidationError {
                message: "Keyword list cannot be empty (use --keywords or --keywords-file)"
                    .to_string(),
            });
        }

        if !options::is_supported_language(&self.language) {
            return Err(SerpError::InvalidConfigValueError {
                field: "language".to_string(),
                value: self.language.clone(),
                reason: "not a supported language name".to_string(),
            });
        }

        if !options::is_supported_country(&self.country) {
            return Err(SerpError::InvalidConfigValueError {
                field: "country".to_string(),
                value: self.country.clone(),
                reason: "not a supported country name".to_string(),
            });
        }

        Ok(())
    }
}
