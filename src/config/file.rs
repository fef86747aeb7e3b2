use crate::domain::model::Device;
use crate::utils::error::{Result, SerpError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config file supplying defaults for the API and locale
/// parameters. Command-line flags always win over file values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub search: Option<SearchSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    pub language: Option<String>,
    pub country: Option<String>,
    pub device: Option<Device>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SerpError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SerpError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` placeholders with environment values. Unset
/// variables are left in place so validation can name the missing field.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[api]
host = "https://api.dataforseo.com"
username = "alice"
password = "secret"

[search]
language = "English"
country = "United States"
device = "mobile"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        let api = config.api.unwrap();
        let search = config.search.unwrap();

        assert_eq!(api.username.as_deref(), Some("alice"));
        assert_eq!(search.language.as_deref(), Some("English"));
        assert_eq!(search.device, Some(Device::Mobile));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.api.is_none());
        assert!(config.search.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SERP_USERNAME", "env-user");

        let toml_content = r#"
[api]
username = "${TEST_SERP_USERNAME}"
password = "${TEST_SERP_UNSET_PASSWORD}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        let api = config.api.unwrap();
        assert_eq!(api.username.as_deref(), Some("env-user"));
        // Unset variables keep the placeholder text.
        assert_eq!(
            api.password.as_deref(),
            Some("${TEST_SERP_UNSET_PASSWORD}")
        );

        std::env::remove_var("TEST_SERP_USERNAME");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FileConfig::from_toml_str("[api\nusername=").unwrap_err();
        assert!(matches!(err, SerpError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nhost = \"https://staging.example.com\"\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.api.unwrap().host.as_deref(),
            Some("https://staging.example.com")
        );
    }
}
