use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable names the clients read at construction time.
/// These match what the deployment scripts export.
pub const AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const GOOGLE_CLOUD_API_KEY: &str = "GOOGLE_CLOUD_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required environment variable {0}")]
pub struct MissingEnvVar(pub &'static str);

fn required_env(name: &'static str) -> Result<String, MissingEnvVar> {
    env::var(name).map_err(|_| MissingEnvVar(name))
}

/// Static AWS credentials sourced from the process environment.
///
/// Construction fails before any network activity when a variable is absent.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsEnvCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

impl AwsEnvCredentials {
    pub fn from_env() -> Result<Self, MissingEnvVar> {
        Ok(Self {
            access_key: required_env(AWS_ACCESS_KEY)?,
            secret_key: required_env(AWS_SECRET_ACCESS_KEY)?,
            region: required_env(AWS_DEFAULT_REGION)?,
        })
    }
}

impl fmt::Debug for AwsEnvCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsEnvCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

pub fn gemini_api_key_from_env() -> Result<String, MissingEnvVar> {
    required_env(GOOGLE_CLOUD_API_KEY)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub bedrock: BedrockConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub output_path: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output_path: "list_of_active_foundational_models.csv".to_string(),
            timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    pub fn with_env_overrides(&self) -> Self {
        let output_path =
            env::var("CATALOG_OUTPUT_PATH").unwrap_or_else(|_| self.output_path.clone());
        Self {
            output_path,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            model_id: "amazon.titan-text-lite-v1".to_string(),
            max_tokens: 512,
            temperature: 0.7,
            timeout_secs: 30,
            max_retries: 1,
        }
    }
}

impl BedrockConfig {
    pub fn with_env_overrides(&self) -> Self {
        let model_id = env::var("BEDROCK_MODEL_ID").unwrap_or_else(|_| self.model_id.clone());
        Self {
            model_id,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GeminiConfig {
    pub fn with_env_overrides(&self) -> Self {
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| self.model.clone());
        Self {
            model,
            ..self.clone()
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the configuration named by `CONFIG_PATH`, falling back to
    /// `./config.toml`. The binaries take no arguments, so a missing file is
    /// not an error: compiled defaults apply. Credentials never live here;
    /// they are read from the environment at client construction.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| Self::default_config_path());
        let path = Path::new(&config_path);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn default_config_path() -> String {
        "./config.toml".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn should_deserialize_config_from_toml() {
        let toml_content = r#"
[catalog]
output_path = "models.csv"
timeout_secs = 10

[bedrock]
model_id = "amazon.titan-text-express-v1"
max_tokens = 1024
temperature = 0.2
timeout_secs = 20
max_retries = 2

[gemini]
model = "gemini-1.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"
timeout_secs = 15
"#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.catalog.output_path, "models.csv");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.bedrock.model_id, "amazon.titan-text-express-v1");
        assert_eq!(config.bedrock.max_tokens, 1024);
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout_secs, 15);
    }

    #[test]
    fn should_fill_missing_sections_with_defaults() {
        let toml_content = r#"
[catalog]
output_path = "out.csv"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.catalog.output_path, "out.csv");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.bedrock, BedrockConfig::default());
        assert_eq!(config.gemini, GeminiConfig::default());
    }

    #[test]
    fn should_load_config_from_file() {
        let toml_content = r#"
[bedrock]
model_id = "amazon.titan-text-lite-v1"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.bedrock.model_id, "amazon.titan-text-lite-v1");
    }

    #[test]
    fn should_fall_back_to_defaults_when_no_config_file_exists() {
        env::remove_var("CONFIG_PATH");

        let config = Config::load_from_env().unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn should_return_error_for_invalid_toml() {
        let invalid_toml = "invalid toml content [[[";
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_toml.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn should_override_models_from_env() {
        env::set_var("BEDROCK_MODEL_ID", "amazon.titan-text-express-v1");
        env::set_var("GEMINI_MODEL", "gemini-1.5-pro");

        let bedrock = BedrockConfig::default().with_env_overrides();
        let gemini = GeminiConfig::default().with_env_overrides();

        assert_eq!(bedrock.model_id, "amazon.titan-text-express-v1");
        assert_eq!(gemini.model, "gemini-1.5-pro");

        env::remove_var("BEDROCK_MODEL_ID");
        env::remove_var("GEMINI_MODEL");
    }

    #[test]
    fn should_fail_fast_when_aws_credentials_missing() {
        env::remove_var(AWS_ACCESS_KEY);
        env::remove_var(AWS_SECRET_ACCESS_KEY);
        env::remove_var(AWS_DEFAULT_REGION);

        let err = AwsEnvCredentials::from_env().unwrap_err();
        assert_eq!(err, MissingEnvVar(AWS_ACCESS_KEY));

        env::set_var(AWS_ACCESS_KEY, "AKIA-test");
        let err = AwsEnvCredentials::from_env().unwrap_err();
        assert_eq!(err, MissingEnvVar(AWS_SECRET_ACCESS_KEY));

        env::set_var(AWS_SECRET_ACCESS_KEY, "secret-test");
        let err = AwsEnvCredentials::from_env().unwrap_err();
        assert_eq!(err, MissingEnvVar(AWS_DEFAULT_REGION));

        env::set_var(AWS_DEFAULT_REGION, "us-west-2");
        let creds = AwsEnvCredentials::from_env().unwrap();
        assert_eq!(creds.access_key, "AKIA-test");
        assert_eq!(creds.region, "us-west-2");

        env::remove_var(AWS_ACCESS_KEY);
        env::remove_var(AWS_SECRET_ACCESS_KEY);
        env::remove_var(AWS_DEFAULT_REGION);
    }

    #[test]
    fn should_redact_secret_key_in_debug_output() {
        let creds = AwsEnvCredentials {
            access_key: "AKIA-test".to_string(),
            secret_key: "super-secret".to_string(),
            region: "us-west-2".to_string(),
        };

        let rendered = format!("{creds:?}");
        assert!(rendered.contains("AKIA-test"));
        assert!(!rendered.contains("super-secret"));
    }
}
