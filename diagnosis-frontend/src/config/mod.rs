use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use validator::Validate;

/// Diagnosis backend used when `DIAGNOSIS_API_URL` is not set.
pub const DEFAULT_DIAGNOSIS_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub diagnosis_api: DiagnosisApiConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiagnosisApiConfig {
    /// Base address of the diagnosis service; `/api/diagnose` is appended.
    #[validate(url)]
    pub base_url: String,
}

impl DiagnosisApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl FrontendConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let diagnosis_api = DiagnosisApiConfig::new(get_env(
            "DIAGNOSIS_API_URL",
            Some(DEFAULT_DIAGNOSIS_API_URL),
            is_prod,
        )?);
        diagnosis_api.validate()?;

        Ok(FrontendConfig {
            common: common_config,
            diagnosis_api,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} must be set in production",
                    key
                )))
            } else if let Some(default) = default {
                tracing::warn!("{} not set, using default: {}", key, default);
                Ok(default.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!("{} is not set", key)))
            }
        }
    }
}
