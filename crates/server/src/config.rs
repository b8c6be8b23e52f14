use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    /// Returns the default data path for this environment
    pub fn default_data_path(&self) -> PathBuf {
        match self {
            Self::Dev => PathBuf::from("./data"),
            Self::Prod => PathBuf::from("/data"),
        }
    }
}

/// Upstream video API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Checked per request; an empty key fails each call, not startup
    #[serde(skip_serializing)]
    pub api_key: String,
    pub region_code: String,
    pub relevance_language: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region_code: "JP".to_string(),
            relevance_language: "ja".to_string(),
        }
    }
}

/// Payments provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsConfig {
    pub api_url: String,
    #[serde(skip_serializing)]
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: Environment,
    pub data_path: PathBuf,
    pub database_url: String,
    pub max_connections: u32,
    pub video: VideoConfig,
    pub payments: Option<PaymentsConfig>,
}

impl Config {
    pub fn new(env: Environment, data_path: impl AsRef<Path>) -> Self {
        let data_path = data_path.as_ref().to_path_buf();
        let database_url = format!(
            "sqlite:{}?mode=rwc",
            data_path.join("genrefeed.db").display()
        );
        Self {
            env,
            data_path,
            database_url,
            max_connections: 5,
            video: VideoConfig::default(),
            payments: None,
        }
    }

    pub fn with_video(mut self, video: VideoConfig) -> Self {
        self.video = video;
        self
    }

    pub fn with_payments(mut self, payments: Option<PaymentsConfig>) -> Self {
        self.payments = payments;
        self
    }

    /// Build the configuration from environment variables.
    ///
    /// `APP_ENV`, `DATA_PATH`, `YOUTUBE_API_KEY`, `VIDEO_REGION_CODE`,
    /// `VIDEO_RELEVANCE_LANGUAGE`, `PAYMENTS_API_URL`, `PAYMENTS_ACCESS_TOKEN`
    pub fn from_env() -> Self {
        let app_env = Environment::from_str(&var("APP_ENV").unwrap_or_default());
        let data_path = var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| app_env.default_data_path());

        let defaults = VideoConfig::default();
        let api_key = var("YOUTUBE_API_KEY").unwrap_or_else(|| {
            tracing::warn!("YOUTUBE_API_KEY not set, video requests will fail");
            String::new()
        });
        let video = VideoConfig {
            api_key,
            region_code: var("VIDEO_REGION_CODE").unwrap_or(defaults.region_code),
            relevance_language: var("VIDEO_RELEVANCE_LANGUAGE")
                .unwrap_or(defaults.relevance_language),
        };

        let payments = match (var("PAYMENTS_API_URL"), var("PAYMENTS_ACCESS_TOKEN")) {
            (Some(api_url), Some(access_token)) => Some(PaymentsConfig {
                api_url,
                access_token,
            }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "PAYMENTS_API_URL and PAYMENTS_ACCESS_TOKEN must both be set, payments disabled"
                );
                None
            }
            (None, None) => None,
        };

        Self::new(app_env, data_path)
            .with_video(video)
            .with_payments(payments)
    }
}

/// Read a non-empty environment variable
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
