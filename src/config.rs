/*
 * Responsibility
 * - 環境変数からの設定読み込み (PORT, APP_ENV, OAUTH_BASE_URL, OAUTH_TIMEOUT_MS)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_OAUTH_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_OAUTH_TIMEOUT_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where and how long to wait for the oauth service.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl OAuthConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|_| ConfigError::Invalid("OAUTH_BASE_URL"))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid("OAUTH_BASE_URL"));
        }
        if timeout.is_zero() {
            return Err(ConfigError::Invalid("OAUTH_TIMEOUT_MS"));
        }
        Ok(Self { base_url, timeout })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("OAUTH_BASE_URL").unwrap_or_else(|_| DEFAULT_OAUTH_BASE_URL.to_string());

        let timeout_ms = match std::env::var("OAUTH_TIMEOUT_MS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("OAUTH_TIMEOUT_MS"))?,
            Err(_) => DEFAULT_OAUTH_TIMEOUT_MS,
        };

        Self::new(&base_url, Duration::from_millis(timeout_ms))
    }
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub oauth: OAuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();
        let oauth = OAuthConfig::from_env()?;

        Ok(Self {
            addr,
            app_env,
            oauth,
        })
    }
}
