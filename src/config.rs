use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated. `*` allows any origin.
    pub cors_origins: Option<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Title shown on the documentation pages
    #[serde(default = "default_api_title")]
    pub api_title: String,

    /// Directory mounted under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Script loaded by the ReDoc page
    #[serde(default = "default_redoc_js_url")]
    pub redoc_js_url: String,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(ConfigError::EnvError)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed CORS origins. `None` when CORS is disabled.
    pub fn cors_origin_list(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            None
        } else {
            Some(origins)
        }
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            cors_origins: None,
            api_title: default_api_title(),
            static_dir: default_static_dir(),
            redoc_js_url: default_redoc_js_url(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_api_title() -> String {
    "Items API".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_redoc_js_url() -> String {
    "/static/redoc.standalone.js".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8000");
        assert_eq!(config.api_title, "Items API");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.redoc_js_url, "/static/redoc.standalone.js");
        assert!(config.is_development());
        assert!(config.cors_origin_list().is_none());
    }

    #[test]
    fn reads_uppercase_variables() {
        let config = Config::from_vars(vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("ENVIRONMENT", "prod"),
            ("API_TITLE", "Shop"),
        ]))
        .unwrap();
        assert_eq!(config.server_address(), "127.0.0.1:9090");
        assert_eq!(config.api_title, "Shop");
        assert!(!config.is_development());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_vars(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().starts_with("Environment variable error"));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = Config::from_vars(vars(&[(
            "CORS_ORIGINS",
            "http://a.test, http://b.test,,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_origin_list().unwrap(),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );

        let blank = Config::from_vars(vars(&[("CORS_ORIGINS", " , ")])).unwrap();
        assert!(blank.cors_origin_list().is_none());
    }
}
