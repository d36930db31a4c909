use authadmin_states::State;
use serde::Deserialize;
use thiserror::Error;

/// Prefix of the environment variables read by [`BusinessConfig::from_env`].
pub const ENV_PREFIX: &str = "AUTHADMIN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessConfig {
    /// Origin of the admin backend, without trailing slash.
    ///
    /// Empty means "same origin", which is what the web build uses.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    if cfg!(target_arch = "wasm32") {
        String::new()
    } else {
        "http://localhost:8400".to_owned()
    }
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Read `AUTHADMIN_API_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        Ok(serde_env::from_iter_with_prefix(vars, ENV_PREFIX)?)
    }

    /// Base URL of the proxied REST API (`{base}/proxy`).
    pub fn api_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        format!("{base}/proxy")
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_appends_proxy() {
        let config = BusinessConfig::new("https://admin.example.com");
        assert_eq!(config.api_url(), "https://admin.example.com/proxy");

        let config = BusinessConfig::new("https://admin.example.com/");
        assert_eq!(config.api_url(), "https://admin.example.com/proxy");
    }

    #[test]
    fn test_empty_base_is_same_origin() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), "/proxy");
    }

    #[test]
    fn test_from_vars_reads_prefixed_base_url() {
        let config = BusinessConfig::from_vars(vec![
            ("AUTHADMIN_API_BASE_URL", "http://10.0.0.5:8400"),
            ("UNRELATED", "value"),
        ])
        .expect("config should deserialize");

        assert_eq!(config.api_base_url, "http://10.0.0.5:8400");
    }

    #[test]
    fn test_from_vars_falls_back_to_default() {
        let config = BusinessConfig::from_vars(Vec::<(String, String)>::new())
            .expect("config should deserialize");

        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn test_from_vars_ignores_other_prefixes() {
        let config = BusinessConfig::from_vars(vec![
            ("API_BASE_URL", "http://wrong:1"),
            ("AUTHADMINX_API_BASE_URL", "http://wrong:2"),
        ])
        .expect("config should deserialize");

        assert_eq!(config, BusinessConfig::default());
    }
}
