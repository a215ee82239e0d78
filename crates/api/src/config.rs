use std::env;

/// Network location and model identifier of the inference oracle.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub oracle: OracleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            oracle: OracleConfig {
                base_url: "http://localhost:11434".to_string(),
                model: "gemma3:4b".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Environment overrides on top of the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            oracle: OracleConfig {
                base_url: env::var("OLLAMA_BASE_URL").unwrap_or(defaults.oracle.base_url),
                model: env::var("OLLAMA_MODEL").unwrap_or(defaults.oracle.model),
            },
        }
    }
}
