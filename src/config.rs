use crate::constants::DEFAULT_API_BASE_URL;
use once_cell::sync::Lazy;
use std::env;

/// Runtime configuration. The only knob the environment controls is the
/// API base URL; everything else is fixed by the product surface.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    let mut config = Config::default();
    if let Some(url) = env::var("API_BASE_URL").ok().and_then(|v| normalize_base_url(&v)) {
        config.api_base_url = url;
    }
    if let Ok(level) = env::var("RUST_LOG") {
        config.log_level = level;
    }
    config
});

pub fn get_config() -> Config {
    CONFIG.clone()
}

/// Trims whitespace and any trailing slash so endpoint paths can be joined
/// with a plain `{base}/chat`. Empty values fall back to the default.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
