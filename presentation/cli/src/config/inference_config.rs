use std::env;

/// Inference service configuration
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub base_url: String,
}

impl InferenceConfig {
    /// Load inference configuration from environment variables
    ///
    /// Environment variables:
    /// - SNACKSCAN_INFERENCE_URL: service base URL (default: "http://127.0.0.1:8000")
    pub fn from_env() -> Self {
        let base_url = env::var("SNACKSCAN_INFERENCE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self {
            base_url: normalize(&base_url),
        }
    }
}

/// Trailing slashes would double up when endpoint paths are appended.
fn normalize(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
