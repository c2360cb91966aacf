use std::env;
use std::path::PathBuf;

use super::inference_config::InferenceConfig;

pub struct AppConfig {
    pub inference: InferenceConfig,
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Load application configuration from environment variables
    ///
    /// Environment variables:
    /// - SNACKSCAN_OUTPUT_DIR: where annotated images are written (default: ".")
    pub fn from_env() -> Self {
        let output_dir = env::var("SNACKSCAN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            inference: InferenceConfig::from_env(),
            output_dir,
        }
    }
}
