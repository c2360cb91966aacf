use reqwest::Client;

/// Shared HTTP client configuration for the inference service.
pub struct InferenceClient {
    pub client: Client,
    pub base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the detection endpoint URL.
    pub fn inference_model_url(&self) -> String {
        format!("{}/inferenceModel", self.base_url)
    }
}
