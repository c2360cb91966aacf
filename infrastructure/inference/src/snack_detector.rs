use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use business::domain::detection::model::DetectionResult;
use business::domain::detection::services::SnackDetectorService;
use business::domain::detection::value_objects::ImagePayload;
use business::domain::errors::ServiceError;

use crate::client::InferenceClient;

/// Response envelope of the inference endpoint.
///
/// `Classes` maps detection-slot labels to catalog ids; only the
/// values are consumed downstream.
#[derive(Deserialize)]
struct InferenceResponse {
    #[serde(rename = "Image")]
    image: Option<String>,
    #[serde(rename = "Classes")]
    classes: Option<serde_json::Map<String, serde_json::Value>>,
}

pub struct SnackDetectorHttp {
    client: InferenceClient,
}

impl SnackDetectorHttp {
    pub fn new(client: InferenceClient) -> Self {
        Self { client }
    }

    fn parse_body(body: serde_json::Value) -> Result<DetectionResult, ServiceError> {
        let response: InferenceResponse =
            serde_json::from_value(body).map_err(|_| ServiceError::MalformedBody)?;

        let annotated_image_ref = response
            .image
            .filter(|image| !image.is_empty())
            .ok_or(ServiceError::MissingAnnotatedImage)?;

        let classes = response.classes.ok_or(ServiceError::MalformedBody)?;

        let mut detected_ids = Vec::with_capacity(classes.len());
        for value in classes.values() {
            let id = value
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .ok_or(ServiceError::MalformedBody)?;
            detected_ids.push(id);
        }

        Ok(DetectionResult::new(annotated_image_ref, detected_ids))
    }
}

#[async_trait]
impl SnackDetectorService for SnackDetectorHttp {
    async fn detect(&self, image: &ImagePayload) -> Result<DetectionResult, ServiceError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.media_type)
            .map_err(|_| ServiceError::Transport)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .client
            .post(self.client.inference_model_url())
            .multipart(form)
            .send()
            .await
            .map_err(|_| ServiceError::Transport)?;

        if !response.status().is_success() {
            return Err(ServiceError::BadStatus);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ServiceError::MalformedBody)?;

        Self::parse_body(body)
    }
}
