use async_trait::async_trait;

use crate::domain::detection::errors::DetectionError;
use crate::domain::detection::model::DetectionResult;
use crate::domain::detection::value_objects::ImagePayload;

pub struct AnalyzeImageParams {
    pub image: ImagePayload,
}

#[async_trait]
pub trait AnalyzeImageUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeImageParams) -> Result<DetectionResult, DetectionError>;
}
