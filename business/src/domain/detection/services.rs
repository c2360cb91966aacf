use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::model::DetectionResult;
use super::value_objects::ImagePayload;

/// Service port for the external image inference endpoint.
///
/// One photo in, one annotated image plus the detected class ids out.
/// Implementations perform a single request with no retries; every
/// failure mode (transport, status, body shape) surfaces as a
/// `ServiceError` and never as a partial result.
#[async_trait]
pub trait SnackDetectorService: Send + Sync {
    async fn detect(&self, image: &ImagePayload) -> Result<DetectionResult, ServiceError>;
}
