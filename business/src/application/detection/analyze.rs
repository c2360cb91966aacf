use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::detection::errors::DetectionError;
use crate::domain::detection::model::DetectionResult;
use crate::domain::detection::services::SnackDetectorService;
use crate::domain::detection::session::UploadSession;
use crate::domain::detection::use_cases::analyze::{AnalyzeImageParams, AnalyzeImageUseCase};
use crate::domain::logger::Logger;

pub struct AnalyzeImageUseCaseImpl {
    pub detector: Arc<dyn SnackDetectorService>,
    pub session: Arc<Mutex<UploadSession>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeImageUseCase for AnalyzeImageUseCaseImpl {
    async fn execute(&self, params: AnalyzeImageParams) -> Result<DetectionResult, DetectionError> {
        {
            let mut session = self.session.lock().await;
            session.begin()?;
        }

        self.logger.info(&format!(
            "Submitting photo to inference service: {}",
            params.image.file_name
        ));

        match self.detector.detect(&params.image).await {
            Ok(result) => {
                self.logger.info(&format!(
                    "Inference returned {} detected ids",
                    result.detected_ids.len()
                ));

                let mut session = self.session.lock().await;
                session.complete(result.clone());
                Ok(result)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Inference request failed: {}", err));

                let mut session = self.session.lock().await;
                session.fail();
                Err(err.into())
            }
        }
    }
}
