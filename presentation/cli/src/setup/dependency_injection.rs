use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;

use inference::client::InferenceClient;
use inference::snack_detector::SnackDetectorHttp;

use business::application::detection::analyze::AnalyzeImageUseCaseImpl;
use business::domain::catalog::model::Catalog;
use business::domain::detection::session::UploadSession;
use business::domain::detection::use_cases::analyze::AnalyzeImageUseCase;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub catalog: Catalog,
    pub session: Arc<Mutex<UploadSession>>,
    pub analyze_use_case: Arc<dyn AnalyzeImageUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let inference_client = InferenceClient::new(config.inference.base_url.clone());
        let detector = Arc::new(SnackDetectorHttp::new(inference_client));

        // Single state container for the upload lifecycle; the use
        // case writes it, the rendering side reads it.
        let session = Arc::new(Mutex::new(UploadSession::new()));

        let analyze_use_case = Arc::new(AnalyzeImageUseCaseImpl {
            detector,
            session: session.clone(),
            logger: logger.clone(),
        });

        Self {
            catalog: Catalog::builtin(),
            session,
            analyze_use_case,
            logger,
        }
    }
}
