#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("detection.no_file_selected")]
    NoFileSelected,
    #[error("detection.already_in_flight")]
    AlreadyInFlight,
    #[error("service.inference")]
    Service(#[from] crate::domain::errors::ServiceError),
}
