/// Inference service errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service.transport")]
    Transport,
    #[error("service.bad_status")]
    BadStatus,
    #[error("service.malformed_body")]
    MalformedBody,
    #[error("service.missing_annotated_image")]
    MissingAnnotatedImage,
}
