use chrono::{DateTime, Utc};

/// Outcome of one successful inference call.
///
/// A new result fully replaces the previous one; results are never
/// merged across uploads.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Opaque reference to the annotated output image, either a
    /// remote URL or a base64 data URL. Interpreted by the adapters,
    /// never by the domain.
    pub annotated_image_ref: String,
    /// Class ids reported by the model. Duplicates are possible and
    /// ids without a catalog entry are expected; reconciliation
    /// handles both.
    pub detected_ids: Vec<u32>,
    pub received_at: DateTime<Utc>,
}

impl DetectionResult {
    pub fn new(annotated_image_ref: String, detected_ids: Vec<u32>) -> Self {
        Self {
            annotated_image_ref,
            detected_ids,
            received_at: Utc::now(),
        }
    }
}
