use super::errors::DetectionError;
use super::model::DetectionResult;

/// State container for the single upload lifecycle.
///
/// Owns the in-flight flag and the most recent successful detection.
/// Only the analyze use case writes to it; rendering code reads it.
/// At most one upload may be pending: `begin` rejects a second upload
/// instead of cancelling the first.
#[derive(Debug, Default)]
pub struct UploadSession {
    in_flight: bool,
    current: Option<DetectionResult>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the in-flight flag for a new upload.
    pub fn begin(&mut self) -> Result<(), DetectionError> {
        if self.in_flight {
            return Err(DetectionError::AlreadyInFlight);
        }

        self.in_flight = true;
        Ok(())
    }

    /// Settles the upload with a result, replacing any previous one.
    pub fn complete(&mut self, result: DetectionResult) {
        self.in_flight = false;
        self.current = Some(result);
    }

    /// Settles the upload on failure. The previous result, if any,
    /// stays visible.
    pub fn fail(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn current(&self) -> Option<&DetectionResult> {
        self.current.as_ref()
    }
}
