/// A user-selected photo ready for upload.
///
/// The payload is forwarded to the inference service as-is; the only
/// filtering happens at selection time (media type derived from the
/// file), mirroring a browser file picker with an `image/*` filter.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub file_name: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
            file_name: file_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_payload_fields() {
        let payload = ImagePayload::new(vec![0xFF, 0xD8], "image/jpeg", "snacks.jpg");

        assert_eq!(payload.bytes, vec![0xFF, 0xD8]);
        assert_eq!(payload.media_type, "image/jpeg");
        assert_eq!(payload.file_name, "snacks.jpg");
    }
}
