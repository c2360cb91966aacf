use base64::{Engine as _, engine::general_purpose};

/// Annotated image decoded out of a base64 data URL.
pub struct AnnotatedImage {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Decodes a `data:image/...;base64,` reference into raw bytes.
///
/// Returns `None` for any other reference shape; those are remote
/// URLs and are surfaced to the user untouched. Whitespace inside the
/// base64 payload is tolerated, some services wrap long bodies.
pub fn decode_data_url(reference: &str) -> Option<AnnotatedImage> {
    let re = regex::Regex::new(r"^data:(image/[a-z0-9.+-]+);base64,").ok()?;
    let caps = re.captures(reference)?;

    let media_type = caps.get(1)?.as_str().to_string();
    let payload = &reference[caps.get(0)?.end()..];
    let clean: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = general_purpose::STANDARD.decode(clean).ok()?;
    Some(AnnotatedImage { media_type, bytes })
}

/// File extension matching a decoded image's media type.
pub fn extension_for(media_type: &str) -> &'static str {
    match media_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        _ => "png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_base64_data_url() {
        let decoded = decode_data_url("data:image/png;base64,AQIDBA==").unwrap();

        assert_eq!(decoded.media_type, "image/png");
        assert_eq!(decoded.bytes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn should_tolerate_whitespace_in_payload() {
        let decoded = decode_data_url("data:image/jpeg;base64,AQID\nBA==").unwrap();

        assert_eq!(decoded.media_type, "image/jpeg");
        assert_eq!(decoded.bytes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn should_pass_through_remote_urls() {
        assert!(decode_data_url("http://127.0.0.1:8000/annotated/42.png").is_none());
    }

    #[test]
    fn should_reject_invalid_base64() {
        assert!(decode_data_url("data:image/png;base64,@@@@").is_none());
    }

    #[test]
    fn should_map_media_types_to_extensions() {
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/webp"), "webp");
        assert_eq!(extension_for("image/unknown"), "png");
    }
}
