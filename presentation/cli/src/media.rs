use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use inference::annotated_image::{self, AnnotatedImage};

/// Media type for a photo path, decided by extension.
///
/// This is the upload filter: paths without a known image extension
/// are refused before any bytes are read, the way a browser picker
/// filters on `image/*`.
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Writes a decoded annotated image into the output directory.
///
/// Remote references are not downloaded; `Ok(None)` tells the caller
/// to print the reference instead.
pub fn save_annotated(reference: &str, output_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let Some(AnnotatedImage { media_type, bytes }) = annotated_image::decode_data_url(reference)
    else {
        return Ok(None);
    };

    let file_name = format!(
        "annotated-{}.{}",
        Utc::now().format("%Y%m%d-%H%M%S"),
        annotated_image::extension_for(&media_type)
    );
    let path = output_dir.join(file_name);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_known_image_extensions() {
        assert_eq!(media_type_for(Path::new("snacks.jpg")), Some("image/jpeg"));
        assert_eq!(media_type_for(Path::new("snacks.JPEG")), Some("image/jpeg"));
        assert_eq!(media_type_for(Path::new("snacks.png")), Some("image/png"));
    }

    #[test]
    fn should_refuse_non_image_paths() {
        assert_eq!(media_type_for(Path::new("notes.txt")), None);
        assert_eq!(media_type_for(Path::new("snacks")), None);
    }

    #[test]
    fn should_save_data_url_references() {
        let dir = tempfile::tempdir().unwrap();

        let saved = save_annotated("data:image/png;base64,AQIDBA==", dir.path()).unwrap();

        let path = saved.expect("data URL should produce a file");
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(path.extension().unwrap(), "png");
    }

    #[test]
    fn should_pass_through_remote_references() {
        let dir = tempfile::tempdir().unwrap();

        let saved = save_annotated("http://example/annotated.png", dir.path()).unwrap();

        assert!(saved.is_none());
    }
}
