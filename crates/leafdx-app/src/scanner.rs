//! Image intake and validation
//!
//! Malformed or non-image input is rejected here, before it reaches the classifier.

use image::DynamicImage;
use leafdx_types::{Error, Result};
use std::path::Path;

/// Supported image extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check if a path is a supported image file
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate an image path exists and has a supported extension
pub fn validate_image(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidImageFormat(format!(
            "{} is not a file",
            path.display()
        )));
    }

    if !is_supported_image(path) {
        return Err(Error::InvalidImageFormat(format!(
            "Unsupported image format: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate and decode an image file
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    validate_image(path)?;
    Ok(image::open(path)?)
}

/// Decode an uploaded image from raw bytes
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(Error::InvalidImageFormat("empty upload".to_string()));
    }
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("leaf.jpg")));
        assert!(is_supported_image(Path::new("leaf.JPEG")));
        assert!(is_supported_image(Path::new("leaf.png")));
        assert!(!is_supported_image(Path::new("leaf.gif")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("leaf")));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate_image(Path::new("/nonexistent/leaf.png")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaf.png");
        RgbImage::new(12, 7).save(&path).unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (12, 7));
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaf.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();

        assert!(matches!(load_image(&path), Err(Error::Image(_))));
    }

    #[test]
    fn test_decode_bytes() {
        let mut bytes = Vec::new();
        RgbImage::new(5, 5)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        assert_eq!(decode_image(&bytes).unwrap().width(), 5);
        assert!(matches!(decode_image(&[]), Err(Error::InvalidImageFormat(_))));
    }
}
