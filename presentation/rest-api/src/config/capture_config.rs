use std::env;
use std::path::PathBuf;

const DEFAULT_IMAGE_PATH: &str = "capture/latest.jpg";

/// Configuration for the device camera.
///
/// Environment variables:
/// - CAPTURE_IMAGE_PATH: Still image the camera writes before each translate
///   (default: "capture/latest.jpg")
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub image_path: PathBuf,
}

impl CaptureConfig {
    pub fn from_env() -> Self {
        Self::from_raw(env::var("CAPTURE_IMAGE_PATH").ok().as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let image_path = raw
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_IMAGE_PATH);

        Self {
            image_path: PathBuf::from(image_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_path_when_unset_or_blank() {
        assert_eq!(
            CaptureConfig::from_raw(None).image_path,
            PathBuf::from("capture/latest.jpg")
        );
        assert_eq!(
            CaptureConfig::from_raw(Some("  ")).image_path,
            PathBuf::from("capture/latest.jpg")
        );
    }

    #[test]
    fn should_use_configured_path() {
        let config = CaptureConfig::from_raw(Some(" /data/camera/still.jpg "));

        assert_eq!(config.image_path, PathBuf::from("/data/camera/still.jpg"));
    }
}
