//! Icon lookup and conversion for SSB launcher entries.
//!
//! The registry-side icon lookup sits behind [`IconSource`] so the integrator
//! can be exercised against fakes. Loading and conversion run in-process:
//! source images (file or http/https URIs) are decoded with `image` and
//! persisted as a fixed-size PNG.

use crate::error::{Result, SsbError};
use async_trait::async_trait;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use tracing::debug;
use url::Url;

/// Edge length of the raster icon written next to each SSB.
pub const ICON_SIZE: u32 = 128;

/// A loadable icon found for an SSB.
#[derive(Debug, Clone)]
pub struct IconDescriptor {
    /// Source location of the icon image.
    pub src: Url,
}

/// Provider of per-SSB source icons.
///
/// Implemented by the SSB registry; `None` means no icon is known for the id,
/// which is a valid outcome rather than an error.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Look up the best icon for `ssb_id` at the given target size.
    async fn icon_for(&self, ssb_id: &str, size: u32) -> Result<Option<IconDescriptor>>;
}

/// Load and decode an icon image from its source URI.
pub async fn load_image(client: &reqwest::Client, src: &Url) -> Result<DynamicImage> {
    let bytes = match src.scheme() {
        "file" => {
            let path = src.to_file_path().map_err(|_| SsbError::InvalidIconUrl {
                url: src.to_string(),
            })?;
            tokio::fs::read(&path)
                .await
                .map_err(|e| SsbError::io_with_path(e, path))?
        }
        "http" | "https" => {
            let response = client.get(src.clone()).send().await?.error_for_status()?;
            response.bytes().await?.to_vec()
        }
        scheme => {
            return Err(SsbError::UnsupportedIconScheme {
                scheme: scheme.to_string(),
                url: src.to_string(),
            })
        }
    };

    debug!("Loaded icon source from {} ({} bytes)", src, bytes.len());
    Ok(image::load_from_memory(&bytes)?)
}

/// Resize a decoded image to `width` x `height` and write it as PNG at `dest`.
pub fn save_icon(icon: &DynamicImage, width: u32, height: u32, dest: &Path) -> Result<()> {
    let resized = if icon.width() == width && icon.height() == height {
        icon.clone()
    } else {
        icon.resize_exact(width, height, FilterType::Lanczos3)
    };

    resized.save_with_format(dest, ImageFormat::Png)?;
    debug!("Wrote {}x{} icon to {:?}", width, height, dest);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn checkerboard(size: u32) -> DynamicImage {
        let img = image::RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_save_icon_resizes_to_target() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("icon.png");

        save_icon(&checkerboard(16), ICON_SIZE, ICON_SIZE, &dest).unwrap();

        let written = image::open(&dest).unwrap();
        assert_eq!(written.width(), ICON_SIZE);
        assert_eq!(written.height(), ICON_SIZE);
    }

    #[tokio::test]
    async fn test_load_image_from_file_url() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.png");
        checkerboard(8).save_with_format(&source, ImageFormat::Png).unwrap();

        let url = Url::from_file_path(&source).unwrap();
        let client = reqwest::Client::new();
        let loaded = load_image(&client, &url).await.unwrap();

        assert_eq!(loaded.width(), 8);
        assert_eq!(loaded.height(), 8);
    }

    #[tokio::test]
    async fn test_load_image_rejects_unknown_scheme() {
        let url = Url::parse("ftp://example.com/icon.png").unwrap();
        let client = reqwest::Client::new();

        let err = load_image(&client, &url).await.unwrap_err();
        match err {
            SsbError::UnsupportedIconScheme { scheme, .. } => assert_eq!(scheme, "ftp"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_image_missing_file() {
        let url = Url::parse("file:///nonexistent/icon.png").unwrap();
        let client = reqwest::Client::new();

        let err = load_image(&client, &url).await.unwrap_err();
        assert!(matches!(err, SsbError::Io { .. }));
    }
}
