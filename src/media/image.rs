// SPDX-License-Identifier: MPL-2.0
//! Image loading by URI: local paths, `file://` URLs and `http(s)://` URLs.
//!
//! Bytes are fetched asynchronously, then decoded off the async executor.
//! There is no retry; a failure is returned to the caller as-is.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::PathBuf;
use std::sync::OnceLock;

const USER_AGENT: &str = concat!("IcedStories/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every remote slide; its connection pool is reused.
static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Where the bytes of a URI come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Remote(String),
}

impl Source {
    #[must_use]
    pub fn from_uri(uri: &str) -> Self {
        let lower = uri.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(uri.to_string())
        } else if let Some(path) = uri.strip_prefix("file://") {
            Source::File(PathBuf::from(path))
        } else {
            Source::File(PathBuf::from(uri))
        }
    }
}

/// Loads and decodes the image at `uri`.
///
/// # Errors
///
/// - [`Error::Io`] when a local file cannot be read
/// - [`Error::Network`] when a remote fetch fails or returns a non-success status
/// - [`Error::Decode`] when the bytes are not a supported image
pub async fn load_image(uri: String) -> Result<ImageData> {
    let bytes = match Source::from_uri(&uri) {
        Source::File(path) => tokio::fs::read(&path).await?,
        Source::Remote(url) => fetch(&url).await?,
    };

    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}

fn http_client() -> Result<&'static reqwest::Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(HTTP_CLIENT.get_or_init(|| client))
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let response = http_client()?.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Decodes encoded image bytes (PNG, JPEG, GIF, WebP, BMP) into RGBA.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has zero dimensions".to_string()));
    }
    let pixels = decoded.into_rgba8().into_raw();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .expect("encoding png should succeed");
        out.into_inner()
    }

    #[test]
    fn source_classifies_uris() {
        assert_eq!(
            Source::from_uri("https://example.com/a.jpg"),
            Source::Remote("https://example.com/a.jpg".into())
        );
        assert_eq!(
            Source::from_uri("HTTP://example.com/a.jpg"),
            Source::Remote("HTTP://example.com/a.jpg".into())
        );
        assert_eq!(
            Source::from_uri("file:///tmp/a.png"),
            Source::File(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            Source::from_uri("photos/a.png"),
            Source::File(PathBuf::from("photos/a.png"))
        );
    }

    #[test]
    fn remote_fetches_share_one_client() {
        let first = http_client().expect("client should build");
        let second = http_client().expect("client should build");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn decode_image_reads_dimensions() {
        let data = decode_image(&png_bytes(3, 2)).expect("png should decode");
        assert_eq!((data.width, data.height), (3, 2));
    }

    #[test]
    fn decode_image_rejects_garbage() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn load_image_reads_local_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("slide.png");
        std::fs::write(&path, png_bytes(4, 4)).expect("failed to write png");

        let data = load_image(path.to_string_lossy().into_owned())
            .await
            .expect("local png should load");
        assert_eq!(data.width, 4);
    }

    #[tokio::test]
    async fn load_image_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let uri = dir.path().join("missing.png").to_string_lossy().into_owned();

        let err = load_image(uri).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
