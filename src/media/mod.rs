// SPDX-License-Identifier: MPL-2.0
//! Carousel assets and the capability that loads them.
//!
//! An [`Asset`] is immutable once supplied by the host; its identity is its
//! position in the input sequence. The host contract is the loose
//! `{ uri, type }` pair ([`AssetEntry`]); any `type` other than `image` is
//! accepted and carried as [`MediaKind::Unsupported`].

pub mod image;
pub mod manifest;

use serde::{Deserialize, Serialize};

pub use image::{load_image, ImageData};
pub use manifest::{load_manifest, parse_manifest};

/// Media type recognized as an image slide.
pub const IMAGE_TYPE: &str = "image";

/// Kind of media behind a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    /// Any other declared type, kept verbatim for display.
    Unsupported(String),
}

impl MediaKind {
    /// Maps a declared media type onto a kind. Only the exact `image` type is
    /// an image.
    #[must_use]
    pub fn from_type(raw: &str) -> Self {
        if raw == IMAGE_TYPE {
            MediaKind::Image
        } else {
            MediaKind::Unsupported(raw.to_string())
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, MediaKind::Image)
    }
}

/// One item of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub uri: String,
    pub kind: MediaKind,
}

impl Asset {
    #[must_use]
    pub fn new(uri: impl Into<String>, media_type: &str) -> Self {
        Self {
            uri: uri.into(),
            kind: MediaKind::from_type(media_type),
        }
    }

    /// Shorthand for an image asset.
    #[must_use]
    pub fn image(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            kind: MediaKind::Image,
        }
    }
}

/// Wire form of an asset as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub uri: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

impl From<AssetEntry> for Asset {
    fn from(entry: AssetEntry) -> Self {
        Asset::new(entry.uri, &entry.media_type)
    }
}
