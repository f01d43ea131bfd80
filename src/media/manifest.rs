// SPDX-License-Identifier: MPL-2.0
//! Ordered asset lists read from a TOML manifest.
//!
//! ```toml
//! [[asset]]
//! uri = "https://example.com/first.jpg"
//! type = "image"
//!
//! [[asset]]
//! uri = "/home/me/second.png"
//! type = "image"
//! ```

use super::{Asset, AssetEntry};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "asset")]
    assets: Vec<AssetEntry>,
}

/// Parses manifest text into assets, preserving declaration order.
pub fn parse_manifest(content: &str) -> Result<Vec<Asset>> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;
    Ok(manifest.assets.into_iter().map(Asset::from).collect())
}

/// Reads and parses the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<Asset>> {
    let content = fs::read_to_string(path)?;
    parse_manifest(&content)
}
