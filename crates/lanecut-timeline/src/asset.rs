//! Media assets and the asset catalog.

use std::sync::Arc;

use lanecut_core::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable media source supplied by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Unique asset ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Natural media duration in seconds
    pub duration: f64,
    /// Source URL handed to the playback surface
    pub source_url: String,
}

impl MediaAsset {
    /// Create an asset from a human duration string (`"5s"`, `"12.5s"`, `"1:05"`).
    pub fn new(
        name: impl Into<String>,
        duration: &str,
        source_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            duration: parse_duration(duration)?,
            source_url: source_url.into(),
        })
    }

    /// Create an asset from an already-known duration in seconds.
    pub fn from_seconds(
        name: impl Into<String>,
        duration: f64,
        source_url: impl Into<String>,
    ) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(Error::InvalidDuration(duration.to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            duration,
            source_url: source_url.into(),
        })
    }
}

/// Parse a catalog duration string into seconds.
///
/// Accepts `"5s"`, `"12.5s"`, bare seconds, and `"m:ss"` forms. Durations
/// must be strictly positive.
pub fn parse_duration(text: &str) -> Result<f64> {
    let invalid = || Error::InvalidDuration(text.to_string());
    let trimmed = text.trim();

    let seconds = if let Some((minutes, rest)) = trimmed.split_once(':') {
        let m: u32 = minutes.parse().map_err(|_| invalid())?;
        let s: f64 = rest.parse().map_err(|_| invalid())?;
        if !(0.0..60.0).contains(&s) {
            return Err(invalid());
        }
        f64::from(m) * 60.0 + s
    } else {
        trimmed
            .strip_suffix('s')
            .unwrap_or(trimmed)
            .parse()
            .map_err(|_| invalid())?
    };

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(invalid());
    }
    Ok(seconds)
}

/// The collection of media available for placement. Read-only to the
/// engine; only user selection in the surrounding application adds to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    assets: Vec<Arc<MediaAsset>>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-seeded with the stock sample media.
    pub fn with_samples() -> Self {
        let mut catalog = Self::new();
        let samples = [
            (
                "Sample 5s",
                "5s",
                "https://download.samplelib.com/mp4/sample-5s.mp4",
            ),
            (
                "Sample 10s",
                "10s",
                "https://download.samplelib.com/mp4/sample-10s.mp4",
            ),
        ];
        for (name, duration, url) in samples {
            if let Ok(asset) = MediaAsset::new(name, duration, url) {
                catalog.add(asset);
            }
        }
        catalog
    }

    /// Add an asset, returning the shared handle clips will hold.
    pub fn add(&mut self, asset: MediaAsset) -> Arc<MediaAsset> {
        let asset = Arc::new(asset);
        self.assets.push(Arc::clone(&asset));
        asset
    }

    /// Look up an asset by id.
    pub fn get(&self, id: Uuid) -> Option<&Arc<MediaAsset>> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MediaAsset>> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
