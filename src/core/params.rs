use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    SENTINEL_CENTER_FREQUENCY, SENTINEL_LOOKS_AZIMUTH, SENTINEL_LOOKS_RANGE,
    SENTINEL_PIXEL_SPACING_RANGE,
};
use crate::error::Result;

/// Fixed SAR parameters written to every item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SarDefaults {
    /// GHz
    pub center_frequency: f64,
    pub looks_range: u32,
    pub looks_azimuth: u32,
    /// Meters
    pub pixel_spacing_range: f64,
}

impl Default for SarDefaults {
    fn default() -> Self {
        Self {
            center_frequency: SENTINEL_CENTER_FREQUENCY,
            looks_range: SENTINEL_LOOKS_RANGE,
            looks_azimuth: SENTINEL_LOOKS_AZIMUTH,
            pixel_spacing_range: SENTINEL_PIXEL_SPACING_RANGE,
        }
    }
}

/// Where the ground control points for `proj:transform` come from
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GcpSource {
    /// Geolocation grid of the first annotation file
    Annotation,
    /// GCPs embedded in the first measurement GeoTIFF (needs the `gdal` feature)
    Measurement,
}

/// Extraction options suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemOptions {
    pub sar: SarDefaults,
    pub epsg: Option<u32>,
    pub gcp_source: GcpSource,
    /// Media type for measurement assets; inferred from the extension when unset
    pub media_type: Option<String>,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            sar: SarDefaults::default(),
            epsg: Some(4326),
            gcp_source: GcpSource::Annotation,
            media_type: None,
        }
    }
}

impl ItemOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
