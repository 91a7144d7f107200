//! STAC object model used by the extractors: extension property records for
//! SAR, Satellite and Projection, plus assets and their band descriptors.
//!
//! Every record serializes with the prefixed field names the STAC extensions
//! define (`sar:*`, `sat:*`, `proj:*`, `eo:bands`), so the output of
//! [`ExtensionProperties::to_map`] can be merged directly into an item's
//! `properties` object.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::constants::PolarizationBand;
use crate::error::{Error, Result};
use crate::types::{FrequencyBand, OrbitState, Polarization};

pub const SAR_EXTENSION_SCHEMA: &str = "https://stac-extensions.github.io/sar/v1.0.0/schema.json";
pub const SAT_EXTENSION_SCHEMA: &str = "https://stac-extensions.github.io/sat/v1.0.0/schema.json";
pub const PROJ_EXTENSION_SCHEMA: &str =
    "https://stac-extensions.github.io/projection/v1.1.0/schema.json";
pub const EO_EXTENSION_SCHEMA: &str = "https://stac-extensions.github.io/eo/v1.1.0/schema.json";

/// Common behaviour of extension property records
pub trait ExtensionProperties: Serialize {
    /// JSON schema URI to list under the item's `stac_extensions`
    const SCHEMA_URI: &'static str;

    /// Serialize into a flat map of prefixed properties
    fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Parse(format!(
                "extension properties must serialize to an object, got {}",
                other
            ))),
        }
    }

    /// Merge into an existing properties object, overwriting keys already present
    fn apply(&self, properties: &mut Map<String, Value>) -> Result<()> {
        properties.extend(self.to_map()?);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarProperties {
    #[serde(rename = "sar:instrument_mode")]
    pub instrument_mode: String,
    #[serde(rename = "sar:frequency_band")]
    pub frequency_band: FrequencyBand,
    /// GHz
    #[serde(rename = "sar:center_frequency")]
    pub center_frequency: f64,
    #[serde(rename = "sar:polarizations")]
    pub polarizations: Vec<Polarization>,
    #[serde(rename = "sar:product_type")]
    pub product_type: String,
    #[serde(rename = "sar:looks_range")]
    pub looks_range: u32,
    #[serde(rename = "sar:looks_azimuth")]
    pub looks_azimuth: u32,
    /// Meters
    #[serde(rename = "sar:pixel_spacing_range")]
    pub pixel_spacing_range: f64,
}

impl ExtensionProperties for SarProperties {
    const SCHEMA_URI: &'static str = SAR_EXTENSION_SCHEMA;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatProperties {
    #[serde(rename = "sat:platform_international_designator")]
    pub platform_international_designator: String,
    #[serde(rename = "sat:orbit_state")]
    pub orbit_state: OrbitState,
    #[serde(rename = "sat:absolute_orbit")]
    pub absolute_orbit: u64,
    #[serde(rename = "sat:relative_orbit")]
    pub relative_orbit: u64,
}

impl ExtensionProperties for SatProperties {
    const SCHEMA_URI: &'static str = SAT_EXTENSION_SCHEMA;
}

/// GeoJSON geometry of a product footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Rings of `[lon, lat]` positions; the first ring is the exterior
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjProperties {
    #[serde(rename = "proj:epsg")]
    pub epsg: Option<u32>,
    #[serde(rename = "proj:geometry")]
    pub geometry: Geometry,
    #[serde(rename = "proj:bbox")]
    pub bbox: [f64; 4],
    /// `[samples, lines]` of the first annotated image
    #[serde(rename = "proj:shape")]
    pub shape: [usize; 2],
    /// Affine coefficients `[a, b, c, d, e, f]`, left unset when no
    /// ground control points could be fitted
    #[serde(rename = "proj:transform", skip_serializing_if = "Option::is_none", default)]
    pub transform: Option<[f64; 6]>,
}

impl ExtensionProperties for ProjProperties {
    const SCHEMA_URI: &'static str = PROJ_EXTENSION_SCHEMA;
}

/// Band object attached to an asset under `eo:bands`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// GHz
    #[serde(
        rename = "sar:center_frequency",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub center_frequency: Option<f64>,
}

impl From<&PolarizationBand> for Band {
    fn from(band: &PolarizationBand) -> Self {
        Band {
            name: band.display_name.to_string(),
            description: Some(band.description.to_string()),
            center_frequency: Some(band.center_frequency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(rename = "eo:bands", skip_serializing_if = "Vec::is_empty", default)]
    pub bands: Vec<Band>,
}

/// Asset map of one item. Keys are unique; a second insert under the same
/// key is rejected instead of replacing the first asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assets(BTreeMap<String, Asset>);

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, asset: Asset) -> Result<()> {
        if self.0.contains_key(&key) {
            return Err(Error::DuplicateAssetKey(key));
        }
        self.0.insert(key, asset);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move every asset of `other` into `self`, failing on the first collision
    pub fn extend(&mut self, other: Assets) -> Result<()> {
        for (key, asset) in other.0 {
            self.insert(key, asset)?;
        }
        Ok(())
    }
}

/// Schema URIs for an item's `stac_extensions`: SAR, Satellite and
/// Projection, plus EO when any asset carries `eo:bands`.
pub fn stac_extensions(assets: &Assets) -> Vec<&'static str> {
    let mut uris = vec![
        SarProperties::SCHEMA_URI,
        SatProperties::SCHEMA_URI,
        ProjProperties::SCHEMA_URI,
    ];
    if assets.iter().any(|(_, asset)| !asset.bands.is_empty()) {
        uris.push(EO_EXTENSION_SCHEMA);
    }
    uris
}
