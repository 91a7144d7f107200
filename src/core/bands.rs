//! Band/swath resolution for Sentinel-1 image assets.
//!
//! Measurement and annotation files follow one of two naming conventions:
//!
//! - short form `{...}-{polarization}` (e.g. `product-vv.tif`)
//! - long form `{mission}-{swath}-{product}-{polarization}-{...}`
//!   (e.g. `s1a-iw1-slc-vv-20210101t000000-...-001.tiff`), where the second
//!   field is the swath and the fourth the polarization. Abbreviated names
//!   without the product field (`s1a-iw1-vv-001.tiff`) carry the polarization
//!   in the third field; it is used only when the fourth is not a known code.
//!
//! [`AssetName::parse`] turns a filename into one of these shapes and
//! [`image_asset_from_href`] builds the STAC asset for it.
use std::path::Path;

use tracing::debug;

use crate::constants::{GEOTIFF_MEDIA_TYPE, PolarizationBand, polarization_band, slc_swath};
use crate::error::{Error, Result};
use crate::stac::{Asset, Band};
use crate::types::Swath;

pub const DATA_ASSET_DESCRIPTION: &str = "Actual SAR data that have been processed into an image";

/// Parsed shape of a Sentinel-1 asset filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetName<'a> {
    Short { polarization: &'a str },
    Long { swath: &'a str, polarization: &'a str },
}

impl<'a> AssetName<'a> {
    /// Parse the base filename (up to its first `.`) of `href`
    pub fn parse(href: &'a str) -> Option<Self> {
        let file_name = href.rsplit(['/', '\\']).next()?;
        let stem = file_name.split('.').next()?;
        let parts: Vec<&str> = stem.split('-').collect();
        match parts.as_slice() {
            [_, polarization] => Some(AssetName::Short {
                polarization: *polarization,
            }),
            [_, swath, third, fourth, ..] => {
                let polarization =
                    if polarization_band(fourth).is_none() && polarization_band(third).is_some() {
                        *third
                    } else {
                        *fourth
                    };
                Some(AssetName::Long {
                    swath: *swath,
                    polarization,
                })
            }
            _ => None,
        }
    }

    pub fn polarization(&self) -> &'a str {
        match *self {
            AssetName::Short { polarization } | AssetName::Long { polarization, .. } => {
                polarization
            }
        }
    }

    pub fn swath(&self) -> Option<&'a str> {
        match *self {
            AssetName::Short { .. } => None,
            AssetName::Long { swath, .. } => Some(swath),
        }
    }
}

/// Band, swath and asset key resolved from an asset filename
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAsset {
    pub band: &'static PolarizationBand,
    pub swath: Option<Swath>,
}

impl ResolvedAsset {
    /// `{swath}-{polarization}` when a swath was resolved, else the bare code
    pub fn key(&self) -> String {
        match self.swath {
            Some(swath) => format!("{}-{}", swath.as_str().to_lowercase(), self.band.code),
            None => self.band.code.to_string(),
        }
    }
}

/// Resolve the polarization band and, for multi-swath products, the swath
/// encoded in the filename of `href`.
pub fn resolve_asset_name(href: &str, multi_swath: bool) -> Result<ResolvedAsset> {
    let name = AssetName::parse(href).ok_or_else(|| Error::UnknownAsset {
        href: href.to_string(),
    })?;

    let band = polarization_band(&name.polarization().to_lowercase()).ok_or_else(|| {
        Error::UnknownAsset {
            href: href.to_string(),
        }
    })?;

    let swath = if multi_swath {
        name.swath()
            .and_then(|token| slc_swath(&token.to_uppercase()))
    } else {
        None
    };

    Ok(ResolvedAsset { band, swath })
}

/// Media type for an image asset: the explicit one, else GeoTIFF for
/// `.tif`/`.tiff` files.
pub fn image_media_type(href: &str, media_type: Option<&str>) -> Result<String> {
    if let Some(media_type) = media_type {
        return Ok(media_type.to_string());
    }
    let ext = Path::new(href)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "tif" | "tiff" => Ok(GEOTIFF_MEDIA_TYPE.to_string()),
        _ => Err(Error::MissingMediaType {
            href: href.to_string(),
        }),
    }
}

/// Create the data asset for a band image, returning the asset key to store it
/// under together with the asset.
pub fn image_asset_from_href(
    asset_href: &str,
    media_type: Option<&str>,
    multi_swath: bool,
) -> Result<(String, Asset)> {
    debug!("Creating asset for image {}", asset_href);

    let asset_media_type = image_media_type(asset_href, media_type)?;
    let resolved = resolve_asset_name(asset_href, multi_swath)?;
    let band = resolved.band;

    let asset = Asset {
        href: asset_href.to_string(),
        media_type: asset_media_type,
        title: Some(format!("{} Data", band.display_name)),
        description: Some(DATA_ASSET_DESCRIPTION.to_string()),
        roles: vec!["data".to_string()],
        bands: vec![Band::from(band)],
    };

    Ok((resolved.key(), asset))
}
