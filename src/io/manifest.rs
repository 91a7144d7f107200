use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::{debug, info};

use crate::core::bands::resolve_asset_name;
use crate::constants::XML_MEDIA_TYPE;
use crate::error::{Error, Result};
use crate::io::ReadHrefModifier;
use crate::io::xml::XmlElement;
use crate::stac::{Asset, Assets, Geometry};
use crate::types::ProductType;

pub const MANIFEST_FILE: &str = "manifest.safe";

/// Representation group of a SAFE data object, taken from its `repID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataObjectGroup {
    Annotation,
    Measurement,
    Calibration,
    Noise,
    Rfi,
    Other,
}

impl DataObjectGroup {
    pub fn from_rep_id(rep_id: &str) -> Self {
        match rep_id {
            "s1Level1ProductSchema" => DataObjectGroup::Annotation,
            "s1Level1MeasurementSchema" => DataObjectGroup::Measurement,
            "s1Level1CalibrationSchema" => DataObjectGroup::Calibration,
            "s1Level1NoiseSchema" => DataObjectGroup::Noise,
            "s1Level1RfiSchema" => DataObjectGroup::Rfi,
            _ => DataObjectGroup::Other,
        }
    }
}

/// A `dataObject` entry of the manifest
#[derive(Debug, Clone, PartialEq)]
pub struct DataObject {
    pub id: String,
    pub rep_id: String,
    /// Relative to the SAFE directory, without the leading `./`
    pub href: String,
}

impl DataObject {
    pub fn group(&self) -> DataObjectGroup {
        DataObjectGroup::from_rep_id(&self.rep_id)
    }
}

/// Product-level metadata: footprint, acquisition period and product type
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMetadata {
    pub geometry: Geometry,
    pub bbox: [f64; 4],
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub product_type: ProductType,
    /// e.g. `sentinel-1a`
    pub platform: Option<String>,
}

impl ProductMetadata {
    /// Midpoint of the acquisition period
    pub fn datetime(&self) -> DateTime<Utc> {
        self.start_datetime + (self.end_datetime - self.start_datetime) / 2
    }

    /// Merge the common item properties into `properties`
    pub fn apply(&self, properties: &mut Map<String, Value>) {
        properties.insert("datetime".to_string(), json!(self.datetime().to_rfc3339()));
        properties.insert(
            "start_datetime".to_string(),
            json!(self.start_datetime.to_rfc3339()),
        );
        properties.insert(
            "end_datetime".to_string(),
            json!(self.end_datetime.to_rfc3339()),
        );
        if let Some(platform) = &self.platform {
            properties.insert("platform".to_string(), json!(platform));
        }
    }
}

/// Parse a SAFE timestamp (`2021-01-01T05:43:12.345678`, naive UTC, optional `Z`)
pub fn parse_safe_datetime(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim().trim_end_matches('Z');
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| Error::Parse(format!("invalid timestamp {:?}: {}", s, e)))?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Parse a GML `coordinates` string of `lat,lon` pairs into a closed
/// `[lon, lat]` ring and its bbox.
pub fn parse_footprint(coordinates: &str) -> Result<(Geometry, [f64; 4])> {
    let mut ring: Vec<[f64; 2]> = Vec::new();
    for pair in coordinates.split_whitespace() {
        let (lat, lon) = pair
            .split_once(',')
            .ok_or_else(|| Error::InvalidFootprint(format!("malformed coordinate {:?}", pair)))?;
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::InvalidFootprint(format!("invalid latitude {:?}", lat)))?;
        let lon: f64 = lon
            .parse()
            .map_err(|_| Error::InvalidFootprint(format!("invalid longitude {:?}", lon)))?;
        ring.push([lon, lat]);
    }
    if let Some(&first) = ring.first() {
        if ring.last() != Some(&first) {
            ring.push(first);
        }
    }
    // A closed linear ring has at least 4 positions (3 distinct).
    if ring.len() < 4 {
        return Err(Error::InvalidFootprint(format!(
            "need at least 3 distinct points, got {}",
            ring.len().saturating_sub(1)
        )));
    }

    let mut bbox = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
    for [lon, lat] in &ring {
        bbox[0] = bbox[0].min(*lon);
        bbox[1] = bbox[1].min(*lat);
        bbox[2] = bbox[2].max(*lon);
        bbox[3] = bbox[3].max(*lat);
    }

    Ok((
        Geometry::Polygon {
            coordinates: vec![ring],
        },
        bbox,
    ))
}

/// Parsed `manifest.safe`
#[derive(Debug, Clone)]
pub struct SafeManifest {
    pub root: XmlElement,
    pub data_objects: Vec<DataObject>,
}

impl SafeManifest {
    pub fn from_file<P: AsRef<Path>>(path: P, modifier: Option<&ReadHrefModifier>) -> Result<Self> {
        let root = XmlElement::from_file(path, modifier)?;
        Ok(Self::from_element(root))
    }

    pub fn parse_str(xml: &str) -> Result<Self> {
        Ok(Self::from_element(XmlElement::parse_str(xml)?))
    }

    pub fn from_element(root: XmlElement) -> Self {
        let mut data_objects = Vec::new();
        for obj in root.find_all(".//dataObject") {
            let Some(location) = obj.find(".//fileLocation") else {
                continue;
            };
            let Some(href) = location.attr("href") else {
                continue;
            };
            data_objects.push(DataObject {
                id: obj.attr("ID").unwrap_or_default().to_string(),
                rep_id: obj.attr("repID").unwrap_or_default().to_string(),
                href: href.trim_start_matches("./").to_string(),
            });
        }
        debug!("Manifest lists {} data objects", data_objects.len());
        SafeManifest { root, data_objects }
    }

    /// Relative hrefs of every data object in `group`, in manifest order
    pub fn hrefs(&self, group: DataObjectGroup) -> Vec<&str> {
        self.data_objects
            .iter()
            .filter(|obj| obj.group() == group)
            .map(|obj| obj.href.as_str())
            .collect()
    }

    pub fn product_type(&self) -> Result<ProductType> {
        self.root.find_parsed(".//s1sarl1:productType")
    }

    pub fn product_metadata(&self) -> Result<ProductMetadata> {
        let coordinates = self.root.find_text(".//gml:coordinates")?;
        let (geometry, bbox) = parse_footprint(coordinates)?;
        let start_datetime = parse_safe_datetime(self.root.find_text(".//safe:startTime")?)?;
        let end_datetime = parse_safe_datetime(self.root.find_text(".//safe:stopTime")?)?;

        let family = self
            .root
            .find(".//safe:platform")
            .and_then(|p| p.children.iter().find(|c| c.name == "safe:familyName"))
            .map(|c| c.text.trim());
        let platform = match (family, self.root.find_text_opt(".//safe:number")) {
            (Some(family), Some(number)) => Some(format!("{}{}", family, number).to_lowercase()),
            _ => None,
        };

        info!(
            "Product footprint bbox {:?}, acquired {} to {}",
            bbox, start_datetime, end_datetime
        );

        Ok(ProductMetadata {
            geometry,
            bbox,
            start_datetime,
            end_datetime,
            product_type: self.product_type()?,
            platform,
        })
    }
}

/// Hrefs of a SAFE product, resolved against its base directory
#[derive(Debug, Clone)]
pub struct MetadataLinks {
    pub base_href: String,
    pub manifest: SafeManifest,
}

impl MetadataLinks {
    pub fn new(base_href: impl Into<String>, manifest: SafeManifest) -> Self {
        MetadataLinks {
            base_href: base_href.into(),
            manifest,
        }
    }

    pub fn resolve(&self, relative: &str) -> String {
        format!("{}/{}", self.base_href.trim_end_matches('/'), relative)
    }

    pub fn manifest_href(&self) -> String {
        self.resolve(MANIFEST_FILE)
    }

    pub fn hrefs(&self, group: DataObjectGroup) -> Vec<String> {
        self.manifest
            .hrefs(group)
            .into_iter()
            .map(|href| self.resolve(href))
            .collect()
    }

    pub fn annotation_hrefs(&self) -> Vec<String> {
        self.hrefs(DataObjectGroup::Annotation)
    }

    pub fn measurement_hrefs(&self) -> Vec<String> {
        self.hrefs(DataObjectGroup::Measurement)
    }

    /// Metadata assets: the manifest plus one asset per product, calibration
    /// and noise schema file, keyed like the band assets they describe.
    pub fn metadata_assets(&self, multi_swath: bool) -> Result<Assets> {
        let mut assets = Assets::new();
        assets.insert(
            "safe-manifest".to_string(),
            metadata_asset(self.manifest_href(), "Manifest File", None),
        )?;

        let groups = [
            (
                DataObjectGroup::Annotation,
                "product",
                "Product Schema",
                "Describes the main characteristics corresponding to the band: imaging parameters, platform, image properties, Doppler information, geographic location, etc.",
            ),
            (
                DataObjectGroup::Calibration,
                "calibration",
                "Calibration Schema",
                "Calibration metadata including calibration information and the beta nought, sigma nought, gamma and digital number look-up tables that can be used for absolute product calibration.",
            ),
            (
                DataObjectGroup::Noise,
                "noise",
                "Noise Schema",
                "Estimated thermal noise look-up tables",
            ),
        ];

        for (group, prefix, title, description) in groups {
            for href in self.manifest.hrefs(group) {
                let file_name = href.rsplit('/').next().unwrap_or(href);
                // calibration-s1a-iw-grd-vv-... and noise-s1a-... carry a group prefix
                let name = file_name
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .unwrap_or(file_name);
                let key = resolve_asset_name(name, multi_swath)?.key();
                assets.insert(
                    format!("schema-{}-{}", prefix, key),
                    metadata_asset(self.resolve(href), title, Some(description)),
                )?;
            }
        }
        Ok(assets)
    }
}

fn metadata_asset(href: String, title: &str, description: Option<&str>) -> Asset {
    Asset {
        href,
        media_type: XML_MEDIA_TYPE.to_string(),
        title: Some(title.to_string()),
        description: description.map(str::to_string),
        roles: vec!["metadata".to_string()],
        bands: Vec::new(),
    }
}
