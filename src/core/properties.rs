//! Fillers for the SAR, Satellite and Projection extension properties of a
//! Sentinel-1 item. Each `fill_*` function reads the XML it needs from an href
//! (through an optional href modifier); the `*_from_manifest` variants work on
//! an already parsed document.
use tracing::{info, warn};

use crate::constants::SENTINEL_FREQUENCY_BAND;
use crate::core::params::{GcpSource, ItemOptions, SarDefaults};
use crate::error::{Error, Result};
use crate::io::gcp::{gcps_from_annotation, gcps_from_measurement, transform_from_gcps};
use crate::io::manifest::{MetadataLinks, ProductMetadata};
use crate::io::xml::XmlElement;
use crate::io::{ReadHrefModifier, modify_href};
use crate::stac::{ProjProperties, SarProperties, SatProperties};
use crate::types::{OrbitState, Polarization};

/// Fill the SAR extension from the manifest at `href`
pub fn fill_sar_properties(
    href: &str,
    defaults: &SarDefaults,
    modifier: Option<&ReadHrefModifier>,
) -> Result<SarProperties> {
    let root = XmlElement::from_file(href, modifier)?;
    sar_properties_from_manifest(&root, defaults)
}

pub fn sar_properties_from_manifest(
    root: &XmlElement,
    defaults: &SarDefaults,
) -> Result<SarProperties> {
    let polarizations = root
        .find_all(".//s1sarl1:transmitterReceiverPolarisation")
        .into_iter()
        .map(|e| e.text.parse::<Polarization>())
        .collect::<Result<Vec<_>>>()?;

    Ok(SarProperties {
        instrument_mode: root.find_text(".//s1sarl1:mode")?.to_string(),
        frequency_band: SENTINEL_FREQUENCY_BAND,
        center_frequency: defaults.center_frequency,
        polarizations,
        product_type: root.find_text(".//s1sarl1:productType")?.to_string(),
        looks_range: defaults.looks_range,
        looks_azimuth: defaults.looks_azimuth,
        pixel_spacing_range: defaults.pixel_spacing_range,
    })
}

/// Fill the Satellite extension from the manifest at `href`
pub fn fill_sat_properties(
    href: &str,
    modifier: Option<&ReadHrefModifier>,
) -> Result<SatProperties> {
    let root = XmlElement::from_file(href, modifier)?;
    sat_properties_from_manifest(&root)
}

pub fn sat_properties_from_manifest(root: &XmlElement) -> Result<SatProperties> {
    Ok(SatProperties {
        platform_international_designator: root
            .find_text(".//safe:nssdcIdentifier")?
            .to_string(),
        orbit_state: root.find_parsed::<OrbitState>(".//s1:pass")?,
        absolute_orbit: root.find_parsed(".//safe:orbitNumber")?,
        relative_orbit: root.find_parsed(".//safe:relativeOrbitNumber")?,
    })
}

/// Fill the Projection extension.
///
/// `shape` comes from the first annotation file listed in the manifest. The
/// transform is best-effort: when GCPs cannot be read or fitted it is left
/// unset and a warning is logged.
pub fn fill_proj_properties(
    links: &MetadataLinks,
    product_meta: &ProductMetadata,
    options: &ItemOptions,
    modifier: Option<&ReadHrefModifier>,
) -> Result<ProjProperties> {
    let annotation_href = links
        .annotation_hrefs()
        .into_iter()
        .next()
        .ok_or_else(|| Error::MissingField("annotation data object".to_string()))?;
    let annotation = XmlElement::from_file(&annotation_href, modifier)?;

    let samples: usize = annotation.find_parsed(".//numberOfSamples")?;
    let lines: usize = annotation.find_parsed(".//numberOfLines")?;

    let transform = match gcp_transform(links, &annotation, options.gcp_source, modifier) {
        Ok(transform) => Some(transform),
        Err(e) => {
            warn!("Leaving proj:transform unset: {}", e);
            None
        }
    };

    Ok(ProjProperties {
        epsg: options.epsg,
        geometry: product_meta.geometry.clone(),
        bbox: product_meta.bbox,
        shape: [samples, lines],
        transform,
    })
}

fn gcp_transform(
    links: &MetadataLinks,
    annotation: &XmlElement,
    source: GcpSource,
    modifier: Option<&ReadHrefModifier>,
) -> Result<[f64; 6]> {
    let gcps = match source {
        GcpSource::Annotation => gcps_from_annotation(annotation)?,
        GcpSource::Measurement => {
            let href = links
                .measurement_hrefs()
                .into_iter()
                .next()
                .ok_or_else(|| Error::MissingField("measurement data object".to_string()))?;
            gcps_from_measurement(modify_href(&href, modifier))?
        }
    };
    info!("Fitting proj:transform through {} GCPs", gcps.len());
    transform_from_gcps(&gcps)
}
