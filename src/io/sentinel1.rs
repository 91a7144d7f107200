use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::core::bands::image_asset_from_href;
use crate::core::params::ItemOptions;
use crate::core::properties::{
    fill_proj_properties, sar_properties_from_manifest, sat_properties_from_manifest,
};
use crate::error::Result;
use crate::io::ReadHrefModifier;
use crate::io::manifest::{
    DataObjectGroup, MANIFEST_FILE, MetadataLinks, ProductMetadata, SafeManifest,
};
use crate::stac::{Assets, ProjProperties, SarProperties, SatProperties};
use crate::types::ProductType;

/// Errors encountered when opening SAFE directories
#[derive(Debug, Error)]
pub enum SafeError {
    #[error("Missing `{0}` in SAFE product")]
    MissingField(&'static str),
    #[error("Unsupported SAFE product type: {0}")]
    UnsupportedProduct(String),
}

/// Reader for Sentinel-1 SAFE products
pub struct SafeReader {
    pub base_path: PathBuf,
    pub product_type: ProductType,
    pub links: MetadataLinks,
    pub options: ItemOptions,
    modifier: Option<Box<ReadHrefModifier>>,
}

impl std::fmt::Debug for SafeReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeReader")
            .field("base_path", &self.base_path)
            .field("product_type", &self.product_type)
            .field("options", &self.options)
            .field("modifier", &self.modifier.is_some())
            .finish()
    }
}

impl SafeReader {
    /// Open a SAFE directory with default options
    pub fn open<P: AsRef<Path>>(safe_dir: P) -> Result<Self> {
        Self::open_with_options(safe_dir, ItemOptions::default(), None)
    }

    /// Open a SAFE directory; `modifier` is applied to every href before it is read
    pub fn open_with_options<P: AsRef<Path>>(
        safe_dir: P,
        options: ItemOptions,
        modifier: Option<Box<ReadHrefModifier>>,
    ) -> Result<Self> {
        let base = safe_dir.as_ref().to_path_buf();
        let manifest_path = base.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(SafeError::MissingField("manifest.safe").into());
        }
        if !base.join("annotation").is_dir() {
            return Err(SafeError::MissingField("annotation directory").into());
        }
        if !base.join("measurement").is_dir() {
            return Err(SafeError::MissingField("measurement directory").into());
        }

        info!("Reading SAFE manifest {:?}", manifest_path);
        let manifest = SafeManifest::from_file(&manifest_path, modifier.as_deref())?;

        // Detect product type from metadata
        let product_type = match manifest.product_type() {
            Ok(product_type) => product_type,
            Err(e) => {
                let raw = manifest
                    .root
                    .find_text_opt(".//s1sarl1:productType")
                    .unwrap_or_default()
                    .to_string();
                warn!("Unsupported product type {:?}: {}", raw, e);
                return Err(SafeError::UnsupportedProduct(raw).into());
            }
        };
        info!(
            "Detected {} product ({} measurement files)",
            product_type,
            manifest.hrefs(DataObjectGroup::Measurement).len()
        );

        let links = MetadataLinks::new(base.to_string_lossy(), manifest);
        Ok(SafeReader {
            base_path: base,
            product_type,
            links,
            options,
            modifier,
        })
    }

    pub fn manifest(&self) -> &SafeManifest {
        &self.links.manifest
    }

    pub fn metadata_links(&self) -> &MetadataLinks {
        &self.links
    }

    fn modifier(&self) -> Option<&ReadHrefModifier> {
        self.modifier.as_deref()
    }

    pub fn product_metadata(&self) -> Result<ProductMetadata> {
        self.manifest().product_metadata()
    }

    pub fn sar_properties(&self) -> Result<SarProperties> {
        sar_properties_from_manifest(&self.manifest().root, &self.options.sar)
    }

    pub fn sat_properties(&self) -> Result<SatProperties> {
        sat_properties_from_manifest(&self.manifest().root)
    }

    pub fn proj_properties(&self) -> Result<ProjProperties> {
        let product_meta = self.product_metadata()?;
        fill_proj_properties(&self.links, &product_meta, &self.options, self.modifier())
    }

    /// One data asset per measurement file listed in the manifest
    pub fn measurement_assets(&self) -> Result<Assets> {
        let multi_swath = self.product_type.is_multi_swath();
        let mut assets = Assets::new();
        for href in self.links.measurement_hrefs() {
            let (key, asset) =
                image_asset_from_href(&href, self.options.media_type.as_deref(), multi_swath)?;
            info!("Measurement asset {} -> {}", key, href);
            assets.insert(key, asset)?;
        }
        Ok(assets)
    }

    /// Metadata assets (manifest, product, calibration and noise schemas)
    pub fn metadata_assets(&self) -> Result<Assets> {
        self.links.metadata_assets(self.product_type.is_multi_swath())
    }
}
