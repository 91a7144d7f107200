//! I/O layer for reading SAFE products.
//! Provides the `xml` element tree, the `manifest` reader, ground control
//! points (`gcp`) and the `sentinel1` SAFE product reader.
pub mod xml;
pub use xml::XmlElement;

pub mod manifest;
pub use manifest::{DataObject, MetadataLinks, ProductMetadata, SafeManifest};

pub mod gcp;
pub use gcp::{Gcp, transform_from_gcps};

pub mod sentinel1;
pub use sentinel1::{SafeError, SafeReader};

/// Rewrites an href before it is read, e.g. to append a SAS token or to sign
/// a URL.
pub type ReadHrefModifier = dyn Fn(&str) -> String + Send + Sync;

pub(crate) fn modify_href(href: &str, modifier: Option<&ReadHrefModifier>) -> String {
    match modifier {
        Some(modify) => modify(href),
        None => href.to_string(),
    }
}
