//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, XML, SAFE and JSON errors, and provides semantic variants
//! for asset resolution and metadata extraction failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SAFE reader error: {0}")]
    Safe(#[from] crate::io::SafeError),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Must supply a media type for asset: {href}")]
    MissingMediaType { href: String },

    #[error("Unexpected asset: {href}")]
    UnknownAsset { href: String },

    #[error("Missing field `{0}` in product metadata")]
    MissingField(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid footprint: {0}")]
    InvalidFootprint(String),

    #[error("Duplicate asset key: {0}")]
    DuplicateAssetKey(String),

    #[error("Ground control point error: {0}")]
    Gcp(String),
}
