//! Core extraction building blocks: band/swath resolution for image assets,
//! extraction options, and the fillers for the SAR, Satellite and Projection
//! extension properties.
pub mod bands;
pub mod params;
pub mod properties;
