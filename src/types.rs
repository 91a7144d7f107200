//! Shared types and enums used across S1STAC.
//! Includes `Polarization`, `ProductType`, `OrbitState`, `FrequencyBand` and `Swath`.
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Polarization {
    #[serde(rename = "VV")]
    Vv,
    #[serde(rename = "VH")]
    Vh,
    #[serde(rename = "HH")]
    Hh,
    #[serde(rename = "HV")]
    Hv,
}

impl Polarization {
    /// Lowercase two-letter code used in Sentinel-1 filenames
    pub fn code(&self) -> &'static str {
        match self {
            Polarization::Vv => "vv",
            Polarization::Vh => "vh",
            Polarization::Hh => "hh",
            Polarization::Hv => "hv",
        }
    }
}

impl std::fmt::Display for Polarization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarization::Vv => write!(f, "VV"),
            Polarization::Vh => write!(f, "VH"),
            Polarization::Hh => write!(f, "HH"),
            Polarization::Hv => write!(f, "HV"),
        }
    }
}

impl FromStr for Polarization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vv" => Ok(Polarization::Vv),
            "vh" => Ok(Polarization::Vh),
            "hh" => Ok(Polarization::Hh),
            "hv" => Ok(Polarization::Hv),
            other => Err(Error::Parse(format!("Unknown polarization: {}", other))),
        }
    }
}

/// Sentinel-1 product types
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ProductType {
    GRD,
    SLC,
    OCN,
    RAW,
}

impl ProductType {
    /// SLC products carry one measurement per swath and polarization
    pub fn is_multi_swath(&self) -> bool {
        matches!(self, ProductType::SLC)
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductType::GRD => write!(f, "GRD"),
            ProductType::SLC => write!(f, "SLC"),
            ProductType::OCN => write!(f, "OCN"),
            ProductType::RAW => write!(f, "RAW"),
        }
    }
}

impl FromStr for ProductType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GRD" => Ok(ProductType::GRD),
            "SLC" => Ok(ProductType::SLC),
            "OCN" => Ok(ProductType::OCN),
            "RAW" => Ok(ProductType::RAW),
            other => Err(Error::Parse(format!("Unknown product type: {}", other))),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitState {
    Ascending,
    Descending,
}

impl FromStr for OrbitState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" => Ok(OrbitState::Ascending),
            "descending" => Ok(OrbitState::Descending),
            other => Err(Error::Parse(format!("Unknown orbit state: {}", other))),
        }
    }
}

impl std::fmt::Display for OrbitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrbitState::Ascending => write!(f, "ascending"),
            OrbitState::Descending => write!(f, "descending"),
        }
    }
}

/// Radar frequency bands as named by the STAC SAR extension
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FrequencyBand {
    P,
    L,
    S,
    C,
    X,
    Ku,
    K,
    Ka,
}

/// Sub-swath identifiers of the multi-swath acquisition modes
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Swath {
    IW1,
    IW2,
    IW3,
    EW1,
    EW2,
    EW3,
    EW4,
    EW5,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    WV1,
    WV2,
}

impl Swath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Swath::IW1 => "IW1",
            Swath::IW2 => "IW2",
            Swath::IW3 => "IW3",
            Swath::EW1 => "EW1",
            Swath::EW2 => "EW2",
            Swath::EW3 => "EW3",
            Swath::EW4 => "EW4",
            Swath::EW5 => "EW5",
            Swath::S1 => "S1",
            Swath::S2 => "S2",
            Swath::S3 => "S3",
            Swath::S4 => "S4",
            Swath::S5 => "S5",
            Swath::S6 => "S6",
            Swath::WV1 => "WV1",
            Swath::WV2 => "WV2",
        }
    }
}

impl std::fmt::Display for Swath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_type_multi_swath() {
        assert!(ProductType::SLC.is_multi_swath());
        assert!(!ProductType::GRD.is_multi_swath());
        assert_eq!("grd".parse::<ProductType>().unwrap(), ProductType::GRD);
        assert!("XYZ".parse::<ProductType>().is_err());
    }

    #[test]
    fn orbit_state_is_case_insensitive() {
        assert_eq!("ASCENDING".parse::<OrbitState>().unwrap(), OrbitState::Ascending);
        assert_eq!(
            serde_json::to_value(OrbitState::Descending).unwrap(),
            serde_json::json!("descending")
        );
    }

    #[test]
    fn polarization_serializes_uppercase() {
        assert_eq!(serde_json::to_value(Polarization::Vh).unwrap(), serde_json::json!("VH"));
        assert_eq!(" hv ".parse::<Polarization>().unwrap(), Polarization::Hv);
        assert_eq!(Polarization::Hh.code(), "hh");
    }
}
