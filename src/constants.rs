//! Compiled-in lookup tables for Sentinel-1: polarization bands, swath
//! identifiers and the fixed C-band SAR parameters.
use crate::types::{FrequencyBand, Polarization, Swath};

/// Sentinel-1 C-SAR center frequency in GHz
pub const SENTINEL_CENTER_FREQUENCY: f64 = 5.405;
pub const SENTINEL_FREQUENCY_BAND: FrequencyBand = FrequencyBand::C;

// GRD defaults
pub const SENTINEL_LOOKS_RANGE: u32 = 5;
pub const SENTINEL_LOOKS_AZIMUTH: u32 = 1;
pub const SENTINEL_PIXEL_SPACING_RANGE: f64 = 10.0;

pub const GEOTIFF_MEDIA_TYPE: &str = "image/tiff; application=geotiff";
pub const XML_MEDIA_TYPE: &str = "application/xml";

/// A polarization band descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarizationBand {
    pub polarization: Polarization,
    /// Lowercase code as found in filenames
    pub code: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// GHz
    pub center_frequency: f64,
}

pub static SENTINEL_POLARIZATIONS: [PolarizationBand; 4] = [
    PolarizationBand {
        polarization: Polarization::Vh,
        code: "vh",
        display_name: "VH",
        description: "VH band: vertical transmit and horizontal receive",
        center_frequency: SENTINEL_CENTER_FREQUENCY,
    },
    PolarizationBand {
        polarization: Polarization::Hh,
        code: "hh",
        display_name: "HH",
        description: "HH band: horizontal transmit and horizontal receive",
        center_frequency: SENTINEL_CENTER_FREQUENCY,
    },
    PolarizationBand {
        polarization: Polarization::Hv,
        code: "hv",
        display_name: "HV",
        description: "HV band: horizontal transmit and vertical receive",
        center_frequency: SENTINEL_CENTER_FREQUENCY,
    },
    PolarizationBand {
        polarization: Polarization::Vv,
        code: "vv",
        display_name: "VV",
        description: "VV band: vertical transmit and vertical receive",
        center_frequency: SENTINEL_CENTER_FREQUENCY,
    },
];

pub static SENTINEL_SLC_SWATHS: [Swath; 16] = [
    Swath::IW1,
    Swath::IW2,
    Swath::IW3,
    Swath::EW1,
    Swath::EW2,
    Swath::EW3,
    Swath::EW4,
    Swath::EW5,
    Swath::S1,
    Swath::S2,
    Swath::S3,
    Swath::S4,
    Swath::S5,
    Swath::S6,
    Swath::WV1,
    Swath::WV2,
];

/// Look up a polarization band by its filename code (case-insensitive)
pub fn polarization_band(code: &str) -> Option<&'static PolarizationBand> {
    SENTINEL_POLARIZATIONS
        .iter()
        .find(|band| band.code.eq_ignore_ascii_case(code))
}

/// Band descriptor for a typed polarization
pub fn band_for(polarization: Polarization) -> &'static PolarizationBand {
    // The table is closed over every Polarization variant.
    match polarization {
        Polarization::Vh => &SENTINEL_POLARIZATIONS[0],
        Polarization::Hh => &SENTINEL_POLARIZATIONS[1],
        Polarization::Hv => &SENTINEL_POLARIZATIONS[2],
        Polarization::Vv => &SENTINEL_POLARIZATIONS[3],
    }
}

/// Match an uppercase swath token against the known swath set
pub fn slc_swath(token: &str) -> Option<Swath> {
    SENTINEL_SLC_SWATHS
        .iter()
        .copied()
        .find(|swath| swath.as_str() == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_closed_over_polarizations() {
        for pol in [Polarization::Vv, Polarization::Vh, Polarization::Hh, Polarization::Hv] {
            let band = band_for(pol);
            assert_eq!(band.polarization, pol);
            assert_eq!(polarization_band(pol.code()), Some(band));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(polarization_band("VV").map(|b| b.display_name), Some("VV"));
        assert!(polarization_band("zz").is_none());
    }

    #[test]
    fn swath_lookup_requires_uppercase() {
        assert_eq!(slc_swath("IW2"), Some(Swath::IW2));
        assert_eq!(slc_swath("iw2"), None);
        assert_eq!(slc_swath("IW4"), None);
    }
}
