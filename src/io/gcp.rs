//! Ground control points of a Sentinel-1 image and the affine transform fitted
//! through them.
//!
//! GRD and SLC rasters are not georeferenced by a geotransform; they carry a
//! grid of tie points instead. The same grid is present in two places: the
//! `geolocationGrid` of every annotation file, and the GCPs embedded in the
//! measurement GeoTIFF (read through GDAL when the `gdal` feature is enabled).
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::xml::XmlElement;

/// A ground control point: image position (`pixel`, `line`) tied to a
/// georeferenced position (`x` = longitude, `y` = latitude, `z` = height).
#[derive(Debug, Clone, PartialEq)]
pub struct Gcp {
    pub id: String,
    pub pixel: f64,
    pub line: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Read the geolocation grid of an annotation document
pub fn gcps_from_annotation(root: &XmlElement) -> Result<Vec<Gcp>> {
    let mut gcps = Vec::new();
    for (idx, point) in root.find_all(".//geolocationGridPoint").into_iter().enumerate() {
        gcps.push(Gcp {
            id: (idx + 1).to_string(),
            pixel: point.find_parsed("pixel")?,
            line: point.find_parsed("line")?,
            x: point.find_parsed("longitude")?,
            y: point.find_parsed("latitude")?,
            z: match point.find("height") {
                Some(_) => point.find_parsed("height")?,
                None => 0.0,
            },
        });
    }
    debug!("Read {} geolocation grid points", gcps.len());
    Ok(gcps)
}

/// Read the GCPs stored in a GeoTIFF
#[cfg(feature = "gdal")]
pub fn gcps_from_measurement<P: AsRef<Path>>(path: P) -> Result<Vec<Gcp>> {
    use gdal::Dataset;

    let dataset = Dataset::open(path.as_ref())
        .map_err(|e| Error::Gcp(format!("GDAL open error: {}", e)))?;
    if let Some(proj) = dataset.gcp_projection() {
        debug!("GCP projection: {}", proj);
    }

    let gcps: Vec<Gcp> = dataset
        .gcps()
        .iter()
        .map(|g| Gcp {
            id: g.id(),
            pixel: g.pixel(),
            line: g.line(),
            x: g.x(),
            y: g.y(),
            z: g.z(),
        })
        .collect();
    debug!("Read {} GCPs from {:?}", gcps.len(), path.as_ref());
    Ok(gcps)
}

#[cfg(not(feature = "gdal"))]
pub fn gcps_from_measurement<P: AsRef<Path>>(path: P) -> Result<Vec<Gcp>> {
    Err(Error::Gcp(format!(
        "reading GCPs from {:?} requires the `gdal` feature",
        path.as_ref()
    )))
}

/// Least-squares affine transform through `gcps`.
///
/// Returns the coefficients `[a, b, c, d, e, f]` of
/// `x = a * pixel + b * line + c`, `y = d * pixel + e * line + f`.
pub fn transform_from_gcps(gcps: &[Gcp]) -> Result<[f64; 6]> {
    if gcps.len() < 3 {
        return Err(Error::Gcp(format!(
            "need at least 3 GCPs, got {}",
            gcps.len()
        )));
    }

    let n = gcps.len() as f64;
    let pm = gcps.iter().map(|g| g.pixel).sum::<f64>() / n;
    let lm = gcps.iter().map(|g| g.line).sum::<f64>() / n;
    let xm = gcps.iter().map(|g| g.x).sum::<f64>() / n;
    let ym = gcps.iter().map(|g| g.y).sum::<f64>() / n;

    // Sums about the centroid; pixel/line run into the tens of thousands.
    let (mut spp, mut spl, mut sll) = (0.0, 0.0, 0.0);
    let (mut spx, mut slx, mut spy, mut sly) = (0.0, 0.0, 0.0, 0.0);
    for g in gcps {
        let dp = g.pixel - pm;
        let dl = g.line - lm;
        let dx = g.x - xm;
        let dy = g.y - ym;
        spp += dp * dp;
        spl += dp * dl;
        sll += dl * dl;
        spx += dp * dx;
        slx += dl * dx;
        spy += dp * dy;
        sly += dl * dy;
    }

    let det = spp * sll - spl * spl;
    if det.abs() <= f64::EPSILON * spp.max(sll).max(1.0).powi(2) {
        return Err(Error::Gcp("GCPs are collinear".to_string()));
    }

    let a = (spx * sll - slx * spl) / det;
    let b = (slx * spp - spx * spl) / det;
    let c = xm - a * pm - b * lm;
    let d = (spy * sll - sly * spl) / det;
    let e = (sly * spp - spy * spl) / det;
    let f = ym - d * pm - e * lm;

    Ok([a, b, c, d, e, f])
}
