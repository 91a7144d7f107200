#![doc = r#"
S1STAC: Sentinel-1 SAFE metadata for STAC items.

This crate reads the metadata of Sentinel-1 SAFE products (`manifest.safe`,
annotation XML files and the GeoTIFF measurement bands) and maps it into STAC
item properties and extensions: SAR acquisition parameters (`sar:*`), satellite
orbit state (`sat:*`), projection information (`proj:*`) and one data asset per
measurement band, keyed by polarization (and swath, for SLC products).

Stability
---------
The public library API is experimental in initial releases and may evolve.

Requirements
------------
- Rust 2024 edition toolchain.
- With the `gdal` feature: GDAL development headers and runtime.

Quick start: properties and assets of a SAFE product
----------------------------------------------------
```rust,no_run
use s1stac::{ExtensionProperties, SafeReader};

fn main() -> s1stac::Result<()> {
    let reader = SafeReader::open("/data/S1A_IW_GRDH_1SDV_example.SAFE")?;

    let mut properties = serde_json::Map::new();
    reader.product_metadata()?.apply(&mut properties);
    reader.sar_properties()?.apply(&mut properties)?;
    reader.sat_properties()?.apply(&mut properties)?;
    reader.proj_properties()?.apply(&mut properties)?;

    let mut assets = reader.measurement_assets()?;
    assets.extend(reader.metadata_assets()?)?;
    let extensions = s1stac::stac_extensions(&assets);

    println!("{:?}", extensions);
    println!("{}", serde_json::to_string_pretty(&assets).unwrap_or_default());
    Ok(())
}
```

Resolve a single band image
---------------------------
```rust
use s1stac::image_asset_from_href;

let (key, asset) = image_asset_from_href(
    "measurement/s1a-iw1-slc-vv-20210101t000000-20210101t000030-036000-043000-004.tiff",
    None,
    true, // SLC: disambiguate by swath
)?;
assert_eq!(key, "iw1-vv");
assert_eq!(asset.media_type, "image/tiff; application=geotiff");
assert_eq!(asset.bands[0].name, "VV");
# Ok::<(), s1stac::Error>(())
```

Error handling
--------------
All public functions return `s1stac::Result<T>`; match on `s1stac::Error` to
handle specific cases.

```rust
use s1stac::{image_asset_from_href, Error};

match image_asset_from_href("preview-vv.png", None, false) {
    Err(Error::MissingMediaType { href }) => eprintln!("no media type for {href}"),
    Err(Error::UnknownAsset { href }) => eprintln!("not a Sentinel-1 band: {href}"),
    Err(other) => eprintln!("other error: {other}"),
    Ok(_) => {}
}
```

Feature flags
-------------
- `gdal`: read ground control points from the measurement GeoTIFF.
- `full`: all of the above.

Useful modules
--------------
- [`core`](crate::core): band/swath resolution, options and property fillers.
- [`io`]: XML element tree, manifest reader, GCPs and the SAFE reader.
- [`stac`]: extension property records and assets.
- [`constants`]: polarization and swath tables.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod constants;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod stac;
pub mod types;

// Curated public API surface
pub use crate::core::bands::{AssetName, ResolvedAsset, image_asset_from_href, resolve_asset_name};
pub use crate::core::params::{GcpSource, ItemOptions, SarDefaults};
pub use crate::core::properties::{fill_proj_properties, fill_sar_properties, fill_sat_properties};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use types::{FrequencyBand, OrbitState, Polarization, ProductType, Swath};

pub use constants::{PolarizationBand, SENTINEL_POLARIZATIONS, SENTINEL_SLC_SWATHS};
pub use io::{MetadataLinks, ProductMetadata, ReadHrefModifier, SafeError, SafeManifest, SafeReader};
pub use stac::{
    Asset, Assets, Band, ExtensionProperties, Geometry, ProjProperties, SarProperties,
    SatProperties, stac_extensions,
};
