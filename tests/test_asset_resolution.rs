use s1stac::{Error, SENTINEL_POLARIZATIONS, Swath, image_asset_from_href, resolve_asset_name};

#[test]
fn test_abbreviated_slc_name_keys_by_swath() {
    let (key, asset) = image_asset_from_href("S1A-iw1-vv-001.tiff", None, true).unwrap();
    assert_eq!(key, "iw1-vv");
    assert_eq!(asset.media_type, "image/tiff; application=geotiff");
    assert_eq!(asset.roles, vec!["data".to_string()]);
    assert_eq!(asset.bands.len(), 1);
    assert_eq!(asset.bands[0].name, "VV");
}

#[test]
fn test_every_swath_and_polarization() {
    for swath in s1stac::SENTINEL_SLC_SWATHS.iter() {
        for band in SENTINEL_POLARIZATIONS.iter() {
            let href = format!(
                "measurement/s1b-{}-slc-{}-20200101t000000-20200101t000030-019000-023000-001.tiff",
                swath.as_str().to_lowercase(),
                band.code
            );
            let resolved = resolve_asset_name(&href, true).unwrap();
            assert_eq!(resolved.swath, Some(*swath));
            assert_eq!(resolved.band.code, band.code);
            assert_eq!(
                resolved.key(),
                format!("{}-{}", swath.as_str().to_lowercase(), band.code)
            );

            let flat = resolve_asset_name(&href, false).unwrap();
            assert_eq!(flat.swath, None);
            assert_eq!(flat.key(), band.code);
        }
    }
}

#[test]
fn test_unknown_swath_falls_back_to_polarization_key() {
    let resolved = resolve_asset_name("s1a-zz9-slc-hh-001.tiff", true).unwrap();
    assert_eq!(resolved.swath, None);
    assert_eq!(resolved.key(), "hh");
    assert!(matches!(
        resolve_asset_name("s1a-ew5-slc-hv-001.tiff", true).unwrap().swath,
        Some(Swath::EW5)
    ));
}

#[test]
fn test_media_type_errors_and_overrides() {
    assert!(matches!(
        image_asset_from_href("product-vv.png", None, false),
        Err(Error::MissingMediaType { href }) if href == "product-vv.png"
    ));

    let (key, asset) =
        image_asset_from_href("product-vv.png", Some("image/png"), false).unwrap();
    assert_eq!(key, "vv");
    assert_eq!(asset.media_type, "image/png");
}

#[test]
fn test_unexpected_asset_names() {
    for href in ["quicklook.tiff", "s1a-iw-grd-xx-001.tiff", "a-b-c.tiff"] {
        assert!(
            matches!(
                image_asset_from_href(href, None, false),
                Err(Error::UnknownAsset { .. })
            ),
            "{} should not resolve",
            href
        );
    }
}
