#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const START: &str = "2021-03-04T05:43:10.123456";
pub const STOP: &str = "2021-03-04T05:43:40.123456";

/// Affine used to generate the geolocation grid: lon = a*p + b*l + c, lat = d*p + e*l + f
pub const GRID_TRANSFORM: [f64; 6] = [0.0001, 0.00002, 10.0, -0.00001, -0.00009, 46.0];

pub struct SafeFixture {
    pub dir: TempDir,
    pub safe: PathBuf,
}

fn data_object(id: &str, rep_id: &str, href: &str) -> String {
    format!(
        r#"    <dataObject ID="{id}" repID="{rep_id}">
      <byteStream mimeType="application/octet-stream" size="1">
        <fileLocation locatorType="URL" href="./{href}"/>
        <checksum checksumName="MD5">00000000000000000000000000000000</checksum>
      </byteStream>
    </dataObject>
"#
    )
}

pub fn manifest(product_type: &str, mode: &str, names: &[String]) -> String {
    let mut objects = String::new();
    for name in names {
        objects.push_str(&data_object(
            &format!("product{}", name.replace('-', "")),
            "s1Level1ProductSchema",
            &format!("annotation/{}.xml", name),
        ));
        objects.push_str(&data_object(
            &format!("calibration{}", name.replace('-', "")),
            "s1Level1CalibrationSchema",
            &format!("annotation/calibration/calibration-{}.xml", name),
        ));
        objects.push_str(&data_object(
            &format!("noise{}", name.replace('-', "")),
            "s1Level1NoiseSchema",
            &format!("annotation/calibration/noise-{}.xml", name),
        ));
        objects.push_str(&data_object(
            &name.replace('-', ""),
            "s1Level1MeasurementSchema",
            &format!("measurement/{}.tiff", name),
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xfdu:XFDU xmlns:xfdu="urn:ccsds:schema:xfdu:1" xmlns:gml="http://www.opengis.net/gml" xmlns:safe="http://www.esa.int/safe/sentinel-1.0" xmlns:s1="http://www.esa.int/safe/sentinel-1.0/sentinel-1" xmlns:s1sarl1="http://www.esa.int/safe/sentinel-1.0/sentinel-1/sar/level-1" version="esa/safe/sentinel-1.0/sentinel-1/sar/level-1/standard/iwgrdh">
  <metadataSection>
    <metadataObject ID="acquisitionPeriod" classification="DESCRIPTION" category="DMD">
      <metadataWrap mimeType="text/xml" vocabularyName="SAFE" textInfo="Acquisition Period">
        <xmlData>
          <safe:acquisitionPeriod>
            <safe:startTime>{START}</safe:startTime>
            <safe:stopTime>{STOP}</safe:stopTime>
          </safe:acquisitionPeriod>
        </xmlData>
      </metadataWrap>
    </metadataObject>
    <metadataObject ID="platform" classification="DESCRIPTION" category="DMD">
      <metadataWrap mimeType="text/xml" vocabularyName="SAFE" textInfo="Platform Description">
        <xmlData>
          <safe:platform>
            <safe:nssdcIdentifier>2014-016A</safe:nssdcIdentifier>
            <safe:familyName>SENTINEL-1</safe:familyName>
            <safe:number>A</safe:number>
            <safe:instrument>
              <safe:familyName abbreviation="SAR">Synthetic Aperture Radar</safe:familyName>
              <safe:extension>
                <s1sarl1:instrumentMode>
                  <s1sarl1:mode>{mode}</s1sarl1:mode>
                </s1sarl1:instrumentMode>
              </safe:extension>
            </safe:instrument>
          </safe:platform>
        </xmlData>
      </metadataWrap>
    </metadataObject>
    <metadataObject ID="measurementOrbitReference" classification="DESCRIPTION" category="DMD">
      <metadataWrap mimeType="text/xml" vocabularyName="SAFE" textInfo="Orbit Reference">
        <xmlData>
          <safe:orbitReference>
            <safe:orbitNumber type="start">36904</safe:orbitNumber>
            <safe:orbitNumber type="stop">36905</safe:orbitNumber>
            <safe:relativeOrbitNumber type="start">139</safe:relativeOrbitNumber>
            <safe:relativeOrbitNumber type="stop">139</safe:relativeOrbitNumber>
            <safe:extension>
              <s1:orbitProperties>
                <s1:pass>ASCENDING</s1:pass>
              </s1:orbitProperties>
            </safe:extension>
          </safe:orbitReference>
        </xmlData>
      </metadataWrap>
    </metadataObject>
    <metadataObject ID="measurementFrameSet" classification="DESCRIPTION" category="DMD">
      <metadataWrap mimeType="text/xml" vocabularyName="SAFE" textInfo="Frame Set">
        <xmlData>
          <safe:frameSet>
            <safe:frame>
              <safe:footPrint srsName="http://www.opengis.net/gml/srs/epsg.xml#4326">
                <gml:coordinates>46.0,10.0 46.5,10.0 46.5,11.5 46.0,11.5</gml:coordinates>
              </safe:footPrint>
            </safe:frame>
          </safe:frameSet>
        </xmlData>
      </metadataWrap>
    </metadataObject>
    <metadataObject ID="generalProductInformation" classification="DESCRIPTION" category="DMD">
      <metadataWrap mimeType="text/xml" vocabularyName="SAFE" textInfo="General Product Information">
        <xmlData>
          <s1sarl1:standAloneProductInformation>
            <s1sarl1:productClass>S</s1sarl1:productClass>
            <s1sarl1:productType>{product_type}</s1sarl1:productType>
            <s1sarl1:transmitterReceiverPolarisation>VV</s1sarl1:transmitterReceiverPolarisation>
            <s1sarl1:transmitterReceiverPolarisation>VH</s1sarl1:transmitterReceiverPolarisation>
          </s1sarl1:standAloneProductInformation>
        </xmlData>
      </metadataWrap>
    </metadataObject>
  </metadataSection>
  <dataObjectSection>
{objects}  </dataObjectSection>
</xfdu:XFDU>
"#
    )
}

pub fn annotation(samples: usize, lines: usize, with_grid: bool) -> String {
    let mut grid = String::new();
    if with_grid {
        let [a, b, c, d, e, f] = GRID_TRANSFORM;
        for line in [0usize, lines / 2, lines - 1] {
            for pixel in [0usize, samples / 3, 2 * samples / 3, samples - 1] {
                let (p, l) = (pixel as f64, line as f64);
                grid.push_str(&format!(
                    "<geolocationGridPoint><azimuthTime>{START}</azimuthTime><slantRangeTime>5.3e-03</slantRangeTime><line>{line}</line><pixel>{pixel}</pixel><latitude>{}</latitude><longitude>{}</longitude><height>0</height><incidenceAngle>30.0</incidenceAngle></geolocationGridPoint>\n",
                    d * p + e * l + f,
                    a * p + b * l + c,
                ));
            }
        }
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<product>
  <adsHeader><missionId>S1A</missionId><productType>GRD</productType><polarisation>VV</polarisation><mode>IW</mode></adsHeader>
  <imageAnnotation>
    <imageInformation>
      <rangePixelSpacing>1.0e+01</rangePixelSpacing>
      <numberOfSamples>{samples}</numberOfSamples>
      <numberOfLines>{lines}</numberOfLines>
    </imageInformation>
  </imageAnnotation>
  <geolocationGrid>
    <geolocationGridPointList count="12">
{grid}    </geolocationGridPointList>
  </geolocationGrid>
</product>
"#
    )
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// Lay out a SAFE directory whose manifest lists `names` (file stems shared by
/// annotation, calibration, noise and measurement files).
pub fn build_safe(product_type: &str, mode: &str, names: &[String], with_grid: bool) -> SafeFixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let safe = dir.path().join("S1A_TEST.SAFE");
    write(&safe.join("manifest.safe"), &manifest(product_type, mode, names));
    for name in names {
        write(
            &safe.join("annotation").join(format!("{}.xml", name)),
            &annotation(25_000, 16_000, with_grid),
        );
        write(
            &safe
                .join("annotation/calibration")
                .join(format!("calibration-{}.xml", name)),
            "<calibration/>",
        );
        write(
            &safe
                .join("annotation/calibration")
                .join(format!("noise-{}.xml", name)),
            "<noise/>",
        );
        write(&safe.join("measurement").join(format!("{}.tiff", name)), "");
    }
    SafeFixture { dir, safe }
}

pub fn grd_names() -> Vec<String> {
    ["vv", "vh"]
        .iter()
        .map(|pol| {
            format!(
                "s1a-iw-grd-{}-20210304t054310-20210304t054340-036904-045a1b-{}",
                pol,
                if *pol == "vv" { "001" } else { "002" }
            )
        })
        .collect()
}

pub fn slc_names() -> Vec<String> {
    let mut names = Vec::new();
    let mut idx = 1;
    for swath in ["iw1", "iw2", "iw3"] {
        for pol in ["vv", "vh"] {
            names.push(format!(
                "s1a-{}-slc-{}-20210304t054310-20210304t054340-036904-045a1b-{:03}",
                swath, pol, idx
            ));
            idx += 1;
        }
    }
    names
}
