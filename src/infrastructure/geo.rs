//! Province outlines for the choropleth map.
//!
//! Reads the subset of GeoJSON the map needs: feature properties carry the
//! province name under `prov_name`, geometries are polygons or
//! multipolygons in lon/lat.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Properties {
    prov_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

/// One province: name plus outer rings ready for plotting.
#[derive(Debug, Clone)]
pub struct ProvinceShape {
    pub name: String,
    /// Outer ring per polygon, as (lon, lat) pairs. Holes are dropped;
    /// at map scale they are invisible.
    pub rings: Vec<Vec<(f64, f64)>>,
}

fn ring_points(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
    ring.iter()
        .filter(|pos| pos.len() >= 2)
        .map(|pos| (pos[0], pos[1]))
        .collect()
}

/// Loads the province atlas used by the choropleth.
///
/// Province names are upper-cased to line up with the price table's
/// normalized province column.
pub fn load_province_atlas(path: &Path) -> Result<Vec<ProvinceShape>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open GeoJSON at {path:?}"))?;
    let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse GeoJSON at {path:?}"))?;

    let mut shapes = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let rings: Vec<Vec<(f64, f64)>> = match &feature.geometry {
            Geometry::Polygon { coordinates } => coordinates
                .first()
                .map(|outer| vec![ring_points(outer)])
                .unwrap_or_default(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| polygon.first().map(|outer| ring_points(outer)))
                .collect(),
        };

        if rings.iter().all(|r| r.len() < 3) {
            warn!(
                "Skipping province {:?}: no drawable ring",
                feature.properties.prov_name
            );
            continue;
        }

        shapes.push(ProvinceShape {
            name: feature.properties.prov_name.trim().to_uppercase(),
            rings,
        });
    }

    info!("Loaded {} province shapes from {:?}", shapes.len(), path);
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_polygon_and_multipolygon_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "type": "FeatureCollection",
                "features": [
                    {{
                        "type": "Feature",
                        "properties": {{"prov_name": "Jawa Barat"}},
                        "geometry": {{
                            "type": "Polygon",
                            "coordinates": [[[106.0, -6.0], [108.0, -6.0], [107.0, -7.5], [106.0, -6.0]]]
                        }}
                    }},
                    {{
                        "type": "Feature",
                        "properties": {{"prov_name": "Maluku"}},
                        "geometry": {{
                            "type": "MultiPolygon",
                            "coordinates": [
                                [[[128.0, -3.0], [129.0, -3.0], [128.5, -4.0], [128.0, -3.0]]],
                                [[[130.0, -5.0], [131.0, -5.0], [130.5, -6.0], [130.0, -5.0]]]
                            ]
                        }}
                    }}
                ]
            }}"#
        )
        .unwrap();

        let shapes = load_province_atlas(file.path()).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].name, "JAWA BARAT");
        assert_eq!(shapes[0].rings.len(), 1);
        assert_eq!(shapes[1].name, "MALUKU");
        assert_eq!(shapes[1].rings.len(), 2);
        assert_eq!(shapes[0].rings[0][0], (106.0, -6.0));
    }
}
