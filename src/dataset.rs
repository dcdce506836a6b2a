//! The region dataset: an immutable, ordered collection of named
//! geographic features.
//!
//! The dataset is parsed once from a bundled GeoJSON file (or a file given
//! with `--data`) and never mutated afterwards. Region identity is the
//! `st_nm` feature property, exactly as authored; `name` is accepted as an
//! alias for datasets that use the more common property key.
//!
//! Geometry is typed just enough for the map view to draw outlines and
//! answer point-in-polygon hit tests. The guess engine never looks at it.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::DatasetError;

/// The GeoJSON shipped inside the binary: simplified polygons for the
/// states and union territories of India.
static BUNDLED_GEOJSON: &str = include_str!("../data/india_states.geojson");

static BUNDLED: Lazy<Result<RegionDataset, DatasetError>> =
    Lazy::new(|| RegionDataset::from_geojson(BUNDLED_GEOJSON));

/// A closed ring of `[lon, lat]` positions. The last position repeats the
/// first, per GeoJSON.
pub type Ring = Vec<[f64; 2]>;

/// Region geometry, restricted to the two GeoJSON types that occur in
/// administrative-boundary datasets.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// One outer ring, optionally followed by hole rings.
    Polygon { coordinates: Vec<Ring> },
    /// Several disjoint polygons (island territories).
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Geometry::Polygon { coordinates } => Box::new(coordinates.iter()),
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flat_map(|poly| poly.iter()))
            }
        }
    }

    /// Even-odd ray cast across every ring. Holes are handled naturally:
    /// a point inside both the outer ring and a hole crosses an even
    /// number of edges.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let mut inside = false;
        for ring in self.rings() {
            for pair in ring.windows(2) {
                let [x1, y1] = pair[0];
                let [x2, y2] = pair[1];
                if (y1 > lat) != (y2 > lat) {
                    let x_cross = x1 + (lat - y1) / (y2 - y1) * (x2 - x1);
                    if lon < x_cross {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }

    /// Axis-aligned bounding box as `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut bbox = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for ring in self.rings() {
            for &[lon, lat] in ring {
                bbox.0 = bbox.0.min(lon);
                bbox.1 = bbox.1.min(lat);
                bbox.2 = bbox.2.max(lon);
                bbox.3 = bbox.3.max(lat);
            }
        }
        bbox
    }

    /// Vertex average over outer rings; good enough to anchor a label.
    pub fn centroid(&self) -> (f64, f64) {
        let mut sum = (0.0, 0.0);
        let mut count = 0usize;
        for ring in self.rings() {
            // Skip the closing vertex so it isn't double-weighted.
            for &[lon, lat] in ring.iter().take(ring.len().saturating_sub(1)) {
                sum.0 += lon;
                sum.1 += lat;
                count += 1;
            }
        }
        if count == 0 {
            (0.0, 0.0)
        } else {
            (sum.0 / count as f64, sum.1 / count as f64)
        }
    }
}

/// One named geographic feature.
#[derive(Debug, Clone)]
pub struct Region {
    /// Unique display name, case-sensitive as authored in the dataset.
    pub name: String,
    pub geometry: Geometry,
}

/// The ordered, immutable collection of regions.
#[derive(Debug, Clone)]
pub struct RegionDataset {
    regions: Vec<Region>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: FeatureProperties,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct FeatureProperties {
    #[serde(alias = "name")]
    st_nm: String,
}

impl RegionDataset {
    /// The dataset bundled into the binary, parsed on first access.
    pub fn bundled() -> Result<&'static RegionDataset, &'static DatasetError> {
        BUNDLED.as_ref()
    }

    /// Parse and validate a GeoJSON feature collection.
    pub fn from_geojson(raw: &str) -> Result<Self, DatasetError> {
        let collection: FeatureCollection = serde_json::from_str(raw)?;
        if collection.features.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut regions = Vec::with_capacity(collection.features.len());
        let mut seen: Vec<String> = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            let normalized = normalize(&feature.properties.st_nm);
            if seen.contains(&normalized) {
                return Err(DatasetError::DuplicateName(feature.properties.st_nm));
            }
            seen.push(normalized);
            regions.push(Region {
                name: feature.properties.st_nm,
                geometry: feature.geometry,
            });
        }
        Ok(Self { regions })
    }

    /// Read a dataset from a file path (the `--data` override).
    pub fn from_file(path: &std::path::Path) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_geojson(&raw)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// The single linear scan at the heart of guess matching: first region
    /// whose lower-cased name equals `normalized`, in dataset order. The
    /// dataset is dozens of entries, so no index is warranted.
    pub fn find_normalized(&self, normalized: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| normalize(&region.name) == normalized)
    }

    /// First region whose geometry contains the point, dataset order.
    pub fn region_at(&self, lon: f64, lat: f64) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| region.geometry.contains(lon, lat))
    }

    /// Bounding box of the whole dataset, for the initial viewport.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut bbox = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for region in &self.regions {
            let (min_lon, min_lat, max_lon, max_lat) = region.geometry.bounding_box();
            bbox.0 = bbox.0.min(min_lon);
            bbox.1 = bbox.1.min(min_lat);
            bbox.2 = bbox.2.max(max_lon);
            bbox.3 = bbox.3.max(max_lat);
        }
        bbox
    }
}

/// Guess normalization: trim surrounding whitespace, lower-case.
/// Shared by dataset lookup and the engine so both sides agree.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
