//! Common test utilities for integration tests.
//!
//! Provides small fixture datasets and an `App` builder so tests don't
//! repeat GeoJSON literals.
#![allow(dead_code)]

use std::sync::Arc;

use geoquest::app::App;
use geoquest::config::Config;
use geoquest::dataset::RegionDataset;
use geoquest::engine::GuessEngine;

/// A three-region fixture: two mainland squares and an island pair.
pub fn fixture_geojson() -> String {
    r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"st_nm":"Karnataka"},"geometry":{"type":"Polygon","coordinates":[[[74.0,13.0],[78.0,13.0],[78.0,17.0],[74.0,17.0],[74.0,13.0]]]}},
        {"type":"Feature","properties":{"st_nm":"Kerala"},"geometry":{"type":"Polygon","coordinates":[[[75.0,8.0],[77.5,8.0],[77.5,12.0],[75.0,12.0],[75.0,8.0]]]}},
        {"type":"Feature","properties":{"st_nm":"Islands"},"geometry":{"type":"MultiPolygon","coordinates":[[[[92.0,11.0],[94.0,11.0],[94.0,13.0],[92.0,13.0],[92.0,11.0]]],[[[93.0,7.0],[94.0,7.0],[94.0,8.5],[93.0,8.5],[93.0,7.0]]]]}}
    ]}"#
    .to_string()
}

pub fn fixture_dataset() -> Arc<RegionDataset> {
    Arc::new(RegionDataset::from_geojson(&fixture_geojson()).expect("fixture parses"))
}

pub fn fixture_engine() -> GuessEngine {
    GuessEngine::new(fixture_dataset())
}

pub fn fixture_app() -> App {
    App::new(fixture_dataset(), Config::default())
}

/// Type text into the app's input widget, character by character, the way
/// the key handler would.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.input.insert_char(c);
    }
}
