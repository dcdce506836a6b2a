//! Geoquest, a terminal geography-conquest quiz.
//!
//! A map canvas renders the regions of a country; the player types region
//! names to conquer them and clicks regions to check their status. This
//! library exposes the modules for use in integration tests.

pub mod app;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod map;
pub mod ui;
pub mod widgets;
