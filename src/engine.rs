//! The guess engine and highlight state.
//!
//! Owns the session's conquered set and the three operations the UI layers
//! call: [`GuessEngine::submit_guess`] for typed guesses,
//! [`GuessEngine::query_region`] for map-click lookups, and
//! [`GuessEngine::color_for`] for per-region fill styling.
//!
//! Each region has a two-state lifecycle, `Unguessed → Conquered`,
//! triggered exclusively by a [`GuessOutcome::NewlyGuessed`] submission.
//! The transition is one-way for the session; nothing in this module (or
//! anywhere else) removes an entry from the conquered set.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::dataset::{normalize, RegionDataset};

/// RGBA fill, matching the dataset renderer's per-feature color contract.
pub type Rgba = [u8; 4];

/// Fill for a conquered region: opaque warm green.
pub const CONQUERED_FILL: Rgba = [86, 144, 58, 250];

/// Fill for an unguessed region: fully transparent.
pub const UNGUESSED_FILL: Rgba = [0, 0, 0, 0];

/// Result of one typed guess. `NoMatch` and `AlreadyGuessed` are ordinary
/// outcomes reported to the player, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No region's name matches the normalized input.
    NoMatch,
    /// The named region was already conquered; state unchanged.
    AlreadyGuessed(String),
    /// The named region was conquered by this guess.
    NewlyGuessed(String),
}

/// Result of a map-click lookup. Read-only: clicking never conquers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitOutcome {
    /// The click landed on no region.
    Empty,
    /// The clicked region has been conquered this session.
    Conquered(String),
    /// The clicked region has not been conquered yet.
    Unconquered(String),
}

/// One entry in the conquered list, in guess order.
#[derive(Debug, Clone)]
pub struct ConquestEntry {
    /// The region's name exactly as authored in the dataset.
    pub name: String,
    pub conquered_at: DateTime<Utc>,
}

/// The session's guess state. Created empty; grows monotonically; cleared
/// only by restarting the process.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    dataset: Arc<RegionDataset>,
    conquered: Vec<ConquestEntry>,
}

impl GuessEngine {
    pub fn new(dataset: Arc<RegionDataset>) -> Self {
        Self {
            dataset,
            conquered: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &RegionDataset {
        &self.dataset
    }

    /// Validate a typed guess against the dataset.
    ///
    /// The input is trimmed and lower-cased, then matched against region
    /// names with a single linear scan in dataset order. Empty or
    /// malformed input simply yields [`GuessOutcome::NoMatch`].
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        let normalized = normalize(raw);
        let Some(region) = self.dataset.find_normalized(&normalized) else {
            tracing::debug!(input = raw, "guess matched no region");
            return GuessOutcome::NoMatch;
        };

        if self.is_conquered(&region.name) {
            tracing::debug!(region = %region.name, "region already conquered");
            return GuessOutcome::AlreadyGuessed(region.name.clone());
        }

        self.conquered.push(ConquestEntry {
            name: region.name.clone(),
            conquered_at: Utc::now(),
        });
        tracing::info!(
            region = %region.name,
            conquered = self.conquered.len(),
            total = self.dataset.len(),
            "region conquered"
        );
        GuessOutcome::NewlyGuessed(region.name.clone())
    }

    /// Answer a map-click lookup. The map view performs the geometric
    /// hit test and passes the hit region's name, or `None` when the
    /// click landed outside every region.
    pub fn query_region(&self, hit: Option<&str>) -> HitOutcome {
        match hit {
            None => HitOutcome::Empty,
            Some(name) if self.is_conquered(name) => HitOutcome::Conquered(name.to_string()),
            Some(name) => HitOutcome::Unconquered(name.to_string()),
        }
    }

    /// Per-region fill color, derived purely from the conquered set.
    /// Recomputed on every render; never cached per feature.
    pub fn color_for(&self, name: &str) -> Rgba {
        if self.is_conquered(name) {
            CONQUERED_FILL
        } else {
            UNGUESSED_FILL
        }
    }

    pub fn is_conquered(&self, name: &str) -> bool {
        self.conquered.iter().any(|entry| entry.name == name)
    }

    /// Conquered regions in insertion (guess) order.
    pub fn conquered(&self) -> &[ConquestEntry] {
        &self.conquered
    }

    /// `(conquered, total)` for the progress gauge.
    pub fn progress(&self) -> (usize, usize) {
        (self.conquered.len(), self.dataset.len())
    }
}
