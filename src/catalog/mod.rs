//! Catalog loader/normalizer: raw rows -> cleaned -> feature-extracted ->
//! min-max normalized, built once into an immutable snapshot.

pub mod cleaner;
pub mod features;
pub mod loader;
pub mod normalize;

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::model::{IngestError, NormalizedRecord};

/// Immutable, fully-normalized catalog snapshot. Built once at startup and
/// held read-only for the process lifetime; a reload produces a fresh
/// snapshot, it never mutates a live one.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub records: Vec<NormalizedRecord>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Runs the full ingestion pipeline. Deterministic for an unchanged
    /// source; fails only on structural problems (see [`IngestError`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let raw = loader::read_catalog(path.as_ref())?;
        let total = raw.len();

        let filled: Vec<_> = raw.iter().map(cleaner::fill).collect();
        let unique = loader::dedup(filled);
        let duplicates = total - unique.len();

        let featured: Vec<_> = unique
            .into_iter()
            .map(cleaner::normalize_text)
            .map(features::extract)
            .collect();
        let records = normalize::min_max(featured);

        info!(
            rows = total,
            duplicates, kept = records.len(),
            "catalog loaded and normalized"
        );
        Ok(Self {
            records,
            loaded_at: Utc::now(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
