// Core structs: catalog records at each pipeline stage, query types, errors.
use thiserror::Error;

/// One catalog row as ingested. Free-text fields may be missing.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub name: String,
    pub price: f64,
    pub processor: Option<String>,
    pub storage: Option<String>,
    pub battery: Option<String>,
    pub display: Option<String>,
    pub camera: Option<String>,
    pub version: Option<String>,
}

/// A raw record after null-fill and per-field text normalization.
/// All six text fields are lower-cased; missing cells carry an
/// "unknown <field>" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub name: String,
    pub price: f64,
    pub processor: String,
    pub storage: String,
    pub battery: String,
    pub display: String,
    pub camera: String,
    pub version: String,
}

/// The five numeric features extracted from the cleaned text fields.
/// A field with no parseable number yields 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Features {
    pub clock_ghz: f64,
    pub ram_gb: f64,
    pub storage_gb: f64,
    pub battery_mah: f64,
    pub camera_mp: f64,
}

/// A clean record with its extracted features.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub clean: CleanRecord,
    pub features: Features,
}

/// A feature record plus the min-max-scaled copy of each feature.
/// Normalized values lie in [0, 1]; a catalog-wide constant feature
/// normalizes to 0.0 for every record.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub clean: CleanRecord,
    pub features: Features,
    pub normalized: Features,
}

/// A user query as supplied by the presentation layer.
#[derive(Debug, Clone)]
pub struct Query {
    pub budget: u32,
    pub intent: String,
    pub os_family: String,
}

/// A catalog record paired with its transient query score. The score is
/// never written back into the shared catalog.
#[derive(Debug, Clone)]
pub struct ScoredPhone {
    pub record: NormalizedRecord,
    pub score: f64,
}

/// Outcome of a recommendation query. `NoMatch` is a normal result, not an
/// error: callers must render it distinctly from a ranked list.
#[derive(Debug, Clone)]
pub enum Recommendation {
    Ranked(Vec<ScoredPhone>),
    NoMatch { budget: u32, os_family: String },
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("catalog source unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("catalog is malformed: {0}")]
    Malformed(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unknown intent {intent:?}; known intents: {known}", intent = .0, known = .1.join(", "))]
    UnknownIntent(String, Vec<String>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
