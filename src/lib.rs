pub mod catalog;
pub mod config;
pub mod model;
pub mod recommender;

pub use catalog::Catalog;
pub use config::{AppConfig, IntentProfile, IntentProfiles, Weights, load_config};
pub use model::{
    CleanRecord, ConfigError, FeatureRecord, Features, IngestError, NormalizedRecord, Query,
    QueryError, RawRecord, Recommendation, ScoredPhone,
};
pub use recommender::Recommender;
