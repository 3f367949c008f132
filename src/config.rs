use serde::Deserialize;
use std::fs;

use crate::model::{ConfigError, Features, QueryError};

/// Named weighting scheme over the five hardware features. Weights are
/// expected to sum to 1.0 so scores land in [0, 1]; this is a configuration
/// contract, not a runtime check.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentProfile {
    pub name: String,
    pub weights: Weights,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Weights {
    pub processor: f64,
    pub ram: f64,
    pub storage: f64,
    pub battery: f64,
    pub camera: f64,
}

impl Weights {
    /// Dot product against a record's normalized feature vector.
    pub fn score(&self, normalized: &Features) -> f64 {
        self.processor * normalized.clock_ghz
            + self.ram * normalized.ram_gb
            + self.storage * normalized.storage_gb
            + self.battery * normalized.battery_mah
            + self.camera * normalized.camera_mp
    }
}

/// Read-only intent → weights table passed to the scorer.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentProfiles {
    profiles: Vec<IntentProfile>,
}

impl IntentProfiles {
    pub fn new(profiles: Vec<IntentProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in table: Gaming, Photography, Balanced.
    pub fn builtin() -> Self {
        Self::new(vec![
            IntentProfile {
                name: "Gaming".into(),
                weights: Weights {
                    processor: 0.4,
                    ram: 0.3,
                    storage: 0.1,
                    battery: 0.1,
                    camera: 0.1,
                },
            },
            IntentProfile {
                name: "Photography".into(),
                weights: Weights {
                    processor: 0.1,
                    ram: 0.1,
                    storage: 0.2,
                    battery: 0.1,
                    camera: 0.5,
                },
            },
            IntentProfile {
                name: "Balanced".into(),
                weights: Weights {
                    processor: 0.2,
                    ram: 0.2,
                    storage: 0.2,
                    battery: 0.2,
                    camera: 0.2,
                },
            },
        ])
    }

    /// Resolves an intent key, failing loudly on an unrecognized one.
    pub fn resolve(&self, intent: &str) -> Result<&IntentProfile, QueryError> {
        self.profiles
            .iter()
            .find(|p| p.name == intent)
            .ok_or_else(|| QueryError::UnknownIntent(intent.to_string(), self.names()))
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub catalog_path: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// When present, replaces the built-in intent table.
    #[serde(default)]
    pub intents: Option<Vec<IntentProfile>>,
}

fn default_top_n() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: "mobile.csv".into(),
            top_n: default_top_n(),
            intents: None,
        }
    }
}

impl AppConfig {
    pub fn intent_profiles(&self) -> IntentProfiles {
        match &self.intents {
            Some(profiles) => IntentProfiles::new(profiles.clone()),
            None => IntentProfiles::builtin(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
