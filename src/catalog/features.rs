//! Numeric feature extraction from cleaned text fields.
//!
//! First match wins and every pattern degrades to 0.0 when nothing parses:
//! a sentinel like "unknown battery" simply produces no feature.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{CleanRecord, FeatureRecord, Features};

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*ghz").unwrap());
static RAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*gb\s*ram").unwrap());
// The optional suffix group stands in for a negative lookahead: a "gb"
// figure followed by "ram" is the RAM size, not the storage size.
static STORAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*gb(\s*ram)?").unwrap());
static BATTERY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*mah").unwrap());
static CAMERA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)").unwrap());

pub fn extract(clean: CleanRecord) -> FeatureRecord {
    let features = Features {
        clock_ghz: first_capture(&CLOCK_RE, &clean.processor),
        ram_gb: first_capture(&RAM_RE, &clean.storage),
        storage_gb: storage_size(&clean.storage),
        battery_mah: first_capture(&BATTERY_RE, &clean.battery),
        camera_mp: first_capture(&CAMERA_RE, &clean.camera),
    };
    FeatureRecord { clean, features }
}

fn first_capture(re: &Regex, text: &str) -> f64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// First "<n> gb" figure that is not a RAM figure.
fn storage_size(text: &str) -> f64 {
    STORAGE_RE
        .captures_iter(text)
        .filter(|caps| caps.get(2).is_none())
        .find_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
