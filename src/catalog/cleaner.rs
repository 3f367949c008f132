//! Per-field text normalization for catalog rows.
//!
//! Raw catalog text is vendor-formatted and noisy ("4GB RAM, 64GB inbuilt",
//! "5000 mAh Battery with 33W Charger"). Cleaning reduces each field to the
//! short lower-case form the feature extractor expects. Malformed text is
//! never an error here; the worst outcome is an empty field.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{CleanRecord, RawRecord};

static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*\)").unwrap());
static VERSION_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bv(\d)").unwrap());
static MINOR_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\d+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replaces missing cells with a field-specific unknown sentinel. Sentinels
/// contain no parseable number, so downstream extraction yields 0 for them.
pub fn fill(raw: &RawRecord) -> CleanRecord {
    CleanRecord {
        name: raw.name.clone(),
        price: raw.price,
        processor: fill_field(&raw.processor, "processor"),
        storage: fill_field(&raw.storage, "storage"),
        battery: fill_field(&raw.battery, "battery"),
        display: fill_field(&raw.display, "display"),
        camera: fill_field(&raw.camera, "camera"),
        version: fill_field(&raw.version, "version"),
    }
}

fn fill_field(cell: &Option<String>, column: &str) -> String {
    match cell {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => format!("unknown {column}"),
    }
}

/// Applies the per-field transforms and lower-cases every text field.
pub fn normalize_text(rec: CleanRecord) -> CleanRecord {
    CleanRecord {
        name: rec.name,
        price: rec.price,
        processor: clean_processor(&rec.processor.to_lowercase()),
        storage: clean_storage(&rec.storage.to_lowercase()),
        battery: clean_battery(&rec.battery.to_lowercase()),
        display: clean_display(&rec.display.to_lowercase()),
        camera: clean_camera(&rec.camera.to_lowercase()),
        version: clean_version(&rec.version.to_lowercase()),
    }
}

/// Strips commas and the literal descriptor word "processor".
fn clean_processor(text: &str) -> String {
    text.replace(',', "").replace("processor", "").trim().to_string()
}

/// Strips "inbuilt" and commas, collapses whitespace runs, trims.
fn clean_storage(text: &str) -> String {
    let stripped = text.replace("inbuilt", "").replace(',', "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Truncates at the first occurrence of "battery", keeping the prefix.
fn clean_battery(text: &str) -> String {
    match text.find("battery") {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Truncates at the first comma.
fn clean_display(text: &str) -> String {
    text.split(',').next().unwrap_or("").trim().to_string()
}

/// Keeps the segment between the first "&" and the "front camera" marker.
/// Without an "&" the segment is empty, matching the dual-camera layout the
/// catalog uses ("13mp & 8mp front camera").
fn clean_camera(text: &str) -> String {
    let mut parts = text.split('&');
    let _rear = parts.next();
    let segment = match parts.next() {
        Some(s) => s,
        None => return String::new(),
    };
    let front = match segment.find("front camera") {
        Some(idx) => &segment[..idx],
        None => segment,
    };
    front.trim().to_string()
}

/// Collapses a raw version string to a coarse OS label: noise tokens map to
/// "unknown", parentheticals and the "v" version prefix are dropped, and
/// minor-version digits are stripped ("android v12.1 (ui)" -> "android 12").
fn clean_version(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed == "unknown version" || trimmed == "v30" {
        return "unknown".to_string();
    }
    let no_paren = PAREN_RE.replace_all(trimmed, "");
    let no_prefix = VERSION_PREFIX_RE.replace_all(&no_paren, "$1");
    let no_minor = MINOR_VERSION_RE.replace_all(&no_prefix, "");
    no_minor.trim().to_string()
}
