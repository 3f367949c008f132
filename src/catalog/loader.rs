//! CSV ingestion: header validation, row projection, duplicate elimination.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::warn;

use crate::model::{CleanRecord, IngestError, RawRecord};

/// Columns the pipeline requires, matched case-insensitively against the
/// header row. Everything else (img, tag, fm, sim, memoryExternal, ...) is
/// ignored, and its absence is never an error.
const REQUIRED_COLUMNS: [&str; 8] = [
    "name", "price", "processor", "storage", "battery", "display", "camera", "version",
];

/// Reads the raw catalog rows. Fails only on structural problems: an
/// unreadable source, a missing required column, or broken CSV framing.
/// Cell-level noise (an unparseable price, an empty field) degrades to
/// defaults instead.
pub fn read_catalog(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(columns.project(&row));
    }
    Ok(records)
}

/// Removes rows identical on every retained column; first occurrence wins.
/// Runs after null-fill so two rows differing only in how "missing" was
/// spelled still collapse.
pub fn dedup(records: Vec<CleanRecord>) -> Vec<CleanRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|rec| {
            seen.insert((
                rec.name.clone(),
                rec.price.to_bits(),
                rec.processor.clone(),
                rec.storage.clone(),
                rec.battery.clone(),
                rec.display.clone(),
                rec.camera.clone(),
                rec.version.clone(),
            ))
        })
        .collect()
}

/// Header-name → column-index projection for the required columns.
struct ColumnMap {
    name: usize,
    price: usize,
    processor: usize,
    storage: usize,
    battery: usize,
    display: usize,
    camera: usize,
    version: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| find(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns(missing));
        }

        // Presence checked above.
        let index = |wanted: &str| find(wanted).unwrap_or_default();
        Ok(Self {
            name: index("name"),
            price: index("price"),
            processor: index("processor"),
            storage: index("storage"),
            battery: index("battery"),
            display: index("display"),
            camera: index("camera"),
            version: index("version"),
        })
    }

    fn project(&self, row: &StringRecord) -> RawRecord {
        RawRecord {
            name: cell(row, self.name).unwrap_or_default(),
            price: parse_price(row, self.price),
            processor: cell(row, self.processor),
            storage: cell(row, self.storage),
            battery: cell(row, self.battery),
            display: cell(row, self.display),
            camera: cell(row, self.camera),
            version: cell(row, self.version),
        }
    }
}

fn cell(row: &StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_price(row: &StringRecord, idx: usize) -> f64 {
    let text = row.get(idx).unwrap_or("").trim().replace(',', "");
    match text.parse::<f64>() {
        Ok(price) => price,
        Err(_) => {
            warn!(price = %text, "unparseable price, defaulting to 0");
            0.0
        }
    }
}
