//! Catalog-wide min-max scaling of the extracted features.

use crate::model::{FeatureRecord, Features, NormalizedRecord};

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    fn over<F>(records: &[FeatureRecord], value: F) -> Self
    where
        F: Fn(&Features) -> f64,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for rec in records {
            let v = value(&rec.features);
            min = min.min(v);
            max = max.max(v);
        }
        Self { min, max }
    }

    /// `(x - min) / (max - min)`, or 0.0 for the whole catalog when the
    /// feature is constant (max == min).
    fn scale(&self, x: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        (x - self.min) / range
    }
}

/// Scales every feature into [0, 1] using global catalog bounds. Bounds are
/// computed once here, never per query.
pub fn min_max(records: Vec<FeatureRecord>) -> Vec<NormalizedRecord> {
    let clock = Bounds::over(&records, |f| f.clock_ghz);
    let ram = Bounds::over(&records, |f| f.ram_gb);
    let storage = Bounds::over(&records, |f| f.storage_gb);
    let battery = Bounds::over(&records, |f| f.battery_mah);
    let camera = Bounds::over(&records, |f| f.camera_mp);

    records
        .into_iter()
        .map(|rec| {
            let normalized = Features {
                clock_ghz: clock.scale(rec.features.clock_ghz),
                ram_gb: ram.scale(rec.features.ram_gb),
                storage_gb: storage.scale(rec.features.storage_gb),
                battery_mah: battery.scale(rec.features.battery_mah),
                camera_mp: camera.scale(rec.features.camera_mp),
            };
            NormalizedRecord {
                clean: rec.clean,
                features: rec.features,
                normalized,
            }
        })
        .collect()
}
