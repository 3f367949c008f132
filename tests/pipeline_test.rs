//! End-to-end pipeline tests: CSV on disk -> normalized catalog -> query.

use std::io::Write;

use phone_scout::{Catalog, IntentProfiles, Query, Recommendation, Recommender};
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn recommender() -> Recommender {
    Recommender::new(IntentProfiles::builtin(), 5)
}

fn query(budget: u32, intent: &str, os: &str) -> Query {
    Query {
        budget,
        intent: intent.into(),
        os_family: os.into(),
    }
}

const HEADER: &str = "Name,price,processor,storage,battery,display,camera,version";

#[test]
fn single_record_worked_example() {
    let file = write_catalog(&format!(
        "{HEADER}\n\
         Solo Phone,20000,2.0 GHz,4GB RAM 64GB,5000 mAh Battery,\"6.5 inches, 90Hz\",13MP & 8MP Front Camera,Android v12 (UI)\n"
    ));
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);

    let rec = &catalog.records[0];
    assert_eq!(rec.features.clock_ghz, 2.0);
    assert_eq!(rec.features.ram_gb, 4.0);
    assert_eq!(rec.features.storage_gb, 64.0);
    assert_eq!(rec.features.battery_mah, 5000.0);
    assert_eq!(rec.features.camera_mp, 8.0);
    assert!(rec.clean.version.contains("android"));

    // Single-record catalog: every feature is constant, so every normalized
    // value (and hence the score) is 0.
    let outcome = recommender()
        .recommend(&catalog, &query(25_000, "Balanced", "android"))
        .unwrap();
    match outcome {
        Recommendation::Ranked(phones) => {
            assert_eq!(phones.len(), 1);
            assert_eq!(phones[0].record.clean.name, "Solo Phone");
            assert_eq!(phones[0].score, 0.0);
        }
        Recommendation::NoMatch { .. } => panic!("expected the record back"),
    }
}

#[test]
fn full_pipeline_filters_ranks_and_truncates() {
    let mut rows = String::from(HEADER);
    rows.push('\n');
    // Eight androids with rising specs, one ios, one over-budget android.
    for i in 1..=8 {
        rows.push_str(&format!(
            "Droid {i},{price},{ghz}.{tenth} GHz Processor,{ram}GB RAM {storage}GB inbuilt,{mah} mAh Battery,6.5 inches,{rear}MP & {front}MP Front Camera,Android v1{i}\n",
            price = 10_000 + i * 1000,
            ghz = 1 + i / 4,
            tenth = i % 4,
            ram = 2 + i,
            storage = 32 * i,
            mah = 4000 + i * 100,
            rear = 40 + i,
            front = 8 + i,
        ));
    }
    rows.push_str("iThing,60000,3.2 GHz,8GB RAM 256GB inbuilt,4400 mAh Battery,6.1 inches,48MP & 12MP Front Camera,iOS v16\n");
    rows.push_str("Droid Max,90000,3.0 GHz,12GB RAM 512GB inbuilt,5500 mAh Battery,6.9 inches,50MP & 32MP Front Camera,Android v14\n");

    let file = write_catalog(&rows);
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 10);

    for rec in &catalog.records {
        for v in [
            rec.normalized.clock_ghz,
            rec.normalized.ram_gb,
            rec.normalized.storage_gb,
            rec.normalized.battery_mah,
            rec.normalized.camera_mp,
        ] {
            assert!((0.0..=1.0).contains(&v), "normalized value {v} out of range");
        }
    }

    let outcome = recommender()
        .recommend(&catalog, &query(20_000, "Gaming", "android"))
        .unwrap();
    let Recommendation::Ranked(phones) = outcome else {
        panic!("expected a ranked list");
    };
    // 8 affordable androids, truncated to 5, best specs first.
    assert_eq!(phones.len(), 5);
    assert_eq!(phones[0].record.clean.name, "Droid 8");
    for pair in phones.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(phones.iter().all(|p| p.record.clean.price <= 20_000.0));
    assert!(phones.iter().all(|p| p.record.clean.version.contains("android")));
}

#[test]
fn duplicate_rows_collapse_to_one() {
    let row = "Twin,15000,2.0 GHz,4GB RAM 64GB,5000 mAh Battery,6.5 inches,13MP & 8MP Front Camera,Android v12";
    let file = write_catalog(&format!("{HEADER}\n{row}\n{row}\n"));
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn missing_cells_degrade_to_sentinels_and_zero_features() {
    let file = write_catalog(&format!(
        "{HEADER}\nBare Phone,8000,,,,,,\n"
    ));
    let catalog = Catalog::load(file.path()).unwrap();
    let rec = &catalog.records[0];
    assert_eq!(rec.clean.processor, "unknown");
    assert_eq!(rec.clean.version, "unknown");
    assert_eq!(rec.features.clock_ghz, 0.0);
    assert_eq!(rec.features.battery_mah, 0.0);
}

#[test]
fn snapshot_is_stamped_with_its_load_time() {
    let file = write_catalog(&format!(
        "{HEADER}\n\
         Stamped,12000,2.0 GHz,4GB RAM 64GB,5000 mAh Battery,6.5 inches,13MP & 8MP Front Camera,Android v12\n"
    ));
    let before = chrono::Utc::now();
    let catalog = Catalog::load(file.path()).unwrap();
    let after = chrono::Utc::now();
    assert!(catalog.loaded_at >= before && catalog.loaded_at <= after);
}

#[test]
fn below_market_budget_signals_no_match() {
    let file = write_catalog(&format!(
        "{HEADER}\n\
         Pricey,50000,3.0 GHz,8GB RAM 128GB,5000 mAh Battery,6.7 inches,50MP & 16MP Front Camera,Android v13\n"
    ));
    let catalog = Catalog::load(file.path()).unwrap();
    let outcome = recommender()
        .recommend(&catalog, &query(5_000, "Balanced", "android"))
        .unwrap();
    assert!(matches!(
        outcome,
        Recommendation::NoMatch { budget: 5_000, .. }
    ));
}
