use std::path::Path;

use clap::Parser;
use phone_scout::config::{AppConfig, load_config};
use phone_scout::model::{Query, Recommendation};
use phone_scout::{Catalog, Recommender};
use tracing::{error, info, warn};

/// Phone recommendations over a spec catalog: budget, intent and OS in,
/// ranked top matches out.
#[derive(Debug, Parser)]
#[command(name = "phone-scout")]
struct Cli {
    /// Budget in whole currency units; thousands separators are accepted.
    #[arg(value_parser = parse_budget)]
    budget: u32,

    /// Intent profile: Gaming | Photography | Balanced.
    intent: String,

    /// OS family filter, e.g. "android" or "ios".
    os: String,

    /// Path to the JSON config file.
    #[arg(long, default_value = "config.json")]
    config: String,
}

fn parse_budget(text: &str) -> Result<u32, String> {
    text.replace(',', "")
        .parse()
        .map_err(|_| format!("not a budget: {text:?}"))
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let query = Query {
        budget: cli.budget,
        intent: cli.intent,
        os_family: cli.os,
    };

    // Missing config file is fine; built-in defaults cover it.
    let config = if Path::new(&cli.config).exists() {
        match load_config(&cli.config) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        warn!("No config at {}, using defaults", cli.config);
        AppConfig::default()
    };

    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(cat) => cat,
        Err(e) => {
            error!("Catalog load error: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Catalog ready: {} records (loaded {})",
        catalog.len(),
        catalog.loaded_at.format("%Y-%m-%d %H:%M:%S")
    );

    let recommender = Recommender::new(config.intent_profiles(), config.top_n);
    match recommender.recommend(&catalog, &query) {
        Ok(Recommendation::Ranked(phones)) => {
            println!(
                "Top {} recommendations for {} (budget {}, os {}):",
                phones.len(),
                query.intent,
                query.budget,
                query.os_family
            );
            for (rank, phone) in phones.iter().enumerate() {
                let rec = &phone.record.clean;
                println!("{}. {} - {:.0} (score {:.3})", rank + 1, rec.name, rec.price, phone.score);
                println!("   os: {} | processor: {}", rec.version, rec.processor);
                println!("   battery: {} | ram/storage: {}", rec.battery, rec.storage);
                println!("   front camera: {}", rec.camera);
            }
        }
        Ok(Recommendation::NoMatch { budget, os_family }) => {
            println!("No {os_family} phones found under {budget}");
        }
        Err(e) => {
            error!("Query error: {e}");
            std::process::exit(2);
        }
    }
}
