//! Ad-hoc smoke test — Telugu → Latin pipeline.
//!
//! Not a stable CLI: builds a small in-memory table of sample Telugu words,
//! runs the tabular pipeline against the bundled engine, and prints the
//! augmented rows.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build a [`BatchProcessor`] over the bundled [`TeluguIastEngine`].
//! 4. Run `process_column` on the sample table and print the result.

use std::sync::Arc;

use telugu_to_latin::{
    config::AppConfig,
    pipeline::{BatchProcessor, Table},
    translit::TeluguIastEngine,
};

const SAMPLE_WORDS: [&str; 4] = ["నమస్కారం", "ధన్యవాదాలు", "శుభోదయం", "తెలుగు"];

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Telugu → Latin smoke test starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Pipeline
    let processor = BatchProcessor::with_config(Arc::new(TeluguIastEngine::new()), &config);

    // 4. Sample table
    let table = Table::from_strings(config.columns.source.clone(), SAMPLE_WORDS);
    let result = processor.process_column(&table, &config.columns.source)?;

    println!("{}", result.names().join(" | "));
    for row in result.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        println!("{}", cells.join(" | "));
    }

    log::info!("Smoke test completed successfully");
    Ok(())
}
