use anyhow::Result;
use sales_dashboard::loader::DatasetLoader;
use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/superstore.csv".to_string());

    println!("=== COLUMN MAPPING FOR {} ===\n", path);

    let loader = DatasetLoader::default();
    let report = loader.column_report(&path)?;

    for (raw, normalized) in report.raw.iter().zip(&report.normalized) {
        println!("   {:<20} -> {}", raw, normalized);
    }

    if report.missing.is_empty() {
        println!("\nAll required columns present.");

        let dataset = loader.load(&path)?;
        println!("Parsed {} order records.", dataset.len());
        if let Some((min, max)) = dataset.date_bounds() {
            println!("Order dates: {} to {}", min, max);
        }
    } else {
        println!("\nMissing required columns: {}", report.missing.join(", "));
    }

    Ok(())
}
