use anyhow::{Context, Result};
use sales_dashboard::config::DashboardConfig;
use sales_dashboard::dashboard::{DashboardSession, DashboardSnapshot, format_currency};
use sales_dashboard::loader::{DatasetCache, DatasetLoader};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "configs/dashboard.toml";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config_path =
        env::var("DASHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = DashboardConfig::from_file(&config_path)
        .context("Failed to load dashboard configuration")?;
    config.apply_env_overrides();
    config.validate()?;

    info!("🚀 Starting Sales Dashboard ({})", config_path);

    let mut cache = DatasetCache::new(DatasetLoader::new(config.loader_options()));
    let dataset = cache
        .get_or_load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {}", config.dataset.path))?;

    let session = DashboardSession::new(dataset, config.dashboard.top_products);
    let options = session.options();
    info!(
        "Dataset spans {:?} to {:?}: {} segments, {} regions, {} categories",
        options.min_date,
        options.max_date,
        options.segments.len(),
        options.regions.len(),
        options.categories.len()
    );

    let snapshot = session.snapshot();
    if snapshot.row_count == 0 {
        warn!("⚠️ Current filters exclude every row");
    }

    print_metrics(&snapshot);
    print_tables(&snapshot)?;

    if let Some(report_path) = &config.dashboard.report_path {
        write_report(&snapshot, report_path)?;
        info!("📊 Dashboard snapshot written to {}", report_path);
    }

    Ok(())
}

fn print_metrics(snapshot: &DashboardSnapshot) {
    let metrics = &snapshot.metrics;
    println!("=== SALES PERFORMANCE SUMMARY ===");
    println!("Total sales:     {}", format_currency(metrics.total_sales));
    println!("Total profit:    {}", format_currency(metrics.total_profit));
    println!("Total orders:    {}", metrics.order_count);
    println!("Total customers: {}", metrics.customer_count);
}

fn print_tables(snapshot: &DashboardSnapshot) -> Result<()> {
    for (title, table) in snapshot.wide_tables() {
        println!("\n--- {} ---", title);
        println!("{}", table.to_dataframe()?);
    }

    for (title, table) in snapshot.long_tables() {
        println!("\n--- {} ---", title);
        println!("{}", table.to_dataframe()?);
    }

    Ok(())
}

fn write_report(snapshot: &DashboardSnapshot, report_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(report_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(report_path, json)
        .with_context(|| format!("Failed to write dashboard report {}", report_path))?;

    Ok(())
}
