mod common;

use common::{date, three_row_dataset};
use sales_dashboard::dashboard::{DashboardSession, DashboardSnapshot, FilterOptions};
use sales_dashboard::models::{Measure, Selection};
use std::sync::Arc;

#[test]
fn session_starts_with_everything_selected() {
    let dataset = Arc::new(three_row_dataset());
    let session = DashboardSession::new(Arc::clone(&dataset), 10);

    let options = session.options();
    assert_eq!(options.min_date, Some(date(2019, 1, 5)));
    assert_eq!(options.max_date, Some(date(2019, 2, 10)));
    assert_eq!(options.segments, vec!["Consumer", "Corporate"]);
    assert_eq!(options.regions, vec!["East", "West"]);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.row_count, 3);
    assert_eq!(snapshot.metrics.total_sales, 350.0);
    assert_eq!(snapshot.metrics.order_count, 2);
}

#[test]
fn filter_changes_recompute_without_touching_dataset() {
    let dataset = Arc::new(three_row_dataset());
    let mut session = DashboardSession::new(Arc::clone(&dataset), 10);

    session.set_segments(Selection::only(["Corporate"]));
    let corporate = session.snapshot();
    assert_eq!(corporate.row_count, 1);
    assert_eq!(corporate.metrics.total_profit, -20.0);
    assert_eq!(corporate.sales_by_region.keys(), vec!["West"]);

    session.set_segments(Selection::none());
    assert_eq!(session.snapshot().row_count, 0);

    session.reset();
    assert_eq!(session.snapshot().row_count, 3);
    assert_eq!(dataset.len(), 3);
    assert_eq!(session.dataset(), dataset.as_ref());
}

#[test]
fn partial_date_selection_falls_back_to_all_dates() {
    let dataset = Arc::new(three_row_dataset());
    let mut session = DashboardSession::new(dataset, 10);

    session.set_date_range(Some(date(2019, 2, 1)), None);
    assert_eq!(session.snapshot().row_count, 3);

    session.set_date_range(Some(date(2019, 2, 1)), Some(date(2019, 2, 28)));
    assert_eq!(session.snapshot().row_count, 1);

    session.set_date_range(Some(date(2019, 2, 28)), Some(date(2019, 2, 1)));
    assert_eq!(session.snapshot().row_count, 3);
}

#[test]
fn sessions_over_one_dataset_are_isolated() {
    let dataset = Arc::new(three_row_dataset());
    let mut east = DashboardSession::new(Arc::clone(&dataset), 10);
    let west = DashboardSession::new(Arc::clone(&dataset), 10);

    east.set_regions(Selection::only(["East"]));

    assert_eq!(east.snapshot().row_count, 2);
    assert_eq!(west.snapshot().row_count, 3);
    assert_eq!(FilterOptions::from_dataset(&dataset), *west.options());
}

#[test]
fn snapshot_serializes_to_json() {
    let dataset = Arc::new(three_row_dataset());
    let session = DashboardSession::new(dataset, 10);
    let snapshot = session.snapshot();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["row_count"], 3);
    assert_eq!(json["metrics"]["total_sales"], 350.0);
    assert_eq!(json["sales_by_region"]["key_column"], "region");
    assert_eq!(json["top_products"]["rows"][0]["metric"], "sales");

    let restored: DashboardSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn category_filter_limits_comparison_tables() {
    let dataset = Arc::new(three_row_dataset());
    let mut session = DashboardSession::new(dataset, 10);
    session.set_categories(Selection::only(["Furniture", "Technology"]));

    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.category_comparison.keys(),
        vec!["Technology", "Furniture"]
    );
    assert_eq!(
        snapshot.category_comparison.value("Technology", Measure::Sales),
        Some(200.0)
    );
    assert_eq!(snapshot.top_products.keys(), vec!["Chair", "Phone"]);
}
