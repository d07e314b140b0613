use chrono::Datelike;
use std::fmt;

use super::grouping::group_by;
use crate::models::{
    AggregationResult, DISCOUNT_COLUMN, Dimension, FilteredDataset, LongFormTable, Measure,
    QUANTITY_COLUMN, SortOrder,
};

pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Calendar month bucket, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn by_dimension(filtered: &FilteredDataset<'_>, dimension: Dimension, measures: &[Measure]) -> AggregationResult {
    group_by(
        filtered.iter(),
        dimension.column_name(),
        |record| dimension.value(record),
        measures,
    )
}

pub fn customers_by_segment(filtered: &FilteredDataset<'_>) -> AggregationResult {
    by_dimension(filtered, Dimension::Segment, &[Measure::DistinctCustomers])
}

pub fn orders_by_segment(filtered: &FilteredDataset<'_>) -> AggregationResult {
    by_dimension(filtered, Dimension::Segment, &[Measure::DistinctOrders])
}

pub fn orders_by_ship_mode(filtered: &FilteredDataset<'_>) -> AggregationResult {
    by_dimension(filtered, Dimension::ShipMode, &[Measure::DistinctOrders])
}

pub fn sales_by_ship_mode(filtered: &FilteredDataset<'_>) -> AggregationResult {
    by_dimension(filtered, Dimension::ShipMode, &[Measure::Sales])
}

pub fn sales_by_region(filtered: &FilteredDataset<'_>) -> AggregationResult {
    by_dimension(filtered, Dimension::Region, &[Measure::Sales])
}

/// Profit and sales per value of `dimension`, ranked by sales (largest
/// first) and reshaped to long form with profit rows before sales rows.
pub fn profit_and_sales_by(filtered: &FilteredDataset<'_>, dimension: Dimension) -> LongFormTable {
    let mut stats = by_dimension(filtered, dimension, &[Measure::Profit, Measure::Sales]);
    stats.sort_by_measure(Measure::Sales, SortOrder::Descending);
    stats.melt(&[Measure::Profit, Measure::Sales])
}

/// Every numeric measure the dataset carries, summed per calendar month in
/// chronological order.
pub fn monthly_trend(filtered: &FilteredDataset<'_>) -> AggregationResult {
    let source = filtered.source();
    let mut measures = vec![Measure::Sales, Measure::Profit];
    if source.has_column(QUANTITY_COLUMN) {
        measures.push(Measure::Quantity);
    }
    if source.has_column(DISCOUNT_COLUMN) {
        measures.push(Measure::Discount);
    }

    group_by(
        filtered.iter(),
        "month",
        |record| YearMonth {
            year: record.order_date.year(),
            month: record.order_date.month(),
        },
        &measures,
    )
}

pub fn yearly_trend(filtered: &FilteredDataset<'_>) -> AggregationResult {
    group_by(
        filtered.iter(),
        "year",
        |record| record.order_date.year(),
        &[Measure::Sales],
    )
}

/// The `n` best-selling products, listed smallest first so a horizontal bar
/// chart draws the largest at the top. Ties rank by product name.
pub fn top_products(filtered: &FilteredDataset<'_>, n: usize) -> LongFormTable {
    let mut stats = by_dimension(
        filtered,
        Dimension::ProductName,
        &[Measure::Sales, Measure::Profit],
    );
    stats.sort_by_measure(Measure::Sales, SortOrder::Descending);
    stats.truncate(n);
    stats.sort_by_measure(Measure::Sales, SortOrder::Ascending);
    stats.melt(&[Measure::Sales, Measure::Profit])
}
