use serde::{Deserialize, Serialize};

use crate::models::{AggregationResult, Dimension, FilteredDataset, LongFormTable, Metrics};
use crate::processor::{
    compute_metrics, customers_by_segment, monthly_trend, orders_by_segment, orders_by_ship_mode,
    profit_and_sales_by, sales_by_region, sales_by_ship_mode, top_products, yearly_trend,
};

/// Everything the dashboard draws for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub row_count: usize,
    pub metrics: Metrics,
    pub customers_by_segment: AggregationResult,
    pub orders_by_segment: AggregationResult,
    pub orders_by_ship_mode: AggregationResult,
    pub sales_by_ship_mode: AggregationResult,
    pub sales_by_region: AggregationResult,
    pub segment_comparison: LongFormTable,
    pub region_comparison: LongFormTable,
    pub category_comparison: LongFormTable,
    pub monthly_trend: AggregationResult,
    pub yearly_trend: AggregationResult,
    pub top_products: LongFormTable,
}

impl DashboardSnapshot {
    pub fn compute(filtered: &FilteredDataset<'_>, top_n: usize) -> Self {
        Self {
            row_count: filtered.len(),
            metrics: compute_metrics(filtered),
            customers_by_segment: customers_by_segment(filtered),
            orders_by_segment: orders_by_segment(filtered),
            orders_by_ship_mode: orders_by_ship_mode(filtered),
            sales_by_ship_mode: sales_by_ship_mode(filtered),
            sales_by_region: sales_by_region(filtered),
            segment_comparison: profit_and_sales_by(filtered, Dimension::Segment),
            region_comparison: profit_and_sales_by(filtered, Dimension::Region),
            category_comparison: profit_and_sales_by(filtered, Dimension::Category),
            monthly_trend: monthly_trend(filtered),
            yearly_trend: yearly_trend(filtered),
            top_products: top_products(filtered, top_n),
        }
    }

    /// Single-dimension tables with their chart titles.
    pub fn wide_tables(&self) -> [(&'static str, &AggregationResult); 7] {
        [
            ("Customers per segment", &self.customers_by_segment),
            ("Orders per segment", &self.orders_by_segment),
            ("Orders per ship mode", &self.orders_by_ship_mode),
            ("Sales per ship mode", &self.sales_by_ship_mode),
            ("Sales per region", &self.sales_by_region),
            ("Monthly sales trend", &self.monthly_trend),
            ("Yearly sales trend", &self.yearly_trend),
        ]
    }

    /// Grouped comparison tables with their chart titles.
    pub fn long_tables(&self) -> [(&'static str, &LongFormTable); 4] {
        [
            ("Profit & sales per segment", &self.segment_comparison),
            ("Profit & sales per region", &self.region_comparison),
            ("Profit & sales per category", &self.category_comparison),
            ("Top products by sales & profit", &self.top_products),
        ]
    }
}
