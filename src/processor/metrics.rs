use std::collections::HashSet;

use crate::models::{FilteredDataset, Metrics};

/// Headline totals over the filtered rows. Empty input gives all zeros.
pub fn compute_metrics(filtered: &FilteredDataset<'_>) -> Metrics {
    let mut orders = HashSet::new();
    let mut customers = HashSet::new();
    let mut total_sales = 0.0;
    let mut total_profit = 0.0;

    for record in filtered.iter() {
        total_sales += record.sales;
        total_profit += record.profit;
        orders.insert(record.order_id.as_str());
        customers.insert(record.customer_id.as_str());
    }

    Metrics {
        total_sales,
        total_profit,
        order_count: orders.len(),
        customer_count: customers.len(),
    }
}
