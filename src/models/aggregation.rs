use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_sales: f64,
    pub total_profit: f64,
    pub order_count: usize,
    pub customer_count: usize,
}

/// A per-group quantity computed over order records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Sales,
    Profit,
    Quantity,
    Discount,
    DistinctOrders,
    DistinctCustomers,
}

impl Measure {
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Sales => "sales",
            Measure::Profit => "profit",
            Measure::Quantity => "quantity",
            Measure::Discount => "discount",
            Measure::DistinctOrders => "order_count",
            Measure::DistinctCustomers => "customer_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRow {
    pub key: String,
    pub values: Vec<f64>,
}

/// Wide table: one row per group, one value column per measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub key_column: String,
    pub measures: Vec<Measure>,
    pub rows: Vec<AggregationRow>,
}

impl AggregationResult {
    pub fn empty(key_column: &str, measures: &[Measure]) -> Self {
        Self {
            key_column: key_column.to_string(),
            measures: measures.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.key.as_str()).collect()
    }

    fn measure_index(&self, measure: Measure) -> Option<usize> {
        self.measures.iter().position(|m| *m == measure)
    }

    /// Values of one measure in row order; empty if the measure wasn't computed.
    pub fn column(&self, measure: Measure) -> Vec<f64> {
        match self.measure_index(measure) {
            Some(idx) => self.rows.iter().map(|r| r.values[idx]).collect(),
            None => Vec::new(),
        }
    }

    pub fn value(&self, key: &str, measure: Measure) -> Option<f64> {
        let idx = self.measure_index(measure)?;
        self.rows
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.values[idx])
    }

    pub fn total(&self, measure: Measure) -> f64 {
        self.column(measure).iter().sum()
    }

    /// Stable sort on one measure; equal values fall back to the group key.
    pub fn sort_by_measure(&mut self, measure: Measure, order: SortOrder) {
        let Some(idx) = self.measure_index(measure) else {
            return;
        };
        self.rows.sort_by(|a, b| {
            let by_value = match order {
                SortOrder::Ascending => a.values[idx].total_cmp(&b.values[idx]),
                SortOrder::Descending => b.values[idx].total_cmp(&a.values[idx]),
            };
            by_value.then_with(|| a.key.cmp(&b.key))
        });
    }

    pub fn truncate(&mut self, len: usize) {
        self.rows.truncate(len);
    }

    /// Reshapes into long form: for each requested metric, one row per group
    /// in the current row order. Metrics that weren't computed are skipped.
    pub fn melt(&self, metrics: &[Measure]) -> LongFormTable {
        let mut rows = Vec::with_capacity(self.rows.len() * metrics.len());
        for metric in metrics {
            let Some(idx) = self.measure_index(*metric) else {
                continue;
            };
            rows.extend(self.rows.iter().map(|r| LongFormRow {
                key: r.key.clone(),
                metric: *metric,
                value: r.values[idx],
            }));
        }

        LongFormTable {
            key_column: self.key_column.clone(),
            rows,
        }
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.measures.len() + 1);
        columns.push(Series::new(self.key_column.as_str().into(), self.keys()).into());

        for measure in &self.measures {
            columns.push(Series::new(measure.name().into(), self.column(*measure)).into());
        }

        DataFrame::new(columns)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongFormRow {
    pub key: String,
    pub metric: Measure,
    pub value: f64,
}

/// Long table of `(group, metric, value)` rows for grouped comparison charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongFormTable {
    pub key_column: String,
    pub rows: Vec<LongFormRow>,
}

impl LongFormTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct group keys in the order they first appear.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !keys.contains(&row.key.as_str()) {
                keys.push(&row.key);
            }
        }
        keys
    }

    pub fn value(&self, key: &str, metric: Measure) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.key == key && r.metric == metric)
            .map(|r| r.value)
    }

    pub fn total(&self, metric: Measure) -> f64 {
        self.rows
            .iter()
            .filter(|r| r.metric == metric)
            .map(|r| r.value)
            .sum()
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let keys: Vec<&str> = self.rows.iter().map(|r| r.key.as_str()).collect();
        let metrics: Vec<&str> = self.rows.iter().map(|r| r.metric.name()).collect();
        let values: Vec<f64> = self.rows.iter().map(|r| r.value).collect();

        DataFrame::new(vec![
            Series::new(self.key_column.as_str().into(), keys).into(),
            Series::new("metric".into(), metrics).into(),
            Series::new("value".into(), values).into(),
        ])
    }
}
