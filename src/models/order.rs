use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Columns every dataset must carry after name normalization.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "order_id",
    "customer_id",
    "order_date",
    "sales",
    "profit",
    "segment",
    "region",
    "category",
    "ship_mode",
    "product_name",
];

pub const QUANTITY_COLUMN: &str = "quantity";
pub const DISCOUNT_COLUMN: &str = "discount";

/// One line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_id: String,
    pub order_date: NaiveDate,
    pub ship_mode: String,
    pub segment: String,
    pub region: String,
    pub category: String,
    pub product_name: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: Option<f64>,
    pub discount: Option<f64>,
}

/// Categorical columns a record can be grouped or filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Segment,
    Region,
    Category,
    ShipMode,
    ProductName,
}

impl Dimension {
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Segment => "segment",
            Dimension::Region => "region",
            Dimension::Category => "category",
            Dimension::ShipMode => "ship_mode",
            Dimension::ProductName => "product_name",
        }
    }

    pub fn value<'r>(&self, record: &'r OrderRecord) -> &'r str {
        match self {
            Dimension::Segment => &record.segment,
            Dimension::Region => &record.region,
            Dimension::Category => &record.category,
            Dimension::ShipMode => &record.ship_mode,
            Dimension::ProductName => &record.product_name,
        }
    }
}

/// The loaded, immutable table of order records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<OrderRecord>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<OrderRecord>) -> Self {
        Self { columns, records }
    }

    /// Builds a dataset without a source file. The column list is the
    /// required schema plus whichever optional measures the records carry.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        let mut columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        if records.iter().any(|r| r.quantity.is_some()) {
            columns.push(QUANTITY_COLUMN.to_string());
        }
        if records.iter().any(|r| r.discount.is_some()) {
            columns.push(DISCOUNT_COLUMN.to_string());
        }
        Self::new(columns, records)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest order date, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|r| r.order_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
    }

    /// Distinct values of a dimension in order of first appearance.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| dimension.value(r))
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }

    /// A view over every row, as if no filter were applied.
    pub fn view(&self) -> FilteredDataset<'_> {
        FilteredDataset::new(self, self.records.iter().collect())
    }
}

/// Rows of a [`Dataset`] that passed a filter, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredDataset<'a> {
    source: &'a Dataset,
    rows: Vec<&'a OrderRecord>,
}

impl<'a> FilteredDataset<'a> {
    pub fn new(source: &'a Dataset, rows: Vec<&'a OrderRecord>) -> Self {
        Self { source, rows }
    }

    pub fn source(&self) -> &'a Dataset {
        self.source
    }

    pub fn rows(&self) -> &[&'a OrderRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a OrderRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
