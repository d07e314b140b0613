use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Dataset, Dimension};

/// Choices offered by the filter controls for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub segments: Vec<String>,
    pub regions: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let bounds = dataset.date_bounds();
        Self {
            min_date: bounds.map(|(min, _)| min),
            max_date: bounds.map(|(_, max)| max),
            segments: dataset.distinct_values(Dimension::Segment),
            regions: dataset.distinct_values(Dimension::Region),
            categories: dataset.distinct_values(Dimension::Category),
        }
    }
}
