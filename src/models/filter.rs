use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::order::{Dataset, Dimension, OrderRecord};

/// Inclusive order-date range. Only applied once both endpoints are set and
/// `start <= end`; anything else is a partial selection and filters nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

/// Allowed values for one categorical filter.
///
/// `All` places no constraint on the dimension. `Only` is a literal allowed
/// set, so `Only` of an empty set matches no rows at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    pub fn only<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Only(values.into_iter().map(Into::into).collect())
    }

    pub fn none() -> Self {
        Selection::Only(BTreeSet::new())
    }

    pub fn allows(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.contains(value),
        }
    }
}

/// Everything the user can narrow the dashboard by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub date_range: DateRange,
    pub segments: Selection,
    pub regions: Selection,
    pub categories: Selection,
}

impl FilterSpec {
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Initial state of the dashboard controls: the dataset's full date range
    /// and every observed segment, region and category selected.
    pub fn defaults_for(dataset: &Dataset) -> Self {
        let date_range = dataset
            .date_bounds()
            .map(|(start, end)| DateRange::new(start, end))
            .unwrap_or_default();

        Self {
            date_range,
            segments: Selection::only(dataset.distinct_values(Dimension::Segment)),
            regions: Selection::only(dataset.distinct_values(Dimension::Region)),
            categories: Selection::only(dataset.distinct_values(Dimension::Category)),
        }
    }

    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.date_range.contains(record.order_date)
            && self.segments.allows(&record.segment)
            && self.regions.allows(&record.region)
            && self.categories.allows(&record.category)
    }
}
