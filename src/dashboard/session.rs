use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use super::options::FilterOptions;
use super::snapshot::DashboardSnapshot;
use crate::models::{DateRange, Dataset, FilterSpec, FilteredDataset, Selection};
use crate::processor::apply_filters;

/// One user's view of a shared dataset.
///
/// The dataset is only ever read; the filter state is the session's own and
/// every snapshot is recomputed from scratch.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    dataset: Arc<Dataset>,
    options: FilterOptions,
    spec: FilterSpec,
    top_n: usize,
}

impl DashboardSession {
    pub fn new(dataset: Arc<Dataset>, top_n: usize) -> Self {
        let options = FilterOptions::from_dataset(&dataset);
        let spec = FilterSpec::defaults_for(&dataset);
        Self {
            dataset,
            options,
            spec,
            top_n,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Either endpoint may be missing while the user is still picking.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.spec.date_range = DateRange { start, end };
    }

    pub fn set_segments(&mut self, selection: Selection) {
        self.spec.segments = selection;
    }

    pub fn set_regions(&mut self, selection: Selection) {
        self.spec.regions = selection;
    }

    pub fn set_categories(&mut self, selection: Selection) {
        self.spec.categories = selection;
    }

    pub fn set_spec(&mut self, spec: FilterSpec) {
        self.spec = spec;
    }

    pub fn reset(&mut self) {
        self.spec = FilterSpec::defaults_for(&self.dataset);
    }

    pub fn filtered(&self) -> FilteredDataset<'_> {
        apply_filters(&self.dataset, &self.spec)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let filtered = self.filtered();
        debug!("Recomputing dashboard over {} rows", filtered.len());
        DashboardSnapshot::compute(&filtered, self.top_n)
    }
}
