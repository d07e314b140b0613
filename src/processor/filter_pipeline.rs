use tracing::debug;

use crate::models::{Dataset, FilterSpec, FilteredDataset};

/// Narrows the dataset to the rows matching every part of `spec`.
///
/// Predicates are ANDed: order date within the range (when the range is
/// complete), then segment, region and category membership. Rows are never
/// modified and keep their dataset order.
pub fn apply_filters<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> FilteredDataset<'a> {
    if !spec.date_range.is_complete() {
        debug!(
            "Date range {:?}..{:?} is incomplete, order dates left unfiltered",
            spec.date_range.start, spec.date_range.end
        );
    }

    let rows: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| spec.matches(record))
        .collect();

    debug!("Filter kept {} of {} rows", rows.len(), dataset.len());

    FilteredDataset::new(dataset, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, OrderRecord, Selection};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(order_id: &str, order_date: NaiveDate, segment: &str, region: &str, category: &str) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            customer_id: format!("CUST-{order_id}"),
            order_date,
            ship_mode: "Standard Class".to_string(),
            segment: segment.to_string(),
            region: region.to_string(),
            category: category.to_string(),
            product_name: "Staples".to_string(),
            sales: 10.0,
            profit: 1.0,
            quantity: None,
            discount: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("A", date(2019, 1, 5), "Consumer", "East", "Furniture"),
            record("B", date(2019, 2, 10), "Corporate", "West", "Technology"),
            record("C", date(2019, 3, 15), "Home Office", "East", "Office Supplies"),
            record("D", date(2019, 4, 20), "Consumer", "South", "Technology"),
        ])
    }

    fn ids<'a>(filtered: &FilteredDataset<'a>) -> Vec<&'a str> {
        filtered.iter().map(|r| r.order_id.as_str()).collect()
    }

    #[test]
    fn test_unconstrained_keeps_everything() {
        let dataset = dataset();
        let filtered = apply_filters(&dataset, &FilterSpec::unconstrained());
        assert_eq!(ids(&filtered), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_defaults_keep_everything() {
        let dataset = dataset();
        let filtered = apply_filters(&dataset, &FilterSpec::defaults_for(&dataset));
        assert_eq!(filtered.len(), dataset.len());
    }

    #[test]
    fn test_predicates_are_anded() {
        let dataset = dataset();
        let spec = FilterSpec {
            date_range: DateRange::new(date(2019, 1, 1), date(2019, 3, 31)),
            segments: Selection::only(["Consumer", "Home Office"]),
            regions: Selection::only(["East"]),
            categories: Selection::All,
        };
        assert_eq!(ids(&apply_filters(&dataset, &spec)), vec!["A", "C"]);
    }

    #[test]
    fn test_inverted_range_leaves_dates_unfiltered() {
        let dataset = dataset();
        let spec = FilterSpec {
            date_range: DateRange::new(date(2019, 12, 31), date(2019, 1, 1)),
            categories: Selection::only(["Technology"]),
            ..FilterSpec::unconstrained()
        };
        assert_eq!(ids(&apply_filters(&dataset, &spec)), vec!["B", "D"]);
    }

    #[test]
    fn test_half_selected_range_leaves_dates_unfiltered() {
        let dataset = dataset();
        let spec = FilterSpec {
            date_range: DateRange {
                start: Some(date(2019, 3, 1)),
                end: None,
            },
            ..FilterSpec::unconstrained()
        };
        assert_eq!(apply_filters(&dataset, &spec).len(), 4);
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let dataset = dataset();
        let spec = FilterSpec {
            regions: Selection::none(),
            ..FilterSpec::defaults_for(&dataset)
        };
        assert!(apply_filters(&dataset, &spec).is_empty());
    }

    #[test]
    fn test_filtering_leaves_dataset_untouched() {
        let dataset = dataset();
        let before = dataset.clone();
        let spec = FilterSpec {
            segments: Selection::only(["Corporate"]),
            ..FilterSpec::unconstrained()
        };
        let filtered = apply_filters(&dataset, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(dataset, before);
    }
}
