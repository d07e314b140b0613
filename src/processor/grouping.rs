use std::collections::{BTreeMap, HashSet};
use std::fmt::Display;

use crate::models::{AggregationResult, AggregationRow, Measure, OrderRecord};

/// Running state for one measure within one group.
enum Accumulator<'a> {
    Sum(f64),
    Distinct(HashSet<&'a str>),
}

impl<'a> Accumulator<'a> {
    fn for_measure(measure: Measure) -> Self {
        match measure {
            Measure::DistinctOrders | Measure::DistinctCustomers => {
                Accumulator::Distinct(HashSet::new())
            }
            _ => Accumulator::Sum(0.0),
        }
    }

    fn add(&mut self, measure: Measure, record: &'a OrderRecord) {
        match (self, measure) {
            (Accumulator::Sum(total), Measure::Sales) => *total += record.sales,
            (Accumulator::Sum(total), Measure::Profit) => *total += record.profit,
            (Accumulator::Sum(total), Measure::Quantity) => *total += record.quantity.unwrap_or(0.0),
            (Accumulator::Sum(total), Measure::Discount) => *total += record.discount.unwrap_or(0.0),
            (Accumulator::Distinct(seen), Measure::DistinctOrders) => {
                seen.insert(&record.order_id);
            }
            (Accumulator::Distinct(seen), Measure::DistinctCustomers) => {
                seen.insert(&record.customer_id);
            }
            _ => {}
        }
    }

    fn finish(self) -> f64 {
        match self {
            Accumulator::Sum(total) => total,
            Accumulator::Distinct(seen) => seen.len() as f64,
        }
    }
}

/// Groups rows by `key_fn` and computes `measures` per group.
///
/// One output row per key present in `rows`, ordered by the key type's
/// `Ord` (so date buckets come out chronologically). Keys are rendered with
/// `Display`. No rows in, no rows out.
pub fn group_by<'a, K, F>(
    rows: impl IntoIterator<Item = &'a OrderRecord>,
    key_column: &str,
    key_fn: F,
    measures: &[Measure],
) -> AggregationResult
where
    K: Ord + Display,
    F: Fn(&'a OrderRecord) -> K,
{
    let mut groups: BTreeMap<K, Vec<Accumulator<'a>>> = BTreeMap::new();

    for record in rows {
        let accumulators = groups
            .entry(key_fn(record))
            .or_insert_with(|| measures.iter().map(|m| Accumulator::for_measure(*m)).collect());
        for (accumulator, measure) in accumulators.iter_mut().zip(measures) {
            accumulator.add(*measure, record);
        }
    }

    let rows = groups
        .into_iter()
        .map(|(key, accumulators)| AggregationRow {
            key: key.to_string(),
            values: accumulators.into_iter().map(Accumulator::finish).collect(),
        })
        .collect();

    AggregationResult {
        key_column: key_column.to_string(),
        measures: measures.to_vec(),
        rows,
    }
}
