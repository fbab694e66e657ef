// src/analysis/aggregate.rs

use serde::{Serialize, Deserialize};

use crate::dataset::{Dataset, LaunchRecord};
use crate::state::selection::{PayloadRange, Selection, SiteSelection};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub success_count: usize,
    pub failure_count: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

/// Everything the two charts need for one selection. Rebuilt from scratch on
/// every selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult<'a> {
    pub counts: OutcomeCounts,
    pub filtered_rows: Vec<&'a LaunchRecord>,
}

/// Success/failure counts for the selected site. The payload range is not
/// applied here.
pub fn compute_outcome_counts(dataset: &Dataset, site: &SiteSelection) -> OutcomeCounts {
    dataset
        .rows_matching(|record| site.matches(&record.site))
        .fold(OutcomeCounts::default(), |mut counts, record| {
            if record.outcome.is_success() {
                counts.success_count += 1;
            } else {
                counts.failure_count += 1;
            }
            counts
        })
}

/// Rows of the selected site whose payload lies within `payload_range`
/// (inclusive on both ends), in load order.
pub fn compute_filtered_rows<'a>(
    dataset: &'a Dataset,
    site: &SiteSelection,
    payload_range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    if payload_range.is_empty() {
        return Vec::new();
    }

    dataset
        .rows_matching(|record| site.matches(&record.site))
        .filter(|record| payload_range.contains(record.payload_mass_kg))
        .collect()
}

pub fn aggregate<'a>(dataset: &'a Dataset, selection: &Selection) -> AggregationResult<'a> {
    AggregationResult {
        counts: compute_outcome_counts(dataset, &selection.site),
        filtered_rows: compute_filtered_rows(dataset, &selection.site, selection.payload_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::{record, scenario_dataset};
    use crate::dataset::Outcome;

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    fn indices(rows: &[&LaunchRecord]) -> Vec<usize> {
        rows.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_all_sites_counts() {
        let dataset = scenario_dataset();
        let counts = compute_outcome_counts(&dataset, &SiteSelection::All);
        assert_eq!(counts, OutcomeCounts { success_count: 3, failure_count: 1 });
        assert_eq!(counts.total(), dataset.len());
    }

    #[test]
    fn test_all_sites_payload_window() {
        let dataset = scenario_dataset();
        let rows = compute_filtered_rows(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(indices(&rows), vec![0, 2]);
    }

    #[test]
    fn test_single_site() {
        let dataset = scenario_dataset();
        let rows = compute_filtered_rows(&dataset, &site("B"), PayloadRange::new(0.0, 1000.0));
        assert_eq!(indices(&rows), vec![2]);

        // Counts ignore the payload window
        let counts = compute_outcome_counts(&dataset, &site("B"));
        assert_eq!(counts, OutcomeCounts { success_count: 2, failure_count: 0 });
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let dataset = scenario_dataset();
        let counts = compute_outcome_counts(&dataset, &site("Z"));
        assert_eq!(counts.total(), 0);
        let rows = compute_filtered_rows(&dataset, &site("Z"), PayloadRange::full(&dataset));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_full_range_is_site_filter() {
        let dataset = scenario_dataset();
        let full = PayloadRange::full(&dataset);
        for name in dataset.sites() {
            let filtered = compute_filtered_rows(&dataset, &site(name), full);
            let expected: Vec<&LaunchRecord> = dataset.rows_matching(|r| &r.site == name).collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let dataset = scenario_dataset();
        for (low, high) in [(1000.0, 0.0), (3000.0, 500.0), (800.5, 800.0)] {
            let rows = compute_filtered_rows(&dataset, &SiteSelection::All, PayloadRange::new(low, high));
            assert!(rows.is_empty(), "range [{}, {}] should match nothing", low, high);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let dataset = scenario_dataset();
        let rows = compute_filtered_rows(&dataset, &SiteSelection::All, PayloadRange::new(800.0, 1500.0));
        assert_eq!(indices(&rows), vec![1, 2]);

        let rows = compute_filtered_rows(&dataset, &SiteSelection::All, PayloadRange::new(800.0, 800.0));
        assert_eq!(indices(&rows), vec![2]);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let dataset = scenario_dataset();
        let selection = Selection::new(site("A"), PayloadRange::new(0.0, 2000.0));
        let first = aggregate(&dataset, &selection);
        let second = aggregate(&dataset, &selection);
        assert_eq!(first, second);
        assert_eq!(indices(&first.filtered_rows), vec![0, 1]);
        assert_eq!(first.counts, OutcomeCounts { success_count: 1, failure_count: 1 });
    }

    #[test]
    fn test_order_follows_load_order() {
        let dataset = Dataset::from_records(vec![
            record("A", 900.0, Outcome::Success, "FT"),
            record("B", 100.0, Outcome::Failure, "FT"),
            record("A", 50.0, Outcome::Failure, "B4"),
        ])
        .unwrap();
        let rows = compute_filtered_rows(&dataset, &SiteSelection::All, PayloadRange::full(&dataset));
        assert_eq!(indices(&rows), vec![0, 1, 2]);
    }
}
