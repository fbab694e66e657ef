// src/analysis/stats.rs

use serde::{Serialize, Deserialize};

use crate::dataset::{Dataset, LaunchRecord};

/// Launch tally for one group (a site, a booster category or a payload bucket).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupStats {
    pub label: String,
    pub launches: usize,
    pub successes: usize,
}

impl GroupStats {
    fn new(label: String) -> Self {
        Self {
            label,
            launches: 0,
            successes: 0,
        }
    }

    fn add(&mut self, record: &LaunchRecord) {
        self.launches += 1;
        if record.outcome.is_success() {
            self.successes += 1;
        }
    }

    pub fn failures(&self) -> usize {
        self.launches - self.successes
    }

    /// Fraction of successful launches, 0.0 for an empty group.
    pub fn success_rate(&self) -> f64 {
        if self.launches == 0 {
            0.0
        } else {
            self.successes as f64 / self.launches as f64
        }
    }
}

fn group_by_label<'a, F>(dataset: &'a Dataset, labels: &[String], key: F) -> Vec<GroupStats>
where
    F: Fn(&'a LaunchRecord) -> &'a str,
{
    let mut groups: Vec<GroupStats> = labels.iter().cloned().map(GroupStats::new).collect();
    for record in dataset.records() {
        let label = key(record);
        if let Some(group) = groups.iter_mut().find(|g| g.label == label) {
            group.add(record);
        }
    }
    groups
}

pub fn success_rate_by_site(dataset: &Dataset) -> Vec<GroupStats> {
    group_by_label(dataset, dataset.sites(), |record| record.site.as_str())
}

pub fn success_rate_by_booster(dataset: &Dataset) -> Vec<GroupStats> {
    group_by_label(dataset, dataset.booster_categories(), |record| record.booster_category.as_str())
}

/// Groups launches into `[k * width, (k + 1) * width)` payload buckets. Only
/// non-empty buckets are returned, lowest first.
pub fn success_rate_by_payload_bucket(dataset: &Dataset, bucket_width: f64) -> Vec<GroupStats> {
    if !(bucket_width.is_finite() && bucket_width > 0.0) {
        return Vec::new();
    }

    let mut buckets: Vec<(u64, GroupStats)> = Vec::new();
    for record in dataset.records() {
        let bucket = (record.payload_mass_kg / bucket_width).floor() as u64;
        match buckets.iter_mut().find(|(b, _)| *b == bucket) {
            Some((_, group)) => group.add(record),
            None => {
                let start = bucket as f64 * bucket_width;
                let mut group = GroupStats::new(format!("{:.0}-{:.0} kg", start, start + bucket_width));
                group.add(record);
                buckets.push((bucket, group));
            }
        }
    }

    buckets.sort_by_key(|(bucket, _)| *bucket);
    buckets.into_iter().map(|(_, group)| group).collect()
}

/// Group with the highest success rate; the earliest group wins ties.
pub fn best_by_rate(groups: &[GroupStats]) -> Option<&GroupStats> {
    groups.iter().fold(None, |best: Option<&GroupStats>, group| match best {
        Some(b) if b.success_rate() >= group.success_rate() => Some(b),
        _ => Some(group),
    })
}

/// Group with the lowest success rate; the earliest group wins ties.
pub fn worst_by_rate(groups: &[GroupStats]) -> Option<&GroupStats> {
    groups.iter().fold(None, |worst: Option<&GroupStats>, group| match worst {
        Some(w) if w.success_rate() <= group.success_rate() => Some(w),
        _ => Some(group),
    })
}

/// Group with the most successful launches; the earliest group wins ties.
pub fn best_by_successes(groups: &[GroupStats]) -> Option<&GroupStats> {
    groups.iter().fold(None, |best: Option<&GroupStats>, group| match best {
        Some(b) if b.successes >= group.successes => Some(b),
        _ => Some(group),
    })
}
