// src/dataset/mod.rs
use std::path::PathBuf;
use thiserror::Error;

pub mod record;

pub use record::{LaunchRecord, Outcome};

/// Column names the loader requires in the header row.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

pub const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN];

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset {} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("dataset {} is malformed at row {row}: {reason}", .path.display())]
    Malformed { path: PathBuf, row: usize, reason: String },
    #[error("dataset {} contains no launch records", .path.display())]
    Empty { path: PathBuf },
}

/// In-memory launch records, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: Vec<String>,
    booster_categories: Vec<String>,
}

impl Dataset {
    /// Builds the store and its derived scalars. Returns `None` for an empty
    /// record list since the payload bounds are undefined without rows.
    pub fn from_records(mut records: Vec<LaunchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        for (index, record) in records.iter_mut().enumerate() {
            record.index = index;
        }

        let min_payload = records.iter().map(|r| r.payload_mass_kg).fold(f64::INFINITY, f64::min);
        let max_payload = records.iter().map(|r| r.payload_mass_kg).fold(f64::NEG_INFINITY, f64::max);

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.site) {
                sites.push(record.site.clone());
            }
            if !booster_categories.contains(&record.booster_category) {
                booster_categories.push(record.booster_category.clone());
            }
        }

        Some(Self {
            records,
            min_payload,
            max_payload,
            sites,
            booster_categories,
        })
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster version categories in order of first appearance.
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn is_known_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Lazily yields records accepted by `predicate`, in load order. Every call
    /// starts a fresh pass over the data.
    pub fn rows_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a LaunchRecord>
    where
        P: Fn(&LaunchRecord) -> bool,
    {
        self.records.iter().filter(move |record| predicate(record))
    }
}
