// src/state/selection.rs
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::dataset::Dataset;

/// Site selector value: every site, or a single site identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub const ALL_VALUE: &'static str = "ALL";

    /// Parses a raw selector value. `"ALL"` and blank input select every site;
    /// anything else is taken as a site identifier, known or not.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => Self::ALL_VALUE,
            SiteSelection::Site(site) => site,
        }
    }

    /// Label shown in the site selector.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::All
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Closed payload interval `[low, high]` in kilograms. An inverted interval
/// (`low > high`) is kept as given and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn full(dataset: &Dataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }

    /// Parses a two-element slider value. Anything other than exactly two
    /// finite numbers falls back to `fallback`.
    pub fn parse(values: &[f64], fallback: PayloadRange) -> Self {
        match values {
            [low, high] if low.is_finite() && high.is_finite() => Self::new(*low, *high),
            _ => fallback,
        }
    }

    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

/// Current values of the two dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Selection {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self { site, payload_range }
    }

    /// Initial control state: every site, full payload range.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(SiteSelection::All, PayloadRange::full(dataset))
    }
}
