// src/file/export.rs
use std::path::Path;
use anyhow::{Result, Context};
use chrono::{DateTime, Local};
use csv::Writer;

use crate::dataset::{LaunchRecord, BOOSTER_COLUMN, CLASS_COLUMN, PAYLOAD_COLUMN, SITE_COLUMN};

#[derive(Debug)]
pub struct ExportFileHandler;

impl ExportFileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Default name offered by the save dialog, e.g. `launches_20240131_154500.csv`.
    pub fn default_file_name(timestamp: DateTime<Local>) -> String {
        format!("launches_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
    }

    pub fn save(&self, rows: &[&LaunchRecord], path: &Path) -> Result<()> {
        let mut writer = Writer::from_path(path)
            .with_context(|| format!("Failed to create export file {}", path.display()))?;

        writer.write_record(["row", SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN])?;

        for record in rows {
            writer.write_record(&[
                record.index.to_string(),
                record.site.clone(),
                record.payload_mass_kg.to_string(),
                record.outcome.class().to_string(),
                record.booster_category.clone(),
            ])?;
        }

        writer.flush()
            .with_context(|| format!("Failed to write export file {}", path.display()))?;
        Ok(())
    }
}
