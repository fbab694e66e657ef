// src/file/mod.rs
use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::dataset::{Dataset, DataLoadError, LaunchRecord};

pub mod dataset;
pub mod export;

#[derive(Debug)]
pub struct FileManager {
    dataset_handler: dataset::DatasetFileHandler,
    export_handler: export::ExportFileHandler,
}

impl FileManager {
    pub fn new() -> Self {
        Self {
            dataset_handler: dataset::DatasetFileHandler::new(),
            export_handler: export::ExportFileHandler::new(),
        }
    }

    pub fn load_dataset(&self, path: &Path) -> Result<Dataset, DataLoadError> {
        self.dataset_handler.load(path)
    }

    pub fn export_rows(&self, rows: &[&LaunchRecord], path: &Path) -> Result<()> {
        self.export_handler.save(rows, path)?;
        info!(path = %path.display(), rows = rows.len(), "exported filtered launches");
        Ok(())
    }
}
