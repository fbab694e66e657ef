// src/state/mod.rs
use std::path::Path;
use std::sync::Arc;
use anyhow::Result;
use tracing::{debug, warn};

use crate::analysis::compute_filtered_rows;
use crate::chart::{render_dashboard, ChartSpec};
use crate::config::DashboardConfig;
use crate::dataset::{Dataset, LaunchRecord};
use crate::file::FileManager;
use crate::state::selection::{PayloadRange, Selection, SiteSelection};

pub mod selection;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    Launches,
    Insights,
}

/// Chart pair together with the selection it was rendered for.
#[derive(Debug, Clone)]
pub struct RenderedCharts {
    pub selection: Selection,
    pub pie: ChartSpec,
    pub scatter: ChartSpec,
}

// Per-session application state. The dataset is shared and read-only.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: DashboardConfig,

    pub selection: Selection,
    rendered: Option<RenderedCharts>,

    // Minimal UI state
    pub current_screen: Screen,
    pub error_message: Option<String>,
    pub status_message: Option<String>,

    pub file_manager: FileManager,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        let selection = Selection::for_dataset(&dataset);
        Self {
            dataset,
            config,
            selection,
            rendered: None,
            current_screen: Screen::Dashboard,
            error_message: None,
            status_message: None,
            file_manager: FileManager::new(),
        }
    }

    /// Unknown sites are accepted and simply match no launches.
    pub fn set_site(&mut self, site: SiteSelection) {
        if let SiteSelection::Site(name) = &site {
            if !self.dataset.is_known_site(name) {
                warn!(site = %name, "selected site is not in the dataset");
            }
        }
        self.selection.site = site;
    }

    pub fn set_payload_range(&mut self, range: PayloadRange) {
        self.selection.payload_range = range;
    }

    /// Back to the initial control values.
    pub fn reset_selection(&mut self) {
        self.selection = Selection::for_dataset(&self.dataset);
    }

    /// Charts for the current selection. Re-rendered whenever the selection
    /// differs from the one the last charts were built for; egui calls this
    /// every frame.
    pub fn charts(&mut self) -> &RenderedCharts {
        if self.rendered.as_ref().is_some_and(|r| r.selection != self.selection) {
            debug!(site = %self.selection.site, "selection changed");
            self.rendered = None;
        }

        self.rendered.get_or_insert_with(|| {
            let (pie, scatter) = render_dashboard(&self.dataset, &self.selection);
            RenderedCharts {
                selection: self.selection.clone(),
                pie,
                scatter,
            }
        })
    }

    pub fn filtered_rows(&self) -> Vec<&LaunchRecord> {
        compute_filtered_rows(&self.dataset, &self.selection.site, self.selection.payload_range)
    }

    pub fn export_filtered(&mut self, path: &Path) -> Result<()> {
        let rows = compute_filtered_rows(&self.dataset, &self.selection.site, self.selection.payload_range);
        self.file_manager.export_rows(&rows, path)?;
        self.status_message = Some(format!("Exported {} launches to {}", rows.len(), path.display()));
        Ok(())
    }
}
