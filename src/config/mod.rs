// src/config/mod.rs
use anyhow::{Result, Context};
use ::config::{Config, Environment, File};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const APP_NAME: &str = "launch-dash";
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    pub payload_step: f64,     // Range slider step and insight bucket width, kg
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            window_width: 1024.0,
            window_height: 900.0,
            payload_step: 1000.0,
        }
    }
}

impl DashboardConfig {
    /// Per-user config file stem, e.g. `~/.config/launch-dash/config`.
    pub fn user_config_stem() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config"))
    }

    /// Layers defaults, the per-user file, `./launch-dash.*` and
    /// `LAUNCH_DASH__*` environment variables, later sources winning.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::user_config_stem().as_deref(), Some(Path::new(APP_NAME)))
    }

    pub fn load_from(user_stem: Option<&Path>, local_stem: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("dataset_path", defaults.dataset_path.to_string_lossy().into_owned())?
            .set_default("window_width", defaults.window_width as f64)?
            .set_default("window_height", defaults.window_height as f64)?
            .set_default("payload_step", defaults.payload_step)?;

        for stem in [user_stem, local_stem].into_iter().flatten() {
            builder = builder.add_source(File::with_name(&stem.to_string_lossy()).required(false));
        }

        let config = builder
            .add_source(Environment::with_prefix("LAUNCH_DASH").prefix_separator("__").try_parsing(true))
            .build()
            .context("Failed to read dashboard configuration")?
            .try_deserialize::<Self>()
            .context("Invalid dashboard configuration")?;

        Ok(config.sanitized())
    }

    /// A dataset path given on the command line wins over every configured one.
    pub fn with_dataset_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.dataset_path = path;
        }
        self
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.payload_step.is_finite() && self.payload_step > 0.0) {
            warn!(payload_step = self.payload_step, "ignoring invalid payload_step");
            self.payload_step = defaults.payload_step;
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            warn!(width = self.window_width, height = self.window_height, "ignoring invalid window size");
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        self
    }
}
