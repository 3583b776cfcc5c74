use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE: &str = "lintune.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartView {
    /// Fixed-size chart drawn straight onto the window
    #[default]
    Canvas,
    /// Pannable egui_plot chart
    Plot,
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartView::Canvas => write!(f, "Canvas"),
            ChartView::Plot => write!(f, "Interactive plot"),
        }
    }
}

/// View preferences. Slope and intercept are deliberately not part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub font_size: f32,
    pub chart_w: f32,
    pub chart_h: f32,
    pub chart_view: ChartView,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { font_size: 14., chart_w: 600., chart_h: 400., chart_view: ChartView::Canvas }
    }
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("using default settings, could not read {}: {e}", path.display());
                Self::default()
            },
        }
    }
}
