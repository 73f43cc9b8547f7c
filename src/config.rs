use crate::dosing::Regimen;
use crate::error::{DoseError, DoseResult};
use crate::simulation::TimeWindow;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub regimens: Vec<RegimenConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub min_time: f64,
    pub max_time: f64,
    #[serde(default = "default_time_step")]
    pub time_step: f64, // hours
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimenConfig {
    pub name: String,
    pub dose: f64,
    pub period: f64,   // hours
    #[serde(default)]
    pub delay: f64,    // hours
    pub halflife: f64, // hours
}

fn default_time_step() -> f64 {
    1.0
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> DoseResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> DoseResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DoseResult<()> {
        self.window()?;
        self.regimens()?;
        Ok(())
    }

    /// Replace the window bounds, e.g. from command line overrides.
    pub fn with_bounds(mut self, min_time: Option<f64>, max_time: Option<f64>) -> DoseResult<Self> {
        if let Some(min) = min_time {
            self.window.min_time = min;
        }
        if let Some(max) = max_time {
            self.window.max_time = max;
        }
        self.window()?;
        Ok(self)
    }

    pub fn window(&self) -> DoseResult<TimeWindow> {
        TimeWindow::try_from(self.window.clone())
    }

    pub fn regimens(&self) -> DoseResult<Vec<Regimen>> {
        self.regimens
            .iter()
            .enumerate()
            .map(|(index, r)| {
                Regimen::new(r.name.clone(), r.dose, r.period, r.delay, r.halflife).map_err(|e| {
                    DoseError::Config {
                        index: index + 1,
                        name: r.name.clone(),
                        source: Box::new(e),
                    }
                })
            })
            .collect()
    }
}
