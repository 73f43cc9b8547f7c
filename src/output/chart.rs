//! Line-chart description of a simulation, in the shape Chart.js expects.

use crate::simulation::{SeriesPoint, SimulationResult, TimeWindow};
use serde::Serialize;

pub const PALETTE: [&str; 6] = [
    "rgba(75, 192, 192, 1)",
    "rgba(192, 75, 192, 1)",
    "rgba(192, 192, 75, 1)",
    "rgba(75, 75, 192, 1)",
    "rgba(192, 75, 75, 1)",
    "rgba(75, 192, 75, 1)",
];

/// Headroom above the highest level on the y-axis.
pub const Y_PADDING: f64 = 1.2;

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<SeriesPoint>,
    pub border_color: &'static str,
    pub border_width: u32,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub scales: Scales,
    pub plugins: Plugins,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub min: f64,
    pub max: f64,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

impl ChartConfig {
    pub fn line(result: &SimulationResult, window: &TimeWindow) -> Self {
        let datasets = result
            .iter()
            .enumerate()
            .map(|(index, series)| Dataset {
                label: series.name.clone(),
                data: series.points.clone(),
                border_color: color(index),
                border_width: 2,
                fill: false,
                tension: 0.0,
            })
            .collect();

        Self {
            kind: "line",
            data: ChartData { datasets },
            options: ChartOptions {
                scales: Scales {
                    x: Axis {
                        kind: Some("linear"),
                        min: window.min_time(),
                        max: window.max_time(),
                        title: AxisTitle {
                            display: true,
                            text: "Time (hours)",
                        },
                    },
                    y: Axis {
                        kind: None,
                        min: 0.0,
                        max: result.max_level() * Y_PADDING,
                        title: AxisTitle {
                            display: true,
                            text: "Drug Level",
                        },
                    },
                },
                plugins: Plugins {
                    legend: Legend { display: true },
                },
                responsive: true,
                maintain_aspect_ratio: false,
            },
        }
    }
}
