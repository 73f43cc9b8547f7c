pub mod chart;

use crate::error::DoseResult;
use crate::simulation::{SimulationResult, TimeWindow};
use log::info;
use std::fs::File;
use std::path::Path;

pub use chart::ChartConfig;

pub fn save_results<P: AsRef<Path>>(
    result: &SimulationResult,
    window: &TimeWindow,
    output_dir: P,
) -> DoseResult<()> {
    let output_path = output_dir.as_ref();

    // Long-format levels
    save_levels(result, &output_path.join("levels.csv"))?;

    // Per-drug peak and exposure
    save_summary(result, &output_path.join("summary.csv"))?;

    save_json(result, &output_path.join("series.json"))?;

    let chart = ChartConfig::line(result, window);
    save_json(&chart, &output_path.join("chart.json"))?;

    info!("All results saved to {:?}", output_path);
    Ok(())
}

fn save_levels<P: AsRef<Path>>(result: &SimulationResult, path: P) -> DoseResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["DRUG", "TIME", "LEVEL"])?;

    for series in result {
        for point in &series.points {
            writer.write_record([
                series.name.clone(),
                point.time.to_string(),
                point.level.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn save_summary<P: AsRef<Path>>(result: &SimulationResult, path: P) -> DoseResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["DRUG", "CMAX", "TMAX", "AUC"])?;

    for series in result {
        writer.write_record([
            series.name.clone(),
            series.max_level().to_string(),
            series.time_of_max().unwrap_or(0.0).to_string(),
            series.auc().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn save_json<T: serde::Serialize, P: AsRef<Path>>(value: &T, path: P) -> DoseResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
