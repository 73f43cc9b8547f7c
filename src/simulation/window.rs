use crate::config::WindowConfig;
use crate::error::{DoseError, DoseResult};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of time steps in a window.
pub const MAX_STEPS: usize = 1_000_000;

/// Discretised span over which the simulation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WindowConfig")]
pub struct TimeWindow {
    min_time: f64,
    max_time: f64,
    time_step: f64,
}

impl TimeWindow {
    pub fn new(min_time: f64, max_time: f64, time_step: f64) -> DoseResult<Self> {
        if !min_time.is_finite() || !max_time.is_finite() {
            return Err(DoseError::InvalidWindow(format!(
                "bounds must be finite numbers, got [{}, {}]",
                min_time, max_time
            )));
        }
        if min_time >= max_time {
            return Err(DoseError::InvalidWindow(format!(
                "min_time ({}) must be less than max_time ({})",
                min_time, max_time
            )));
        }
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(DoseError::InvalidWindow(format!(
                "time_step must be positive, got {}",
                time_step
            )));
        }

        // Compared in f64 so huge spans cannot overflow the cast
        let steps = ((max_time - min_time) / time_step).ceil() + 1.0;
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(DoseError::InvalidWindow(format!(
                "[{}, {}] with step {} exceeds {} time steps",
                min_time, max_time, time_step, MAX_STEPS
            )));
        }

        Ok(Self {
            min_time,
            max_time,
            time_step,
        })
    }

    /// Window with a one hour step.
    pub fn hourly(min_time: f64, max_time: f64) -> DoseResult<Self> {
        Self::new(min_time, max_time, 1.0)
    }

    pub fn min_time(&self) -> f64 {
        self.min_time
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn num_steps(&self) -> usize {
        ((self.max_time - self.min_time) / self.time_step).ceil() as usize + 1
    }

    /// `min_time + i * time_step` for every step. The last point may overshoot
    /// `max_time` when the span is not a multiple of the step.
    pub fn time_points(&self) -> Vec<f64> {
        (0..self.num_steps())
            .map(|i| self.min_time + i as f64 * self.time_step)
            .collect()
    }
}

impl TryFrom<WindowConfig> for TimeWindow {
    type Error = DoseError;

    fn try_from(config: WindowConfig) -> DoseResult<Self> {
        Self::new(config.min_time, config.max_time, config.time_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hourly_window() {
        let window = TimeWindow::hourly(0.0, 48.0).unwrap();
        assert_eq!(window.num_steps(), 49);
        let times = window.time_points();
        assert_eq!(times.first(), Some(&0.0));
        assert_eq!(times.last(), Some(&48.0));
    }

    #[test]
    fn test_uneven_span_overshoots() {
        let window = TimeWindow::new(0.0, 10.0, 3.0).unwrap();
        assert_eq!(window.time_points(), vec![0.0, 3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_offset_window() {
        let window = TimeWindow::new(-2.0, 1.0, 0.5).unwrap();
        let times = window.time_points();
        assert_eq!(times.len(), 7);
        assert_relative_eq!(times[3], -0.5);
    }

    #[test]
    fn test_rejects_invalid_windows() {
        assert!(matches!(
            TimeWindow::hourly(10.0, 5.0),
            Err(DoseError::InvalidWindow(_))
        ));
        assert!(TimeWindow::hourly(5.0, 5.0).is_err());
        assert!(TimeWindow::hourly(f64::NAN, 5.0).is_err());
        assert!(TimeWindow::new(0.0, 5.0, 0.0).is_err());
        assert!(TimeWindow::new(0.0, 5.0, -1.0).is_err());
    }

    #[test]
    fn test_rejects_too_many_steps() {
        assert!(matches!(
            TimeWindow::hourly(0.0, 1e300),
            Err(DoseError::InvalidWindow(_))
        ));
        assert!(TimeWindow::hourly(0.0, 1e12).is_err());
        assert!(TimeWindow::hourly(-f64::MAX, f64::MAX).is_err());

        let largest = TimeWindow::hourly(0.0, (MAX_STEPS - 1) as f64).unwrap();
        assert_eq!(largest.num_steps(), MAX_STEPS);
        assert!(TimeWindow::hourly(0.0, MAX_STEPS as f64).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let window: TimeWindow =
            serde_json::from_str(r#"{"min_time":0,"max_time":10}"#).unwrap();
        assert_eq!(window.time_step(), 1.0);
        assert_eq!(window.num_steps(), 11);

        assert!(serde_json::from_str::<TimeWindow>(
            r#"{"min_time":0,"max_time":10,"time_step":0}"#
        )
        .is_err());
        assert!(serde_json::from_str::<TimeWindow>(r#"{"min_time":10,"max_time":5}"#).is_err());
    }
}
