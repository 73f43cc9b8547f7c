pub mod series;
pub mod window;

use crate::dosing::Regimen;
use log::{debug, warn};

pub use series::*;
pub use window::*;

/// Simulate the aggregate level of every drug named in `regimens` over `window`.
///
/// Regimens sharing a name are simulated independently and summed step by
/// step. Drugs appear in the result in order of first appearance.
pub fn simulate(regimens: &[Regimen], window: &TimeWindow) -> SimulationResult {
    let times = window.time_points();
    debug!(
        "Simulating {} regimens over {} time steps",
        regimens.len(),
        times.len()
    );

    let mut names: Vec<&str> = Vec::new();
    for regimen in regimens {
        if !names.contains(&regimen.name()) {
            names.push(regimen.name());
        }
    }

    let mut result = SimulationResult::default();
    for name in names {
        let mut totals = vec![0.0; times.len()];
        for regimen in regimens.iter().filter(|r| r.name() == name) {
            let levels = regimen_levels(regimen, &times, window.time_step());
            for (total, level) in totals.iter_mut().zip(levels) {
                *total += level;
            }
        }

        debug!("Drug '{}' aggregated", name);
        result.push(DrugSeries {
            name: name.to_string(),
            points: times
                .iter()
                .zip(totals)
                .map(|(&time, level)| SeriesPoint { time, level })
                .collect(),
        });
    }

    result
}

/// Level of a single regimen at each of `times`.
///
/// Each step the previous level decays by one step's worth of elimination and
/// any dose scheduled at that time is added on top.
pub fn regimen_levels(regimen: &Regimen, times: &[f64], time_step: f64) -> Vec<f64> {
    let doses = regimen.dose_schedule(times);
    if regimen.dose() > 0.0 && doses.iter().all(|&d| d == 0.0) {
        warn!(
            "Regimen '{}' has no dose inside the window (delay {} h)",
            regimen.name(),
            regimen.delay()
        );
    }

    let decay = regimen.decay_factor(time_step);
    let mut levels = Vec::with_capacity(doses.len());
    let mut level = 0.0;
    for dose in doses {
        level = level * decay + dose;
        levels.push(level);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn daily() -> Regimen {
        Regimen::new("a", 100.0, 24.0, 0.0, 24.0).unwrap()
    }

    #[test]
    fn test_single_regimen_levels() {
        let window = TimeWindow::hourly(0.0, 48.0).unwrap();
        let result = simulate(&[daily()], &window);
        let series = result.get("a").unwrap();

        assert_eq!(series.points.len(), 49);
        assert_relative_eq!(series.points[0].level, 100.0);

        let decay = daily().decay_factor(1.0);
        assert_relative_eq!(series.points[23].level * decay, 50.0, epsilon = 1e-9);
        assert_relative_eq!(series.points[24].level, 150.0, epsilon = 1e-9);
        assert_relative_eq!(series.points[48].level, 175.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let window = TimeWindow::hourly(0.0, 10.0).unwrap();
        assert!(simulate(&[], &window).is_empty());
    }

    #[test]
    fn test_zero_dose_and_late_delay() {
        let window = TimeWindow::hourly(0.0, 24.0).unwrap();
        let regimens = vec![
            Regimen::new("zero", 0.0, 6.0, 0.0, 4.0).unwrap(),
            Regimen::new("late", 10.0, 6.0, 100.0, 4.0).unwrap(),
        ];
        let result = simulate(&regimens, &window);
        for name in ["zero", "late"] {
            let series = result.get(name).unwrap();
            assert_eq!(series.points.len(), window.num_steps());
            assert!(series.levels().all(|l| l == 0.0));
        }
    }

    #[test]
    fn test_result_order_follows_input() {
        let window = TimeWindow::hourly(0.0, 4.0).unwrap();
        let regimens = vec![
            Regimen::new("zeta", 1.0, 2.0, 0.0, 1.0).unwrap(),
            Regimen::new("alpha", 1.0, 2.0, 0.0, 1.0).unwrap(),
            Regimen::new("zeta", 2.0, 3.0, 1.0, 1.0).unwrap(),
        ];
        let result = simulate(&regimens, &window);
        assert_eq!(result.names(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_window_not_starting_at_zero() {
        let window = TimeWindow::hourly(10.0, 20.0).unwrap();
        let regimen = Regimen::new("a", 10.0, 4.0, 0.0, 2.0).unwrap();
        let series = simulate(&[regimen], &window).get("a").unwrap().clone();
        assert_eq!(series.points[0].time, 10.0);
        // first in-window dose is at t = 12
        assert_eq!(series.points[0].level, 0.0);
        assert_relative_eq!(series.points[2].level, 10.0);
    }

    #[test]
    fn test_recurrence_differs_from_decay_after_summing() {
        let regimen = Regimen::new("a", 100.0, 2.0, 0.0, 1.0).unwrap();
        let times = [0.0, 1.0, 2.0];
        let levels = regimen_levels(&regimen, &times, 1.0);
        assert_relative_eq!(levels[1], 50.0);
        assert_relative_eq!(levels[2], 125.0);
    }
}
