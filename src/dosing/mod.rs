use crate::error::{DoseError, DoseResult};
use serde::Serialize;

/// Tolerance for matching a time point against the dosing grid.
pub const DOSE_TIME_EPSILON: f64 = 1e-6;

/// A named, periodic bolus schedule with first-order elimination.
///
/// Several regimens may share a `name`; their levels are summed into one
/// series per drug by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regimen {
    name: String,
    dose: f64,
    period: f64,
    delay: f64,
    halflife: f64,
}

impl Regimen {
    pub fn new(
        name: impl Into<String>,
        dose: f64,
        period: f64,
        delay: f64,
        halflife: f64,
    ) -> DoseResult<Self> {
        check_finite("dose", dose)?;
        check_finite("period", period)?;
        check_finite("delay", delay)?;
        check_finite("halflife", halflife)?;

        if dose < 0.0 {
            return Err(DoseError::regimen("dose", "must not be negative"));
        }
        if period <= 0.0 {
            return Err(DoseError::regimen("period", "must be positive"));
        }
        if delay < 0.0 {
            return Err(DoseError::regimen("delay", "must not be negative"));
        }
        if halflife <= 0.0 {
            return Err(DoseError::regimen("halflife", "must be positive"));
        }

        Ok(Self {
            name: name.into(),
            dose,
            period,
            delay,
            halflife,
        })
    }

    /// Build a regimen from raw text fields, as typed into a form.
    pub fn from_fields(
        name: &str,
        dose: &str,
        period: &str,
        delay: &str,
        halflife: &str,
    ) -> DoseResult<Self> {
        Self::new(
            name,
            parse_field("dose", dose)?,
            parse_field("period", period)?,
            parse_field("delay", delay)?,
            parse_field("halflife", halflife)?,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dose(&self) -> f64 {
        self.dose
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn halflife(&self) -> f64 {
        self.halflife
    }

    /// Fraction of the level retained after one step of `time_step` hours.
    pub fn decay_factor(&self, time_step: f64) -> f64 {
        0.5_f64.powf(time_step / self.halflife)
    }

    pub fn is_dose_time(&self, time: f64) -> bool {
        if time < self.delay {
            return false;
        }
        let residue = (time - self.delay) % self.period;
        residue.abs() < DOSE_TIME_EPSILON || (self.period - residue).abs() < DOSE_TIME_EPSILON
    }

    /// Amount administered at each of `times`.
    pub fn dose_schedule(&self, times: &[f64]) -> Vec<f64> {
        times
            .iter()
            .map(|&t| if self.is_dose_time(t) { self.dose } else { 0.0 })
            .collect()
    }
}

fn check_finite(field: &'static str, value: f64) -> DoseResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DoseError::regimen(field, format!("must be a finite number, got {}", value)))
    }
}

fn parse_field(field: &'static str, raw: &str) -> DoseResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DoseError::regimen(field, "is empty"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| DoseError::regimen(field, format!("'{}' is not a number", trimmed)))
}
