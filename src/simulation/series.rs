use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One sample of a drug's level, serialised as an `{x, y}` chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    #[serde(rename = "x")]
    pub time: f64,
    #[serde(rename = "y")]
    pub level: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrugSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl DrugSeries {
    pub fn levels(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.level)
    }

    pub fn max_level(&self) -> f64 {
        self.levels().fold(0.0, f64::max)
    }

    pub fn time_of_max(&self) -> Option<f64> {
        self.points
            .iter()
            .max_by(|a, b| a.level.total_cmp(&b.level))
            .map(|p| p.time)
    }

    /// Linear trapezoidal area under the level curve.
    pub fn auc(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].time - w[0].time) * (w[0].level + w[1].level) / 2.0)
            .sum()
    }

    pub fn level_at(&self, time: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| (p.time - time).abs() < 1e-9)
            .map(|p| p.level)
    }
}

/// Per-drug series in order of each drug's first appearance in the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    series: Vec<DrugSeries>,
}

impl SimulationResult {
    pub(crate) fn push(&mut self, series: DrugSeries) {
        self.series.push(series);
    }

    pub fn get(&self, name: &str) -> Option<&DrugSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrugSeries> {
        self.series.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Highest level reached by any drug.
    pub fn max_level(&self) -> f64 {
        self.series.iter().map(DrugSeries::max_level).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a DrugSeries;
    type IntoIter = std::slice::Iter<'a, DrugSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

// Serialises as `{ "<drug>": [{"x": .., "y": ..}, ..], .. }` keeping result order.
impl Serialize for SimulationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for series in &self.series {
            map.serialize_entry(&series.name, &series.points)?;
        }
        map.end()
    }
}
