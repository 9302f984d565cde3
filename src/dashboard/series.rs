//! Projection of chronologically ordered readings into chart series.

use serde::Serialize;

use crate::backend::{SensorReading, SmokeLevel};
use crate::dashboard::labels::TimeLabeler;

/// A measured quantity plotted as its own time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Temperature,
    Smoke,
    Distance,
    Light,
}

impl Dimension {
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Smoke, Self::Distance, Self::Light];

    #[must_use]
    pub fn value(self, reading: &SensorReading) -> f64 {
        match self {
            Self::Temperature => reading.temperature,
            Self::Smoke => reading.smoke,
            Self::Distance => reading.distance,
            Self::Light => reading.light,
        }
    }

    /// Dataset legend label, including units.
    #[must_use]
    pub const fn legend(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Smoke => "Smoke (raw)",
            Self::Distance => "Distance (cm)",
            Self::Light => "Light (raw)",
        }
    }

    /// Vertical axis title.
    #[must_use]
    pub const fn axis_title(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Smoke => "Smoke",
            Self::Distance => "Distance",
            Self::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub dimension: Dimension,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SmokeLevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SmokeLevelCounts {
    /// Count recognized tags; anything else is skipped.
    pub fn tally<'a>(readings: impl IntoIterator<Item = &'a SensorReading>) -> Self {
        let mut counts = Self::default();
        for level in readings.into_iter().filter_map(SensorReading::smoke_level) {
            match level {
                SmokeLevel::Low => counts.low += 1,
                SmokeLevel::Medium => counts.medium += 1,
                SmokeLevel::High => counts.high += 1,
            }
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, level: SmokeLevel) -> usize {
        match level {
            SmokeLevel::Low => self.low,
            SmokeLevel::Medium => self.medium,
            SmokeLevel::High => self.high,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Everything the charts need, derived from one reading sequence.
///
/// Built fresh for each render and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSet {
    pub labels: Vec<String>,
    pub temperature: Series,
    pub smoke: Series,
    pub distance: Series,
    pub light: Series,
    pub smoke_levels: SmokeLevelCounts,
}

impl SeriesSet {
    /// `readings` must already be in chronological order.
    #[must_use]
    pub fn build(readings: &[SensorReading], labeler: &TimeLabeler) -> Self {
        let labels: Vec<String> = readings.iter().map(|r| labeler.label(r.timestamp)).collect();

        let project = |dimension: Dimension| Series {
            dimension,
            points: readings
                .iter()
                .zip(&labels)
                .map(|(reading, label)| SeriesPoint {
                    label: label.clone(),
                    value: dimension.value(reading),
                })
                .collect(),
        };

        Self {
            temperature: project(Dimension::Temperature),
            smoke: project(Dimension::Smoke),
            distance: project(Dimension::Distance),
            light: project(Dimension::Light),
            smoke_levels: SmokeLevelCounts::tally(readings),
            labels,
        }
    }

    #[must_use]
    pub fn series(&self, dimension: Dimension) -> &Series {
        match dimension {
            Dimension::Temperature => &self.temperature,
            Dimension::Smoke => &self.smoke,
            Dimension::Distance => &self.distance,
            Dimension::Light => &self.light,
        }
    }
}
