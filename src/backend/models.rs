use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample as returned by `GET /sensor-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub smoke: f64,
    pub distance: f64,
    pub light: f64,
    /// Raw categorical tag; only `LOW`, `MEDIUM` and `HIGH` are meaningful
    #[serde(default)]
    pub smoke_level: Option<String>,
}

impl SensorReading {
    /// Recognized smoke level, if the raw tag is exactly one of the known values.
    #[must_use]
    pub fn smoke_level(&self) -> Option<SmokeLevel> {
        self.smoke_level.as_deref().and_then(SmokeLevel::parse)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmokeLevel {
    Low,
    Medium,
    High,
}

impl SmokeLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Exact, case-sensitive match on the backend's tags.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}
