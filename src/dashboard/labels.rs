//! Time-of-day axis labels for reading timestamps.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::fmt::Write;

use crate::config::Config;

/// Formats reading timestamps as time-of-day labels for the horizontal axis.
#[derive(Debug, Clone)]
pub struct TimeLabeler {
    offset: FixedOffset,
    format: String,
}

impl TimeLabeler {
    #[must_use]
    pub fn new(offset: FixedOffset, format: impl Into<String>) -> Self {
        Self {
            offset,
            format: format.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.label_offset, config.label_format.clone())
    }

    #[must_use]
    pub fn label(&self, timestamp: DateTime<Utc>) -> String {
        let local = timestamp.with_timezone(&self.offset);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.format)).is_err() {
            // Unparseable format string; fall back to ISO time
            return local.format("%H:%M:%S").to_string();
        }
        out
    }
}

impl Default for TimeLabeler {
    fn default() -> Self {
        Self::new(Utc.fix(), "%H:%M:%S")
    }
}
