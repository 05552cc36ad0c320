//! Report rendering.

use crate::{Result, WorkoutReport};
use serde::{Deserialize, Serialize};
use std::fmt;

impl WorkoutReport {
    /// Render the fixed-template summary line
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.activity_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

/// How reports are written to the output stream
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One summary line per workout
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Render a report as a single output line
pub fn render(report: &WorkoutReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.message()),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}
