//! Core domain types for the Pulse workout calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activities and their short codes
//! - Raw workout samples as read from the sensors
//! - The per-activity workout variants
//! - Computed workout reports

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Activity Types
// ============================================================================

/// Kind of workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Running,
    SportsWalking,
    Swimming,
}

impl Activity {
    /// All activities, in dispatch table order
    pub const ALL: [Activity; 3] = [Activity::Swimming, Activity::Running, Activity::SportsWalking];

    /// Three-letter code used by the sensor packages
    pub fn code(self) -> &'static str {
        match self {
            Activity::Running => "RUN",
            Activity::SportsWalking => "WLK",
            Activity::Swimming => "SWM",
        }
    }

    /// Name shown in the report line
    pub fn name(self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::SportsWalking => "SportsWalking",
            Activity::Swimming => "Swimming",
        }
    }

    /// Look up an activity by its package code (case-sensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }

    /// Number of positional parameters a package for this activity carries
    pub fn param_count(self) -> usize {
        match self {
            Activity::Running => 3,
            Activity::SportsWalking => 4,
            Activity::Swimming => 5,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::UnknownActivity(s.to_string()))
    }
}

// ============================================================================
// Workout Types
// ============================================================================

/// Readings common to every activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSample {
    /// Steps or strokes recorded by the sensor
    pub action_count: i64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

/// A workout of a specific activity, ready for computation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "activity", rename_all = "snake_case")]
pub enum Workout {
    Running(WorkoutSample),
    SportsWalking {
        sample: WorkoutSample,
        height_cm: f64,
    },
    Swimming {
        sample: WorkoutSample,
        pool_length_m: f64,
        pool_lap_count: f64,
    },
}

impl Workout {
    /// The activity this workout belongs to
    pub fn activity(&self) -> Activity {
        match self {
            Workout::Running(_) => Activity::Running,
            Workout::SportsWalking { .. } => Activity::SportsWalking,
            Workout::Swimming { .. } => Activity::Swimming,
        }
    }

    /// The shared sensor readings
    pub fn sample(&self) -> &WorkoutSample {
        match self {
            Workout::Running(sample) => sample,
            Workout::SportsWalking { sample, .. } => sample,
            Workout::Swimming { sample, .. } => sample,
        }
    }
}

// ============================================================================
// Report Type
// ============================================================================

/// Computed statistics for a single workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutReport {
    pub activity_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
