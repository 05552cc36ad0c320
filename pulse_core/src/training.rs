//! Distance, speed and calorie computation for each activity.
//!
//! Distance and mean speed are shared across activities (swimming overrides
//! the speed with a pool-based figure). Calories use one empirical formula
//! per activity. Operation order in each formula is fixed so results are
//! reproducible bit-for-bit in `f64`.

use crate::{Activity, Error, Result, Workout, WorkoutReport};

/// Metres in a kilometre
const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
const MIN_IN_H: f64 = 60.0;

/// Step length for running and walking, in metres
const LEN_STEP: f64 = 0.65;

/// Stroke length for swimming, in metres
const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Divide, failing on a zero divisor instead of producing inf/NaN
fn checked_div(dividend: f64, divisor: f64, what: &'static str) -> Result<f64> {
    if divisor == 0.0 {
        return Err(Error::DivisionByZero(what));
    }
    Ok(dividend / divisor)
}

/// Floor division with the semantics of floating-point `//`.
///
/// The quotient is derived from `fmod` rather than `(a / b).floor()`, which
/// can disagree by one when `a / b` rounds up to an integer.
pub fn floor_div(dividend: f64, divisor: f64) -> Result<f64> {
    if divisor == 0.0 {
        return Err(Error::DivisionByZero("floor division"));
    }

    let rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;
    // Remainder must carry the divisor's sign
    if rem != 0.0 && ((divisor < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        Ok(floored)
    } else {
        Ok(0.0_f64.copysign(dividend / divisor))
    }
}

fn step_length(activity: Activity) -> f64 {
    match activity {
        Activity::Running | Activity::SportsWalking => LEN_STEP,
        Activity::Swimming => LEN_STROKE,
    }
}

impl Workout {
    /// Distance covered, in kilometres
    pub fn distance_km(&self) -> f64 {
        self.sample().action_count as f64 * step_length(self.activity()) / M_IN_KM
    }

    /// Average speed over the whole workout, in km/h
    pub fn mean_speed_kmh(&self) -> Result<f64> {
        match self {
            Workout::Swimming {
                sample,
                pool_length_m,
                pool_lap_count,
            } => checked_div(
                pool_length_m * pool_lap_count / M_IN_KM,
                sample.duration_hours,
                "mean speed",
            ),
            _ => checked_div(self.distance_km(), self.sample().duration_hours, "mean speed"),
        }
    }

    /// Energy spent, in kcal
    ///
    /// Not clamped: implausible inputs (e.g. very slow running) can yield a
    /// negative value.
    pub fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        let calories = match self {
            Workout::Running(sample) => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * sample.weight_kg / M_IN_KM
                    * sample.duration_hours
                    * MIN_IN_H
            }
            Workout::SportsWalking { sample, height_cm } => {
                (WLK_WEIGHT_MULTIPLIER * sample.weight_kg
                    + floor_div(speed.powi(2), *height_cm)?
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * sample.weight_kg)
                    * (sample.duration_hours * MIN_IN_H)
            }
            Workout::Swimming { sample, .. } => {
                (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * sample.weight_kg
            }
        };
        Ok(calories)
    }

    /// Compute all statistics for this workout
    pub fn report(&self) -> Result<WorkoutReport> {
        let report = WorkoutReport {
            activity_name: self.activity().name().to_string(),
            duration_hours: self.sample().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories_kcal: self.spent_calories()?,
        };

        tracing::debug!(
            "{} report: {:.3} km, {:.3} km/h, {:.3} kcal",
            report.activity_name,
            report.distance_km,
            report.mean_speed_kmh,
            report.calories_kcal
        );

        Ok(report)
    }
}
