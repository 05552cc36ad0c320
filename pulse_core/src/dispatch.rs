//! Package dispatch: turn an activity code and raw sensor numbers into a
//! [`Workout`].

use crate::{Activity, Error, Result, Workout, WorkoutSample};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Builds a workout from positional parameters of the right length
type Constructor = fn(&[f64]) -> Result<Workout>;

/// Activity → constructor table, built once on first dispatch
static CONSTRUCTORS: Lazy<HashMap<Activity, Constructor>> = Lazy::new(|| {
    let mut table: HashMap<Activity, Constructor> = HashMap::new();
    table.insert(Activity::Swimming, build_swimming);
    table.insert(Activity::Running, build_running);
    table.insert(Activity::SportsWalking, build_walking);
    table
});

/// Read a sensor package into the matching workout.
///
/// Parameters are assigned positionally:
/// `action_count, duration_hours, weight_kg` followed by `height_cm` for
/// walking or `pool_length_m, pool_lap_count` for swimming.
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout> {
    let activity: Activity = code.parse()?;
    let construct = CONSTRUCTORS
        .get(&activity)
        .ok_or_else(|| Error::UnknownActivity(code.to_string()))?;

    let workout = construct(params)?;
    tracing::debug!("Read {} package: {:?}", code, workout);
    Ok(workout)
}

fn check_arity(activity: Activity, params: &[f64]) -> Result<()> {
    let expected = activity.param_count();
    if params.len() != expected {
        return Err(Error::Arity {
            code: activity.code().to_string(),
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}

/// Action counts arrive as numbers but must be whole
fn action_count(value: f64) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= i64::MAX as f64 {
        return Err(Error::InvalidParameter {
            field: "action_count",
            value,
        });
    }
    Ok(value as i64)
}

fn sample(params: &[f64]) -> Result<WorkoutSample> {
    Ok(WorkoutSample {
        action_count: action_count(params[0])?,
        duration_hours: params[1],
        weight_kg: params[2],
    })
}

fn build_running(params: &[f64]) -> Result<Workout> {
    check_arity(Activity::Running, params)?;
    Ok(Workout::Running(sample(params)?))
}

fn build_walking(params: &[f64]) -> Result<Workout> {
    check_arity(Activity::SportsWalking, params)?;
    Ok(Workout::SportsWalking {
        sample: sample(params)?,
        height_cm: params[3],
    })
}

fn build_swimming(params: &[f64]) -> Result<Workout> {
    check_arity(Activity::Swimming, params)?;
    Ok(Workout::Swimming {
        sample: sample(params)?,
        pool_length_m: params[3],
        pool_lap_count: params[4],
    })
}
