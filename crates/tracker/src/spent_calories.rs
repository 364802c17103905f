//! Distance, speed and calorie estimates for training records.
//!
//! Step length is derived from the user's height, so distances here differ
//! from the fixed-stride distance shown in day reports.

use time::Duration;
use tracing::debug;

use crate::{
    errors::{Parameter, Result, TrackerError},
    models::{Activity, ActivityRecord, ActivitySummary, Biometrics},
    parsing::parse_training_record,
};

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Step length as a fraction of height.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Walking burns this share of the running estimate at the same speed.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Distance in kilometres covered by `steps` strides of `height × 0.45`.
pub fn distance(steps: i64, height: f64) -> f64 {
    let step_length = height * STEP_LENGTH_COEFFICIENT;
    (steps as f64 * step_length) / M_IN_KM
}

/// Mean speed in km/h. Zero for a non-positive duration.
pub fn mean_speed(steps: i64, height: f64, duration: Duration) -> f64 {
    if duration <= Duration::ZERO {
        return 0.0;
    }
    distance(steps, height) / hours(duration)
}

/// Calories burned running.
pub fn running_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64> {
    validate_inputs(steps, weight, height, duration)?;
    Ok(base_calories(steps, weight, height, duration))
}

/// Calories burned walking: the running estimate damped by
/// [`WALKING_CALORIES_COEFFICIENT`].
pub fn walking_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64> {
    validate_inputs(steps, weight, height, duration)?;
    Ok(base_calories(steps, weight, height, duration) * WALKING_CALORIES_COEFFICIENT)
}

/// Compute the summary for a training record.
///
/// Fails with [`TrackerError::UnknownActivity`] when the record has no label
/// or the label names neither walking nor running.
pub fn summarize(record: &ActivityRecord, biometrics: Biometrics) -> Result<ActivitySummary> {
    let activity: Activity = record
        .activity
        .as_deref()
        .ok_or_else(|| TrackerError::UnknownActivity(String::new()))?
        .parse()?;

    let ActivityRecord {
        steps, duration, ..
    } = *record;
    let Biometrics { weight, height } = biometrics;
    let calories = match activity {
        Activity::Running => running_spent_calories(steps, weight, height, duration)?,
        Activity::Walking => walking_spent_calories(steps, weight, height, duration)?,
    };

    Ok(ActivitySummary {
        activity,
        duration_hours: hours(duration),
        distance_km: distance(steps, height),
        mean_speed_kmh: mean_speed(steps, height, duration),
        calories,
    })
}

/// Build the training report for a `"<steps>,<activity>,<duration>"` record.
///
/// The first error encountered is returned to the caller unchanged.
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String> {
    let record = parse_training_record(data)?;
    let summary = summarize(&record, Biometrics::new(weight, height))?;
    debug!(
        activity = %summary.activity,
        distance_km = summary.distance_km,
        calories = summary.calories,
        "Training summarized"
    );

    // Echo the label exactly as the caller wrote it.
    let label = record.activity.as_deref().unwrap_or_default();
    Ok(format!(
        "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
        label,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories,
    ))
}

fn validate_inputs(steps: i64, weight: f64, height: f64, duration: Duration) -> Result<()> {
    if steps <= 0 {
        return Err(TrackerError::InvalidInput(Parameter::Steps));
    }
    if weight.is_nan() || weight <= 0.0 {
        return Err(TrackerError::InvalidInput(Parameter::Weight));
    }
    if height.is_nan() || height <= 0.0 {
        return Err(TrackerError::InvalidInput(Parameter::Height));
    }
    if duration <= Duration::ZERO {
        return Err(TrackerError::InvalidInput(Parameter::Duration));
    }
    Ok(())
}

fn base_calories(steps: i64, weight: f64, height: f64, duration: Duration) -> f64 {
    let speed = mean_speed(steps, height, duration);
    (weight * speed * minutes(duration)) / MIN_IN_H
}

fn hours(duration: Duration) -> f64 {
    duration.as_seconds_f64() / 3600.0
}

fn minutes(duration: Duration) -> f64 {
    duration.as_seconds_f64() / 60.0
}
