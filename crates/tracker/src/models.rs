use std::{fmt, str::FromStr};

use serde::Serialize;
use time::Duration;

use crate::errors::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    /// The label used in training records and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Walking => "Ходьба",
            Activity::Running => "Бег",
        }
    }
}

impl FromStr for Activity {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ходьба" | "Walking" => Ok(Activity::Walking),
            "Бег" | "Running" => Ok(Activity::Running),
            other => Err(TrackerError::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated activity record.
///
/// `activity` holds the raw label of a training record and is `None` for
/// day records, which are walking by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub steps: i64,
    pub activity: Option<String>,
    pub duration: Duration,
}

/// Body parameters of the user. Weight in kilograms, height in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub weight: f64,
    pub height: f64,
}

impl Biometrics {
    pub const fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

/// Metrics derived from one activity record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub activity: Activity,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_from_label() {
        assert_eq!("Бег".parse::<Activity>().unwrap(), Activity::Running);
        assert_eq!("Ходьба".parse::<Activity>().unwrap(), Activity::Walking);
        assert_eq!("Running".parse::<Activity>().unwrap(), Activity::Running);
        assert_eq!("Walking".parse::<Activity>().unwrap(), Activity::Walking);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = ActivitySummary {
            activity: Activity::Running,
            duration_hours: 0.5,
            distance_km: 2.25,
            mean_speed_kmh: 4.5,
            calories: 146.25,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "activity": "running",
                "duration_hours": 0.5,
                "distance_km": 2.25,
                "mean_speed_kmh": 4.5,
                "calories": 146.25,
            })
        );
    }

    #[test]
    fn test_activity_labels_are_case_sensitive() {
        assert_eq!(
            "бег".parse::<Activity>(),
            Err(TrackerError::UnknownActivity("бег".to_string()))
        );
        assert!("running".parse::<Activity>().is_err());
        assert!("".parse::<Activity>().is_err());
    }
}
