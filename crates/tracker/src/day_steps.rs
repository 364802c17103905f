//! Daily step reports.
//!
//! Day records carry no activity label and are always treated as walking.
//! The distance shown to the user assumes a fixed stride of
//! [`STEP_LENGTH`] metres, while calories go through
//! [`walking_spent_calories`] and its height-based stride.

use tracing::warn;

use crate::{
    errors::Result,
    parsing::parse_day_record,
    spent_calories::walking_spent_calories,
};

/// Length of one step in metres.
pub const STEP_LENGTH: f64 = 0.65;
/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Build the day report for a `"<steps>,<duration>"` record.
///
/// Returns an empty string if the record cannot be parsed or the calories
/// cannot be computed. The failure is logged and never returned.
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    match day_report(data, weight, height) {
        Ok(report) => report,
        Err(e) => {
            warn!(data, "Failed to build day report: {e}");
            String::new()
        }
    }
}

fn day_report(data: &str, weight: f64, height: f64) -> Result<String> {
    let record = parse_day_record(data)?;

    let distance_km = (record.steps as f64 * STEP_LENGTH) / M_IN_KM;
    let calories = walking_spent_calories(record.steps, weight, height, record.duration)?;

    Ok(format!(
        "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
        record.steps, distance_km, calories
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_report() {
        let report = day_action_info("5000,1h", 70.0, 1.75);
        assert_eq!(
            report,
            "Количество шагов: 5000.\nДистанция составила 3.25 км.\nВы сожгли 137.81 ккал.\n"
        );
    }

    #[test]
    fn test_displayed_distance_ignores_height() {
        let short = day_action_info("5000,1h", 70.0, 1.5);
        let tall = day_action_info("5000,1h", 70.0, 2.0);
        assert!(short.contains("Дистанция составила 3.25 км."));
        assert!(tall.contains("Дистанция составила 3.25 км."));
        assert_ne!(short, tall);
    }

    #[test]
    fn test_failures_collapse_to_empty() {
        for data in ["", "5000", "5000,Бег,1h", "abc,1h", "0,1h", "-5,1h", "5000,0m", "5000,1x"] {
            assert_eq!(day_action_info(data, 70.0, 1.75), "", "input {data:?}");
        }
    }

    #[test]
    fn test_invalid_biometrics_collapse_to_empty() {
        assert_eq!(day_action_info("5000,1h", 0.0, 1.75), "");
        assert_eq!(day_action_info("5000,1h", 70.0, -1.0), "");
    }
}
