//! Activity summaries from step-count records.
//!
//! Two entry points turn a comma-delimited record plus the user's weight and
//! height into a text report:
//!
//! - [`day_action_info`] for `"<steps>,<duration>"` records. Walking only;
//!   failures are logged and yield an empty report.
//! - [`training_info`] for `"<steps>,<activity>,<duration>"` records, where
//!   the activity is walking or running. Failures are returned.
//!
//! ```rust
//! let report = tracker::training_info("3000,Бег,30m", 65.0, 1.8).unwrap();
//! assert!(report.starts_with("Тип тренировки: Бег\n"));
//!
//! assert_eq!(tracker::day_action_info("0,1h", 70.0, 1.75), "");
//! ```

pub mod config;
pub mod day_steps;
pub mod errors;
pub mod models;
pub mod parsing;
pub mod spent_calories;

pub use day_steps::day_action_info;
pub use errors::{Parameter, RecordField, TrackerError};
pub use models::{Activity, ActivityRecord, ActivitySummary, Biometrics};
pub use spent_calories::training_info;
