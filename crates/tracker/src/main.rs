//! Line-oriented driver: reads records from stdin and prints reports.
//!
//! Run with:
//! ```
//! printf '5000,1h\n3000,Бег,30m\n' | TRACKER_WEIGHT=70 cargo run -p tracker
//! ```

use std::io::{self, BufRead, Write};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracker::{config::TrackerConfig, day_action_info, training_info};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Build the report for one input line, or `None` if there is nothing to print.
///
/// Two fields is a day record; everything else is treated as training.
fn report_line(line: &str, config: &TrackerConfig) -> Option<String> {
    let data = line.trim_end_matches('\r');
    if data.trim().is_empty() {
        return None;
    }

    if data.split(',').count() == 2 {
        let report = day_action_info(data, config.weight, config.height);
        return (!report.is_empty()).then_some(report);
    }

    match training_info(data, config.weight, config.height) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::error!(data, "Failed to build training report: {e}");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = TrackerConfig::load()?;
    tracing::info!(weight = config.weight, height = config.height, "Loaded configuration");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        if let Some(report) = report_line(&line?, &config) {
            write!(stdout, "{report}")?;
        }
    }

    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TrackerConfig {
        TrackerConfig {
            weight: 65.0,
            height: 1.8,
        }
    }

    #[test]
    fn test_two_fields_give_day_report() {
        let report = report_line("5000,1h", &config()).unwrap();
        assert!(report.starts_with("Количество шагов: 5000.\n"));
        assert!(report.contains("Дистанция составила 3.25 км."));
    }

    #[test]
    fn test_three_fields_give_training_report() {
        let report = report_line("3000,Бег,30m\r", &config()).unwrap();
        assert_eq!(
            report,
            "Тип тренировки: Бег\nДлительность: 0.50 ч.\nДистанция: 2.43 км.\nСкорость: 4.86 км/ч\nСожгли калорий: 157.95\n"
        );
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        assert_eq!(report_line("0,1h", &config()), None);
        assert_eq!(report_line("1000,Плавание,30m", &config()), None);
        assert_eq!(report_line("1000", &config()), None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(report_line("", &config()), None);
        assert_eq!(report_line("   \r", &config()), None);
    }

    #[test]
    fn test_processing_continues_after_bad_line() {
        let reports: Vec<String> = ["5000,1h", "garbage", "", "3000,Ходьба,30m"]
            .into_iter()
            .filter_map(|line| report_line(line, &config()))
            .collect();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].starts_with("Количество шагов: 5000."));
        assert!(reports[1].starts_with("Тип тренировки: Ходьба\n"));
    }
}
