// Build status display.
// Maps the latest workflow run to a badge label and tone, with the
// relative time formatting the badge embeds.

use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use crate::github::{RunConclusion, RunStatus, WorkflowRun};

/// Display tone for a status badge, resolved to a color by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Ok,
    Warn,
    Fail,
    Muted,
}

/// A build status badge: what to show and how loudly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStatus {
    pub label: String,
    pub tone: StatusTone,
}

impl BuildStatus {
    fn new(label: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    /// Badge for a failed status fetch.
    pub fn unavailable() -> Self {
        Self::new("Unavailable", StatusTone::Muted)
    }

    /// Derive the badge from the most recent workflow run, if any.
    pub fn from_runs(runs: &[WorkflowRun], now: DateTime<Utc>) -> Self {
        let Some(latest) = runs.first() else {
            return Self::new("No builds found", StatusTone::Muted);
        };

        let time_info = format_build_time(latest.created_at, now);

        match latest.status {
            RunStatus::InProgress | RunStatus::Queued => {
                Self::new(format!("Running ({})", time_info), StatusTone::Warn)
            }
            RunStatus::Completed => match latest.conclusion {
                Some(RunConclusion::Success) => {
                    Self::new(format!("Passed ({})", time_info), StatusTone::Ok)
                }
                Some(RunConclusion::Failure) => {
                    Self::new(format!("Failed ({})", time_info), StatusTone::Fail)
                }
                _ => Self::new(format!("Unknown ({})", time_info), StatusTone::Muted),
            },
            _ => Self::new(format!("Pending ({})", time_info), StatusTone::Muted),
        }
    }
}

/// Monitor data file published by the status repository.
#[derive(Debug, Deserialize)]
struct MonitorData {
    message: Option<String>,
}

/// Extract the display message from monitor JSON (uptime, response time).
/// Anything unusable degrades to "N/A".
pub fn parse_monitor_message(json: &str) -> String {
    serde_json::from_str::<MonitorData>(json)
        .ok()
        .and_then(|data| data.message)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Format a build timestamp relative to now: "Today at 14:05",
/// "Yesterday at 09:30", "3 days ago at 18:00", or "Jan 7, 18:00" once a
/// week has passed. Times are shown in the local timezone, 24-hour clock.
pub fn format_build_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let local = created_at.with_timezone(&Local);
    let time = local.format("%H:%M");

    let diff_days = now
        .signed_duration_since(created_at)
        .num_days()
        .max(0);

    match diff_days {
        0 => format!("Today at {}", time),
        1 => format!("Yesterday at {}", time),
        2..=6 => format!("{} days ago at {}", diff_days, time),
        _ => local.format("%b %-d, %H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn run(status: RunStatus, conclusion: Option<RunConclusion>, age: Duration) -> WorkflowRun {
        let created = Utc::now() - age;
        WorkflowRun {
            id: 1,
            name: Some("packages".to_string()),
            run_number: 42,
            status,
            conclusion,
            created_at: created,
            updated_at: created,
            html_url: "https://example.invalid/run/1".to_string(),
        }
    }

    #[test]
    fn test_no_runs() {
        let status = BuildStatus::from_runs(&[], Utc::now());
        assert_eq!(status.label, "No builds found");
        assert_eq!(status.tone, StatusTone::Muted);
    }

    #[test]
    fn test_passed() {
        let runs = vec![run(
            RunStatus::Completed,
            Some(RunConclusion::Success),
            Duration::minutes(5),
        )];
        let status = BuildStatus::from_runs(&runs, Utc::now());
        assert!(status.label.starts_with("Passed (Today at "));
        assert_eq!(status.tone, StatusTone::Ok);
    }

    #[test]
    fn test_failed() {
        let runs = vec![run(
            RunStatus::Completed,
            Some(RunConclusion::Failure),
            Duration::minutes(5),
        )];
        let status = BuildStatus::from_runs(&runs, Utc::now());
        assert!(status.label.starts_with("Failed ("));
        assert_eq!(status.tone, StatusTone::Fail);
    }

    #[test]
    fn test_running() {
        let runs = vec![run(RunStatus::InProgress, None, Duration::minutes(1))];
        let status = BuildStatus::from_runs(&runs, Utc::now());
        assert!(status.label.starts_with("Running ("));
        assert_eq!(status.tone, StatusTone::Warn);
    }

    #[test]
    fn test_cancelled_is_unknown() {
        let runs = vec![run(
            RunStatus::Completed,
            Some(RunConclusion::Cancelled),
            Duration::minutes(5),
        )];
        let status = BuildStatus::from_runs(&runs, Utc::now());
        assert!(status.label.starts_with("Unknown ("));
    }

    #[test]
    fn test_waiting_is_pending() {
        let runs = vec![run(RunStatus::Waiting, None, Duration::minutes(5))];
        let status = BuildStatus::from_runs(&runs, Utc::now());
        assert!(status.label.starts_with("Pending ("));
    }

    #[test]
    fn test_only_latest_run_counts() {
        let runs = vec![
            run(RunStatus::InProgress, None, Duration::minutes(1)),
            run(
                RunStatus::Completed,
                Some(RunConclusion::Failure),
                Duration::hours(2),
            ),
        ];
        let status = BuildStatus::from_runs(&runs, Utc::now());
        assert!(status.label.starts_with("Running ("));
    }

    #[test]
    fn test_format_build_time_buckets() {
        let now = Utc::now();

        let today = format_build_time(now - Duration::minutes(30), now);
        assert!(today.starts_with("Today at "));

        let days = format_build_time(now - Duration::days(3), now);
        assert!(days.starts_with("3 days ago at "));

        let old = format_build_time(now - Duration::days(30), now);
        assert!(!old.contains("ago"));
    }

    #[test]
    fn test_parse_monitor_message() {
        assert_eq!(
            parse_monitor_message(r#"{"message": "99.95%", "color": "brightgreen"}"#),
            "99.95%"
        );
        assert_eq!(parse_monitor_message(r#"{"color": "red"}"#), "N/A");
        assert_eq!(parse_monitor_message("not json"), "N/A");
    }

    #[test]
    fn test_format_build_time_future_clamps_to_today() {
        let now = Utc::now();
        let future = format_build_time(now + Duration::hours(2), now);
        assert!(future.starts_with("Today at "));
    }
}
