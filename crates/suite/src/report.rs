//! Suite execution and reporting
//!
//! Runs the scenario set in a fixed order, times each scenario, and
//! collects the outcomes into a report. One scenario's failure never
//! stops the rest; the suite always runs to the end.

use std::future::Future;
use std::time::{Duration, Instant};

use apivet_application::{HttpClient, ScenarioError, ScenarioResult};
use chrono::{DateTime, Utc};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::scenarios::Scenarios;

/// Outcome of one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: &'static str,
    /// The failure, if the scenario failed.
    pub error: Option<ScenarioError>,
    /// Wall-clock time the scenario took.
    pub duration: Duration,
}

impl ScenarioOutcome {
    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Report for one full suite run.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Unique id for this run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Base URL of the target service.
    pub base_url: String,
    /// Outcome per scenario, in execution order.
    pub outcomes: Vec<ScenarioOutcome>,
    /// Wall-clock time for the whole run.
    pub duration: Duration,
}

impl SuiteReport {
    /// Returns true if every scenario passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    /// Number of scenarios that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of scenarios that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    /// Pass rate as a percentage.
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            100.0
        } else {
            (self.passed_count() as f64 / self.outcomes.len() as f64) * 100.0
        }
    }

    /// Renders a human-readable summary, one line per scenario.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::with_capacity(self.outcomes.len() + 2);
        lines.push(format!("suite run {} against {}", self.run_id, self.base_url));
        for outcome in &self.outcomes {
            let millis = outcome.duration.as_millis();
            match &outcome.error {
                None => lines.push(format!("  pass {} ({millis} ms)", outcome.name)),
                Some(error) => {
                    lines.push(format!("  FAIL {}: {error} ({millis} ms)", outcome.name));
                }
            }
        }
        lines.push(format!(
            "{} passed, {} failed in {} ms",
            self.passed_count(),
            self.failed_count(),
            self.duration.as_millis()
        ));
        lines.join("\n")
    }
}

/// Runs every scenario in order and collects the outcomes.
pub async fn run_all<C: HttpClient>(scenarios: &Scenarios<C>) -> SuiteReport {
    let run_id = Uuid::now_v7();
    let started_at = Utc::now();
    let start = Instant::now();
    info!(%run_id, base_url = %scenarios.base(), "starting suite");

    let outcomes = vec![
        run_one("register user", scenarios.register_user()).await,
        run_one("login user", scenarios.login_user()).await,
        run_one("fetch single user", scenarios.fetch_single_user()).await,
        run_one("create job record", scenarios.create_job()).await,
        run_one("update job record", scenarios.update_job()).await,
        run_one("reject bodyless create", scenarios.reject_bodyless_create()).await,
        run_one("delete user", scenarios.delete_user()).await,
    ];

    SuiteReport {
        run_id,
        started_at,
        base_url: scenarios.base().to_string(),
        outcomes,
        duration: start.elapsed(),
    }
}

async fn run_one<F>(name: &'static str, scenario: F) -> ScenarioOutcome
where
    F: Future<Output = ScenarioResult<()>>,
{
    let start = Instant::now();
    let result = scenario.instrument(info_span!("scenario", name)).await;
    let duration = start.elapsed();

    match &result {
        Ok(()) => info!(name, millis = duration.as_millis() as u64, "scenario passed"),
        Err(error) => warn!(name, %error, category = error.category(), "scenario failed"),
    }

    ScenarioOutcome {
        name,
        error: result.err(),
        duration,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn outcome(name: &'static str, error: Option<ScenarioError>) -> ScenarioOutcome {
        ScenarioOutcome {
            name,
            error,
            duration: Duration::from_millis(120),
        }
    }

    fn report(outcomes: Vec<ScenarioOutcome>) -> SuiteReport {
        SuiteReport {
            run_id: Uuid::now_v7(),
            started_at: Utc::now(),
            base_url: "https://reqres.in/".to_string(),
            outcomes,
            duration: Duration::from_millis(300),
        }
    }

    #[test]
    fn test_all_passed_with_no_failures() {
        let report = report(vec![outcome("register user", None), outcome("login user", None)]);
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 0);
        assert!((report.pass_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report_has_full_pass_rate() {
        let report = report(Vec::new());
        assert!((report.pass_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_with_a_failure() {
        let failure = ScenarioError::MissingField {
            field: "/token".to_string(),
        };
        let report = report(vec![
            outcome("register user", None),
            outcome("login user", Some(failure)),
        ]);

        assert!(!report.all_passed());
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!((report.pass_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_lists_each_scenario() {
        let failure = ScenarioError::MissingField {
            field: "/token".to_string(),
        };
        let report = report(vec![
            outcome("register user", None),
            outcome("login user", Some(failure)),
        ]);
        let summary = report.summary();

        assert!(summary.contains("pass register user (120 ms)"));
        assert!(summary.contains("FAIL login user: missing required field: /token"));
        assert!(summary.contains("1 passed, 1 failed in 300 ms"));
    }
}
