//! Sequential check orchestration.
//!
//! Runs the plan category by category in the fixed order, then by file
//! name within each category, converting every supervised outcome into
//! one or more `ExecutionResult`s. Results are pushed through an observer
//! callback as they happen so the report streams instead of buffering.

use crate::discovery::CheckPlan;
use crate::supervisor::{ExecutionOutcome, Supervisor};
use checksmith_engine::protocol;
use checksmith_types::util::truncate;
use checksmith_types::{CheckDescriptor, CheckStatus, ExecutionResult, RunSummary};
use std::time::Duration;

const DIAGNOSTIC_LIMIT: usize = 200;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub timeout: Duration,
}

/// Streamed progress events, emitted in discovery order.
pub enum RunEvent<'a> {
    CategoryStarted { name: &'a str, count: usize },
    CheckResult {
        descriptor: &'a CheckDescriptor,
        result: ExecutionResult,
    },
}

pub fn run_checks(
    plan: &CheckPlan,
    options: &RunOptions,
    observer: &mut dyn FnMut(RunEvent<'_>),
) -> RunSummary {
    let supervisor = Supervisor::new(options.timeout);
    let mut summary = RunSummary::new();

    for category in &plan.categories {
        observer(RunEvent::CategoryStarted {
            name: &category.name,
            count: category.checks.len(),
        });

        for descriptor in &category.checks {
            let outcome = supervisor.run(descriptor);
            for result in results_for(descriptor, outcome, &supervisor) {
                summary.record(result.status);
                observer(RunEvent::CheckResult { descriptor, result });
            }
        }
    }

    summary
}

/// Convert one supervised outcome into its reportable results. Timeouts
/// and spawn failures always surface as exactly one failure; host
/// mismatches are informational, not failures.
fn results_for(
    descriptor: &CheckDescriptor,
    outcome: ExecutionOutcome,
    supervisor: &Supervisor,
) -> Vec<ExecutionResult> {
    match outcome {
        ExecutionOutcome::Skipped { reason } => vec![ExecutionResult::new(
            CheckStatus::Info,
            descriptor.check_id(),
            format!("skipped: {}", reason),
        )],

        ExecutionOutcome::TimedOut { duration } => vec![
            ExecutionResult::new(
                CheckStatus::Fail,
                format!("{}_timeout", descriptor.check_name()),
                format!(
                    "Check did not finish within {} seconds and was terminated",
                    supervisor.timeout().as_secs()
                ),
            )
            .with_duration(duration),
        ],

        ExecutionOutcome::SpawnFailed { error } => vec![ExecutionResult::new(
            CheckStatus::Fail,
            descriptor.check_id(),
            format!("failed to start: {}", truncate(&error, DIAGNOSTIC_LIMIT)),
        )],

        ExecutionOutcome::Completed {
            stdout,
            stderr,
            exit_code,
            duration,
        } => {
            let mut results = protocol::parse_output(&stdout);

            if results.is_empty() && exit_code != Some(0) {
                let code = exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                results.push(ExecutionResult::new(
                    CheckStatus::Fail,
                    descriptor.check_id(),
                    format!(
                        "exited with status {} and no result output: {}",
                        code,
                        truncate(stderr.trim(), DIAGNOSTIC_LIMIT)
                    ),
                ));
            }

            results
                .into_iter()
                .map(|result| result.with_duration(duration))
                .collect()
        }
    }
}
