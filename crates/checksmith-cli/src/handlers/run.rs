use crate::views::report::ReportView;
use anyhow::{Result, bail};
use checksmith_runtime::{Config, RunEvent, RunOptions, discover, run_checks};
use checksmith_types::RunSummary;

pub fn handle(config: &Config, category: Option<&str>) -> Result<i32> {
    let mut plan = discover(&config.checks_dir)?;

    if let Some(filter) = category {
        plan.categories.retain(|c| c.name == filter);
        if plan.categories.is_empty() {
            bail!(
                "unknown category '{}'; expected one of: {}",
                filter,
                checksmith_types::CATEGORIES.join(", ")
            );
        }
    }

    let view = ReportView::stdout();
    view.print_header(&config.checks_dir, plan.total_checks(), config.timeout_secs);

    let options = RunOptions {
        timeout: config.timeout(),
    };

    let mut category_totals: Vec<(String, RunSummary)> = Vec::new();
    let summary = run_checks(&plan, &options, &mut |event| match event {
        RunEvent::CategoryStarted { name, count } => {
            view.print_category(name, count);
            category_totals.push((name.to_string(), RunSummary::new()));
        }
        RunEvent::CheckResult { result, .. } => {
            if let Some((_, totals)) = category_totals.last_mut() {
                totals.record(result.status);
            }
            view.print_result(&result);
        }
    });

    view.print_summary(&summary, &category_totals);
    Ok(summary.exit_code())
}
