//! Streamed run report.
//!
//! One colorized line per result as it arrives, then a per-category
//! summary. Colors are dropped when stdout is not a terminal so piped
//! output stays machine-friendly.

use checksmith_types::{CheckStatus, ExecutionResult, RunSummary};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;

const MODERATE_DURATION: Duration = Duration::from_secs(1);
const SLOW_DURATION: Duration = Duration::from_secs(5);

pub struct ReportView {
    color: bool,
}

impl ReportView {
    pub fn stdout() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn print_header(&self, checks_dir: &Path, total: usize, timeout_secs: u64) {
        println!(
            "Running {} checks from {} (timeout {}s per check)",
            total,
            checks_dir.display(),
            timeout_secs
        );
    }

    pub fn print_category(&self, name: &str, count: usize) {
        println!();
        if count == 0 {
            // Empty categories stay visible so coverage gaps are obvious
            if self.color {
                println!("{} {}", name.bold(), "(no checks)".bright_black());
            } else {
                println!("{} (no checks)", name);
            }
        } else if self.color {
            println!("{} ({} checks)", name.bold(), count);
        } else {
            println!("{} ({} checks)", name, count);
        }
    }

    pub fn print_result(&self, result: &ExecutionResult) {
        let mut line = format!(
            "  {} {}: {}",
            self.status_cell(result.status),
            result.check_id,
            result.message
        );

        if let Some(duration) = result.duration {
            line.push_str(&format!(" {}", self.duration_cell(duration)));
        }
        println!("{}", line);

        if let Some(command) = &result.command {
            if self.color {
                println!("      try: {}", command.cyan());
            } else {
                println!("      try: {}", command);
            }
        }
    }

    pub fn print_summary(&self, summary: &RunSummary, per_category: &[(String, RunSummary)]) {
        println!();
        if self.color {
            println!("{}", "=== Summary ===".bold());
        } else {
            println!("=== Summary ===");
        }

        for (name, totals) in per_category {
            if totals.total == 0 {
                continue;
            }
            println!(
                "  {}: {} passed, {} info, {} failed",
                name, totals.passed, totals.info, totals.failed
            );
        }

        println!(
            "Total: {} results ({} passed, {} info, {} failed)",
            summary.total, summary.passed, summary.info, summary.failed
        );

        if summary.failed == 0 {
            if self.color {
                println!("{}", "All checks passed.".green().bold());
            } else {
                println!("All checks passed.");
            }
        } else if self.color {
            println!("{}", format!("{} failing results.", summary.failed).red().bold());
        } else {
            println!("{} failing results.", summary.failed);
        }
    }

    fn status_cell(&self, status: CheckStatus) -> String {
        let (glyph, token) = match status {
            CheckStatus::Pass => ("✓", "PASS"),
            CheckStatus::Info => ("ℹ", "INFO"),
            CheckStatus::Fail => ("✗", "FAIL"),
            CheckStatus::Unknown => ("?", "UNKNOWN"),
        };

        let cell = format!("{} {}", glyph, token);
        if !self.color {
            return cell;
        }
        match status {
            CheckStatus::Pass => cell.green().to_string(),
            CheckStatus::Info => cell.blue().to_string(),
            CheckStatus::Fail => cell.red().to_string(),
            CheckStatus::Unknown => cell.yellow().to_string(),
        }
    }

    /// Duration annotation with a severity tier, so slow checks stand out
    /// without a separate metrics pipeline.
    fn duration_cell(&self, duration: Duration) -> String {
        let cell = format!("({:.2}s)", duration.as_secs_f64());
        if !self.color {
            return cell;
        }
        if duration >= SLOW_DURATION {
            cell.red().to_string()
        } else if duration >= MODERATE_DURATION {
            cell.yellow().to_string()
        } else {
            cell.bright_black().to_string()
        }
    }
}
