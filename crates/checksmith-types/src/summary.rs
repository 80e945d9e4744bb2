use crate::CheckStatus;

/// Aggregate counters for one orchestrator run. Updated exactly once per
/// parsed result, so `total == passed + info + failed` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub info: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: CheckStatus) {
        self.total += 1;
        match status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Info => self.info += 1,
            // Unknown statuses fail the run alongside explicit failures
            CheckStatus::Fail | CheckStatus::Unknown => self.failed += 1,
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_conservation() {
        let mut summary = RunSummary::new();
        for status in [
            CheckStatus::Pass,
            CheckStatus::Pass,
            CheckStatus::Info,
            CheckStatus::Fail,
            CheckStatus::Unknown,
        ] {
            summary.record(status);
        }
        assert_eq!(summary.total, 5);
        assert_eq!(summary.total, summary.passed + summary.info + summary.failed);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.info, 1);
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_exit_code() {
        let mut summary = RunSummary::new();
        summary.record(CheckStatus::Pass);
        summary.record(CheckStatus::Info);
        assert_eq!(summary.exit_code(), 0);

        summary.record(CheckStatus::Unknown);
        assert_eq!(summary.exit_code(), 1);
    }
}
