use std::time::Duration;

/// Classified outcome of one result line. The wire protocol is
/// case-sensitive; unrecognized tokens are accepted but classified
/// `Unknown`, which still fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Info,
    Fail,
    Unknown,
}

impl CheckStatus {
    /// Alias table for the first field of a result line.
    pub fn from_token(token: &str) -> Self {
        match token {
            "ENABLED" | "PASS" => Self::Pass,
            "DISABLED" | "INFO" => Self::Info,
            "FAIL" | "BROKEN" => Self::Fail,
            _ => Self::Unknown,
        }
    }

    /// Whether this status contributes to the run's failure count.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail | Self::Unknown)
    }
}

/// One parsed result line from a check invocation. A single check may
/// emit several of these; the duration belongs to the owning process and
/// is attached by the supervisor, not reported by the check itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: CheckStatus,
    pub check_id: String,
    pub message: String,
    pub command: Option<String>,
    pub duration: Option<Duration>,
}

impl ExecutionResult {
    pub fn new(status: CheckStatus, check_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            check_id: check_id.into(),
            message: message.into(),
            command: None,
            duration: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}
