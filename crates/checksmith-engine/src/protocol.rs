//! Line-oriented check output protocol.
//!
//! Checks print `STATUS|CHECK_ID|MESSAGE|[VERIFICATION_COMMAND]` lines on
//! stdout. Parsing is total: a malformed line becomes a Fail result
//! carrying the offending text, so nothing a check prints is ever
//! silently dropped.

use checksmith_types::{CheckStatus, ExecutionResult};

/// Synthetic check id attached to results built from unparseable lines.
pub const MALFORMED_CHECK_ID: &str = "malformed_output";

/// Parse one stdout line into a result. Never fails; schema violations
/// produce a Fail-classified result embedding the raw line.
pub fn parse_line(line: &str) -> ExecutionResult {
    // Checks may run under interpreters with CRLF line endings
    let line = line.strip_suffix('\r').unwrap_or(line);

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 3 || fields.len() > 4 || fields[0].is_empty() || fields[1].is_empty() {
        return malformed(line);
    }

    let mut result = ExecutionResult::new(
        CheckStatus::from_token(fields[0]),
        fields[1],
        fields[2],
    );
    if let Some(command) = fields.get(3)
        && !command.is_empty()
    {
        result = result.with_command(*command);
    }
    result
}

/// Parse every non-blank line of a check's stdout independently.
pub fn parse_output(stdout: &str) -> Vec<ExecutionResult> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn malformed(line: &str) -> ExecutionResult {
    ExecutionResult::new(
        CheckStatus::Fail,
        MALFORMED_CHECK_ID,
        format!("Unparseable result line: '{}'", line),
    )
}
