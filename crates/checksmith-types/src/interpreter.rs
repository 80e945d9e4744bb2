use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of script interpreters a check can target. Selected once
/// at discovery time from the file extension and carried on the
/// descriptor, so the supervisor and parser stay interpreter-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpreterKind {
    #[serde(rename = "bash")]
    PosixShell,
    #[serde(rename = "powershell")]
    WindowsPowerShell,
    #[serde(rename = "cmd")]
    WindowsCommand,
}

impl InterpreterKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "sh" => Some(Self::PosixShell),
            "ps1" => Some(Self::WindowsPowerShell),
            "cmd" => Some(Self::WindowsCommand),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::PosixShell => "sh",
            Self::WindowsPowerShell => "ps1",
            Self::WindowsCommand => "cmd",
        }
    }

    /// Identifier used in the template registry and on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PosixShell => "bash",
            Self::WindowsPowerShell => "powershell",
            Self::WindowsCommand => "cmd",
        }
    }

    /// Placeholder command idiom matching the interpreter's invocation
    /// style, substituted for COMMAND_HINT when scaffolding a check.
    pub fn command_hint(&self) -> &'static str {
        match self {
            Self::PosixShell => "replace_with_command",
            Self::WindowsPowerShell => "Replace-With-Command",
            Self::WindowsCommand => "REPLACE_WITH_COMMAND",
        }
    }

    /// Whether generated files need the executable bit (unix only).
    pub fn needs_executable_bit(&self) -> bool {
        matches!(self, Self::PosixShell)
    }
}

impl fmt::Display for InterpreterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpreterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Self::PosixShell),
            "powershell" => Ok(Self::WindowsPowerShell),
            "cmd" => Ok(Self::WindowsCommand),
            other => Err(format!(
                "unknown interpreter '{}' (expected bash, powershell, or cmd)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_round_trip() {
        for kind in [
            InterpreterKind::PosixShell,
            InterpreterKind::WindowsPowerShell,
            InterpreterKind::WindowsCommand,
        ] {
            assert_eq!(InterpreterKind::from_extension(kind.extension()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(InterpreterKind::from_extension("py"), None);
        assert_eq!(InterpreterKind::from_extension(""), None);
    }

    #[test]
    fn test_from_str_matches_name() {
        assert_eq!(
            "powershell".parse::<InterpreterKind>().unwrap(),
            InterpreterKind::WindowsPowerShell
        );
        assert!("zsh".parse::<InterpreterKind>().is_err());
    }
}
