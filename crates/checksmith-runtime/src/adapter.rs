//! Interpreter dispatch.
//!
//! Builds the concrete process invocation for a check based on its
//! interpreter kind and the current host family. Interpreters that are
//! not reachable from this host produce a skip signal, never an error.
//! Cross-boundary runs (a Windows interpreter launched from a Unix-like
//! host through WSL interop) stage a uniquely named copy of the script
//! and hand the interpreter a path translated into its own convention;
//! the staged copy is removed on every exit path when the handle drops.

use checksmith_types::{CheckDescriptor, InterpreterKind};
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

/// A prepared invocation, or the reason the check cannot run here.
pub enum Invocation {
    Ready {
        command: Command,
        /// Staged script copy for cross-boundary runs. Held alive for the
        /// duration of the invocation; deleted when dropped.
        staged: Option<NamedTempFile>,
    },
    HostMismatch { reason: String },
}

pub fn prepare_invocation(descriptor: &CheckDescriptor) -> std::io::Result<Invocation> {
    match descriptor.interpreter {
        InterpreterKind::PosixShell => posix_shell(descriptor),
        InterpreterKind::WindowsPowerShell => windows_interpreter(
            descriptor,
            if cfg!(windows) { "powershell" } else { "powershell.exe" },
            &["-NoProfile", "-ExecutionPolicy", "Bypass", "-File"],
        ),
        InterpreterKind::WindowsCommand => windows_interpreter(
            descriptor,
            if cfg!(windows) { "cmd" } else { "cmd.exe" },
            &["/C"],
        ),
    }
}

fn posix_shell(descriptor: &CheckDescriptor) -> std::io::Result<Invocation> {
    if cfg!(windows) && !binary_on_path("bash") {
        return Ok(Invocation::HostMismatch {
            reason: "bash is not available on this host".to_string(),
        });
    }

    let mut command = Command::new("bash");
    command.arg(&descriptor.path);
    if let Some(parent) = descriptor.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        command.current_dir(parent);
    }
    Ok(Invocation::Ready { command, staged: None })
}

fn windows_interpreter(
    descriptor: &CheckDescriptor,
    binary: &str,
    args: &[&str],
) -> std::io::Result<Invocation> {
    if !binary_on_path(binary) {
        return Ok(Invocation::HostMismatch {
            reason: format!("{} is not available on this host", binary),
        });
    }

    if cfg!(windows) {
        let mut command = Command::new(binary);
        command.args(args).arg(&descriptor.path);
        if let Some(parent) = descriptor.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            command.current_dir(parent);
        }
        return Ok(Invocation::Ready { command, staged: None });
    }

    // WSL interop: the Windows interpreter cannot read the check's path
    // directly, so run a staged copy under a translated path.
    let staged = stage_script(descriptor)?;
    let Some(translated) = translate_path(staged.path()) else {
        return Ok(Invocation::HostMismatch {
            reason: format!(
                "wslpath could not translate a script path for {}",
                binary
            ),
        });
    };

    let mut command = Command::new(binary);
    command.args(args).arg(translated);
    Ok(Invocation::Ready {
        command,
        staged: Some(staged),
    })
}

/// Copy the check into a per-invocation unique temp file carrying the
/// extension the target interpreter expects.
fn stage_script(descriptor: &CheckDescriptor) -> std::io::Result<NamedTempFile> {
    let staged = tempfile::Builder::new()
        .prefix(&format!("checksmith-{}-", descriptor.check_name()))
        .suffix(&format!(".{}", descriptor.interpreter.extension()))
        .tempfile()?;
    std::fs::copy(&descriptor.path, staged.path())?;
    Ok(staged)
}

/// Translate a host path into the Windows convention via `wslpath -w`.
fn translate_path(path: &Path) -> Option<String> {
    let output = Command::new("wslpath").arg("-w").arg(path).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let translated = String::from_utf8(output.stdout).ok()?;
    let translated = translated.trim();
    if translated.is_empty() {
        None
    } else {
        Some(translated.to_string())
    }
}

fn binary_on_path(name: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    let pathext = if cfg!(windows) {
        Some(std::env::var("PATHEXT").unwrap_or_else(|_| String::from(".COM;.EXE;.BAT;.CMD")))
    } else {
        None
    };
    std::env::split_paths(&paths).any(|dir| binary_in_dir(&dir, name, pathext.as_deref()))
}

/// Windows resolves a bare command name by trying each PATHEXT suffix;
/// elsewhere the name must match exactly.
fn binary_in_dir(dir: &Path, name: &str, pathext: Option<&str>) -> bool {
    if dir.join(name).is_file() {
        return true;
    }
    let Some(pathext) = pathext else {
        return false;
    };
    if name.contains('.') {
        return false;
    }
    pathext
        .split(';')
        .filter(|ext| !ext.is_empty())
        .any(|ext| dir.join(format!("{}{}", name, ext)).is_file())
}
