//! Deadline-supervised check execution.
//!
//! Every invocation runs under a wall-clock budget enforced by polling
//! `try_wait` at a short fixed interval, independent of subprocess
//! cooperation. The check runs in its own process group so the deadline
//! reaches grandchildren too, not just the direct child. On expiry the
//! group gets a graceful termination signal, a short grace period, then
//! a hard kill. Nothing is left running: a drop guard kills the group on
//! every exit path, and any staged script copy is deleted when the
//! invocation handle drops.

use crate::adapter::{Invocation, prepare_invocation};
use checksmith_types::CheckDescriptor;
use std::io::Read;
use std::process::{Child, Stdio};
use std::sync::mpsc::{Receiver, channel};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Everything the runner needs to turn one invocation into results.
#[derive(Debug)]
pub enum ExecutionOutcome {
    Completed {
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
        duration: Duration,
    },
    TimedOut {
        duration: Duration,
    },
    Skipped {
        reason: String,
    },
    SpawnFailed {
        error: String,
    },
}

pub struct Supervisor {
    timeout: Duration,
}

impl Supervisor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn run(&self, descriptor: &CheckDescriptor) -> ExecutionOutcome {
        let invocation = match prepare_invocation(descriptor) {
            Ok(invocation) => invocation,
            Err(err) => {
                return ExecutionOutcome::SpawnFailed { error: err.to_string() };
            }
        };

        let (mut command, _staged) = match invocation {
            Invocation::Ready { command, staged } => (command, staged),
            Invocation::HostMismatch { reason } => {
                return ExecutionOutcome::Skipped { reason };
            }
        };

        command.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        // Own process group, so termination signals reach grandchildren
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let start = Instant::now();
        let child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                return ExecutionOutcome::SpawnFailed { error: err.to_string() };
            }
        };
        let mut guard = KillGuard::new(child);

        // Dedicated reader threads drain the pipes so a chatty check can
        // never block on a full pipe while we poll for completion.
        let stdout_rx = spawn_reader(guard.child.stdout.take());
        let stderr_rx = spawn_reader(guard.child.stderr.take());

        loop {
            match guard.child.try_wait() {
                Ok(Some(status)) => {
                    let duration = start.elapsed();

                    // A background grandchild can inherit the pipes and
                    // hold them open past the child's exit; readers only
                    // deliver at EOF, so after a short grace the group is
                    // killed to reclaim the pipes.
                    let collect_deadline = Instant::now() + GRACE_PERIOD;
                    let mut stdout = recv_until(&stdout_rx, collect_deadline);
                    let mut stderr = recv_until(&stderr_rx, collect_deadline);
                    if stdout.is_none() || stderr.is_none() {
                        guard.kill_group();
                        let retry_deadline = Instant::now() + GRACE_PERIOD;
                        if stdout.is_none() {
                            stdout = recv_until(&stdout_rx, retry_deadline);
                        }
                        if stderr.is_none() {
                            stderr = recv_until(&stderr_rx, retry_deadline);
                        }
                    }

                    guard.disarm();
                    return ExecutionOutcome::Completed {
                        stdout: stdout.unwrap_or_default(),
                        stderr: stderr.unwrap_or_default(),
                        exit_code: status.code(),
                        duration,
                    };
                }
                Ok(None) => {}
                Err(err) => {
                    return ExecutionOutcome::SpawnFailed { error: err.to_string() };
                }
            }

            if start.elapsed() >= self.timeout {
                guard.terminate(GRACE_PERIOD);
                // Readers are abandoned; the group kill closes the pipes
                // and output is discarded
                return ExecutionOutcome::TimedOut { duration: start.elapsed() };
            }

            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

/// Drain one pipe on a dedicated thread, delivering the full buffer over
/// a channel at EOF.
fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> Receiver<String> {
    let (tx, rx) = channel();
    match source {
        Some(mut source) => {
            std::thread::spawn(move || {
                let mut buffer = String::new();
                let _ = source.read_to_string(&mut buffer);
                let _ = tx.send(buffer);
            });
        }
        None => {
            let _ = tx.send(String::new());
        }
    }
    rx
}

fn recv_until(rx: &Receiver<String>, deadline: Instant) -> Option<String> {
    rx.recv_timeout(deadline.saturating_duration_since(Instant::now())).ok()
}

/// Kills the process group on drop so an early return can never orphan
/// the child or anything it spawned.
struct KillGuard {
    child: Child,
    armed: bool,
}

impl KillGuard {
    fn new(child: Child) -> Self {
        Self { child, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    /// Graceful group termination, escalating to a hard kill of the whole
    /// group after the grace period.
    fn terminate(&mut self, grace: Duration) {
        send_graceful_signal(&self.child);

        let deadline = Instant::now() + grace;
        while Instant::now() < deadline {
            if let Ok(Some(_)) = self.child.try_wait() {
                break;
            }
            std::thread::sleep(POLL_INTERVAL.min(Duration::from_millis(50)));
        }

        // Stragglers in the group are killed even when the direct child
        // exited gracefully
        self.kill_group();
    }

    /// Hard-kill the whole process group, then reap the direct child.
    fn kill_group(&mut self) {
        send_group_kill(&self.child);
        let _ = self.child.kill();
        let _ = self.child.wait();
        self.armed = false;
    }
}

impl Drop for KillGuard {
    fn drop(&mut self) {
        if self.armed {
            self.kill_group();
        }
    }
}

#[cfg(unix)]
fn send_graceful_signal(child: &Child) {
    // Negative pid addresses the whole process group
    unsafe {
        libc::kill(-(child.id() as libc::pid_t), libc::SIGTERM);
    }
}

#[cfg(not(unix))]
fn send_graceful_signal(_child: &Child) {
    // No portable graceful signal; the escalation path kills outright
}

#[cfg(unix)]
fn send_group_kill(child: &Child) {
    unsafe {
        libc::kill(-(child.id() as libc::pid_t), libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn send_group_kill(_child: &Child) {}
