//! Child-process plumbing shared by the subprocess-backed engines.
//!
//! A [`ProcessController`] owns at most one child at a time: the platform
//! speech command currently rendering an utterance. Pause and resume map
//! to job-control signals on unix targets; elsewhere they decline.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::SpeechError;

/// Job-control signal to deliver to the speech child.
#[derive(Debug, Clone, Copy)]
enum Signal {
    Stop,
    Continue,
}

/// Lifecycle slot for the one child a controller may own.
#[derive(Debug, Default)]
struct ChildState {
    child: Option<Child>,
    paused: bool,
}

/// Momentary view of the controller, for the engine's diagnostic dump.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ControllerSnapshot {
    pub(crate) pid: Option<u32>,
    pub(crate) running: bool,
    pub(crate) paused: bool,
}

/// Drives a platform speech command as a managed child process.
///
/// `launch` replaces any utterance still playing; this is the kill-then-spawn
/// policy for "speak while speaking". A stopped (paused) child still
/// counts as running, so the speaking flag stays true across a pause,
/// matching what native synthesizers report.
#[derive(Debug, Default)]
pub(crate) struct ProcessController {
    state: Mutex<ChildState>,
}

impl ProcessController {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Spawn `command`, feed `text` on its stdin, and keep the child handle.
    ///
    /// Returns once the text is handed over; never waits for playback.
    pub(crate) async fn launch(
        &self,
        program: &str,
        mut command: Command,
        text: &str,
    ) -> Result<(), SpeechError> {
        let mut state = self.state.lock().await;
        Self::kill_current(&mut state).await;

        command.stdin(Stdio::piped());
        command.stdout(Stdio::null());
        command.stderr(Stdio::null());

        let mut child = command.spawn().map_err(|source| SpeechError::SpawnFailed {
            program: program.to_string(),
            source,
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| SpeechError::StdinUnavailable {
                program: program.to_string(),
            })?;

        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|source| SpeechError::StdinWriteFailed {
                program: program.to_string(),
                source,
            })?;

        // Dropping stdin sends EOF; the engine starts speaking from here.
        drop(stdin);

        debug!(program, pid = child.id(), "utterance handed to engine");
        state.child = Some(child);
        state.paused = false;
        Ok(())
    }

    /// Suspend the running child. Declines when idle or already paused.
    pub(crate) async fn pause(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.paused || !Self::reap(&mut state) {
            return false;
        }

        let delivered = match state.child.as_ref() {
            Some(child) => deliver(child, Signal::Stop),
            None => false,
        };
        if delivered {
            state.paused = true;
        }
        delivered
    }

    /// Continue a suspended child. Declines when nothing is paused.
    pub(crate) async fn resume(&self) -> bool {
        let mut state = self.state.lock().await;
        if !state.paused || !Self::reap(&mut state) {
            return false;
        }

        let delivered = match state.child.as_ref() {
            Some(child) => deliver(child, Signal::Continue),
            None => false,
        };
        if delivered {
            state.paused = false;
        }
        delivered
    }

    /// Kill the current child. Declines when nothing is playing.
    pub(crate) async fn stop(&self) -> bool {
        let mut state = self.state.lock().await;
        if !Self::reap(&mut state) {
            return false;
        }
        Self::kill_current(&mut state).await;
        true
    }

    /// Whether a child is alive (paused counts as alive).
    pub(crate) async fn is_running(&self) -> bool {
        let mut state = self.state.lock().await;
        Self::reap(&mut state)
    }

    /// Whether the child is alive and suspended.
    pub(crate) async fn is_paused(&self) -> bool {
        let mut state = self.state.lock().await;
        Self::reap(&mut state) && state.paused
    }

    pub(crate) async fn snapshot(&self) -> ControllerSnapshot {
        let mut state = self.state.lock().await;
        let running = Self::reap(&mut state);
        ControllerSnapshot {
            pid: state.child.as_ref().and_then(Child::id),
            running,
            paused: state.paused,
        }
    }

    /// Check child liveness, clearing the slot when it has exited on its
    /// own. Returns true while the child is alive.
    fn reap(state: &mut ChildState) -> bool {
        match state.child.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                _ => {
                    state.child = None;
                    state.paused = false;
                    false
                }
            },
            None => false,
        }
    }

    async fn kill_current(state: &mut ChildState) {
        if let Some(mut child) = state.child.take() {
            // SIGKILL terminates a stopped child too, so no continue first.
            if let Err(error) = child.kill().await {
                warn!(%error, "failed to kill speech child");
            }
        }
        state.paused = false;
    }
}

#[cfg(unix)]
fn deliver(child: &Child, signal: Signal) -> bool {
    let signal = match signal {
        Signal::Stop => libc::SIGSTOP,
        Signal::Continue => libc::SIGCONT,
    };
    match child.id() {
        // SAFETY: plain kill(2) on a pid we own; no memory is touched.
        Some(pid) => unsafe { libc::kill(pid as libc::pid_t, signal) == 0 },
        None => false,
    }
}

#[cfg(not(unix))]
fn deliver(_child: &Child, _signal: Signal) -> bool {
    // No job-control signals off unix; the operation declines.
    false
}

// ============================================================================
// Tests
// ============================================================================
