//! macOS speech engine driving the built-in `say` command.

use tokio::process::Command;
use tracing::debug;

use crate::engines::process::ProcessController;
use crate::errors::SpeechError;
use crate::traits::SpeechEngine;
use crate::types::{DEFAULT_RATE, UtteranceRequest, Voice};
use crate::wire::encode_voice_record;

/// Default speaking rate of macOS `say`, in words per minute.
const DEFAULT_RATE_WPM: f32 = 175.0;

/// Floor for the mapped rate; `say` gets unintelligible below this.
const MIN_RATE_WPM: u32 = 60;

/// macOS speech engine backed by the `say` command.
///
/// Voice selection goes through `-v`, rate through `-r` (words per
/// minute). `say` has no pitch or volume flag, so those request fields
/// are accepted and ignored. Utterance text is fed on stdin.
///
/// Speaking while an utterance is already playing replaces it.
#[derive(Debug, Default)]
pub struct SayEngine {
    controller: ProcessController,
}

impl SayEngine {
    /// The platform command this engine drives.
    pub const PROGRAM: &'static str = "say";

    /// Create an engine. Cheap; nothing is probed until the first call.
    pub fn new() -> Self {
        Self {
            controller: ProcessController::new(),
        }
    }

    /// Whether the `say` binary exists on this host.
    pub fn is_installed() -> bool {
        which::which(Self::PROGRAM).is_ok()
    }

    /// Map the 0.0–1.0 rate scale onto words per minute, with 0.5 landing
    /// on the `say` default of 175 wpm.
    ///
    /// Returns `None` at the default so the system setting stays in charge.
    fn rate_to_wpm(rate: f32) -> Option<u32> {
        if (rate - DEFAULT_RATE).abs() < f32::EPSILON {
            return None;
        }
        let wpm = (DEFAULT_RATE_WPM * 2.0 * rate).round() as u32;
        Some(wpm.max(MIN_RATE_WPM))
    }

    fn build_command(request: &UtteranceRequest) -> Command {
        let mut command = Command::new(Self::PROGRAM);
        if !request.voice.is_empty() {
            command.arg("-v").arg(&request.voice);
        }
        if let Some(wpm) = Self::rate_to_wpm(request.rate) {
            command.arg("-r").arg(wpm.to_string());
        }
        command
    }

    /// Parse one line of `say -v '?'` output into a wire record.
    ///
    /// Lines look like:
    ///
    /// ```text
    /// Samantha (Enhanced) en_US    # Hello! My name is Samantha.
    /// ```
    ///
    /// `say` exposes no separate identifier, so the voice name doubles as
    /// one. The locale is normalized to a hyphenated tag. Lines that
    /// don't fit the shape are skipped.
    fn parse_voice_line(line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        // Everything after '#' is sample text.
        let metadata = line.split('#').next().unwrap_or("").trim();

        // The locale is the last whitespace token; the name is what
        // precedes it (may contain spaces and parentheses).
        let locale = metadata.split_whitespace().last()?;
        let name = metadata[..metadata.rfind(locale)?].trim();
        if name.is_empty() {
            return None;
        }

        Some(encode_voice_record(&Voice {
            identifier: name.to_string(),
            name: name.to_string(),
            language: locale.replace('_', "-"),
        }))
    }
}

impl SpeechEngine for SayEngine {
    async fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        self.controller
            .launch(Self::PROGRAM, Self::build_command(request), &request.text)
            .await
    }

    async fn pause(&self) -> bool {
        self.controller.pause().await
    }

    async fn resume(&self) -> bool {
        self.controller.resume().await
    }

    async fn stop(&self) -> bool {
        self.controller.stop().await
    }

    async fn is_speaking(&self) -> bool {
        self.controller.is_running().await
    }

    async fn is_paused(&self) -> bool {
        self.controller.is_paused().await
    }

    async fn list_voices(&self) -> Result<Vec<String>, SpeechError> {
        let output = Command::new(Self::PROGRAM)
            .arg("-v")
            .arg("?")
            .output()
            .await
            .map_err(|source| SpeechError::SpawnFailed {
                program: Self::PROGRAM.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(SpeechError::VoiceEnumerationFailed {
                program: Self::PROGRAM.to_string(),
                message: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records: Vec<String> = stdout.lines().filter_map(Self::parse_voice_line).collect();

        debug!(
            program = Self::PROGRAM,
            voice_count = records.len(),
            "enumerated voices"
        );

        Ok(records)
    }

    async fn debug_dump(&self) {
        let snapshot = self.controller.snapshot().await;
        eprintln!("speech engine: say (macOS)");
        eprintln!("  installed: {}", Self::is_installed());
        eprintln!("  speaking:  {}", snapshot.running);
        eprintln!("  paused:    {}", snapshot.paused);
        match snapshot.pid {
            Some(pid) => eprintln!("  child pid: {pid}"),
            None => eprintln!("  child pid: none"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
