//! eSpeak engine for Linux and other hosts with `espeak-ng` installed.

use tokio::process::Command;
use tracing::debug;

use crate::engines::process::ProcessController;
use crate::errors::SpeechError;
use crate::traits::SpeechEngine;
use crate::types::{UtteranceRequest, Voice};
use crate::wire::encode_voice_record;

/// Speed in words per minute that maps to the rate-scale midpoint.
/// Happens to be the espeak default as well.
const DEFAULT_RATE_WPM: f32 = 175.0;

/// espeak rejects speeds below 80 wpm.
const MIN_RATE_WPM: u32 = 80;

/// eSpeak/eSpeak-NG engine.
///
/// Prefers the maintained `espeak-ng` binary and falls back to classic
/// `espeak`. Voice goes through `-v`, rate through `-s` (wpm), pitch
/// through `-p` (0–99 around 50), volume through `-a` (amplitude 0–200
/// around 100). Utterance text is fed on stdin via `--stdin`.
///
/// Speaking while an utterance is already playing replaces it.
#[derive(Debug)]
pub struct ESpeakEngine {
    program: &'static str,
    controller: ProcessController,
}

impl Default for ESpeakEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ESpeakEngine {
    /// Create an engine, resolving which espeak binary to drive.
    pub fn new() -> Self {
        let program = if which::which("espeak-ng").is_ok() {
            "espeak-ng"
        } else {
            "espeak"
        };
        Self {
            program,
            controller: ProcessController::new(),
        }
    }

    /// Whether either espeak binary exists on this host.
    pub fn is_installed() -> bool {
        which::which("espeak-ng").is_ok() || which::which("espeak").is_ok()
    }

    /// Map the 0.0–1.0 rate scale onto words per minute, 0.5 → 175.
    fn rate_to_wpm(rate: f32) -> u32 {
        let wpm = (DEFAULT_RATE_WPM * 2.0 * rate).round() as u32;
        wpm.max(MIN_RATE_WPM)
    }

    /// Map the 0.5–2.0 pitch multiplier onto espeak's 0–99, 1.0 → 50.
    fn pitch_to_flag(pitch: f32) -> u32 {
        ((50.0 * pitch).round() as u32).min(99)
    }

    /// Map the 0.0–1.0 volume onto espeak's amplitude 0–200, 1.0 → 100.
    fn volume_to_amplitude(volume: f32) -> u32 {
        ((100.0 * volume).round() as u32).min(200)
    }

    fn build_command(&self, request: &UtteranceRequest) -> Command {
        let mut command = Command::new(self.program);
        command.arg("--stdin");
        if !request.voice.is_empty() {
            command.arg("-v").arg(&request.voice);
        }
        command.arg("-s").arg(Self::rate_to_wpm(request.rate).to_string());
        command.arg("-p").arg(Self::pitch_to_flag(request.pitch).to_string());
        command
            .arg("-a")
            .arg(Self::volume_to_amplitude(request.volume).to_string());
        command
    }

    /// Parse one row of `espeak-ng --voices` output into a wire record.
    ///
    /// Rows look like:
    ///
    /// ```text
    /// Pty Language       Age/Gender VoiceName          File                 Other Languages
    ///  2  en-US           --/M      English (America)   gmw/en-US
    /// ```
    ///
    /// Identifier is the voice file, name the voice-name column (which
    /// may contain spaces), language the language column. The header row
    /// fails the priority parse and is skipped.
    fn parse_voice_line(line: &str) -> Option<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 5 {
            return None;
        }
        tokens[0].parse::<u8>().ok()?;

        let language = tokens[1];
        let file = *tokens.last()?;
        let name = tokens[3..tokens.len() - 1].join(" ");
        if name.is_empty() {
            return None;
        }

        Some(encode_voice_record(&Voice {
            identifier: file.to_string(),
            name,
            language: language.to_string(),
        }))
    }
}

impl SpeechEngine for ESpeakEngine {
    async fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        self.controller
            .launch(self.program, self.build_command(request), &request.text)
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
        let output = Command::new(self.program)
            .arg("--voices")
            .output()
            .await
            .map_err(|source| SpeechError::SpawnFailed {
                program: self.program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(SpeechError::VoiceEnumerationFailed {
                program: self.program.to_string(),
                message: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records: Vec<String> = stdout.lines().filter_map(Self::parse_voice_line).collect();

        debug!(
            program = self.program,
            voice_count = records.len(),
            "enumerated voices"
        );

        Ok(records)
    }

    async fn debug_dump(&self) {
        let snapshot = self.controller.snapshot().await;
        eprintln!("speech engine: {}", self.program);
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
