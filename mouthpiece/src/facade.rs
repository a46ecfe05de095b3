//! The speech control facade.
//!
//! [`Speech`] forwards every operation 1:1 to an injected engine; the
//! free functions at the bottom do the same against a single
//! process-wide platform engine, which is all most callers want.

use std::sync::OnceLock;

use tracing::trace;

use crate::engines::PlatformEngine;
use crate::errors::SpeechError;
use crate::traits::SpeechEngine;
use crate::types::{EngineStatus, SpeakOptions, UtteranceRequest, Voice};
use crate::wire;

/// Pass-through control surface over one speech engine.
///
/// The facade is stateless: it marshals arguments on the way in, decodes
/// voice records on the way out, and otherwise passes the engine's
/// answers along unchanged. All engine state (speaking, paused, queue)
/// lives in the engine.
///
/// ## Examples
///
/// ```no_run
/// use mouthpiece::{Speech, SpeakOptions};
/// use mouthpiece::engines::PlatformEngine;
///
/// # async fn example() -> Result<(), mouthpiece::SpeechError> {
/// let speech = Speech::new(PlatformEngine::default());
/// speech.speak("Hello, world!", &SpeakOptions::new()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Speech<E: SpeechEngine> {
    engine: E,
}

impl<E: SpeechEngine> Speech<E> {
    /// Wrap an engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Borrow the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Validate `text` and `options` and hand the utterance to the engine.
    ///
    /// Returns once the utterance is queued; audio playback continues in
    /// the background. Argument mistakes surface here, before any engine
    /// call; see [`UtteranceRequest::new`].
    pub async fn speak(&self, text: &str, options: &SpeakOptions) -> Result<(), SpeechError> {
        let request = UtteranceRequest::new(text, options)?;
        trace!(
            chars = request.text.len(),
            voice = %request.voice,
            "handing utterance to engine"
        );
        self.engine.speak(&request).await
    }

    /// Suspend playback. `false` when there is nothing to pause.
    pub async fn pause(&self) -> bool {
        self.engine.pause().await
    }

    /// Continue suspended playback. `false` when nothing is paused.
    pub async fn resume(&self) -> bool {
        self.engine.resume().await
    }

    /// Cancel the current utterance. `false` when nothing is playing.
    pub async fn stop(&self) -> bool {
        self.engine.stop().await
    }

    /// Whether an utterance is in flight (true while paused, too).
    pub async fn is_speaking(&self) -> bool {
        self.engine.is_speaking().await
    }

    /// Whether playback is currently suspended.
    pub async fn is_paused(&self) -> bool {
        self.engine.is_paused().await
    }

    /// Enumerate voices, decoded from the engine's wire records.
    ///
    /// Order matches the platform's own enumeration; records missing a
    /// delimiter are skipped.
    pub async fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let records = self.engine.list_voices().await?;
        let voices = records
            .iter()
            .filter_map(|record| {
                let voice = wire::parse_voice_record(record);
                if voice.is_none() {
                    trace!(record = %record, "skipping malformed voice record");
                }
                voice
            })
            .collect();
        Ok(voices)
    }

    /// Snapshot the two observable engine booleans.
    pub async fn status(&self) -> EngineStatus {
        EngineStatus {
            speaking: self.engine.is_speaking().await,
            paused: self.engine.is_paused().await,
        }
    }

    /// Ask the engine to emit its diagnostic snapshot. Return value
    /// (there is none) is discarded by design of the operation.
    pub async fn print_debug_info(&self) {
        self.engine.debug_dump().await;
    }
}

// ============================================================================
// Process-wide default
// ============================================================================

static DEFAULT_SPEECH: OnceLock<Speech<PlatformEngine>> = OnceLock::new();

/// The process-wide facade over the platform's native speech engine.
///
/// Lazily initialized on first use; every free function below goes
/// through it, so all callers in a process share one engine.
pub fn default_speech() -> &'static Speech<PlatformEngine> {
    DEFAULT_SPEECH.get_or_init(|| Speech::new(PlatformEngine::default()))
}

/// Speak `text` through the process-wide engine.
pub async fn speak(text: &str, options: &SpeakOptions) -> Result<(), SpeechError> {
    default_speech().speak(text, options).await
}

/// Pause the process-wide engine. `false` when there is nothing to pause.
pub async fn pause() -> bool {
    default_speech().pause().await
}

/// Resume the process-wide engine. `false` when nothing is paused.
pub async fn resume() -> bool {
    default_speech().resume().await
}

/// Stop the process-wide engine. `false` when nothing is playing.
pub async fn stop() -> bool {
    default_speech().stop().await
}

/// Whether the process-wide engine is speaking.
pub async fn is_speaking() -> bool {
    default_speech().is_speaking().await
}

/// Whether the process-wide engine is paused.
pub async fn is_paused() -> bool {
    default_speech().is_paused().await
}

/// Enumerate the process-wide engine's voices.
pub async fn get_voices() -> Result<Vec<Voice>, SpeechError> {
    default_speech().voices().await
}

/// Snapshot the process-wide engine's status booleans.
pub async fn get_status() -> EngineStatus {
    default_speech().status().await
}

/// Emit the process-wide engine's diagnostic snapshot.
pub async fn print_debug_info() {
    default_speech().print_debug_info().await
}

// ============================================================================
// Tests
// ============================================================================
