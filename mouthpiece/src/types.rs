//! Core types for the speech-engine binding.
//!
//! This module defines the marshalling types that sit between callers and
//! the platform engine:
//! - [`SpeakOptions`] - the caller-facing option bag with builder methods
//! - [`UtteranceRequest`] - the validated, fully-defaulted request handed
//!   to the engine
//! - [`Voice`] - metadata for one selectable synthetic voice
//! - [`EngineStatus`] - snapshot of the two observable engine booleans

use serde::{Deserialize, Serialize};

use crate::errors::SpeechError;

/// Default speech rate on the platform's 0.0–1.0 scale.
pub const DEFAULT_RATE: f32 = 0.5;

/// Default pitch multiplier.
pub const DEFAULT_PITCH: f32 = 1.0;

/// Default volume on the 0.0–1.0 scale.
pub const DEFAULT_VOLUME: f32 = 1.0;

// ============================================================================
// SpeakOptions
// ============================================================================

/// Options for a single `speak` call.
///
/// Every field is optional from the caller's point of view: absent fields
/// keep their defaults (no voice preference, rate 0.5, pitch 1.0,
/// volume 1.0). The struct deserializes from JSON so a scripting host can
/// hand an options object straight across the boundary; unrecognized
/// fields are ignored.
///
/// ## Examples
///
/// ```
/// use mouthpiece::types::SpeakOptions;
///
/// let options = SpeakOptions::new()
///     .with_voice("com.apple.voice.compact.en-US.Samantha")
///     .with_rate(0.8);
///
/// assert_eq!(options.pitch, 1.0);
/// assert_eq!(options.volume, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeakOptions {
    /// Requested voice identifier. `None` lets the engine pick its default.
    pub voice: Option<String>,
    /// Speech rate, 0.0 (slowest) to 1.0 (fastest).
    pub rate: f32,
    /// Pitch multiplier, 0.5 to 2.0.
    pub pitch: f32,
    /// Volume, 0.0 (silent) to 1.0 (full).
    pub volume: f32,
}

impl Default for SpeakOptions {
    fn default() -> Self {
        Self {
            voice: None,
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl SpeakOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested voice identifier.
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Set the speech rate (0.0–1.0).
    #[must_use]
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    /// Set the pitch multiplier (0.5–2.0).
    #[must_use]
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    /// Set the volume (0.0–1.0).
    #[must_use]
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Check every field against the range the platform accepts.
    pub(crate) fn validate(&self) -> Result<(), SpeechError> {
        check_range("rate", self.rate, 0.0, 1.0)?;
        check_range("pitch", self.pitch, 0.5, 2.0)?;
        check_range("volume", self.volume, 0.0, 1.0)?;
        Ok(())
    }
}

fn check_range(option: &'static str, value: f32, min: f32, max: f32) -> Result<(), SpeechError> {
    if value < min || value > max {
        return Err(SpeechError::OptionOutOfRange {
            option,
            min,
            max,
            value,
        });
    }
    Ok(())
}

// ============================================================================
// UtteranceRequest
// ============================================================================

/// A single validated unit of text ready to hand to the engine.
///
/// Constructed per `speak` call and owned by that call's stack; nothing in
/// this layer persists it. An empty `voice` means "engine default".
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceRequest {
    /// The text to synthesize. Never empty.
    pub text: String,
    /// Voice identifier, or empty for the engine default.
    pub voice: String,
    /// Speech rate, 0.0–1.0.
    pub rate: f32,
    /// Pitch multiplier, 0.5–2.0.
    pub pitch: f32,
    /// Volume, 0.0–1.0.
    pub volume: f32,
}

impl UtteranceRequest {
    /// Validate `text` and `options` and build the request.
    ///
    /// ## Errors
    ///
    /// - [`SpeechError::EmptyText`] when `text` is empty or whitespace-only.
    /// - [`SpeechError::OptionOutOfRange`] when an option falls outside the
    ///   range the platform accepts.
    ///
    /// Both are caller mistakes and surface before any engine call.
    pub fn new(text: impl Into<String>, options: &SpeakOptions) -> Result<Self, SpeechError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        options.validate()?;

        Ok(Self {
            text,
            voice: options.voice.clone().unwrap_or_default(),
            rate: options.rate,
            pitch: options.pitch,
            volume: options.volume,
        })
    }
}

// ============================================================================
// Voice
// ============================================================================

/// Identifying metadata for one selectable synthetic voice.
///
/// Produced transiently while enumerating voices; decoded from the
/// engine's pipe-delimited wire record by [`crate::wire::parse_voice_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Engine-specific voice identifier.
    pub identifier: String,
    /// Human-readable display name.
    pub name: String,
    /// Language tag (e.g. "en-US"). May be empty for malformed records.
    pub language: String,
}

// ============================================================================
// EngineStatus
// ============================================================================

/// Snapshot of the two engine booleans this layer can observe.
///
/// The engine owns all real state; this is a momentary read, not a copy
/// the binding keeps in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineStatus {
    /// An utterance is in flight (true while paused, too).
    pub speaking: bool,
    /// Playback is suspended.
    pub paused: bool,
}

// ============================================================================
// Tests
// ============================================================================
