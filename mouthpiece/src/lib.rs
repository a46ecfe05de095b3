//! Mouthpiece
//!
//! Thin binding over the operating system's native text-to-speech engine.
//!
//! ## Features
//!
//! - **Pass-through facade**: `speak`, `pause`, `resume`, `stop`, status
//!   queries and voice enumeration forward 1:1 to the platform engine,
//!   with no scheduling, queueing or bookkeeping of their own
//! - **Injectable engine boundary**: everything goes through the
//!   [`SpeechEngine`] trait, so tests substitute a fake instead of a
//!   real OS service
//! - **Non-blocking handoffs**: `speak` returns once the utterance is
//!   queued, never when audio finishes
//! - **Async-first**: built on tokio for subprocess-backed engines
//!
//! ## Quick Start
//!
//! ```no_run
//! use mouthpiece::SpeakOptions;
//!
//! # async fn example() -> Result<(), mouthpiece::SpeechError> {
//! // Simple usage with defaults
//! mouthpiece::speak("Hello, world!", &SpeakOptions::new()).await?;
//!
//! // With a voice and a faster rate
//! let options = SpeakOptions::new().with_voice("Samantha").with_rate(0.8);
//! mouthpiece::speak("Custom voice", &options).await?;
//!
//! if mouthpiece::pause().await {
//!     mouthpiece::resume().await;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`types`] - Marshalling types (options, requests, voices, status)
//! - [`errors`] - Error types for binding operations
//! - [`traits`] - The `SpeechEngine` capability trait
//! - [`wire`] - The pipe-delimited voice-record codec
//! - [`facade`] - The control facade and process-wide free functions
//! - [`engines`] - Platform engine implementations

pub mod engines;
pub mod errors;
pub mod facade;
pub mod traits;
pub mod types;
pub mod wire;

// Re-export main types at crate root for convenience
pub use engines::{ESpeakEngine, PlatformEngine, SayEngine, UnsupportedEngine};
pub use errors::SpeechError;
pub use facade::{
    Speech, default_speech, get_status, get_voices, is_paused, is_speaking, pause,
    print_debug_info, resume, speak, stop,
};
pub use traits::SpeechEngine;
pub use types::{EngineStatus, SpeakOptions, UtteranceRequest, Voice};
pub use wire::{encode_voice_record, parse_voice_record};
