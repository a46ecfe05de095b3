//! The capability trait the binding layers over.
//!
//! Everything the rest of the crate knows about the platform speech engine
//! goes through [`SpeechEngine`]; tests substitute a fake implementation
//! instead of a real OS service.

use crate::errors::SpeechError;
use crate::types::UtteranceRequest;

/// The eight primitive operations of a platform speech engine.
///
/// The engine owns all real state: voice selection, audio rendering,
/// queueing, pause/resume semantics. Implementations answer the control
/// operations (`pause`, `resume`, `stop`) with the platform's own success
/// code: `true` when the operation took effect, `false` when the engine
/// declined (nothing playing, already paused, and so on). This layer never
/// infers or overrides those answers.
///
/// ## Native Async Traits
///
/// Uses native Rust async functions in traits (AFIT); no `async-trait`
/// crate. Implementations must be `Send + Sync` for concurrent use from a
/// single process.
///
/// ## Examples
///
/// ```ignore
/// use mouthpiece::{SpeechEngine, UtteranceRequest, SpeechError};
///
/// struct MyEngine;
///
/// impl SpeechEngine for MyEngine {
///     async fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
///         // hand the utterance to the platform and return immediately
///         Ok(())
///     }
///     // ...
/// }
/// ```
pub trait SpeechEngine: Send + Sync {
    /// Hand an utterance to the engine.
    ///
    /// This is a non-blocking handoff: it returns once the utterance is
    /// queued with the platform, not when audio playback finishes.
    /// Behavior while another utterance is playing is engine-defined.
    fn speak(
        &self,
        request: &UtteranceRequest,
    ) -> impl std::future::Future<Output = Result<(), SpeechError>> + Send;

    /// Suspend playback. `false` when there is nothing to pause.
    fn pause(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Continue suspended playback. `false` when nothing is paused.
    fn resume(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Cancel the current utterance. `false` when nothing is playing.
    /// Fire-and-forget; there is no finer-grained cancellation.
    fn stop(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Whether an utterance is in flight. Remains `true` while paused.
    fn is_speaking(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Whether playback is currently suspended.
    fn is_paused(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Enumerate voices as raw `identifier|name|language` wire records,
    /// in the platform's own order.
    fn list_voices(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, SpeechError>> + Send;

    /// Emit a diagnostic snapshot to the standard diagnostic stream.
    /// Purely observational; no state effect.
    fn debug_dump(&self) -> impl std::future::Future<Output = ()> + Send;
}

// ============================================================================
// Tests
// ============================================================================
