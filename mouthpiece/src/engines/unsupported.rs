//! Fallback engine for platforms with no native speech command.

use crate::errors::SpeechError;
use crate::traits::SpeechEngine;
use crate::types::UtteranceRequest;

const REASON: &str = "no native speech command exists for this platform";

/// The engine used where nothing can actually speak.
///
/// Every control operation declines and every fallible operation fails
/// with [`SpeechError::EngineUnavailable`], so callers see the same
/// surface everywhere and can probe availability at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedEngine;

impl SpeechEngine for UnsupportedEngine {
    async fn speak(&self, _request: &UtteranceRequest) -> Result<(), SpeechError> {
        Err(SpeechError::EngineUnavailable {
            reason: REASON.into(),
        })
    }

    async fn pause(&self) -> bool {
        false
    }

    async fn resume(&self) -> bool {
        false
    }

    async fn stop(&self) -> bool {
        false
    }

    async fn is_speaking(&self) -> bool {
        false
    }

    async fn is_paused(&self) -> bool {
        false
    }

    async fn list_voices(&self) -> Result<Vec<String>, SpeechError> {
        Err(SpeechError::EngineUnavailable {
            reason: REASON.into(),
        })
    }

    async fn debug_dump(&self) {
        eprintln!("speech engine: none ({REASON})");
    }
}
