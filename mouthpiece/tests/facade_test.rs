//! Facade behavior against a scripted in-memory engine.
//!
//! The fake models the three-state engine (idle, speaking, paused) with
//! the platform's success/decline answers, so these tests pin the full
//! control contract without touching a real OS service.

use std::sync::Mutex;

use mouthpiece::{SpeakOptions, Speech, SpeechEngine, SpeechError, UtteranceRequest};

#[derive(Debug, Clone, Copy, PartialEq)]
enum FakeState {
    Idle,
    Speaking,
    Paused,
}

struct FakeEngine {
    state: Mutex<FakeState>,
    spoken: Mutex<Vec<UtteranceRequest>>,
    records: Vec<String>,
}

impl FakeEngine {
    fn new() -> Self {
        Self::with_records(Vec::new())
    }

    fn with_records(records: Vec<String>) -> Self {
        Self {
            state: Mutex::new(FakeState::Idle),
            spoken: Mutex::new(Vec::new()),
            records,
        }
    }

    fn spoken_texts(&self) -> Vec<String> {
        self.spoken
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.text.clone())
            .collect()
    }
}

impl SpeechEngine for FakeEngine {
    async fn speak(&self, request: &UtteranceRequest) -> Result<(), SpeechError> {
        // A new utterance replaces whatever was playing.
        *self.state.lock().unwrap() = FakeState::Speaking;
        self.spoken.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn pause(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        match *state {
            FakeState::Speaking => {
                *state = FakeState::Paused;
                true
            }
            FakeState::Idle | FakeState::Paused => false,
        }
    }

    async fn resume(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        match *state {
            FakeState::Paused => {
                *state = FakeState::Speaking;
                true
            }
            FakeState::Idle | FakeState::Speaking => false,
        }
    }

    async fn stop(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        match *state {
            FakeState::Speaking | FakeState::Paused => {
                *state = FakeState::Idle;
                true
            }
            FakeState::Idle => false,
        }
    }

    async fn is_speaking(&self) -> bool {
        // Paused counts as speaking, as native synthesizers report it.
        *self.state.lock().unwrap() != FakeState::Idle
    }

    async fn is_paused(&self) -> bool {
        *self.state.lock().unwrap() == FakeState::Paused
    }

    async fn list_voices(&self) -> Result<Vec<String>, SpeechError> {
        Ok(self.records.clone())
    }

    async fn debug_dump(&self) {}
}

// ============================================================================
// speak
// ============================================================================

#[tokio::test]
async fn speak_hands_off_and_returns_nothing() {
    let speech = Speech::new(FakeEngine::new());
    speech
        .speak("Hello, world!", &SpeakOptions::new())
        .await
        .unwrap();
    assert_eq!(speech.engine().spoken_texts(), ["Hello, world!"]);
    assert!(speech.is_speaking().await);
}

#[tokio::test]
async fn speak_with_missing_text_is_an_argument_error() {
    let speech = Speech::new(FakeEngine::new());
    for text in ["", "   ", "\n\t"] {
        let result = speech.speak(text, &SpeakOptions::new()).await;
        assert!(matches!(result, Err(SpeechError::EmptyText)));
    }
    assert!(speech.engine().spoken_texts().is_empty());
}

#[tokio::test]
async fn speak_while_speaking_replaces_the_utterance() {
    let speech = Speech::new(FakeEngine::new());
    speech.speak("first", &SpeakOptions::new()).await.unwrap();
    speech.speak("second", &SpeakOptions::new()).await.unwrap();
    assert_eq!(speech.engine().spoken_texts(), ["first", "second"]);
    assert!(speech.is_speaking().await);
    assert!(!speech.is_paused().await);
}

#[tokio::test]
async fn speak_applies_option_defaults() {
    let speech = Speech::new(FakeEngine::new());
    speech
        .speak("hi", &SpeakOptions::new().with_rate(0.8))
        .await
        .unwrap();

    let spoken = speech.engine().spoken.lock().unwrap();
    assert_eq!(spoken[0].rate, 0.8);
    assert_eq!(spoken[0].pitch, 1.0);
    assert_eq!(spoken[0].volume, 1.0);
    assert_eq!(spoken[0].voice, "");
}

// ============================================================================
// pause / resume / stop
// ============================================================================

#[tokio::test]
async fn pause_while_idle_declines() {
    let speech = Speech::new(FakeEngine::new());
    assert!(!speech.pause().await);
    assert!(!speech.is_paused().await);
}

#[tokio::test]
async fn pause_while_speaking_succeeds() {
    let speech = Speech::new(FakeEngine::new());
    speech.speak("hi", &SpeakOptions::new()).await.unwrap();

    assert!(speech.pause().await);
    assert!(speech.is_paused().await);
    // Speaking stays true across a pause.
    assert!(speech.is_speaking().await);
    // A second pause declines.
    assert!(!speech.pause().await);
}

#[tokio::test]
async fn resume_after_pause_succeeds() {
    let speech = Speech::new(FakeEngine::new());
    speech.speak("hi", &SpeakOptions::new()).await.unwrap();
    assert!(speech.pause().await);

    assert!(speech.resume().await);
    assert!(!speech.is_paused().await);
    assert!(speech.is_speaking().await);
    // Resuming when nothing is paused declines.
    assert!(!speech.resume().await);
}

#[tokio::test]
async fn resume_while_idle_declines() {
    let speech = Speech::new(FakeEngine::new());
    assert!(!speech.resume().await);
}

#[tokio::test]
async fn stop_always_leaves_the_engine_idle() {
    let speech = Speech::new(FakeEngine::new());

    // Idle: declines, still idle.
    assert!(!speech.stop().await);
    assert!(!speech.is_speaking().await);

    // Speaking: succeeds, idle afterwards.
    speech.speak("hi", &SpeakOptions::new()).await.unwrap();
    assert!(speech.stop().await);
    assert!(!speech.is_speaking().await);

    // Paused: succeeds too.
    speech.speak("hi", &SpeakOptions::new()).await.unwrap();
    assert!(speech.pause().await);
    assert!(speech.stop().await);
    assert!(!speech.is_speaking().await);
    assert!(!speech.is_paused().await);
}

// ============================================================================
// voices
// ============================================================================

#[tokio::test]
async fn voices_decode_the_fixture_record() {
    let speech = Speech::new(FakeEngine::with_records(vec![
        "com.apple.voice.1|Alex|en-US".into(),
    ]));

    let voices = speech.voices().await.unwrap();
    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].identifier, "com.apple.voice.1");
    assert_eq!(voices[0].name, "Alex");
    assert_eq!(voices[0].language, "en-US");
}

#[tokio::test]
async fn voices_length_matches_engine_record_count() {
    let records: Vec<String> = (0..17)
        .map(|i| format!("voice.{i}|Voice {i}|en-US"))
        .collect();
    let speech = Speech::new(FakeEngine::with_records(records));

    let voices = speech.voices().await.unwrap();
    assert_eq!(voices.len(), 17);
}

#[tokio::test]
async fn voices_keep_platform_order_unsorted() {
    let speech = Speech::new(FakeEngine::with_records(vec![
        "z|Zarvox|en-US".into(),
        "a|Alex|en-US".into(),
        "m|Moira|en-IE".into(),
    ]));

    let names: Vec<String> = speech
        .voices()
        .await
        .unwrap()
        .into_iter()
        .map(|voice| voice.name)
        .collect();
    assert_eq!(names, ["Zarvox", "Alex", "Moira"]);
}

// ============================================================================
// status / debug
// ============================================================================

#[tokio::test]
async fn status_tracks_the_state_machine() {
    let speech = Speech::new(FakeEngine::new());

    let status = speech.status().await;
    assert!(!status.speaking && !status.paused);

    speech.speak("hi", &SpeakOptions::new()).await.unwrap();
    let status = speech.status().await;
    assert!(status.speaking && !status.paused);

    speech.pause().await;
    let status = speech.status().await;
    assert!(status.speaking && status.paused);

    speech.stop().await;
    let status = speech.status().await;
    assert!(!status.speaking && !status.paused);
}

#[tokio::test]
async fn debug_dump_has_no_state_effect() {
    let speech = Speech::new(FakeEngine::new());
    speech.speak("hi", &SpeakOptions::new()).await.unwrap();
    speech.pause().await;

    speech.print_debug_info().await;

    assert!(speech.is_speaking().await);
    assert!(speech.is_paused().await);
}

// ============================================================================
// Process-wide default
// ============================================================================

mod default_engine {
    use serial_test::serial;

    // Only idle-state probes here: they hold on any host, with or
    // without a speech binary installed.

    #[tokio::test]
    #[serial]
    async fn controls_decline_when_nothing_plays() {
        assert!(!mouthpiece::pause().await);
        assert!(!mouthpiece::resume().await);
        assert!(!mouthpiece::is_speaking().await);
        assert!(!mouthpiece::is_paused().await);
    }

    #[tokio::test]
    #[serial]
    async fn status_reads_idle() {
        let status = mouthpiece::get_status().await;
        assert!(!status.speaking);
        assert!(!status.paused);
    }

    #[tokio::test]
    #[serial]
    async fn empty_text_fails_before_the_engine() {
        let result = mouthpiece::speak("", &mouthpiece::SpeakOptions::new()).await;
        assert!(matches!(result, Err(mouthpiece::SpeechError::EmptyText)));
    }
}
