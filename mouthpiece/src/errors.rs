
/// Errors that can occur while marshalling a request or handing it to the
/// platform speech engine.
///
/// Platform operation *declines* (pausing while idle, stopping with nothing
/// playing) are not errors: the engine reports those by returning `false`,
/// and this layer passes that through unchanged.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// The caller supplied no text to speak.
    #[error("no text was provided to speak")]
    EmptyText,

    /// An option value was outside the range the platform accepts.
    #[error("{option} must be between {min} and {max} (got {value})")]
    OptionOutOfRange {
        /// Name of the offending option field.
        option: &'static str,
        /// Lowest accepted value.
        min: f32,
        /// Highest accepted value.
        max: f32,
        /// The value the caller supplied.
        value: f32,
    },

    /// No speech engine exists on this platform.
    #[error("no speech engine is available: {reason}")]
    EngineUnavailable {
        /// Why the engine could not be used.
        reason: String,
    },

    /// Spawning the platform speech command failed.
    #[error("failed to spawn `{program}`")]
    SpawnFailed {
        /// The command that failed to start.
        program: String,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// The spawned command exposed no stdin pipe.
    #[error("could not open stdin of `{program}`")]
    StdinUnavailable {
        /// The command missing its pipe.
        program: String,
    },

    /// Writing the utterance text to the engine failed.
    #[error("failed to write utterance text to `{program}`")]
    StdinWriteFailed {
        /// The command being written to.
        program: String,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// Enumerating voices from the platform failed.
    #[error("voice enumeration via `{program}` failed: {message}")]
    VoiceEnumerationFailed {
        /// The command used for enumeration.
        program: String,
        /// What the platform reported.
        message: String,
    },
}
