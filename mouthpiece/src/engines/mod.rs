//! Platform speech engine implementations.
//!
//! Each engine drives the host's native speech command as a managed
//! child process and answers the [`crate::traits::SpeechEngine`]
//! primitives with the platform's own return codes. All engines compile
//! on every target; [`PlatformEngine`] picks the one the process-wide
//! facade uses here.

mod process;

pub mod espeak;
pub mod say;
pub mod unsupported;

pub use espeak::ESpeakEngine;
pub use say::SayEngine;
pub use unsupported::UnsupportedEngine;

/// The engine backing the process-wide facade on this platform.
#[cfg(target_os = "macos")]
pub type PlatformEngine = SayEngine;

/// The engine backing the process-wide facade on this platform.
#[cfg(all(unix, not(target_os = "macos")))]
pub type PlatformEngine = ESpeakEngine;

/// The engine backing the process-wide facade on this platform.
#[cfg(not(unix))]
pub type PlatformEngine = UnsupportedEngine;
