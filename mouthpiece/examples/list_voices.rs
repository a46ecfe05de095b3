//! List Voices Example
//!
//! Enumerates the voices the platform speech engine offers, in the
//! engine's own order.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p mouthpiece --example list_voices
//! ```

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let voices = mouthpiece::get_voices().await?;

    if voices.is_empty() {
        println!("The speech engine reported no voices.");
        return Ok(());
    }

    println!("Found {} voices:", voices.len());
    for voice in &voices {
        println!("  - {} [{}] ({})", voice.name, voice.identifier, voice.language);
    }

    Ok(())
}
