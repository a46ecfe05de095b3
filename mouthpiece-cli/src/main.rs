//! Mouthpiece CLI - drive the system speech engine from the shell

use std::io::{self, Read};
use std::time::Duration;

use clap::{Parser, Subcommand};
use mouthpiece::{SpeakOptions, Voice};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mouthpiece")]
#[command(about = "Drive the operating system's speech engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak text through the system speech engine
    Say {
        /// Text to speak (reads from stdin if not provided)
        text: Vec<String>,

        /// Voice identifier to use
        #[arg(long)]
        voice: Option<String>,

        /// Speech rate from 0.0 to 1.0 [default: 0.5]
        #[arg(long)]
        rate: Option<f32>,

        /// Pitch from 0.5 to 2.0 [default: 1.0]
        #[arg(long)]
        pitch: Option<f32>,

        /// Volume from 0.0 to 1.0 [default: 1.0]
        #[arg(long)]
        volume: Option<f32>,

        /// Block until the utterance finishes instead of returning
        /// as soon as it is queued
        #[arg(long)]
        wait: bool,
    },

    /// List the voices the engine offers
    Voices {
        /// Emit the voice list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's diagnostic snapshot to stderr
    Debug,
}

fn init_logging(verbosity: u8, json: bool) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Reads text from stdin with a 10,000 character limit
fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().take(10_000).read_to_string(&mut buffer)?;
    let text = buffer.trim().to_string();

    if text.is_empty() {
        eprintln!("Error: No input provided");
        eprintln!("Usage: mouthpiece say <text> or echo \"text\" | mouthpiece say");
        std::process::exit(1);
    }

    Ok(text)
}

fn print_voice_table(voices: &[Voice]) {
    if voices.is_empty() {
        println!("The speech engine reported no voices.");
        return;
    }

    println!("{} voices:", voices.len());
    for voice in voices {
        println!(
            "  {}  {}  {}",
            voice.name.bold(),
            voice.language.green(),
            voice.identifier.dimmed()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_verbosity, cli.json_logs);

    match cli.command {
        Commands::Say {
            text,
            voice,
            rate,
            pitch,
            volume,
            wait,
        } => {
            let message = if text.is_empty() {
                read_from_stdin()?
            } else {
                text.join(" ")
            };

            let mut options = SpeakOptions::new();
            if let Some(voice) = voice {
                options = options.with_voice(voice);
            }
            if let Some(rate) = rate {
                options = options.with_rate(rate);
            }
            if let Some(pitch) = pitch {
                options = options.with_pitch(pitch);
            }
            if let Some(volume) = volume {
                options = options.with_volume(volume);
            }

            debug!(chars = message.len(), wait, "speaking");
            mouthpiece::speak(&message, &options).await?;

            if wait {
                while mouthpiece::is_speaking().await {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            }
        }

        Commands::Voices { json } => {
            let voices = mouthpiece::get_voices().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&voices)?);
            } else {
                print_voice_table(&voices);
            }
        }

        Commands::Debug => {
            mouthpiece::print_debug_info().await;
        }
    }

    Ok(())
}
