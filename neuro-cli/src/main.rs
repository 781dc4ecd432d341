//! NeuroLite console companion.
//!
//! Wires the three input sources (console, speech, Twitch) into one `mpsc`
//! channel and drains it with the task that owns the [`Agent`] — the single
//! serialization point for all state mutation. Events are perceived one at a
//! time in arrival order; typing `exit` (case-insensitive) shuts everything
//! down.

use std::path::Path;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use neuro_core::agent::Agent;
use neuro_core::config::NeuroConfig;
use neuro_io::event::{InputEvent, InputSource};
use neuro_io::speech::SpeechAdapter;
use neuro_io::twitch::TwitchAdapter;

/// Channel capacity for pending input events.
const EVENT_BUFFER: usize = 64;

/// Where the runtime configuration came from.
#[derive(Debug)]
enum ConfigSource {
    /// Parsed from this file.
    File(String),
    /// An explicitly-passed path that does not exist; defaults were used.
    MissingExplicit(String),
    /// No argument and no `neuro.toml` in the working directory.
    Defaults,
}

fn load_config(arg: Option<String>) -> anyhow::Result<(NeuroConfig, ConfigSource)> {
    let explicit = arg.is_some();
    let path = arg.unwrap_or_else(|| "neuro.toml".to_string());
    if Path::new(&path).exists() {
        let config = NeuroConfig::from_file(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}"))?;
        Ok((config, ConfigSource::File(path)))
    } else if explicit {
        Ok((NeuroConfig::default(), ConfigSource::MissingExplicit(path)))
    } else {
        Ok((NeuroConfig::default(), ConfigSource::Defaults))
    }
}

/// Read stdin line by line on a blocking task, forwarding each line as a
/// console event. The `exit` check happens in the drain loop so it holds the
/// same position in the arrival order as any other event.
fn spawn_console_reader(tx: mpsc::Sender<InputEvent>) {
    tokio::task::spawn_blocking(move || {
        let mut line = String::new();
        loop {
            line.clear();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) => break, // EOF
                Ok(_) => {
                    let trimmed = line.trim_end_matches(['\r', '\n']);
                    if trimmed.is_empty() {
                        continue;
                    }
                    if tx.blocking_send(InputEvent::console(trimmed)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Failed to read stdin");
                    break;
                }
            }
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config decides the default log level; RUST_LOG still wins.
    let (config, source) = load_config(std::env::args().nth(1))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .init();

    match &source {
        ConfigSource::File(path) => info!(%path, "Loaded configuration"),
        ConfigSource::MissingExplicit(path) => {
            warn!(%path, "Config file not found, using defaults");
        }
        ConfigSource::Defaults => info!("No config file, using defaults (console only)"),
    }


    let mut agent = Agent::new(&config).context("failed to initialise agent")?;

    let (tx, mut rx) = mpsc::channel::<InputEvent>(EVENT_BUFFER);

    let mut adapter_handles: Vec<JoinHandle<()>> = Vec::new();

    if config.speech.enabled {
        let adapter = SpeechAdapter::new(&config.speech);
        let speech_tx = tx.clone();
        adapter_handles.push(tokio::spawn(async move {
            if let Err(err) = adapter.run(speech_tx).await {
                error!(error = %err, "Speech adapter stopped");
            }
        }));
    }

    if config.twitch.enabled {
        let adapter = TwitchAdapter::new(config.twitch.clone());
        let twitch_tx = tx.clone();
        adapter_handles.push(tokio::spawn(async move {
            if let Err(err) = adapter.run(twitch_tx).await {
                error!(error = %err, "Twitch adapter stopped");
            }
        }));
    }

    spawn_console_reader(tx.clone());
    drop(tx);

    println!("NeuroLite is active. Type 'exit' to quit.");

    while let Some(event) = rx.recv().await {
        if event.source == InputSource::Console && event.text.trim().eq_ignore_ascii_case("exit") {
            info!("Exit requested");
            break;
        }

        match agent.perceive(&event.text) {
            Ok(perception) => println!("\n{perception}\n"),
            Err(err) => error!(source = %event.source, error = %err, "Perceive failed"),
        }
    }

    for handle in adapter_handles {
        handle.abort();
    }

    info!("NeuroLite shut down");

    // The stdin reader is likely parked inside a blocking read_line that
    // abort() cannot cancel, and dropping the runtime waits for blocking
    // tasks. Every memory write is already on disk (store is synchronous),
    // so exit the process directly instead of waiting for one more line.
    std::process::exit(0);
}
