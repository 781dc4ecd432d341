//! Configuration for the NeuroLite companion.
//!
//! Maps directly to `neuro.toml`. Every field has a default, so an empty (or
//! missing) file yields a console-only companion.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeuroConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Orchestrator settings.
    #[serde(default)]
    pub agent: AgentConfig,
    /// Memory log settings.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Emotion tracker settings.
    #[serde(default)]
    pub emotion: EmotionConfig,
    /// Speech-to-text adapter settings.
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Twitch chat adapter settings.
    #[serde(default)]
    pub twitch: TwitchConfig,
}

impl NeuroConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns [`crate::NeuroError::Config`] if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::NeuroError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Orchestrator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Identity string used in self-reflection.
    #[serde(default = "default_identity")]
    pub identity: String,
    /// Fixed keyword used for the per-perceive recall query.
    #[serde(default = "default_recall_keyword")]
    pub recall_keyword: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            identity: "NeuroLite AI".to_string(),
            recall_keyword: "you".to_string(),
        }
    }
}

/// Memory log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Path to the flat backing file.
    #[serde(default = "default_memory_file")]
    pub file: PathBuf,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("memories.txt"),
        }
    }
}

/// Emotion tracker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Seconds before an emotion event is evicted (strict `>` comparison).
    #[serde(default = "default_decay_window")]
    pub decay_window_secs: i64,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            decay_window_secs: 90,
        }
    }
}

/// Speech-to-text adapter settings.
///
/// The adapter polls an HTTP endpoint that returns finalized utterances as a
/// JSON array (a local Whisper-style server).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Whether the adapter is started.
    #[serde(default)]
    pub enabled: bool,
    /// Transcript endpoint URL.
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,
    /// Poll interval in milliseconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://127.0.0.1:8760/transcripts".to_string(),
            poll_interval_ms: 500,
        }
    }
}

/// Twitch chat adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitchConfig {
    /// Whether the adapter is started.
    #[serde(default)]
    pub enabled: bool,
    /// IRC server host.
    #[serde(default = "default_twitch_server")]
    pub server: String,
    /// IRC server port (plain TCP).
    #[serde(default = "default_twitch_port")]
    pub port: u16,
    /// Bot account username.
    #[serde(default)]
    pub username: String,
    /// OAuth token (`oauth:...`).
    #[serde(default)]
    pub token: String,
    /// Channel to join, without the leading `#`.
    #[serde(default)]
    pub channel: String,
}

impl Default for TwitchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            server: "irc.chat.twitch.tv".to_string(),
            port: 6667,
            username: String::new(),
            token: String::new(),
            channel: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_identity() -> String { "NeuroLite AI".to_string() }
fn default_recall_keyword() -> String { "you".to_string() }
fn default_memory_file() -> PathBuf { PathBuf::from("memories.txt") }
fn default_decay_window() -> i64 { 90 }
fn default_speech_endpoint() -> String { "http://127.0.0.1:8760/transcripts".to_string() }
fn default_poll_interval() -> u64 { 500 }
fn default_twitch_server() -> String { "irc.chat.twitch.tv".to_string() }
fn default_twitch_port() -> u16 { 6667 }
