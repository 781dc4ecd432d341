//! Input events — the only contract between adapters and the agent.
//!
//! Each adapter delivers a single pre-formatted string per event. The agent
//! never sees adapter-specific types; the source tag exists for logging only.

use std::fmt;

/// Where an input event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Line read from standard input.
    Console,
    /// Finalized utterance from the speech adapter.
    Voice,
    /// Chat message from the Twitch adapter.
    Twitch,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Console => "console",
            Self::Voice => "voice",
            Self::Twitch => "twitch",
        };
        write!(f, "{name}")
    }
}

/// One text event bound for the agent's perceive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// Originating adapter.
    pub source: InputSource,
    /// Pre-formatted text handed to `perceive` as-is.
    pub text: String,
}

impl InputEvent {
    /// Console input passes through unformatted.
    #[must_use]
    pub fn console(line: impl Into<String>) -> Self {
        Self {
            source: InputSource::Console,
            text: line.into(),
        }
    }

    /// Voice events are formatted `"[Voice] {text}"`.
    #[must_use]
    pub fn voice(text: &str) -> Self {
        Self {
            source: InputSource::Voice,
            text: format!("[Voice] {text}"),
        }
    }

    /// Twitch events are formatted `"[Twitch {username}]: {message}"`.
    #[must_use]
    pub fn twitch(username: &str, message: &str) -> Self {
        Self {
            source: InputSource::Twitch,
            text: format!("[Twitch {username}]: {message}"),
        }
    }
}
