//! Emotion tracking with time-based decay.
//!
//! The tracker keeps a bag of recent [`EmotionEvent`]s. Each processed input
//! appends exactly one event; events older than the decay window (90 seconds
//! by default) are physically removed, not tombstoned. The reported mood is
//! the highest-intensity surviving event — no smoothing, no weighted average,
//! just "loudest wins".

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::rules::{self, EMOTION_DEFAULT, EMOTION_RULES};
use crate::types::{EmotionCategory, Intensity};

/// Default decay window in seconds.
pub const DEFAULT_DECAY_WINDOW_SECS: i64 = 90;

/// Mood string reported when no unexpired events remain.
pub const NEUTRAL_MOOD: &str = "neutral";

/// A single emotional event. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionEvent {
    /// Classified emotion category.
    pub category: EmotionCategory,
    /// Clamped intensity.
    pub intensity: Intensity,
    /// Wall-clock creation time.
    pub created_at: DateTime<Utc>,
}

impl EmotionEvent {
    /// Create a new event, clamping `intensity` to `[0, 1]`.
    #[must_use]
    pub fn new(category: EmotionCategory, intensity: f32, now: DateTime<Utc>) -> Self {
        Self {
            category,
            intensity: Intensity::new(intensity),
            created_at: now,
        }
    }

    /// Whether this event has aged out of the decay window.
    /// The comparison is strict and sub-second aware: an event exactly
    /// `window_secs` old survives, one even a fraction past it does not.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, window_secs: i64) -> bool {
        (now - self.created_at).num_milliseconds() > window_secs * 1000
    }
}

/// Time-bounded list of emotion events with a dominant-mood query.
#[derive(Debug, Clone)]
pub struct EmotionTracker {
    events: Vec<EmotionEvent>,
    window_secs: i64,
}

impl EmotionTracker {
    /// Create a tracker with the default 90-second window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window_secs(DEFAULT_DECAY_WINDOW_SECS)
    }

    /// Create a tracker with a custom decay window.
    #[must_use]
    pub fn with_window_secs(window_secs: i64) -> Self {
        Self {
            events: Vec::new(),
            window_secs,
        }
    }

    /// Classify `input` and record one emotion event at `now`, then evict
    /// expired events. Always succeeds; unmatched input records Calm @ 0.3.
    pub fn record_from_text(&mut self, input: &str, now: DateTime<Utc>) {
        let lowered = input.to_lowercase();
        let &(category, intensity) =
            rules::first_match(EMOTION_RULES, &lowered).unwrap_or(&EMOTION_DEFAULT);

        trace!(%category, intensity, "Recorded emotion event");
        self.events.push(EmotionEvent::new(category, intensity, now));
        self.decay(now);
    }

    /// Remove all events older than the decay window.
    pub fn decay(&mut self, now: DateTime<Utc>) {
        let window = self.window_secs;
        self.events.retain(|e| !e.is_expired(now, window));
    }

    /// The dominant mood at `now`: the highest-intensity unexpired event,
    /// formatted as `"{category} ({percent}%)"`. Ties go to the event
    /// encountered first in list (insertion) order. Returns `"neutral"` when
    /// nothing survives the window.
    #[must_use]
    pub fn dominant_mood(&self, now: DateTime<Utc>) -> String {
        let mut dominant: Option<&EmotionEvent> = None;
        for event in &self.events {
            if event.is_expired(now, self.window_secs) {
                continue;
            }
            match dominant {
                Some(best) if event.intensity <= best.intensity => {}
                _ => dominant = Some(event),
            }
        }

        match dominant {
            Some(e) => format!("{} ({}%)", e.category, e.intensity.percent()),
            None => NEUTRAL_MOOD.to_string(),
        }
    }

    /// Number of events currently held (including any not yet evicted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the tracker holds no events at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EmotionTracker {
    fn default() -> Self {
        Self::new()
    }
}
