//! Core type definitions for the NeuroLite companion.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// Emotion categories recognised by the keyword classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionCategory {
    /// Positive affect (love, fun, friend).
    Happy,
    /// Loss or loneliness (lost, alone).
    Sad,
    /// Hostility (hate, annoy).
    Angry,
    /// Default when nothing else matches.
    Calm,
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Calm => "Calm",
        };
        write!(f, "{name}")
    }
}

/// Emotion intensity, always clamped to `[0.0, 1.0]`.
///
/// Backed by [`OrderedFloat`] so intensities have a total order and the
/// dominant-mood scan needs no NaN special-casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Intensity(OrderedFloat<f32>);

impl Intensity {
    /// Create an intensity, clamping the raw value to `[0, 1]`.
    #[must_use]
    pub fn new(raw: f32) -> Self {
        Self(OrderedFloat(raw.clamp(0.0, 1.0)))
    }

    /// Get the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0.into_inner()
    }

    /// Intensity as a whole percentage, rounded to nearest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent(self) -> i32 {
        (self.value() * 100.0).round() as i32
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Classification of a memory entry.
///
/// An input is *episodic* when it contains the literal word `remember`
/// (case-sensitive, checked on the raw input), *semantic* otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryKind {
    /// "What happened" — inputs that ask to remember.
    Episodic,
    /// "What I know" — everything else.
    Semantic,
}

impl MemoryKind {
    /// Classify raw input text.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        if input.contains("remember") {
            Self::Episodic
        } else {
            Self::Semantic
        }
    }

    /// Parse a persisted kind field.
    ///
    /// Anything other than `episodic` maps to [`Self::Semantic`], which is
    /// also the default classification.
    #[must_use]
    pub fn parse(field: &str) -> Self {
        if field == "episodic" {
            Self::Episodic
        } else {
            Self::Semantic
        }
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Episodic => "episodic",
            Self::Semantic => "semantic",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_clamps_both_ends() {
        assert_eq!(Intensity::new(-0.5).value(), 0.0);
        assert_eq!(Intensity::new(1.5).value(), 1.0);
        assert_eq!(Intensity::new(0.7).value(), 0.7);
    }

    #[test]
    fn intensity_percent_rounds() {
        assert_eq!(Intensity::new(0.7).percent(), 70);
        assert_eq!(Intensity::new(0.666).percent(), 67);
        assert_eq!(Intensity::new(0.0).percent(), 0);
    }

    #[test]
    fn kind_classification_is_case_sensitive() {
        assert_eq!(MemoryKind::classify("please remember this"), MemoryKind::Episodic);
        assert_eq!(MemoryKind::classify("please Remember this"), MemoryKind::Semantic);
        assert_eq!(MemoryKind::classify("just a fact"), MemoryKind::Semantic);
    }

    #[test]
    fn kind_parse_defaults_to_semantic() {
        assert_eq!(MemoryKind::parse("episodic"), MemoryKind::Episodic);
        assert_eq!(MemoryKind::parse("semantic"), MemoryKind::Semantic);
        assert_eq!(MemoryKind::parse("procedural"), MemoryKind::Semantic);
    }
}
