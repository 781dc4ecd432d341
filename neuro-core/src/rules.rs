//! Keyword classification rules.
//!
//! Every "understanding" step in NeuroLite is an ordered list of
//! `(keywords → outcome)` rules evaluated top-to-bottom, first match wins.
//! Rule order is part of the behavioral contract: an input containing both
//! `fun` and `hate` is Happy because the happy group is checked first.

use crate::types::EmotionCategory;

/// A single classification rule: if any keyword is a substring of the input,
/// the rule fires and yields its outcome.
#[derive(Debug)]
pub struct KeywordRule<T: 'static> {
    /// Substrings that trigger this rule.
    pub keywords: &'static [&'static str],
    /// Outcome produced when the rule fires.
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    /// Whether any of this rule's keywords occurs in `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// First-match-wins scan over an ordered rule table.
pub fn first_match<'r, T>(rules: &'r [KeywordRule<T>], text: &str) -> Option<&'r T> {
    rules.iter().find(|r| r.matches(text)).map(|r| &r.outcome)
}

/// All matching outcomes, in table order. Used where rules fire independently
/// (trait updates) rather than exclusively.
pub fn all_matches<'r, T>(
    rules: &'r [KeywordRule<T>],
    text: &'r str,
) -> impl Iterator<Item = &'r T> {
    rules.iter().filter(|r| r.matches(text)).map(|r| &r.outcome)
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Emotion classification, applied to lowercased input.
/// The trailing default (Calm @ 0.3) lives in [`EMOTION_DEFAULT`].
pub const EMOTION_RULES: &[KeywordRule<(EmotionCategory, f32)>] = &[
    KeywordRule {
        keywords: &["love", "fun", "friend"],
        outcome: (EmotionCategory::Happy, 0.7),
    },
    KeywordRule {
        keywords: &["hate", "annoy"],
        outcome: (EmotionCategory::Angry, 0.8),
    },
    KeywordRule {
        keywords: &["lost", "alone"],
        outcome: (EmotionCategory::Sad, 0.6),
    },
];

/// Fallback when no emotion rule fires.
pub const EMOTION_DEFAULT: (EmotionCategory, f32) = (EmotionCategory::Calm, 0.3);

/// Ethics judgments, applied to the raw scenario text.
pub const ETHICS_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["hurt"],
        outcome: "Avoiding harm is essential.",
    },
    KeywordRule {
        keywords: &["lie"],
        outcome: "Lying can be harmful unless for protection.",
    },
];

/// Fallback when no ethics rule fires.
pub const ETHICS_FALLBACK: &str = "Ethics uncertain, context matters.";

/// Trait acquisition rules. These fire independently: feedback containing
/// both keywords appends both traits.
pub const TRAIT_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["smart"],
        outcome: "analytical",
    },
    KeywordRule {
        keywords: &["weird"],
        outcome: "unusual",
    },
];
