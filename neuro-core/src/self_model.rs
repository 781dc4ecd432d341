//! Identity and evolving personality.
//!
//! The identity string is fixed for the life of the model; traits are
//! append-only with duplicates allowed, so repeated feedback accumulates
//! unboundedly. Every update bumps the interaction counter whether or not a
//! trait rule fires.

use crate::rules::{self, TRAIT_RULES};

/// Default identity when none is configured.
pub const DEFAULT_IDENTITY: &str = "NeuroLite AI";

/// Mutable self state: identity, traits, interaction counter.
#[derive(Debug, Clone)]
pub struct SelfModel {
    identity: String,
    traits: Vec<String>,
    interactions: u64,
}

impl SelfModel {
    /// Create a self model with the given identity and the seed traits
    /// `curious` and `reflective`.
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            traits: vec!["curious".to_string(), "reflective".to_string()],
            interactions: 0,
        }
    }

    /// Process one piece of feedback: the interaction counter always
    /// increments, and every matching trait rule appends its trait. The
    /// checks are independent — "smart but weird" appends both.
    pub fn update(&mut self, feedback: &str) {
        self.interactions += 1;
        for &trait_name in rules::all_matches(TRAIT_RULES, feedback) {
            self.traits.push(trait_name.to_string());
        }
    }

    /// One-line self summary.
    #[must_use]
    pub fn reflect(&self) -> String {
        format!(
            "I am {}, {}. Interactions: {}.",
            self.identity,
            self.traits.join(", "),
            self.interactions
        )
    }

    /// The fixed identity string.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Accumulated traits, in acquisition order.
    #[must_use]
    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    /// Total updates processed.
    #[must_use]
    pub fn interaction_count(&self) -> u64 {
        self.interactions
    }
}

impl Default for SelfModel {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_formats_identity_traits_and_count() {
        let mut model = SelfModel::default();
        model.update("hello there");
        assert_eq!(
            model.reflect(),
            "I am NeuroLite AI, curious, reflective. Interactions: 1."
        );
    }

    #[test]
    fn counter_increments_without_trait_match() {
        let mut model = SelfModel::default();
        model.update("nothing notable");
        model.update("still nothing");
        assert_eq!(model.interaction_count(), 2);
        assert_eq!(model.traits().len(), 2);
    }

    #[test]
    fn both_rules_may_fire_on_one_update() {
        let mut model = SelfModel::default();
        model.update("you are smart but weird");
        assert_eq!(
            model.traits(),
            &["curious", "reflective", "analytical", "unusual"]
        );
    }

    #[test]
    fn duplicate_traits_accumulate() {
        let mut model = SelfModel::default();
        model.update("smart");
        model.update("so smart");
        let analytical = model.traits().iter().filter(|t| *t == "analytical").count();
        assert_eq!(analytical, 2);
    }
}
