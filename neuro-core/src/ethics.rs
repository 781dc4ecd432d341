//! Moral judgment simulation.
//!
//! A pure first-match-wins lookup over [`crate::rules::ETHICS_RULES`] with a
//! generic fallback. Stateless, no side effects.

use crate::rules::{self, ETHICS_FALLBACK, ETHICS_RULES};

/// Evaluate a scenario and return the canned judgment for the first matching
/// rule, or the "context matters" fallback.
#[must_use]
pub fn evaluate(scenario: &str) -> &'static str {
    rules::first_match(ETHICS_RULES, scenario).copied().unwrap_or(ETHICS_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hurt_triggers_harm_avoidance() {
        assert_eq!(
            evaluate("that would hurt someone"),
            "Avoiding harm is essential."
        );
    }

    #[test]
    fn lie_triggers_conditional_harm() {
        assert_eq!(
            evaluate("is it ok to lie"),
            "Lying can be harmful unless for protection."
        );
    }

    #[test]
    fn anything_else_falls_back() {
        assert_eq!(evaluate("what is red"), "Ethics uncertain, context matters.");
    }
}
