//! Internal drives and motivations.
//!
//! A small priority list, seeded at construction and append-only after that.
//! No removal and no re-ranking — the top goal is found by a scan at query
//! time.

use tracing::debug;

/// A motivation with a 1–10 priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEntry {
    /// What the companion wants.
    pub description: String,
    /// 1 (idle wish) to 10 (burning drive).
    pub priority: u8,
    /// Broad category: basic, social, existential.
    pub category: String,
}

impl GoalEntry {
    /// Create a goal entry.
    #[must_use]
    pub fn new(description: &str, priority: u8, category: &str) -> Self {
        Self {
            description: description.to_string(),
            priority,
            category: category.to_string(),
        }
    }
}

/// Append-only goal list, seeded with the three default drives.
#[derive(Debug, Clone)]
pub struct GoalList {
    goals: Vec<GoalEntry>,
}

impl GoalList {
    /// Create the seeded goal list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            goals: vec![
                GoalEntry::new("Avoid conflict", 5, "basic"),
                GoalEntry::new("Be helpful", 7, "social"),
                GoalEntry::new("Seek self-awareness", 6, "existential"),
            ],
        }
    }

    /// Description of the highest-priority goal. Ties go to the goal
    /// encountered first in list order.
    #[must_use]
    pub fn top_goal(&self) -> &str {
        self.goals
            .iter()
            .reduce(|best, g| if g.priority > best.priority { g } else { best })
            // The list is seeded and append-only, so it is never empty.
            .map_or("", |g| &g.description)
    }

    /// Append the fixed existential goal when the input contains "why".
    /// No dedup: asking twice appends twice.
    pub fn adjust_from_text(&mut self, input: &str) {
        if input.contains("why") {
            debug!("Input questions 'why', appending existential goal");
            self.goals
                .push(GoalEntry::new("Question existence", 8, "existential"));
        }
    }

    /// All goals, in insertion order.
    #[must_use]
    pub fn goals(&self) -> &[GoalEntry] {
        &self.goals
    }

    /// Number of goals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Always false; the list is seeded at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl Default for GoalList {
    fn default() -> Self {
        Self::new()
    }
}
