//! The orchestrator — one `perceive` call per input event.
//!
//! `perceive` sequences every module in a fixed order: record emotion,
//! compute mood, store the memory, adjust goals, update the self model, then
//! assemble the composite [`Perception`] (including a recall query for the
//! configured keyword and an ethics judgment of the raw input).
//!
//! The agent performs no internal locking and is not safe for concurrent
//! invocation. All input sources must funnel their events through a single
//! serialization point — in the CLI that is one `mpsc` channel drained by
//! the task that owns the agent.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::NeuroConfig;
use crate::emotion::EmotionTracker;
use crate::error::Result;
use crate::ethics;
use crate::goals::GoalList;
use crate::memory::MemoryLog;
use crate::self_model::SelfModel;

/// The composite response to one processed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perception {
    /// Echo of the raw input.
    pub input: String,
    /// Dominant mood string.
    pub mood: String,
    /// Recall line for the configured keyword.
    pub recall: String,
    /// Description of the current top goal.
    pub goal: String,
    /// Self-reflection line.
    pub reflection: String,
    /// Ethics judgment of the raw input.
    pub ethics: String,
}

impl fmt::Display for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Input]: {}", self.input)?;
        writeln!(f, "Mood: {}", self.mood)?;
        writeln!(f, "Recall: {}", self.recall)?;
        writeln!(f, "Goal: {}", self.goal)?;
        writeln!(f, "Self: {}", self.reflection)?;
        write!(f, "Ethics: {}", self.ethics)
    }
}

/// Central orchestrator owning all companion state.
#[derive(Debug)]
pub struct Agent {
    emotions: EmotionTracker,
    memory: MemoryLog,
    goals: GoalList,
    self_model: SelfModel,
    recall_keyword: String,
}

impl Agent {
    /// Build an agent from configuration, opening (and loading) the memory
    /// backing file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NeuroError::MemoryFile`] if an existing memory file
    /// cannot be read.
    pub fn new(config: &NeuroConfig) -> Result<Self> {
        Ok(Self {
            emotions: EmotionTracker::with_window_secs(config.emotion.decay_window_secs),
            memory: MemoryLog::open(&config.memory.file)?,
            goals: GoalList::new(),
            self_model: SelfModel::new(config.agent.identity.clone()),
            recall_keyword: config.agent.recall_keyword.clone(),
        })
    }

    /// Process one input event at the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Propagates the memory-store I/O error; every other sub-call is
    /// infallible.
    pub fn perceive(&mut self, input: &str) -> Result<Perception> {
        self.perceive_at(input, Utc::now())
    }

    /// Process one input event at an explicit time. Exists so decay behavior
    /// is testable without sleeping.
    ///
    /// # Errors
    ///
    /// Propagates the memory-store I/O error.
    pub fn perceive_at(&mut self, input: &str, now: DateTime<Utc>) -> Result<Perception> {
        let start = Instant::now();

        self.emotions.record_from_text(input, now);
        let mood = self.emotions.dominant_mood(now);
        self.memory.store(input, &mood, now)?;
        self.goals.adjust_from_text(input);
        self.self_model.update(input);

        let perception = Perception {
            input: input.to_string(),
            mood,
            recall: self.memory.recall(&self.recall_keyword),
            goal: self.goals.top_goal().to_string(),
            reflection: self.self_model.reflect(),
            ethics: ethics::evaluate(input).to_string(),
        };

        debug!(
            interactions = self.self_model.interaction_count(),
            memories = self.memory.len(),
            elapsed_us = start.elapsed().as_micros(),
            "Perceived input"
        );

        Ok(perception)
    }

    /// The emotion tracker.
    #[must_use]
    pub fn emotions(&self) -> &EmotionTracker {
        &self.emotions
    }

    /// The memory log.
    #[must_use]
    pub fn memory(&self) -> &MemoryLog {
        &self.memory
    }

    /// The goal list.
    #[must_use]
    pub fn goals(&self) -> &GoalList {
        &self.goals
    }

    /// The self model.
    #[must_use]
    pub fn self_model(&self) -> &SelfModel {
        &self.self_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NeuroConfig;

    fn temp_agent() -> (tempfile::TempDir, Agent) {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = NeuroConfig::default();
        config.memory.file = dir.path().join("memories.txt");
        let agent = Agent::new(&config).expect("agent");
        (dir, agent)
    }

    #[test]
    fn perceive_sequences_all_modules() {
        let (_dir, mut agent) = temp_agent();
        let p = agent.perceive("this is fun, why do you exist").expect("perceive");

        assert_eq!(p.mood, "Happy (70%)");
        assert_eq!(p.recall, "I recall: this is fun, why do you exist");
        assert_eq!(p.goal, "Question existence");
        assert_eq!(
            p.reflection,
            "I am NeuroLite AI, curious, reflective. Interactions: 1."
        );
        assert_eq!(p.ethics, "Ethics uncertain, context matters.");
    }

    #[test]
    fn recall_uses_configured_keyword() {
        let (_dir, mut agent) = temp_agent();
        agent.perceive("nothing relevant here").expect("perceive");
        let p = agent.perceive("more filler").expect("perceive");
        // Neither input contains "you".
        assert_eq!(p.recall, "Nothing comes to mind.");
    }

    #[test]
    fn display_block_has_all_lines() {
        let perception = Perception {
            input: "hi".to_string(),
            mood: "neutral".to_string(),
            recall: "Nothing comes to mind.".to_string(),
            goal: "Be helpful".to_string(),
            reflection: "I am NeuroLite AI, curious, reflective. Interactions: 1.".to_string(),
            ethics: "Ethics uncertain, context matters.".to_string(),
        };
        let block = perception.to_string();
        assert!(block.starts_with("[Input]: hi\n"));
        assert!(block.contains("\nMood: neutral\n"));
        assert!(block.ends_with("Ethics: Ethics uncertain, context matters."));
    }
}
