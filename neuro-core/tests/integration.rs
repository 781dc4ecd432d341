//! Integration tests — end-to-end perceive flows.
//!
//! These exercise the full pipeline: input → emotion → mood → memory store →
//! goal adjust → self update → composite response, plus restart behavior of
//! the persisted memory log.

use chrono::{Duration, Utc};

use neuro_core::agent::Agent;
use neuro_core::config::NeuroConfig;
use neuro_core::memory::MemoryLog;
use neuro_core::types::MemoryKind;

fn config_in(dir: &tempfile::TempDir) -> NeuroConfig {
    let mut config = NeuroConfig::default();
    config.memory.file = dir.path().join("memories.txt");
    config
}

#[test]
fn conversation_flow_builds_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut agent = Agent::new(&config_in(&dir)).expect("agent");

    let p1 = agent.perceive("hello there").expect("perceive");
    assert_eq!(p1.mood, "Calm (30%)");
    assert_eq!(p1.goal, "Be helpful");

    let p2 = agent.perceive("i love talking to you").expect("perceive");
    assert_eq!(p2.mood, "Happy (70%)");
    assert_eq!(p2.recall, "I recall: i love talking to you");

    let p3 = agent.perceive("you are so smart, why is that").expect("perceive");
    assert_eq!(p3.goal, "Question existence");
    assert!(p3.reflection.contains("analytical"));
    assert!(p3.reflection.ends_with("Interactions: 3."));

    assert_eq!(agent.memory().len(), 3);
    assert_eq!(agent.goals().len(), 4);
}

#[test]
fn double_why_appends_two_goals() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut agent = Agent::new(&config_in(&dir)).expect("agent");

    agent.perceive("why").expect("perceive");
    agent.perceive("no really, why").expect("perceive");

    let existential = agent
        .goals()
        .goals()
        .iter()
        .filter(|g| g.description == "Question existence")
        .count();
    assert_eq!(existential, 2);
    assert_eq!(agent.goals().top_goal(), "Question existence");
}

#[test]
fn sad_mood_propagates_into_memory_tag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut agent = Agent::new(&config_in(&dir)).expect("agent");

    let p = agent.perceive("i feel so alone").expect("perceive");
    assert_eq!(p.mood, "Sad (60%)");
    assert_eq!(agent.memory().entries()[0].tag, "sad");
}

#[test]
fn mood_decays_back_to_neutral_between_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut agent = Agent::new(&config_in(&dir)).expect("agent");

    let start = Utc::now();
    agent.perceive_at("i hate mondays", start).expect("perceive");

    // Two minutes later the angry event is outside the window; the new
    // input classifies as Calm and is the only survivor.
    let later = start + Duration::seconds(120);
    let p = agent.perceive_at("just checking in", later).expect("perceive");
    assert_eq!(p.mood, "Calm (30%)");
}

#[test]
fn memory_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(&dir);

    {
        let mut agent = Agent::new(&config).expect("agent");
        agent.perceive("remember i like tea").expect("perceive");
        agent.perceive("you said hi earlier").expect("perceive");
    }

    // A fresh agent reloads the flat file.
    let mut agent = Agent::new(&config).expect("agent");
    assert_eq!(agent.memory().len(), 2);
    assert_eq!(agent.memory().entries()[0].kind, MemoryKind::Episodic);

    let p = agent.perceive("what was that").expect("perceive");
    assert_eq!(p.recall, "I recall: you said hi earlier");
}

#[test]
fn adapter_formatted_inputs_flow_through_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut agent = Agent::new(&config_in(&dir)).expect("agent");

    let p = agent
        .perceive("[Twitch somestreamer]: this chat is fun")
        .expect("perceive");
    assert_eq!(p.mood, "Happy (70%)");
    assert_eq!(
        agent.memory().entries()[0].text,
        "[Twitch somestreamer]: this chat is fun"
    );

    agent.perceive("[Voice] can you hear me").expect("perceive");
    assert_eq!(agent.memory().recall("hear"), "I recall: [Voice] can you hear me");
}

#[test]
fn log_is_readable_standalone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(&dir);

    {
        let mut agent = Agent::new(&config).expect("agent");
        agent.perceive("one").expect("perceive");
        agent.perceive("two").expect("perceive");
        agent.perceive("three").expect("perceive");
    }

    let log = MemoryLog::open(&config.memory.file).expect("open");
    assert_eq!(log.len(), 3);
    let texts: Vec<_> = log.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}
