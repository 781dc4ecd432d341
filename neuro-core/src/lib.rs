//! # NeuroLite Core Library
//!
//! Transport-agnostic brain of the NeuroLite virtual companion.
//!
//! Every piece of companion state lives in an explicitly-constructed module
//! owned by the [`Agent`] orchestrator — no ambient/static state:
//!
//! - **Emotion** — decaying bag of emotion events; loudest one wins
//! - **Memory** — append-only log of tagged entries, persisted to a flat file
//! - **Goals** — small seeded priority list
//! - **Self model** — identity, evolving traits, interaction counter
//! - **Ethics** — stateless keyword-to-statement lookup
//!
//! All classification is keyword substring matching over ordered rule tables
//! evaluated top-to-bottom, first match wins (see [`rules`]). There is no
//! learning and no natural-language understanding; the point is the shape of
//! the pipeline, not the intelligence of the output.
//!
//! Operations that depend on wall-clock time take `now` explicitly so the
//! 90-second emotion decay window is testable without sleeping.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod config;
pub mod emotion;
pub mod error;
pub mod ethics;
pub mod goals;
pub mod memory;
pub mod persistence;
pub mod rules;
pub mod self_model;
pub mod types;

pub use agent::{Agent, Perception};
pub use config::NeuroConfig;
pub use error::NeuroError;
pub use memory::{MemoryEntry, MemoryLog};
pub use types::*;
