//! Input adapters for the NeuroLite companion.
//!
//! Each adapter is an independent producer task that turns an external event
//! stream (speech recognition, Twitch chat) into [`event::InputEvent`]s sent
//! over a `tokio::mpsc` channel. The channel's single consumer owns the
//! agent, so perceive calls are serialized by construction — the adapters
//! themselves never touch companion state.
//!
//! Adapter failures (endpoint down, IRC disconnect) are logged and retried
//! with backoff; they never take down the perceive loop.

pub mod error;
pub mod event;
pub mod speech;
pub mod twitch;

pub use error::AdapterError;
pub use event::{InputEvent, InputSource};
