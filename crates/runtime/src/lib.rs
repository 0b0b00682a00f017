//! Async host for the turn scheduling engine.
//!
//! This crate owns a [`game_core::Game`], ticks it on a fixed interval, and
//! exposes a cloneable [`RuntimeHandle`] so other tasks can feed player input
//! and observe turn results without touching the engine directly.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the driver loop and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] broadcasts turn results to subscribers
//! - [`config`] loads runtime settings from RON and the environment
pub mod api;
pub mod config;
pub mod events;
pub mod runtime;

pub use api::{Command, Result, RuntimeError, RuntimeHandle};
pub use config::RuntimeConfig;
pub use events::{EventBus, RuntimeEvent};
pub use runtime::{Runtime, RuntimeBuilder};
