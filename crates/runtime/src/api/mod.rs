//! Public runtime API surface.
//!
//! Gathers the types exposed to consumers of the runtime crate so the driver
//! loop can stay focused on ticking the engine.

pub mod errors;
pub mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::{Command, RuntimeHandle};
