//! Identifiers and grid coordinates shared by every collaborator of the engine.

mod common;

pub use common::{ActorId, CardinalDirection, Position};
