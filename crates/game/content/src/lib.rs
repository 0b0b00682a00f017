//! Reference content for the turn scheduling engine.
//!
//! This crate provides a concrete world the engine can drive:
//! - [`Arena`]: a grid map area with walls, rubble, item piles and a spawner
//! - [`Creature`]: actors controlled by input, a script, or a seeded wander
//! - step, rest, strike and pick-up actions
//! - [`Scenario`]: declarative layouts, loadable from RON (`loaders` feature)

pub mod actions;
pub mod arena;
pub mod creature;
pub mod error;
pub mod scenario;
pub mod spawn;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use actions::{GrabAction, RestAction, StepAction, StrikeAction, pick_up};
pub use arena::Arena;
pub use creature::{Behavior, BehaviorSpec, Creature, CreatureTemplate, Intent};
pub use error::ContentError;
pub use scenario::{ItemPlacement, Placement, Scenario};
pub use spawn::{SpawnRule, Spawner};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, ScenarioLoader};
