//! Per-tick aggregation of everything the presentation layer may observe.

mod event;
mod result;

pub use event::TurnEvent;
pub use result::{Look, TurnFlags, TurnResult};
