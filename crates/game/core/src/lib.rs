//! Turn scheduling engine and the collaborator contracts it drives.
//!
//! `game-core` decides, tick by tick, which actor acts next and drives that
//! actor's action to completion. Map areas, actors and actions are supplied
//! by other crates through the [`MapArea`], [`Actor`] and [`Action`] traits;
//! everything flows through [`Game::process_turn`].
pub mod action;
pub mod actor;
pub mod config;
pub mod energy;
pub mod engine;
pub mod map;
pub mod messages;
pub mod modal;
pub mod state;
pub mod turn;

pub use action::{Action, ActionContext, ActionResult, BoxedAction, DialogAction};
pub use actor::Actor;
pub use config::GameConfig;
pub use energy::Energy;
pub use engine::{EngineError, Game, GameStatus};
pub use map::{ActorRotation, MapArea};
pub use messages::MessageLog;
pub use modal::{
    Cursor, CursorHandle, Dialog, DialogHandle, DialogResult, InputCommand, InputQueue, Menu,
    MenuDialog, MenuError, Modal, ModalChange, ModalLayer, ModalStack,
};
pub use state::{ActorId, CardinalDirection, Position};
pub use turn::{Look, TurnEvent, TurnFlags, TurnResult};
