//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing. It is `Send`, so input can be fed
//! from any task even though the engine itself stays on the runtime's task.
use tokio::sync::{broadcast, mpsc};

use game_core::InputCommand;

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, RuntimeEvent};

/// Commands applied by the runtime at the start of each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Queue one unit of player input.
    Input(InputCommand),
    /// Stop the engine; the run loop exits after the current step.
    Stop,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone, Debug)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Queue player input. Waits while the command buffer is full.
    pub async fn send_input(&self, command: InputCommand) -> Result<()> {
        self.send(Command::Input(command)).await
    }

    /// Ask the runtime to stop.
    pub async fn stop(&self) -> Result<()> {
        self.send(Command::Stop).await
    }

    /// Non-blocking variant of [`send_input`](Self::send_input) for
    /// synchronous callers.
    pub fn try_send_input(&self, command: InputCommand) -> Result<()> {
        self.command_tx
            .try_send(Command::Input(command))
            .map_err(|error| match error {
                mpsc::error::TrySendError::Full(_) => RuntimeError::CommandBufferFull,
                mpsc::error::TrySendError::Closed(_) => RuntimeError::CommandChannelClosed,
            })
    }

    /// Subscribe to runtime events
    ///
    /// Events published before the call are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.event_bus.subscribe()
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
