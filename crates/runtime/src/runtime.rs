//! High-level runtime driver.
//!
//! The runtime owns the [`Game`], wires up command/event channels, and ticks
//! the engine on a fixed interval. `Game` is not `Send`, so the loop runs on
//! the caller's task; other tasks talk to it through [`RuntimeHandle`].

use tokio::sync::{broadcast, mpsc};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use game_core::{ActorId, Game, MapArea};

use crate::api::{Command, Result, RuntimeError, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::events::{EventBus, RuntimeEvent};

/// Main runtime that drives the turn scheduling engine
pub struct Runtime<M: MapArea> {
    game: Game<M>,
    config: RuntimeConfig,
    handle: RuntimeHandle,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    ticks: u64,
}

impl<M: MapArea> Runtime<M> {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder<M> {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.event_bus.subscribe()
    }

    pub fn game(&self) -> &Game<M> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<M> {
        &mut self.game
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Number of `process_turn()` calls made so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.game.is_running()
    }

    /// Execute a single tick.
    ///
    /// Applies every pending command, then calls `process_turn()` once if the
    /// engine is still running. Returns whether the engine keeps running.
    pub fn step(&mut self) -> bool {
        while let Ok(command) = self.command_rx.try_recv() {
            self.apply(command);
        }
        if !self.game.is_running() {
            return false;
        }

        let turn = self.game.process_turn();
        self.ticks += 1;

        if turn.did_player_act() || !turn.events().is_empty() {
            debug!(
                tick = self.ticks,
                events = turn.events().len(),
                player_acted = turn.did_player_act(),
                "publishing turn"
            );
            self.event_bus.publish(RuntimeEvent::Turn(turn));
        }

        if self.game.is_player_dead() {
            info!(tick = self.ticks, "player died");
            self.event_bus.publish(RuntimeEvent::PlayerDied);
            self.game.stop_game();
        }

        self.game.is_running()
    }

    /// Run the game loop until the engine stops
    pub async fn run(&mut self) -> u64 {
        self.drive(None).await
    }

    /// Run at most `max_ticks` ticks. Returns the number of ticks taken.
    pub async fn run_for(&mut self, max_ticks: u64) -> u64 {
        self.drive(Some(max_ticks)).await
    }

    async fn drive(&mut self, limit: Option<u64>) -> u64 {
        let mut interval = time::interval(self.config.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let start = self.ticks;

        while self.game.is_running() && limit.is_none_or(|limit| self.ticks - start < limit) {
            tokio::select! {
                _ = interval.tick() => {
                    self.step();
                }
                Some(command) = self.command_rx.recv() => self.apply(command),
            }
        }

        let taken = self.ticks - start;
        info!(ticks = taken, status = %self.game.status(), "run loop exited");
        self.event_bus.publish(RuntimeEvent::Stopped);
        taken
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Input(input) => self.game.push_input(input),
            Command::Stop => {
                info!("stop requested");
                self.game.stop_game();
            }
        }
    }
}

impl<M: MapArea> std::fmt::Debug for Runtime<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("game", &self.game)
            .field("config", &self.config)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

enum GameSource<M: MapArea> {
    Ready(Game<M>),
    Area { area: M, player: ActorId },
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder<M: MapArea> {
    config: RuntimeConfig,
    source: Option<GameSource<M>>,
}

impl<M: MapArea> RuntimeBuilder<M> {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            source: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Drive an already constructed game.
    pub fn game(mut self, game: Game<M>) -> Self {
        self.source = Some(GameSource::Ready(game));
        self
    }

    /// Build the game from `area` using the configured [`game_core::GameConfig`].
    pub fn area(mut self, area: M, player: ActorId) -> Self {
        self.source = Some(GameSource::Area { area, player });
        self
    }

    /// Starts the game and wires up the channels.
    pub fn build(self) -> Result<Runtime<M>> {
        let mut game = match self.source.ok_or(RuntimeError::MissingGame)? {
            GameSource::Ready(game) => game,
            GameSource::Area { area, player } => Game::new(self.config.game.clone(), area, player)?,
        };
        game.initialize()?;

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        info!(
            player = %game.player(),
            tick_interval_ms = self.config.tick_interval_ms,
            "runtime built"
        );

        Ok(Runtime {
            game,
            config: self.config,
            handle,
            command_rx,
            event_bus,
            ticks: 0,
        })
    }
}
