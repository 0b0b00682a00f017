//! Headless dungeon client.
//!
//! Composition root that loads a scenario, hosts it in a [`Runtime`], feeds a
//! scripted input sequence and logs what happened.
//!
//! Environment variables (a `.env` file is honoured):
//! - `DUNGEON_SCENARIO` - RON scenario path (default: built-in arena)
//! - `DUNGEON_MAX_TICKS` - Tick limit for the session (default: 400)
//! - `RUST_LOG` - Log filter (default: info)
//! - see [`RuntimeConfig::apply_env`] for engine and channel settings
//!
//! ```bash
//! RUST_LOG=game_core=debug cargo run -p dungeon-client
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use game_content::Scenario;
use game_core::InputCommand;
use runtime::{Runtime, RuntimeConfig, RuntimeEvent, RuntimeHandle};

const DEFAULT_MAX_TICKS: u64 = 400;
const MESSAGE_TAIL: usize = 10;

/// Walk around, pick something up, rest, and wander back.
const SCRIPT: &[InputCommand] = &[
    InputCommand::Right,
    InputCommand::Down,
    InputCommand::Char('g'),
    InputCommand::Down,
    InputCommand::Confirm,
    InputCommand::Char('.'),
    InputCommand::Right,
    InputCommand::Right,
    InputCommand::Up,
    InputCommand::Char('g'),
    InputCommand::Confirm,
    InputCommand::Left,
    InputCommand::Left,
    InputCommand::Char('.'),
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = RuntimeConfig::from_env().context("loading runtime config")?;
    let scenario = load_scenario()?;
    let max_ticks = match std::env::var("DUNGEON_MAX_TICKS") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid DUNGEON_MAX_TICKS {value:?}"))?,
        Err(_) => DEFAULT_MAX_TICKS,
    };

    let (arena, player) = scenario.build(&config.game).context("laying out scenario")?;
    let mut runtime = Runtime::builder()
        .config(config)
        .area(arena, player)
        .build()?;

    let handle = runtime.handle();
    let reporter = tokio::spawn(report_events(handle.subscribe()));
    let feeder = tokio::spawn(feed_script(handle));

    let ticks = runtime.run_for(max_ticks).await;
    if runtime.is_running() {
        runtime.game_mut().stop_game();
    }

    feeder.abort();
    let turns = reporter.await.context("event reporter panicked")?;

    let game = runtime.game();
    info!(ticks, turns, status = %game.status(), "session finished");
    if let Some(hero) = game.area().creature(game.player()) {
        info!(
            health = hero.health(),
            turns_taken = hero.turns_taken(),
            inventory = ?hero.inventory(),
            "player"
        );
    }

    let skip = game.messages().len().saturating_sub(MESSAGE_TAIL);
    for message in game.messages().iter().skip(skip) {
        info!("> {message}");
    }

    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scenario() -> Result<Scenario> {
    match std::env::var("DUNGEON_SCENARIO") {
        Ok(path) => {
            info!(%path, "loading scenario");
            Scenario::load(Path::new(&path))
        }
        Err(_) => Scenario::builtin(),
    }
}

async fn feed_script(handle: RuntimeHandle) {
    for &command in SCRIPT {
        if let Err(error) = handle.send_input(command).await {
            warn!(%error, "input feeder stopped");
            return;
        }
    }
}

/// Logs published turns until the run loop exits. Returns how many player
/// turns were observed.
async fn report_events(mut events: broadcast::Receiver<RuntimeEvent>) -> usize {
    let mut player_turns = 0;
    loop {
        match events.recv().await {
            Ok(RuntimeEvent::Turn(turn)) => {
                if turn.did_player_act() {
                    player_turns += 1;
                }
                for event in turn.events() {
                    info!(actor = %event.actor(), ?event, "turn event");
                }
            }
            Ok(RuntimeEvent::PlayerDied) => warn!("the player has died"),
            Ok(RuntimeEvent::Stopped) | Err(RecvError::Closed) => return player_turns,
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "event reporter lagged"),
        }
    }
}
