use game_content::{Arena, BehaviorSpec, CreatureTemplate, Intent, Placement, Scenario};
use game_core::{
    ActorId, CardinalDirection, Game, GameConfig, GameStatus, InputCommand, Position, TurnEvent,
};
use runtime::{Runtime, RuntimeConfig, RuntimeError, RuntimeEvent};

fn scenario(creatures: Vec<Placement>) -> Scenario {
    Scenario {
        width: 6,
        height: 6,
        player: Placement {
            position: Position::new(1, 1),
            template: CreatureTemplate::new("hero", 10, 12, 3)
                .with_behavior(BehaviorSpec::Controlled),
        },
        creatures,
        walls: Vec::new(),
        rubble: Vec::new(),
        items: Vec::new(),
        spawn: None,
        seed: 0,
    }
}

fn fast_config() -> RuntimeConfig {
    RuntimeConfig {
        tick_interval_ms: 1,
        ..RuntimeConfig::default()
    }
}

fn runtime_for(scenario: &Scenario) -> Runtime<Arena> {
    let config = fast_config();
    let (arena, player) = scenario.build(&config.game).unwrap();
    Runtime::builder()
        .config(config)
        .area(arena, player)
        .build()
        .unwrap()
}

fn ogre() -> Placement {
    Placement {
        position: Position::new(2, 1),
        template: CreatureTemplate::new("ogre", 30, 50, 50).with_behavior(BehaviorSpec::Scripted(
            vec![Intent::Step(CardinalDirection::West)],
        )),
    }
}

#[test]
fn building_without_a_game_fails() {
    let result = Runtime::<Arena>::builder().config(fast_config()).build();
    assert!(matches!(result, Err(RuntimeError::MissingGame)));
}

#[test]
fn ended_games_cannot_be_hosted() {
    let config = GameConfig::default();
    let (arena, player) = scenario(Vec::new()).build(&config).unwrap();
    let mut game = Game::new(config, arena, player).unwrap();
    game.initialize().unwrap();
    game.stop_game();

    let result = Runtime::builder().game(game).build();
    assert!(matches!(result, Err(RuntimeError::Engine(_))));
}

#[test]
fn built_runtime_uses_the_configured_threshold() {
    let mut config = fast_config();
    config.game.energy_threshold = 24;
    let (arena, player) = scenario(Vec::new()).build(&config.game).unwrap();

    let runtime = Runtime::builder().config(config).area(arena, player).build().unwrap();
    assert!(runtime.is_running());
    assert_eq!(runtime.game().config().energy_threshold, 24);
}

#[test]
fn step_publishes_the_player_move() {
    let mut runtime = runtime_for(&scenario(Vec::new()));
    let mut events = runtime.subscribe();
    runtime.handle().try_send_input(InputCommand::Right).unwrap();

    for _ in 0..10 {
        runtime.step();
        if let Ok(RuntimeEvent::Turn(turn)) = events.try_recv() {
            assert!(turn.did_player_act());
            assert!(turn.events().contains(&TurnEvent::Moved {
                actor: ActorId(0),
                from: Position::new(1, 1),
                to: Position::new(2, 1),
            }));
            return;
        }
    }
    panic!("player never moved");
}

#[test]
fn quiet_ticks_publish_nothing() {
    let mut runtime = runtime_for(&scenario(Vec::new()));
    let mut events = runtime.subscribe();

    for _ in 0..20 {
        assert!(runtime.step());
    }
    assert!(events.try_recv().is_err());
    assert_eq!(runtime.ticks(), 20);
}

#[test]
fn death_is_published_and_stops_the_engine() {
    let mut runtime = runtime_for(&scenario(vec![ogre()]));
    let mut events = runtime.subscribe();

    assert!(!runtime.step());

    match events.try_recv().unwrap() {
        RuntimeEvent::Turn(turn) => {
            assert!(turn.events().contains(&TurnEvent::Died { actor: ActorId(0) }))
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(events.try_recv().unwrap(), RuntimeEvent::PlayerDied);
    assert_eq!(runtime.game().status(), GameStatus::Ended);
}

#[tokio::test]
async fn run_for_stops_at_the_tick_limit() {
    let mut runtime = runtime_for(&scenario(Vec::new()));
    let mut events = runtime.subscribe();

    assert_eq!(runtime.run_for(5).await, 5);
    assert!(runtime.is_running());
    assert_eq!(events.recv().await.unwrap(), RuntimeEvent::Stopped);
}

#[tokio::test]
async fn run_exits_when_a_handle_requests_stop() {
    let mut runtime = runtime_for(&scenario(Vec::new()));
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    let feeder = tokio::spawn(async move {
        handle.send_input(InputCommand::Down).await.unwrap();
        handle.stop().await.unwrap();
    });

    runtime.run().await;
    feeder.await.unwrap();

    assert_eq!(runtime.game().status(), GameStatus::Ended);
    let mut last = None;
    while let Ok(event) = events.try_recv() {
        last = Some(event);
    }
    assert_eq!(last, Some(RuntimeEvent::Stopped));
}

#[tokio::test]
async fn run_ends_after_player_death() {
    let mut runtime = runtime_for(&scenario(vec![ogre()]));
    let mut events = runtime.subscribe();

    assert_eq!(runtime.run().await, 1);

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert!(matches!(seen.as_slice(), [
        RuntimeEvent::Turn(_),
        RuntimeEvent::PlayerDied,
        RuntimeEvent::Stopped
    ]));
}
