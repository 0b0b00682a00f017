//! Scripted map area and actors shared by the engine tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use game_core::{
    Action, ActionContext, ActionResult, Actor, ActorId, ActorRotation, BoxedAction, Energy, Game,
    GameConfig, InputQueue, MapArea, Position,
};

pub const PLAYER: ActorId = ActorId(0);

/// How a dummy decides its next action.
pub enum Plan {
    /// Rests every time it is asked.
    Rest,
    /// Hands out scripted actions; defers once the script runs out.
    Script(VecDeque<BoxedAction<Board>>),
    /// Rests once per queued input command; defers without input.
    Input,
}

pub struct Dummy {
    pub id: ActorId,
    pub name: String,
    pub alive: bool,
    pub speed: u32,
    pub energy: Energy,
    pub position: Position,
    pub plan: Plan,
    pub finished: usize,
}

impl Dummy {
    pub fn new(id: u32, speed: u32, plan: Plan) -> Self {
        Self {
            id: ActorId(id),
            name: format!("dummy-{id}"),
            alive: true,
            speed,
            energy: Energy::new(),
            position: Position::new(id as i32, 0),
            plan,
            finished: 0,
        }
    }

    pub fn player(speed: u32) -> Self {
        let mut player = Self::new(PLAYER.0, speed, Plan::Input);
        player.name = "player".into();
        player
    }

    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    pub fn scripted(id: u32, speed: u32, actions: Vec<BoxedAction<Board>>) -> Self {
        Self::new(id, speed, Plan::Script(actions.into()))
    }
}

impl Actor<Board> for Dummy {
    fn id(&self) -> ActorId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn position(&self) -> Position {
        self.position
    }

    fn energy(&self) -> &Energy {
        &self.energy
    }

    fn energy_mut(&mut self) -> &mut Energy {
        &mut self.energy
    }

    fn effective_speed(&self, _area: &Board) -> u32 {
        self.speed
    }

    fn next_action(&mut self, input: &mut InputQueue) -> Option<BoxedAction<Board>> {
        match &mut self.plan {
            Plan::Rest => Some(Box::new(Rest(self.id))),
            Plan::Script(actions) => actions.pop_front(),
            Plan::Input => input.pop().map(|_| Box::new(Rest(self.id)) as BoxedAction<Board>),
        }
    }

    fn finish_turn(&mut self) {
        self.finished += 1;
    }
}

/// Map area with a plain round-robin rotation and a record of what ran.
pub struct Board {
    pub actors: Vec<Dummy>,
    pub rotation: ActorRotation,
    pub spawns: usize,
    pub items: Vec<Position>,
    pub trace: Vec<String>,
    pub rotations: Vec<String>,
}

impl Board {
    pub fn new(actors: Vec<Dummy>) -> Self {
        let mut rotation = ActorRotation::new();
        for actor in &actors {
            rotation.add(actor.id);
        }
        Self {
            actors,
            rotation,
            spawns: 0,
            items: Vec::new(),
            trace: Vec::new(),
            rotations: Vec::new(),
        }
    }

    pub fn dummy(&self, id: ActorId) -> &Dummy {
        self.actor(id).expect("dummy exists")
    }
}

impl MapArea for Board {
    type Actor = Dummy;

    fn current_actor(&self) -> ActorId {
        self.rotation.current().unwrap_or(PLAYER)
    }

    fn next_actor(&mut self, reason: &str) {
        self.rotations.push(reason.to_owned());
        self.rotation.advance();
    }

    fn spawn_monsters(&mut self) {
        self.spawns += 1;
    }

    fn has_items_at(&self, position: Position) -> bool {
        self.items.contains(&position)
    }

    fn actor(&self, id: ActorId) -> Option<&Dummy> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    fn actor_mut(&mut self, id: ActorId) -> Option<&mut Dummy> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    fn actor_count(&self) -> usize {
        self.actors.len()
    }
}

pub fn running_game(actors: Vec<Dummy>) -> Game<Board> {
    let mut game =
        Game::new(GameConfig::default(), Board::new(actors), PLAYER).expect("player exists");
    game.initialize().expect("fresh session");
    game
}

pub fn spend(ctx: &mut ActionContext<'_, Board>, actor: ActorId) {
    if let Some(actor) = ctx.area.actor_mut(actor) {
        actor.energy_mut().spend_turn();
    }
}

/// Spends a turn and succeeds.
#[derive(Debug)]
pub struct Rest(pub ActorId);

impl Action<Board> for Rest {
    fn actor(&self) -> Option<ActorId> {
        Some(self.0)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push(format!("rest {}", self.0));
        spend(ctx, self.0);
        ActionResult::success()
    }
}

/// Hands off to `remaining` alternates before finally resting.
#[derive(Debug)]
pub struct Relay {
    pub actor: ActorId,
    pub remaining: usize,
}

impl Action<Board> for Relay {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push(format!("relay {}", self.remaining));
        if self.remaining == 0 {
            spend(ctx, self.actor);
            return ActionResult::success().with_message("relay done");
        }
        ActionResult::alternate(Box::new(Relay {
            actor: self.actor,
            remaining: self.remaining - 1,
        }))
    }
}

/// Reports incomplete `polls` times, then rests.
#[derive(Debug)]
pub struct Stall {
    pub actor: ActorId,
    pub polls: usize,
}

impl Action<Board> for Stall {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push(format!("stall {}", self.polls));
        if self.polls > 0 {
            self.polls -= 1;
            return ActionResult::incomplete();
        }
        spend(ctx, self.actor);
        ActionResult::success()
    }
}

/// Hands straight over to a [`Stall`] alternate.
#[derive(Debug)]
pub struct Opener {
    pub actor: ActorId,
    pub polls: usize,
}

impl Action<Board> for Opener {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push("opener".into());
        ActionResult::alternate(Box::new(Stall {
            actor: self.actor,
            polls: self.polls,
        }))
    }
}

/// Spends a turn without achieving anything.
#[derive(Debug)]
pub struct Fumble(pub ActorId);

impl Action<Board> for Fumble {
    fn actor(&self) -> Option<ActorId> {
        Some(self.0)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push(format!("fumble {}", self.0));
        spend(ctx, self.0);
        ActionResult::failure().with_message("fumbled")
    }
}

/// Succeeds without spending any energy.
#[derive(Debug)]
pub struct Freebie(pub ActorId);

impl Action<Board> for Freebie {
    fn actor(&self) -> Option<ActorId> {
        Some(self.0)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push(format!("freebie {}", self.0));
        ActionResult::success()
    }
}

/// An action nobody owns.
#[derive(Debug)]
pub struct Orphan;

impl Action<Board> for Orphan {
    fn actor(&self) -> Option<ActorId> {
        None
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push("orphan".into());
        ActionResult::success()
    }
}

/// Kills `target`; killing the player raises the death signal.
#[derive(Debug)]
pub struct Slay {
    pub actor: ActorId,
    pub target: ActorId,
}

impl Action<Board> for Slay {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Board>) -> ActionResult<Board> {
        ctx.area.trace.push(format!("slay {}", self.target));
        if let Some(target) = ctx.area.actor_mut(self.target) {
            target.alive = false;
        }
        if ctx.is_player(self.target) {
            ctx.report_player_death();
        }
        spend(ctx, self.actor);
        ActionResult::success()
    }
}
