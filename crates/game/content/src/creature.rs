//! Creatures: the actors living in an [`Arena`].

use std::collections::VecDeque;

use game_core::{
    Actor, ActorId, BoxedAction, CardinalDirection, Energy, InputCommand, InputQueue, Position,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::actions::{GrabAction, RestAction, StepAction, pick_up};
use crate::arena::Arena;

/// How many recent attackers a creature remembers.
const ATTACK_MEMORY: usize = 5;

/// A single decision a creature can take on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    Step(CardinalDirection),
    Rest,
    PickUp,
}

impl Intent {
    /// Maps a key press to an intent; keys with no meaning map to `None`.
    pub fn from_command(command: InputCommand) -> Option<Self> {
        match command {
            InputCommand::Up => Some(Intent::Step(CardinalDirection::North)),
            InputCommand::Down => Some(Intent::Step(CardinalDirection::South)),
            InputCommand::Left => Some(Intent::Step(CardinalDirection::West)),
            InputCommand::Right => Some(Intent::Step(CardinalDirection::East)),
            InputCommand::Confirm | InputCommand::Char('.') => Some(Intent::Rest),
            InputCommand::Char('g') | InputCommand::Char(',') => Some(Intent::PickUp),
            InputCommand::Cancel | InputCommand::Char(_) => None,
        }
    }

    /// Only `controlled` creatures get the interactive pick-up menu.
    fn into_action(self, actor: ActorId, controlled: bool) -> BoxedAction<Arena> {
        match self {
            Intent::Step(direction) => Box::new(StepAction::new(actor, direction)),
            Intent::Rest => Box::new(RestAction::new(actor)),
            Intent::PickUp if controlled => pick_up(actor),
            Intent::PickUp => Box::new(GrabAction::new(actor)),
        }
    }
}

/// Serializable description of a [`Behavior`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorSpec {
    /// Driven by player input.
    Controlled,
    /// Plays back a fixed list of intents, then rests.
    Scripted(Vec<Intent>),
    /// Steps in a random direction every turn.
    Wander,
    #[default]
    Idle,
}

impl BehaviorSpec {
    pub fn build(&self, seed: u64) -> Behavior {
        match self {
            BehaviorSpec::Controlled => Behavior::Controlled,
            BehaviorSpec::Scripted(intents) => {
                Behavior::Scripted(intents.iter().copied().collect())
            }
            BehaviorSpec::Wander => Behavior::Wander(StdRng::seed_from_u64(seed)),
            BehaviorSpec::Idle => Behavior::Idle,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Behavior {
    Controlled,
    Scripted(VecDeque<Intent>),
    Wander(StdRng),
    Idle,
}

impl Behavior {
    fn decide(&mut self, input: &mut InputQueue) -> Option<Intent> {
        match self {
            // skip keys that mean nothing on the map
            Behavior::Controlled => {
                std::iter::from_fn(|| input.pop()).find_map(Intent::from_command)
            }
            Behavior::Scripted(intents) => Some(intents.pop_front().unwrap_or(Intent::Rest)),
            Behavior::Wander(rng) => CardinalDirection::ALL.choose(rng).copied().map(Intent::Step),
            Behavior::Idle => Some(Intent::Rest),
        }
    }
}

/// Stat block shared by every creature spawned from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    pub name: String,
    pub health: u32,
    pub speed: u32,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: BehaviorSpec,
}

impl CreatureTemplate {
    pub fn new(name: impl Into<String>, health: u32, speed: u32, damage: u32) -> Self {
        Self {
            name: name.into(),
            health,
            speed,
            damage,
            behavior: BehaviorSpec::Idle,
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorSpec) -> Self {
        self.behavior = behavior;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Creature {
    id: ActorId,
    name: String,
    position: Position,
    health: u32,
    max_health: u32,
    speed: u32,
    damage: u32,
    energy: Energy,
    behavior: Behavior,
    inventory: Vec<String>,
    attackers: VecDeque<ActorId>,
    turns_taken: u32,
}

impl Creature {
    pub fn new(
        id: ActorId,
        position: Position,
        template: &CreatureTemplate,
        energy: Energy,
    ) -> Self {
        Self {
            id,
            name: template.name.clone(),
            position,
            health: template.health,
            max_health: template.health,
            speed: template.speed,
            damage: template.damage,
            energy,
            behavior: template.behavior.build(u64::from(id.get())),
            inventory: Vec::new(),
            attackers: VecDeque::with_capacity(ATTACK_MEMORY),
            turns_taken: 0,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn base_speed(&self) -> u32 {
        self.speed
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Most recent attacker first.
    pub fn attackers(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.attackers.iter().copied()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Applies `amount` damage and reports whether the creature died from it.
    pub(crate) fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(amount);
        was_alive && !self.is_alive()
    }

    /// Restores health up to the maximum. The dead stay dead.
    pub(crate) fn heal(&mut self, amount: u32) {
        if !self.is_alive() {
            return;
        }
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub(crate) fn carry(&mut self, item: String) {
        self.inventory.push(item);
    }
}

impl Actor<Arena> for Creature {
    fn id(&self) -> ActorId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_alive(&self) -> bool {
        self.health > 0
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

    /// Rubble halves speed; a creature never stalls completely.
    fn effective_speed(&self, area: &Arena) -> u32 {
        if area.is_rubble(self.position) {
            (self.speed / 2).max(1)
        } else {
            self.speed
        }
    }

    fn next_action(&mut self, input: &mut InputQueue) -> Option<BoxedAction<Arena>> {
        let controlled = matches!(self.behavior, Behavior::Controlled);
        self.behavior
            .decide(input)
            .map(|intent| intent.into_action(self.id, controlled))
    }

    fn finish_turn(&mut self) {
        self.turns_taken += 1;
    }

    fn on_attacked(&mut self, attacker: ActorId) {
        if self.attackers.len() == ATTACK_MEMORY {
            self.attackers.pop_back();
        }
        self.attackers.push_front(attacker);
    }
}
