//! Actions creatures perform in an [`Arena`].
//!
//! Every action that resolves spends a full turn of the performer's energy,
//! so the scheduler moves on to the next actor once it completes.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{
    Action, ActionContext, ActionResult, Actor, ActorId, BoxedAction, CardinalDirection,
    DialogAction, Menu, MenuDialog, TurnEvent,
};
use tracing::warn;

use crate::arena::Arena;

fn spend_turn(arena: &mut Arena, actor: ActorId) {
    if let Some(creature) = arena.creature_mut(actor) {
        creature.energy_mut().spend_turn();
    }
}

/// Moves one tile. Walking into another creature becomes a [`StrikeAction`].
#[derive(Clone, Debug)]
pub struct StepAction {
    actor: ActorId,
    direction: CardinalDirection,
}

impl StepAction {
    pub fn new(actor: ActorId, direction: CardinalDirection) -> Self {
        Self { actor, direction }
    }
}

impl Action<Arena> for StepAction {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Arena>) -> ActionResult<Arena> {
        let Some(from) = ctx.area.creature(self.actor).map(|creature| creature.position()) else {
            return ActionResult::failure();
        };
        let to = from.step(self.direction);

        if let Some(target) = ctx.area.occupant_at(to) {
            return ActionResult::alternate(Box::new(StrikeAction::new(self.actor, target)));
        }

        spend_turn(ctx.area, self.actor);
        if !ctx.area.is_walkable(to) {
            let result = ActionResult::failure();
            return if ctx.is_player(self.actor) {
                result.with_message("You bump into a wall.")
            } else {
                result
            };
        }

        if let Some(creature) = ctx.area.creature_mut(self.actor) {
            creature.set_position(to);
        }
        ctx.add_event(TurnEvent::Moved {
            actor: self.actor,
            from,
            to,
        });
        if ctx.is_player(self.actor) {
            ctx.turn.clear_look();
        }
        ActionResult::success()
    }
}

/// Waits a turn and recovers a little health.
#[derive(Clone, Debug)]
pub struct RestAction {
    actor: ActorId,
}

impl RestAction {
    pub const HEALING: u32 = 1;

    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl Action<Arena> for RestAction {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Arena>) -> ActionResult<Arena> {
        let Some(creature) = ctx.area.creature_mut(self.actor) else {
            return ActionResult::failure();
        };
        creature.heal(Self::HEALING);
        creature.energy_mut().spend_turn();
        ActionResult::success()
    }
}

/// Melee attack for the attacker's fixed damage.
#[derive(Clone, Debug)]
pub struct StrikeAction {
    attacker: ActorId,
    target: ActorId,
}

impl StrikeAction {
    pub fn new(attacker: ActorId, target: ActorId) -> Self {
        Self { attacker, target }
    }
}

impl Action<Arena> for StrikeAction {
    fn actor(&self) -> Option<ActorId> {
        Some(self.attacker)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Arena>) -> ActionResult<Arena> {
        let Some((attacker_name, damage)) = ctx
            .area
            .creature(self.attacker)
            .map(|attacker| (attacker.name().to_owned(), attacker.damage()))
        else {
            return ActionResult::failure();
        };

        spend_turn(ctx.area, self.attacker);
        let Some(target) = ctx
            .area
            .creature_mut(self.target)
            .filter(|target| target.is_alive())
        else {
            return ActionResult::failure();
        };

        target.on_attacked(self.attacker);
        let killed = target.take_damage(damage);
        let target_name = target.name().to_owned();

        ctx.add_event(TurnEvent::Attacked {
            attacker: self.attacker,
            target: self.target,
            damage,
        });

        let attacker_is_player = ctx.is_player(self.attacker);
        let target_is_player = ctx.is_player(self.target);
        if killed {
            ctx.add_event(TurnEvent::Died { actor: self.target });
            if target_is_player {
                ctx.report_player_death();
            }
        }

        let verb = if killed { "kill" } else { "hit" };
        let message = match (attacker_is_player, target_is_player) {
            (true, _) => format!("You {verb} the {target_name}."),
            (false, true) => format!("The {attacker_name} {verb}s you."),
            (false, false) => format!("The {attacker_name} {verb}s the {target_name}."),
        };

        ActionResult::success().with_message(message)
    }
}

/// Takes the first item on the actor's tile without asking.
///
/// Creatures that are not player-controlled pick things up this way; the
/// menu of [`pick_up`] would claim the player's input.
#[derive(Clone, Debug)]
pub struct GrabAction {
    actor: ActorId,
}

impl GrabAction {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl Action<Arena> for GrabAction {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, Arena>) -> ActionResult<Arena> {
        let Some((name, position)) = ctx
            .area
            .creature(self.actor)
            .map(|creature| (creature.name().to_owned(), creature.position()))
        else {
            return ActionResult::failure();
        };

        spend_turn(ctx.area, self.actor);
        let Some(first) = ctx.area.items_at(position).first().cloned() else {
            return ActionResult::failure();
        };
        let Some(item) = ctx.area.take_item(position, &first) else {
            return ActionResult::failure();
        };

        if let Some(creature) = ctx.area.creature_mut(self.actor) {
            creature.carry(item.clone());
        }
        let message = format!("The {name} picks up the {item}.");
        ctx.add_event(TurnEvent::PickedUp {
            actor: self.actor,
            item,
        });
        ActionResult::success().with_message(message)
    }
}

/// Lets `actor` choose one of the items on its tile.
///
/// Finding nothing, picking something and backing out of the menu all take
/// a turn.
pub fn pick_up(actor: ActorId) -> BoxedAction<Arena> {
    Box::new(DialogAction::<Arena, MenuDialog<String>>::new(
        actor,
        "pick up",
        move |ctx| {
            let Some(position) = ctx.area.creature(actor).map(|creature| creature.position()) else {
                return Err(ActionResult::failure());
            };
            let items = ctx.area.items_at(position).to_vec();
            if items.is_empty() {
                spend_turn(ctx.area, actor);
                return Err(ActionResult::failure().with_message("There is nothing here."));
            }

            let menu = Menu::with_page_size(items, ctx.area.menu_page_size()).map_err(|error| {
                warn!(%error, "cannot build the pick-up menu");
                ActionResult::failure()
            })?;
            Ok(Rc::new(RefCell::new(MenuDialog::new("Pick up what?", menu))))
        },
        move |answer, ctx| {
            spend_turn(ctx.area, actor);
            let Some(item) = answer.into_item() else {
                return ActionResult::failure().with_message("Never mind.");
            };
            let Some(position) = ctx.area.creature(actor).map(|creature| creature.position()) else {
                return ActionResult::failure();
            };
            let Some(item) = ctx.area.take_item(position, &item) else {
                return ActionResult::failure();
            };

            if let Some(creature) = ctx.area.creature_mut(actor) {
                creature.carry(item.clone());
            }
            let message = format!("You pick up the {item}.");
            ctx.add_event(TurnEvent::PickedUp { actor, item });
            if ctx.area.items_at(position).is_empty() {
                ctx.turn.clear_look();
            }
            ActionResult::success().with_message(message)
        },
    ))
}
