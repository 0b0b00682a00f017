//! Scenario descriptions: everything needed to lay out an arena.

use game_core::{ActorId, GameConfig, Position};

use crate::arena::Arena;
use crate::creature::CreatureTemplate;
use crate::error::ContentError;
use crate::spawn::{SpawnRule, Spawner};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub template: CreatureTemplate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub position: Position,
    pub name: String,
}

/// Declarative arena layout.
///
/// The player is placed first and therefore takes the first slot of the
/// rotation; other creatures follow in listed order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub width: u32,
    pub height: u32,
    pub player: Placement,
    #[cfg_attr(feature = "serde", serde(default))]
    pub creatures: Vec<Placement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rubble: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemPlacement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spawn: Option<SpawnRule>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

impl Scenario {
    /// Lays out the arena and returns it with the player's id.
    pub fn build(&self, config: &GameConfig) -> Result<(Arena, ActorId), ContentError> {
        let mut arena = Arena::new(self.width, self.height, config)?;

        for &wall in &self.walls {
            arena.add_wall(wall)?;
        }
        for &tile in &self.rubble {
            arena.add_rubble(tile)?;
        }
        for item in &self.items {
            arena.add_item(item.position, item.name.clone())?;
        }

        let player = arena.spawn(&self.player.template, self.player.position)?;
        for placement in &self.creatures {
            arena.spawn(&placement.template, placement.position)?;
        }

        if let Some(rule) = &self.spawn {
            arena.set_spawner(Spawner::new(rule.clone(), self.seed));
        }

        Ok((arena, player))
    }
}
