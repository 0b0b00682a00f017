//! Grid-based map area used by the reference content.

use std::collections::{BTreeMap, HashMap, HashSet};

use game_core::{Actor, ActorId, ActorRotation, Energy, GameConfig, MapArea, Position};
use tracing::{debug, warn};

use crate::creature::{BehaviorSpec, Creature, CreatureTemplate};
use crate::error::ContentError;
use crate::spawn::Spawner;

/// A walled rectangle of tiles holding creatures and item piles.
///
/// Creatures take turns in the order they were added. Dead creatures stay in
/// storage and in the rotation; the scheduler skips them.
#[derive(Clone, Debug)]
pub struct Arena {
    width: u32,
    height: u32,
    walls: HashSet<Position>,
    rubble: HashSet<Position>,
    items: HashMap<Position, Vec<String>>,
    creatures: BTreeMap<ActorId, Creature>,
    rotation: ActorRotation,
    spawner: Option<Spawner>,
    spawned: Vec<ActorId>,
    next_id: u32,
    energy_threshold: u32,
    menu_page_size: usize,
}

impl Arena {
    pub fn new(width: u32, height: u32, config: &GameConfig) -> Result<Self, ContentError> {
        if width == 0 || height == 0 {
            return Err(ContentError::EmptyArena { width, height });
        }

        Ok(Self {
            width,
            height,
            walls: HashSet::new(),
            rubble: HashSet::new(),
            items: HashMap::new(),
            creatures: BTreeMap::new(),
            rotation: ActorRotation::new(),
            spawner: None,
            spawned: Vec::new(),
            next_id: 0,
            energy_threshold: config.energy_threshold,
            menu_page_size: config.menu_page_size.max(1),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.width as i32).contains(&position.x)
            && (0..self.height as i32).contains(&position.y)
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.contains(position) && !self.walls.contains(&position)
    }

    pub fn is_rubble(&self, position: Position) -> bool {
        self.rubble.contains(&position)
    }

    pub fn add_wall(&mut self, position: Position) -> Result<(), ContentError> {
        self.check_bounds(position)?;
        if let Some(occupant) = self.occupant_at(position) {
            return Err(ContentError::Occupied { position, occupant });
        }
        self.walls.insert(position);
        Ok(())
    }

    pub fn add_rubble(&mut self, position: Position) -> Result<(), ContentError> {
        self.check_walkable(position)?;
        self.rubble.insert(position);
        Ok(())
    }

    pub fn add_item(
        &mut self,
        position: Position,
        item: impl Into<String>,
    ) -> Result<(), ContentError> {
        self.check_walkable(position)?;
        self.items.entry(position).or_default().push(item.into());
        Ok(())
    }

    pub fn items_at(&self, position: Position) -> &[String] {
        self.items.get(&position).map(Vec::as_slice).unwrap_or_default()
    }

    /// Removes the first item called `name` from the pile at `position`.
    pub fn take_item(&mut self, position: Position, name: &str) -> Option<String> {
        let pile = self.items.get_mut(&position)?;
        let index = pile.iter().position(|item| item == name)?;
        let item = pile.remove(index);
        if pile.is_empty() {
            self.items.remove(&position);
        }
        Some(item)
    }

    /// Places a new creature and appends it to the rotation.
    ///
    /// A creature that is not player-controlled must stay below the energy
    /// threshold.
    pub fn spawn(
        &mut self,
        template: &CreatureTemplate,
        position: Position,
    ) -> Result<ActorId, ContentError> {
        let controlled = template.behavior == BehaviorSpec::Controlled;
        if !controlled && template.speed >= self.energy_threshold {
            return Err(ContentError::TooFast {
                name: template.name.clone(),
                speed: template.speed,
                threshold: self.energy_threshold,
            });
        }
        self.check_walkable(position)?;
        if let Some(occupant) = self.occupant_at(position) {
            return Err(ContentError::Occupied { position, occupant });
        }

        let id = ActorId(self.next_id);
        self.next_id += 1;

        let energy = Energy::with_threshold(self.energy_threshold);
        self.creatures.insert(id, Creature::new(id, position, template, energy));
        self.rotation.add(id);
        Ok(id)
    }

    pub fn set_spawner(&mut self, spawner: Spawner) {
        self.spawner = Some(spawner);
    }

    pub fn spawner(&self) -> Option<&Spawner> {
        self.spawner.as_ref()
    }

    pub fn creature(&self, id: ActorId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    pub fn creature_mut(&mut self, id: ActorId) -> Option<&mut Creature> {
        self.creatures.get_mut(&id)
    }

    pub fn creatures(&self) -> impl Iterator<Item = &Creature> + '_ {
        self.creatures.values()
    }

    /// The living creature standing on `position`, if any.
    pub fn occupant_at(&self, position: Position) -> Option<ActorId> {
        self.creatures
            .values()
            .find(|creature| creature.is_alive() && creature.position() == position)
            .map(|creature| creature.id())
    }

    pub fn living_count(&self) -> usize {
        self.creatures.values().filter(|creature| creature.is_alive()).count()
    }

    pub fn menu_page_size(&self) -> usize {
        self.menu_page_size
    }

    /// Walkable tiles nobody stands on, in row-major order.
    pub fn free_tiles(&self) -> Vec<Position> {
        (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Position::new(x, y)))
            .filter(|&position| self.is_walkable(position) && self.occupant_at(position).is_none())
            .collect()
    }

    fn check_bounds(&self, position: Position) -> Result<(), ContentError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(ContentError::OutOfBounds(position))
        }
    }

    fn check_walkable(&self, position: Position) -> Result<(), ContentError> {
        self.check_bounds(position)?;
        if self.walls.contains(&position) {
            return Err(ContentError::Blocked(position));
        }
        Ok(())
    }
}

impl MapArea for Arena {
    type Actor = Creature;

    fn current_actor(&self) -> ActorId {
        self.rotation.current().unwrap_or_default()
    }

    fn next_actor(&mut self, reason: &str) {
        self.rotation.advance();
        debug!(
            reason,
            current = ?self.rotation.current(),
            "rotation advanced"
        );
    }

    fn spawn_monsters(&mut self) {
        let Some(mut spawner) = self.spawner.take() else {
            return;
        };

        let living = self
            .spawned
            .iter()
            .filter(|&&id| self.creature(id).is_some_and(|creature| creature.is_alive()))
            .count();

        if spawner.tick(living) {
            let free = self.free_tiles();
            if let Some(position) = spawner.pick_tile(&free) {
                let template = spawner.rule().template.clone();
                match self.spawn(&template, position) {
                    Ok(id) => {
                        spawner.record_spawn();
                        self.spawned.push(id);
                        debug!(%id, %position, name = %template.name, "creature spawned");
                    }
                    Err(error) => {
                        warn!(%error, "spawn failed");
                    }
                }
            }
        }

        self.spawner = Some(spawner);
    }

    fn has_items_at(&self, position: Position) -> bool {
        !self.items_at(position).is_empty()
    }

    fn actor(&self, id: ActorId) -> Option<&Creature> {
        self.creature(id)
    }

    fn actor_mut(&mut self, id: ActorId) -> Option<&mut Creature> {
        self.creature_mut(id)
    }

    fn actor_count(&self) -> usize {
        self.rotation.len()
    }
}
