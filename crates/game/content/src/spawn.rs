//! Periodic monster spawning.

use game_core::Position;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::creature::CreatureTemplate;

/// Spawn `template` every `every` player turns while fewer than `limit`
/// spawned creatures are alive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRule {
    pub every: u32,
    pub limit: usize,
    pub template: CreatureTemplate,
}

/// Seeded spawner driven by the arena's once-per-player-turn hook.
#[derive(Clone, Debug)]
pub struct Spawner {
    rule: SpawnRule,
    rng: StdRng,
    elapsed: u32,
    spawned: usize,
}

impl Spawner {
    pub fn new(rule: SpawnRule, seed: u64) -> Self {
        Self {
            rule,
            rng: StdRng::seed_from_u64(seed),
            elapsed: 0,
            spawned: 0,
        }
    }

    pub fn rule(&self) -> &SpawnRule {
        &self.rule
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Counts one player turn and reports whether a spawn is due.
    ///
    /// `living` is the number of spawned creatures still alive.
    pub fn tick(&mut self, living: usize) -> bool {
        if self.rule.every == 0 {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed < self.rule.every {
            return false;
        }
        self.elapsed = 0;
        living < self.rule.limit
    }

    pub fn pick_tile(&mut self, free: &[Position]) -> Option<Position> {
        free.choose(&mut self.rng).copied()
    }

    pub(crate) fn record_spawn(&mut self) {
        self.spawned += 1;
    }
}
