//! Energy gating for the actor rotation.
//!
//! Speed and turn order are decoupled: the map area owns the order in which
//! actors are asked to act, while each actor's [`Energy`] decides how many
//! passes of that rotation it sits out before its slot produces an action.

use crate::config::GameConfig;

/// Per-actor accumulator that gates whether the actor may act.
///
/// The scheduler only ever calls [`Energy::increase`]. Spending happens in the
/// actions and actors that own the turn economy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Energy {
    current: u32,
    threshold: u32,
}

impl Energy {
    /// Creates an empty accumulator with the conventional threshold of 100.
    pub const fn new() -> Self {
        Self::with_threshold(GameConfig::DEFAULT_ENERGY_THRESHOLD)
    }

    pub const fn with_threshold(threshold: u32) -> Self {
        Self {
            current: 0,
            threshold,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    pub const fn can_act(&self) -> bool {
        self.current >= self.threshold
    }

    /// Adds `speed` and reports whether the actor is now able to act.
    pub fn increase(&mut self, speed: u32) -> bool {
        self.current = self.current.saturating_add(speed);
        self.can_act()
    }

    /// Removes `cost` energy, stopping at zero.
    pub fn spend(&mut self, cost: u32) {
        self.current = self.current.saturating_sub(cost);
    }

    /// Spends one full turn worth of energy.
    pub fn spend_turn(&mut self) {
        self.spend(self.threshold);
    }
}

impl Default for Energy {
    fn default() -> Self {
        Self::new()
    }
}
