/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Energy an actor must accumulate before it may act.
    pub energy_threshold: u32,

    /// Number of messages retained by the message log before the oldest are dropped.
    pub message_capacity: usize,

    /// Rows shown per page by menu dialogs.
    pub menu_page_size: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENERGY_THRESHOLD: u32 = 100;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 64;
    pub const DEFAULT_MENU_PAGE_SIZE: usize = 26;

    pub fn new() -> Self {
        Self {
            energy_threshold: Self::DEFAULT_ENERGY_THRESHOLD,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
            menu_page_size: Self::DEFAULT_MENU_PAGE_SIZE,
        }
    }

    pub fn with_energy_threshold(mut self, energy_threshold: u32) -> Self {
        self.energy_threshold = energy_threshold;
        self
    }

    pub fn with_message_capacity(mut self, message_capacity: usize) -> Self {
        self.message_capacity = message_capacity;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
