use serde::{Deserialize, Serialize};

/// Table options fixed when a game is created
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOptions {
    /// Base seed for shuffling; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Reject plays from anyone but the current player. Off by default: the
    /// calling layer is expected to check `current_player` itself.
    pub enforce_turn_order: bool,
}

impl GameOptions {
    pub fn seeded(seed: u64) -> Self {
        GameOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn with_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }
}
