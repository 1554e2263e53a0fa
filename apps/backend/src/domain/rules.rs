//! Table rules shared by every game hosted by the process.

/// Number of response cards a player holds between rounds.
pub const DEFAULT_HAND_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub hand_size: usize,
}

impl GameRules {
    pub fn with_hand_size(hand_size: usize) -> Self {
        Self { hand_size }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}
