//! Server push: the port the game publishes to, and its implementations.
//!
//! Each (game, player) pair owns one named channel. The game publishes a
//! rendered payload tagged `header` or `hand`; delivery is best-effort and a
//! publish never fails back into the game.

use std::fmt;
use std::sync::Arc;

use actix::Message;
use serde::{Deserialize, Serialize};

pub mod hub;
pub mod memory;
pub mod session;

pub use hub::ChannelHub;
pub use memory::RecordingPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Header,
    Hand,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Header => "header",
            EventKind::Hand => "hand",
        }
    }
}

/// Address of one player's channel inside one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelKey {
    pub game: String,
    pub player: String,
}

impl ChannelKey {
    pub fn new(game: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            player: player.into(),
        }
    }
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.game, self.player)
    }
}

/// One published event as delivered to a subscriber.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
pub struct ChannelEvent {
    pub kind: EventKind,
    pub payload: Arc<str>,
}

pub trait NotificationPort: Send + Sync {
    /// Make sure the channel exists. Idempotent.
    fn create_channel(&self, key: &ChannelKey);

    /// Fire-and-forget delivery of `payload` to every subscriber of `key`.
    fn publish(&self, key: &ChannelKey, kind: EventKind, payload: String);
}
