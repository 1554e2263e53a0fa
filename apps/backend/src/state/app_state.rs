use std::sync::Arc;

use crate::realtime::ChannelHub;
use crate::services::GameFlowService;

/// Shared resources handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// Player actions, backed by the game registry.
    pub games: GameFlowService,
    /// Push channels; also the notification port every game publishes to.
    pub hub: Arc<ChannelHub>,
}

impl AppState {
    pub fn new(games: GameFlowService, hub: Arc<ChannelHub>) -> Self {
        Self { games, hub }
    }
}
