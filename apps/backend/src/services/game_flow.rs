//! Player actions against named games.
//!
//! Resolves the game through the registry, takes its lock for the whole
//! action (notifications included) and converts rejections into `AppError`.

use std::sync::Arc;

use tracing::debug;

use crate::domain::views::player_view;
use crate::domain::{GameError, PlayerView, RoundOutcome};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::registry::{GameRegistry, SharedGame};

#[derive(Clone)]
pub struct GameFlowService {
    registry: Arc<GameRegistry>,
}

impl GameFlowService {
    pub fn new(registry: Arc<GameRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// Join `game` as `player`, creating the game on first reference.
    pub fn join(&self, game: &str, player: &str) -> Result<PlayerView, AppError> {
        let shared = self
            .registry
            .get_or_create(game)
            .map_err(|err| rejected(game, player, "join", err))?;
        let mut locked = shared.lock();
        Ok(locked.join(player))
    }

    pub fn submit(&self, game: &str, player: &str, card: usize) -> Result<(), AppError> {
        let shared = self.existing(game)?;
        let mut locked = shared.lock();
        locked
            .submit(player, card)
            .map_err(|err| rejected(game, player, "submit", err))
    }

    pub fn choose_winner(
        &self,
        game: &str,
        judge: &str,
        submission: usize,
    ) -> Result<RoundOutcome, AppError> {
        let shared = self.existing(game)?;
        let mut locked = shared.lock();
        locked
            .choose_winner(judge, submission)
            .map_err(|err| rejected(game, judge, "choose", err))
    }

    /// Current view for a seated player. Never joins.
    pub fn view(&self, game: &str, player: &str) -> Result<PlayerView, AppError> {
        let shared = self.existing(game)?;
        let locked = shared.lock();
        let seated = locked.player(player).ok_or_else(|| {
            AppError::not_found(
                ErrorCode::PlayerNotFound,
                format!("Player {player} is not in game {game}"),
            )
        })?;
        Ok(player_view(&locked, seated))
    }

    fn existing(&self, game: &str) -> Result<SharedGame, AppError> {
        self.registry.get(game).ok_or_else(|| {
            AppError::not_found(ErrorCode::GameNotFound, format!("Game {game} not found"))
        })
    }
}

fn rejected(game: &str, player: &str, action: &'static str, err: GameError) -> AppError {
    debug!(game, player, action, error = %err, "Action rejected");
    err.into()
}
