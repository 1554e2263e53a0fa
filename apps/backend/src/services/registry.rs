//! Process-wide table of live games, keyed by name.
//!
//! A game is created the first time its name is joined and lives until the
//! process exits. Each one sits behind its own mutex; the table itself is a
//! `DashMap` so lookups on different games never contend.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::domain::{Deck, Game, GameError, GameRules};
use crate::realtime::NotificationPort;

pub type SharedGame = Arc<Mutex<Game>>;

pub struct GameRegistry {
    deck: Arc<Deck>,
    rules: GameRules,
    port: Arc<dyn NotificationPort>,
    /// Only used to shuffle new games.
    rng: Mutex<ChaCha20Rng>,
    games: DashMap<String, SharedGame>,
}

impl GameRegistry {
    /// `seed` fixes the shuffle of every game this registry creates; `None`
    /// seeds from OS entropy.
    pub fn new(
        deck: Arc<Deck>,
        rules: GameRules,
        port: Arc<dyn NotificationPort>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self {
            deck,
            rules,
            port,
            rng: Mutex::new(rng),
            games: DashMap::new(),
        }
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn get(&self, name: &str) -> Option<SharedGame> {
        self.games.get(name).map(|entry| entry.value().clone())
    }

    /// Look up `name`, creating and shuffling a new game if it is unknown.
    ///
    /// Concurrent first references create exactly one game: the insert runs
    /// under the map's entry lock. A failed creation inserts nothing.
    pub fn get_or_create(&self, name: &str) -> Result<SharedGame, GameError> {
        if let Some(game) = self.get(name) {
            return Ok(game);
        }

        let entry = self.games.entry(name.to_string()).or_try_insert_with(|| {
            let mut rng = self.rng.lock();
            let game = Game::new(name, &self.deck, self.rules, &mut *rng, self.port.clone())?;
            info!(
                game = name,
                prompts_left = game.prompts_left(),
                responses_left = game.responses_left(),
                "Game created"
            );
            Ok::<_, GameError>(Arc::new(Mutex::new(game)))
        })?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
