use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Deck, GameRules};
use crate::error::AppError;
use crate::realtime::ChannelHub;
use crate::services::{GameFlowService, GameRegistry};
use crate::state::app_state::AppState;

enum DeckSource {
    Unset,
    Loaded(Deck),
    Files { prompts: PathBuf, responses: PathBuf },
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    deck: DeckSource,
    rules: GameRules,
    seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            deck: DeckSource::Unset,
            rules: GameRules::default(),
            seed: None,
        }
    }

    /// Use an in-memory deck.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = DeckSource::Loaded(deck);
        self
    }

    /// Load the deck from two card files at build time.
    pub fn with_deck_files(
        mut self,
        prompts: impl Into<PathBuf>,
        responses: impl Into<PathBuf>,
    ) -> Self {
        self.deck = DeckSource::Files {
            prompts: prompts.into(),
            responses: responses.into(),
        };
        self
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deck files, rules and seed from the process configuration.
    pub fn with_config(self, config: &AppConfig) -> Result<Self, AppError> {
        let mut builder = self
            .with_deck_files(&config.prompts, &config.responses)
            .with_rules(config.rules()?);
        builder.seed = config.seed;
        Ok(builder)
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let deck = match self.deck {
            DeckSource::Unset => return Err(AppError::config("no deck configured")),
            DeckSource::Loaded(deck) => deck,
            DeckSource::Files { prompts, responses } => {
                let deck = Deck::load(&prompts, &responses)?;
                info!(
                    prompts = deck.prompts().len(),
                    responses = deck.responses().len(),
                    prompt_file = %prompts.display(),
                    response_file = %responses.display(),
                    "Deck loaded"
                );
                deck
            }
        };

        let hub = Arc::new(ChannelHub::new());
        let registry = GameRegistry::new(Arc::new(deck), self.rules, hub.clone(), self.seed);
        Ok(AppState::new(GameFlowService::new(Arc::new(registry)), hub))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
