//! Card pools: the immutable deck loaded at startup and the per-game draw piles
//! shuffled from it.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::errors::DeckError;
use crate::domain::Card;

/// Prompt and response cards loaded once per process. Never mutated after
/// load; games shuffle private copies through [`Deck::shuffled`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    prompts: Vec<Card>,
    responses: Vec<Card>,
}

impl Deck {
    pub fn new(prompts: Vec<Card>, responses: Vec<Card>) -> Self {
        Self { prompts, responses }
    }

    /// Load both decks from line-delimited text files. Every non-blank line is
    /// one card, kept in file order.
    pub fn load(
        prompt_path: impl AsRef<Path>,
        response_path: impl AsRef<Path>,
    ) -> Result<Self, DeckError> {
        Ok(Self {
            prompts: read_cards(prompt_path.as_ref())?,
            responses: read_cards(response_path.as_ref())?,
        })
    }

    pub fn prompts(&self) -> &[Card] {
        &self.prompts
    }

    pub fn responses(&self) -> &[Card] {
        &self.responses
    }

    /// Independently permuted copies of both card lists.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> (DrawPile, DrawPile) {
        let mut prompts = self.prompts.clone();
        prompts.shuffle(rng);
        let mut responses = self.responses.clone();
        responses.shuffle(rng);
        (DrawPile::from(prompts), DrawPile::from(responses))
    }
}

fn read_cards(path: &Path) -> Result<Vec<Card>, DeckError> {
    let raw = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Card::from)
        .collect())
}

/// A game's working pile. Draws always take the head card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPile {
    cards: VecDeque<Card>,
}

impl DrawPile {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Draw `min(count, len)` cards from the head.
    pub fn draw_up_to(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for DrawPile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}
