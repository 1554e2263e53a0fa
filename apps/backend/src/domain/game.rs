//! The round state machine for a single game.
//!
//! `Empty -> AwaitingSecondPlayer -> RoundInProgress <-> Revealing -> (scoring)
//! -> RoundInProgress | Finished`. Scoring happens inside
//! [`Game::choose_winner`] and is never observable from outside.
//!
//! A `Game` is not synchronised on its own; the registry keeps each one behind
//! a mutex and every operation here runs with that lock held, notifications
//! included.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::deck::{Deck, DrawPile};
use crate::domain::errors::GameError;
use crate::domain::player::Player;
use crate::domain::round::{Round, Submission};
use crate::domain::rules::GameRules;
use crate::domain::views::{self, PlayerView};
use crate::realtime::{ChannelKey, EventKind, NotificationPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created, nobody seated yet.
    Empty,
    /// Only the judge is seated.
    AwaitingSecondPlayer,
    /// Collecting submissions from non-judges.
    RoundInProgress,
    /// Every non-judge who can play has submitted; waiting for the judge.
    Revealing,
    /// The prompt deck ran out. Terminal.
    Finished,
}

/// What a winner selection decided, returned to the judge.
///
/// `winner` is `None` when nobody could play this round and it was closed
/// without scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub winner: Option<Submission>,
    pub finished: bool,
}

pub struct Game {
    name: String,
    rules: GameRules,
    players: Vec<Player>,
    round: Round,
    prompts: DrawPile,
    responses: DrawPile,
    finished: bool,
    port: Arc<dyn NotificationPort>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("name", &self.name)
            .field("players", &self.players.len())
            .field("phase", &self.phase())
            .field("prompts_left", &self.prompts.len())
            .field("responses_left", &self.responses.len())
            .finish()
    }
}

impl Game {
    /// Shuffle private piles from `deck` and turn up the first prompt.
    pub fn new<R: Rng + ?Sized>(
        name: impl Into<String>,
        deck: &Deck,
        rules: GameRules,
        rng: &mut R,
        port: Arc<dyn NotificationPort>,
    ) -> Result<Self, GameError> {
        let (prompts, responses) = deck.shuffled(rng);
        Self::from_piles(name, prompts, responses, rules, port)
    }

    /// Build a game over piles in a known order.
    pub fn from_piles(
        name: impl Into<String>,
        mut prompts: DrawPile,
        responses: DrawPile,
        rules: GameRules,
        port: Arc<dyn NotificationPort>,
    ) -> Result<Self, GameError> {
        let first_prompt = prompts.draw().ok_or(GameError::DeckExhausted)?;
        Ok(Self {
            name: name.into(),
            rules,
            players: Vec::new(),
            round: Round::new(first_prompt),
            prompts,
            responses,
            finished: false,
            port,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Roster in join order, which is also judge rotation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn prompts_left(&self) -> usize {
        self.prompts.len()
    }

    pub fn responses_left(&self) -> usize {
        self.responses.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Submissions required before the judge sees them: every non-judge who
    /// has submitted or still holds a card. Empty hands sit the round out.
    pub fn submissions_needed(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !self.round.is_judge(p.name()))
            .filter(|p| self.round.has_submitted(p.name()) || !p.hand().is_empty())
            .count()
    }

    fn submissions_missing(&self) -> usize {
        self.submissions_needed()
            .saturating_sub(self.round.submissions().len())
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.players.is_empty() {
            Phase::Empty
        } else if self.players.len() < 2 {
            Phase::AwaitingSecondPlayer
        } else if self.submissions_missing() == 0 {
            Phase::Revealing
        } else {
            Phase::RoundInProgress
        }
    }

    /// Seat a player, or hand back the existing seat on rejoin.
    ///
    /// A rejoin changes nothing and draws nothing. A new player is dealt
    /// `min(hand_size, cards left)`; the first one becomes the judge and the
    /// second one starts the round.
    pub fn join(&mut self, player_name: &str) -> PlayerView {
        self.port.create_channel(&self.channel(player_name));

        if let Some(existing) = self.player(player_name) {
            debug!(game = %self.name, player = player_name, "Player rejoined");
            return views::player_view(self, existing);
        }

        let hand = self.responses.draw_up_to(self.rules.hand_size);
        if hand.len() < self.rules.hand_size {
            warn!(
                game = %self.name,
                player = player_name,
                dealt = hand.len(),
                "Response deck short, dealing a partial hand"
            );
        }
        self.players.push(Player::new(player_name, hand));
        info!(
            game = %self.name,
            player = player_name,
            players = self.players.len(),
            responses_left = self.responses.len(),
            "Player joined"
        );

        match self.players.len() {
            1 => {
                self.round.set_judge(player_name);
                info!(game = %self.name, judge = player_name, "First player is the card czar");
            }
            2 => {
                info!(game = %self.name, "Second player joined, starting the round");
                self.publish_hands(false);
                self.publish_header();
            }
            _ => self.publish_header(),
        }

        let seated = &self.players[self.players.len() - 1];
        views::player_view(self, seated)
    }

    /// Play the card at `card_index` from `player_name`'s hand.
    ///
    /// The submitter's channel gets their shrunken hand. Completing the set of
    /// non-judge submissions reveals them to the judge.
    pub fn submit(&mut self, player_name: &str, card_index: usize) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        if self.players.len() < 2 {
            return Err(GameError::RoundNotStarted);
        }
        let seat = self
            .players
            .iter()
            .position(|p| p.name() == player_name)
            .ok_or_else(|| GameError::UnknownPlayer(player_name.to_string()))?;
        if self.round.is_judge(player_name) {
            return Err(GameError::JudgeCannotSubmit(player_name.to_string()));
        }
        if self.round.has_submitted(player_name) {
            return Err(GameError::DuplicateSubmission(player_name.to_string()));
        }
        let hand_len = self.players[seat].hand().len();
        let card = self.players[seat]
            .play(card_index)
            .ok_or(GameError::InvalidCard {
                index: card_index,
                hand_len,
            })?;

        self.round.record(player_name, card);
        info!(
            game = %self.name,
            player = player_name,
            submissions = self.round.submissions().len(),
            needed = self.submissions_needed(),
            "Submission accepted"
        );

        let payload = encode(&self.name, &views::hand_view(self, &self.players[seat]));
        self.port
            .publish(&self.channel(player_name), EventKind::Hand, payload);

        if self.submissions_missing() == 0 {
            info!(game = %self.name, "All players are in, revealing to the card czar");
            self.reveal();
        }
        Ok(())
    }

    /// Score the submission at `submission_index` and advance to the next round.
    ///
    /// A round nobody could play in (every non-judge hand empty) is closed
    /// without scoring and `submission_index` is ignored.
    pub fn choose_winner(
        &mut self,
        judge_name: &str,
        submission_index: usize,
    ) -> Result<RoundOutcome, GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        if self.players.len() < 2 {
            return Err(GameError::RoundNotStarted);
        }
        if !self.round.is_judge(judge_name) {
            return Err(GameError::NotJudge(judge_name.to_string()));
        }
        let missing = self.submissions_missing();
        if missing > 0 {
            return Err(GameError::RevealPending { missing });
        }
        let submitted = self.round.submissions().len();
        let chosen = if submitted == 0 {
            info!(game = %self.name, "Nobody could play, closing the round unscored");
            None
        } else {
            let chosen = self
                .round
                .submissions()
                .get(submission_index)
                .cloned()
                .ok_or(GameError::InvalidSubmission {
                    index: submission_index,
                    count: submitted,
                })?;
            if let Some(winner) = self.players.iter_mut().find(|p| p.name() == chosen.player) {
                winner.award_point();
                info!(
                    game = %self.name,
                    winner = %chosen.player,
                    score = winner.score(),
                    "Round won"
                );
            }
            Some(chosen)
        };

        self.next_round();

        Ok(RoundOutcome {
            winner: chosen,
            finished: self.finished,
        })
    }

    fn next_round(&mut self) {
        self.round.clear_submissions();

        let Some(prompt) = self.prompts.draw() else {
            self.finished = true;
            info!(game = %self.name, "Prompt deck exhausted, game over");
            self.publish_header();
            return;
        };
        self.round.set_prompt(prompt);
        self.rotate_judge();
        self.publish_header();

        if self.responses.len() < self.players.len() {
            warn!(
                game = %self.name,
                responses_left = self.responses.len(),
                players = self.players.len(),
                "Not enough response cards to deal this round"
            );
            // Hands are unchanged but the judge and submitted flags moved on.
            self.publish_hands(true);
            return;
        }
        for player in &mut self.players {
            // Latecomers who joined mid-round already hold a full hand.
            if player.hand().len() >= self.rules.hand_size {
                continue;
            }
            if let Some(card) = self.responses.draw() {
                player.take(card);
            }
        }
        debug!(
            game = %self.name,
            responses_left = self.responses.len(),
            "Hands replenished"
        );
        self.publish_hands(true);
    }

    /// The judge moves to the next seat in join order, wrapping around.
    fn rotate_judge(&mut self) {
        let current = self
            .round
            .judge()
            .and_then(|judge| self.players.iter().position(|p| p.name() == judge));
        let next = match current {
            Some(seat) => (seat + 1) % self.players.len(),
            None => 0,
        };
        let judge = self.players[next].name().to_string();
        info!(game = %self.name, judge = %judge, "New card czar");
        self.round.set_judge(judge);
    }

    fn channel(&self, player: &str) -> ChannelKey {
        ChannelKey::new(&self.name, player)
    }

    fn publish_header(&self) {
        let payload = encode(&self.name, &views::header_view(self));
        for player in &self.players {
            self.port
                .publish(&self.channel(player.name()), EventKind::Header, payload.clone());
        }
    }

    /// Push each player's hand. The judge only gets a waiting screen, and only
    /// when `include_judge` is set.
    fn publish_hands(&self, include_judge: bool) {
        for player in &self.players {
            if self.round.is_judge(player.name()) && !include_judge {
                continue;
            }
            let payload = encode(&self.name, &views::hand_view(self, player));
            self.port
                .publish(&self.channel(player.name()), EventKind::Hand, payload);
        }
    }

    fn reveal(&self) {
        let Some(judge) = self.round.judge() else {
            return;
        };
        let payload = encode(&self.name, &views::reveal_view(self));
        self.port
            .publish(&self.channel(judge), EventKind::Hand, payload);
    }
}

fn encode<T: Serialize>(game: &str, view: &T) -> String {
    serde_json::to_string(view).unwrap_or_else(|err| {
        warn!(game, error = %err, "Failed to encode notification payload");
        String::from("null")
    })
}
