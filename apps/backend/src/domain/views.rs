//! Read-only projections of a game for one viewer.
//!
//! These are what clients render: the header (prompt, judge, scoreboard) and
//! the hand area. They are derived on demand and never stored.

use serde::Serialize;

use crate::domain::game::{Game, Phase};
use crate::domain::player::Player;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
    pub is_judge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub game: String,
    pub prompt: Card,
    pub judge: Option<String>,
    pub phase: Phase,
    pub finished: bool,
    pub scores: Vec<ScoreLine>,
    pub submitted: usize,
    pub needed: usize,
    pub prompts_left: usize,
}

/// A submission as the judge sees it: position only, never the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealedCard {
    pub index: usize,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandView {
    Cards {
        cards: Vec<Card>,
        submitted: bool,
    },
    Judging {
        waiting_for: usize,
    },
    Reveal {
        prompt: Card,
        submissions: Vec<RevealedCard>,
    },
}

/// Everything one player needs to draw their screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub player: String,
    pub score: u32,
    pub is_judge: bool,
    pub hand: HandView,
    pub header: HeaderView,
}

pub fn header_view(game: &Game) -> HeaderView {
    let round = game.round();
    HeaderView {
        game: game.name().to_string(),
        prompt: round.prompt().clone(),
        judge: round.judge().map(str::to_string),
        phase: game.phase(),
        finished: game.is_finished(),
        scores: game
            .players()
            .iter()
            .map(|p| ScoreLine {
                name: p.name().to_string(),
                score: p.score(),
                is_judge: round.is_judge(p.name()),
            })
            .collect(),
        submitted: round.submissions().len(),
        needed: game.submissions_needed(),
        prompts_left: game.prompts_left(),
    }
}

/// The hand area for `player`: their cards, or the judge's waiting/reveal screen.
pub fn hand_view(game: &Game, player: &Player) -> HandView {
    let round = game.round();
    if !round.is_judge(player.name()) {
        return HandView::Cards {
            cards: player.hand().to_vec(),
            submitted: round.has_submitted(player.name()),
        };
    }
    if game.phase() == Phase::Revealing {
        reveal_view(game)
    } else {
        HandView::Judging {
            waiting_for: game
                .submissions_needed()
                .saturating_sub(round.submissions().len()),
        }
    }
}

/// Submissions in arrival order, labelled by position.
pub fn reveal_view(game: &Game) -> HandView {
    let round = game.round();
    HandView::Reveal {
        prompt: round.prompt().clone(),
        submissions: round
            .submissions()
            .iter()
            .enumerate()
            .map(|(index, s)| RevealedCard {
                index,
                card: s.card.clone(),
            })
            .collect(),
    }
}

pub fn player_view(game: &Game, player: &Player) -> PlayerView {
    PlayerView {
        player: player.name().to_string(),
        score: player.score(),
        is_judge: game.round().is_judge(player.name()),
        hand: hand_view(game, player),
        header: header_view(game),
    }
}
