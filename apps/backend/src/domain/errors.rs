//! Errors raised by the pure game layer.
//!
//! These are HTTP-agnostic. The web boundary converts them with
//! `From<GameError> for AppError`.

use std::path::PathBuf;

use thiserror::Error;

/// Validation failures for player actions. All of them are recoverable and
/// leave the game untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the round has not started yet")]
    RoundNotStarted,
    #[error("player {0} is not in this game")]
    UnknownPlayer(String),
    #[error("player {0} is the card czar and does not submit this round")]
    JudgeCannotSubmit(String),
    #[error("player {0} has already submitted a card this round")]
    DuplicateSubmission(String),
    #[error("card {index} does not exist in a hand of {hand_len}")]
    InvalidCard { index: usize, hand_len: usize },
    #[error("player {0} is not the card czar this round")]
    NotJudge(String),
    #[error("waiting for {missing} more submission(s)")]
    RevealPending { missing: usize },
    #[error("submission {index} does not exist among {count}")]
    InvalidSubmission { index: usize, count: usize },
    #[error("the game is over")]
    GameFinished,
    #[error("the prompt deck is empty")]
    DeckExhausted,
}

/// Failure to read a deck file at startup.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("cannot read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
