//! Error codes for the blanks API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Game name missing, blank or too long
    InvalidGameName,
    /// Player name missing, blank or too long
    InvalidPlayerName,
    /// Card index outside the player's hand
    InvalidCard,
    /// Submission index outside the revealed set
    InvalidSubmission,
    /// Malformed query or path
    BadRequest,

    // Resource not found
    GameNotFound,
    PlayerNotFound,

    // Game state conflicts
    /// Fewer than two players seated
    RoundNotStarted,
    /// The card czar tried to play a card
    JudgeCannotSubmit,
    /// Second submission in the same round
    DuplicateSubmission,
    /// Someone other than the card czar tried to pick a winner
    NotJudge,
    /// Winner picked before every submission was in
    RevealPending,
    /// The prompt deck ran out
    GameFinished,
    /// A new game could not draw its first prompt
    DeckExhausted,

    // System errors
    Internal,
    ConfigError,
    DeckUnreadable,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameName => "INVALID_GAME_NAME",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidCard => "INVALID_CARD",
            Self::InvalidSubmission => "INVALID_SUBMISSION",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::RoundNotStarted => "ROUND_NOT_STARTED",
            Self::JudgeCannotSubmit => "JUDGE_CANNOT_SUBMIT",
            Self::DuplicateSubmission => "DUPLICATE_SUBMISSION",
            Self::NotJudge => "NOT_JUDGE",
            Self::RevealPending => "REVEAL_PENDING",
            Self::GameFinished => "GAME_FINISHED",
            Self::DeckExhausted => "DECK_EXHAUSTED",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DeckUnreadable => "DECK_UNREADABLE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
