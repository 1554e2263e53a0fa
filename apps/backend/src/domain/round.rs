use serde::Serialize;

use crate::domain::Card;

/// One player's answer for the current prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub player: String,
    pub card: Card,
}

/// State of the judging cycle in progress. Reset in place between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    prompt: Card,
    judge: Option<String>,
    /// Arrival order; the judge sees them in this order.
    submissions: Vec<Submission>,
}

impl Round {
    pub(crate) fn new(prompt: Card) -> Self {
        Self {
            prompt,
            judge: None,
            submissions: Vec::new(),
        }
    }

    pub fn prompt(&self) -> &Card {
        &self.prompt
    }

    pub fn judge(&self) -> Option<&str> {
        self.judge.as_deref()
    }

    pub fn is_judge(&self, player: &str) -> bool {
        self.judge.as_deref() == Some(player)
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn has_submitted(&self, player: &str) -> bool {
        self.submissions.iter().any(|s| s.player == player)
    }

    pub(crate) fn set_judge(&mut self, player: impl Into<String>) {
        self.judge = Some(player.into());
    }

    pub(crate) fn set_prompt(&mut self, prompt: Card) {
        self.prompt = prompt;
    }

    pub(crate) fn record(&mut self, player: impl Into<String>, card: Card) {
        self.submissions.push(Submission {
            player: player.into(),
            card,
        });
    }

    pub(crate) fn clear_submissions(&mut self) {
        self.submissions.clear();
    }
}
