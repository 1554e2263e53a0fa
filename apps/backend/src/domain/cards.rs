use std::fmt;

use serde::{Deserialize, Serialize};

/// A single prompt or response card. Cards are opaque text; two cards with the
/// same text are interchangeable, which is why hands are always addressed by
/// position rather than by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(String);

impl Card {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Card {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Card {
    fn from(text: String) -> Self {
        Self(text)
    }
}
