use crate::cards::Card;
use thiserror::Error;

/// Everything that can go wrong between card text and a finished tally.
///
/// Parsing and validation errors surface before enumeration starts.
/// [`EquityError::InvalidTrial`] during a run means an internal invariant broke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquityError {
    #[error("invalid card text: {0:?}")]
    InvalidCardText(String),

    #[error("malformed range {text:?}: {reason}")]
    MalformedRange { text: String, reason: String },

    #[error("card {0} is dealt more than once")]
    CardCollision(Card),

    #[error("board must hold 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("no trials recorded")]
    NoTrialsRecorded,

    #[error("invalid trial: {0}")]
    InvalidTrial(String),

    #[error("need at least {min} players, got {got}")]
    TooFewPlayers { got: usize, min: usize },

    #[error("at most {max} players fit, got {got}")]
    TooManyPlayers { got: usize, max: usize },
}

impl EquityError {
    pub fn malformed(text: &str, reason: impl std::fmt::Display) -> Self {
        Self::MalformedRange {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let card = Card::try_from("Ah").unwrap();
        assert_eq!(EquityError::CardCollision(card).to_string(), "card Ah is dealt more than once");
        assert_eq!(
            EquityError::TooFewPlayers { got: 1, min: 2 }.to_string(),
            "need at least 2 players, got 1"
        );
        assert_eq!(
            EquityError::malformed("AhK", "odd card count").to_string(),
            "malformed range \"AhK\": odd card count"
        );
    }
}
