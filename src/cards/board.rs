use super::hand::Hand;
use super::street::Street;
use crate::equity::EquityError;

/// The known community cards.
///
/// A board is a [`Hand`] whose size names a [`Street`]. Sizes other than
/// 0, 3, 4 or 5 are rejected at construction, so every `Board` knows how
/// many cards remain to be enumerated.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn street(&self) -> Street {
        Street::try_from(self.0.size()).expect("board size checked at construction")
    }
    pub fn n_unknown(&self) -> usize {
        self.street().n_unknown()
    }
}

impl TryFrom<Hand> for Board {
    type Error = EquityError;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Street::try_from(hand.size()).map(|_| Self(hand))
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

/// str isomorphism. "" and "." both mean no board
impl TryFrom<&str> for Board {
    type Error = EquityError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "" | "." => Ok(Self::empty()),
            s => Self::try_from(Hand::try_from(s)?),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
