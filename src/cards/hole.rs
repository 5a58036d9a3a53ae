use super::card::Card;
use super::hand::Hand;
use crate::equity::EquityError;

/// A player's two private cards.
///
/// Construction is fallible: anything other than exactly two distinct
/// cards is rejected, so a `Hole` in hand is always a valid holding.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        let mut cards = self.0;
        let lo = cards.next().expect("two cards");
        let hi = cards.next().expect("two cards");
        [hi, lo]
    }
}

impl TryFrom<Hand> for Hole {
    type Error = EquityError;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(EquityError::InvalidTrial(format!(
                "hole {} has {} cards",
                hand, n
            ))),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = EquityError;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(EquityError::CardCollision(a)),
            false => Ok(Self(Hand::add(Hand::from(a), Hand::from(b)))),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [hi, lo] = self.cards();
        write!(f, "{}{}", hi, lo)
    }
}
