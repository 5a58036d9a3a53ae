use super::error::EquityError;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Strength;

/// A single player's result on one completed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Tie,
    Lose,
}

/// Resolves one completed board between any number of hole cards.
///
/// Every hole is unioned with the board, evaluated to a [`Strength`], and
/// compared by its total order. The best strength wins outright when it is
/// unique, and every player holding it ties otherwise.
pub struct Showdown;

impl Showdown {
    pub fn resolve(holes: &[Hole], board: Hand) -> Result<Vec<Outcome>, EquityError> {
        let strengths = Self::strengths(holes, board)?;
        let best = strengths
            .iter()
            .max()
            .copied()
            .ok_or_else(|| EquityError::InvalidTrial("no players at showdown".to_string()))?;
        let winners = strengths.iter().filter(|s| **s == best).count();
        Ok(strengths
            .iter()
            .map(|s| match (*s == best, winners) {
                (false, _) => Outcome::Lose,
                (true, 1) => Outcome::Win,
                (true, _) => Outcome::Tie,
            })
            .collect())
    }

    /// Per-hole strengths on this board, after checking the trial is legal.
    pub fn strengths(holes: &[Hole], board: Hand) -> Result<Vec<Strength>, EquityError> {
        if board.size() != crate::BOARD_SIZE {
            return Err(EquityError::InvalidTrial(format!(
                "board {} has {} cards",
                board,
                board.size()
            )));
        }
        let mut seen = board;
        for hole in holes.iter().map(|h| Hand::from(*h)) {
            if hole.size() != 2 {
                return Err(EquityError::InvalidTrial(format!(
                    "hole {} has {} cards",
                    hole,
                    hole.size()
                )));
            }
            if hole.intersects(&seen) {
                return Err(EquityError::InvalidTrial(format!(
                    "hole {} overlaps {}",
                    hole, seen
                )));
            }
            seen = Hand::add(seen, hole);
        }
        Ok(holes
            .iter()
            .map(|h| Hand::add(Hand::from(*h), board))
            .map(Strength::from)
            .collect())
    }
}
