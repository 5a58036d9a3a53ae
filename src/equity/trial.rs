use super::error::EquityError;
use super::showdown::Outcome;
use super::showdown::Showdown;
use crate::cards::Hand;
use crate::cards::Hole;
use std::sync::Arc;

/// One matchup dealt out on one complete board.
///
/// The holes are shared between every runout of the same matchup.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    holes: Arc<[Hole]>,
    board: Hand,
}

impl Trial {
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn resolve(&self) -> Result<Vec<Outcome>, EquityError> {
        Showdown::resolve(&self.holes, self.board)
    }
}

impl From<(Arc<[Hole]>, Hand)> for Trial {
    fn from((holes, board): (Arc<[Hole]>, Hand)) -> Self {
        Self { holes, board }
    }
}
