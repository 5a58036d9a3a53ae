use super::error::EquityError;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Hole;

/// One player's holding: a fixed hand, or several candidate hands.
///
/// Parsed from text where every consecutive pair of cards forms one
/// [`Hole`]. Separators (spaces, commas, newlines) are optional, so
/// `"AhKh"`, `"Ah Kh"` and `"ahKH, QsQd"` all parse. A fixed hand is
/// simply a range of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    label: String,
    holes: Vec<Hole>,
}

impl Range {
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn len(&self) -> usize {
        self.holes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
    pub fn is_fixed(&self) -> bool {
        self.holes.len() == 1
    }
    /// holes that share no card with the dead set
    pub fn live(&self, dead: Hand) -> Vec<Hole> {
        self.holes
            .iter()
            .copied()
            .filter(|h| !Hand::from(*h).intersects(&dead))
            .collect()
    }
}

impl From<Hole> for Range {
    fn from(hole: Hole) -> Self {
        Self {
            label: hole.to_string(),
            holes: vec![hole],
        }
    }
}

impl TryFrom<&str> for Range {
    type Error = EquityError;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let label = text.trim();
        let cards = Card::parse(label).map_err(|e| match e {
            EquityError::InvalidCardText(ref token) if token.len() == 1 => {
                EquityError::malformed(label, "odd card count")
            }
            e => EquityError::malformed(label, e),
        })?;
        if cards.is_empty() {
            return Err(EquityError::malformed(label, "no cards"));
        }
        if cards.len() % 2 == 1 {
            return Err(EquityError::malformed(label, "odd card count"));
        }
        let holes = cards
            .chunks_exact(2)
            .map(|pair| Hole::try_from((pair[0], pair[1])))
            .collect::<Result<Vec<Hole>, _>>()
            .map_err(|e| EquityError::malformed(label, e))?;
        Ok(Self {
            label: label.to_string(),
            holes,
        })
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
