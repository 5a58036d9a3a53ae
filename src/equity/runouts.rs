use crate::cards::Hand;
use crate::cards::HandIterator;

/// Every way to complete a board, given the cards already dead.
///
/// Yields each `n`-card [`Hand`] drawn from the complement of `dead`
/// exactly once, in Gosper bit-permutation order. With `n == 0` there is
/// exactly one completion: the empty hand. Constructing a new `Runouts`
/// restarts the sequence.
#[derive(Debug, Clone)]
pub enum Runouts {
    Complete(std::iter::Once<Hand>),
    Pending(HandIterator),
}

impl Runouts {
    /// C(52 - |dead|, n), computed without iterating.
    pub fn combinations(dead: Hand, n: usize) -> usize {
        match n {
            0 => 1,
            n => HandIterator::combinations(n, dead),
        }
    }
}

impl From<(Hand, usize)> for Runouts {
    fn from((dead, n): (Hand, usize)) -> Self {
        match n {
            0 => Self::Complete(std::iter::once(Hand::empty())),
            n => Self::Pending(HandIterator::from((n, dead))),
        }
    }
}

impl Iterator for Runouts {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Complete(once) => once.next(),
            Self::Pending(hands) => hands.next(),
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Complete(once) => once.size_hint(),
            Self::Pending(hands) => hands.size_hint(),
        }
    }
}

impl ExactSizeIterator for Runouts {}
