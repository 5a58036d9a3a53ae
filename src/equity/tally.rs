use super::error::EquityError;
use super::showdown::Outcome;

/// Raw per-player counters.
///
/// A tie adds a full 1.0 to `ties`; it is halved only when converting to
/// equity, so the counters stay independent of how many players split.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Count {
    pub wins: f64,
    pub ties: f64,
    pub trials: u64,
}

impl Count {
    fn record(&mut self, outcome: Outcome) {
        self.trials += 1;
        match outcome {
            Outcome::Win => self.wins += 1.0,
            Outcome::Tie => self.ties += 1.0,
            Outcome::Lose => {}
        }
    }
    fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            trials: self.trials + other.trials,
        }
    }
}

/// Percentages derived from a [`Count`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Equity {
    pub equity: f64,
    pub win: f64,
    pub tie: f64,
}

impl TryFrom<Count> for Equity {
    type Error = EquityError;
    fn try_from(count: Count) -> Result<Self, Self::Error> {
        match count.trials {
            0 => Err(EquityError::NoTrialsRecorded),
            n => {
                let n = n as f64;
                Ok(Self {
                    equity: (count.wins + count.ties / 2.0) / n * 100.0,
                    win: count.wins / n * 100.0,
                    tie: count.ties / n * 100.0,
                })
            }
        }
    }
}

/// Accumulates showdown outcomes for a fixed number of players.
///
/// Tallies are plain values: each worker folds into its own, and
/// [`Tally::merge`] sums them once traversal is done.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally(Vec<Count>);

impl Tally {
    pub fn new(players: usize) -> Self {
        Self(vec![Count::default(); players])
    }
    pub fn counts(&self) -> &[Count] {
        &self.0
    }
    /// trials seen, which every player shares
    pub fn trials(&self) -> u64 {
        self.0.first().map(|c| c.trials).unwrap_or(0)
    }
    pub fn record(&mut self, outcomes: &[Outcome]) {
        debug_assert!(outcomes.len() == self.0.len());
        self.0
            .iter_mut()
            .zip(outcomes.iter())
            .for_each(|(count, outcome)| count.record(*outcome));
    }
    pub fn merge(self, other: Self) -> Self {
        debug_assert!(self.0.len() == other.0.len());
        Self(
            self.0
                .into_iter()
                .zip(other.0)
                .map(|(a, b)| a.merge(b))
                .collect(),
        )
    }
    pub fn snapshot(&self) -> Result<Vec<Equity>, EquityError> {
        self.0.iter().copied().map(Equity::try_from).collect()
    }
}
