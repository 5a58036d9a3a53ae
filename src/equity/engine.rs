use super::config::Config;
use super::error::EquityError;
use super::matchups::Matchups;
use super::range::Range;
use super::report::Report;
use super::runouts::Runouts;
use super::tally::Tally;
use super::trial::Trial;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use rayon::iter::ParallelBridge;
use rayon::iter::ParallelIterator;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

/// Exhaustive equity enumeration over a validated [`Config`].
///
/// For every collision-free matchup of one hole per player, every
/// completion of the board is dealt and resolved at showdown. Trials come
/// from one lazy sequential iterator; in parallel mode rayon workers fold
/// them into private [`Tally`]s that are merged at the end.
#[derive(Debug, Clone)]
pub struct Engine {
    ranges: Vec<Range>,
    choices: Vec<Vec<Hole>>,
    board: Board,
    label: String,
    limit: Option<u64>,
    timeout: Option<Duration>,
    parallel: bool,
}

impl TryFrom<Config> for Engine {
    type Error = EquityError;
    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let players = config.ranges.len();
        let seats = (crate::DECK_SIZE - crate::BOARD_SIZE) / 2;
        let max = config.max_players.min(seats);
        if players < crate::MIN_PLAYERS {
            return Err(EquityError::TooFewPlayers {
                got: players,
                min: crate::MIN_PLAYERS,
            });
        }
        if players > max {
            return Err(EquityError::TooManyPlayers { got: players, max });
        }
        let board = Board::try_from(config.board)?;
        let dead = Hand::from(board);
        let choices = config
            .ranges
            .iter()
            .map(|range| match range.live(dead) {
                live if live.is_empty() => Err(Self::collision(range.holes(), dead)),
                live => Ok(live),
            })
            .collect::<Result<Vec<Vec<Hole>>, _>>()?;
        if Matchups::new(choices.clone(), dead).next().is_none() {
            return Err(Self::overlap(&choices));
        }
        Ok(Self {
            label: config.board_text.unwrap_or_else(|| board.to_string()),
            ranges: config.ranges,
            choices,
            board,
            limit: config.limit,
            timeout: config.timeout,
            parallel: config.parallel,
        })
    }
}

impl Engine {
    pub fn players(&self) -> usize {
        self.ranges.len()
    }
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }
    pub fn board(&self) -> Board {
        self.board
    }
    /// the board as the caller wrote it
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn matchups(&self) -> Matchups {
        Matchups::new(self.choices.clone(), Hand::from(self.board))
    }
    /// Trials in a full enumeration: every matchup leaves the same number
    /// of dead cards, so each contributes the same number of runouts.
    pub fn trials(&self) -> u64 {
        let dead = Hand::from(self.board).size() + 2 * self.players();
        let dead = Hand::from(Hand::mask() >> (crate::DECK_SIZE - dead));
        let runouts = Runouts::combinations(dead, self.board.n_unknown()) as u64;
        self.matchups().count() as u64 * runouts
    }

    /// The sequential trial stream, before any cap or deadline.
    pub fn enumerate(&self) -> impl Iterator<Item = Trial> + Send + '_ {
        let board = Hand::from(self.board);
        let n = self.board.n_unknown();
        self.matchups().flat_map(move |holes| {
            let dead = Matchups::dead(&holes, board).unwrap_or(board);
            let holes = Arc::<[Hole]>::from(holes);
            Runouts::from((dead, n))
                .map(move |runout| Trial::from((holes.clone(), Hand::add(board, runout))))
        })
    }

    pub fn run(&self) -> Result<Report, EquityError> {
        let total = self.trials();
        let start = Instant::now();
        let deadline = self.timeout.map(|t| start + t);
        let limit = self
            .limit
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        log::info!(
            "enumerating {} trials for {} players on {} board",
            total,
            self.players(),
            self.board.street()
        );
        for (range, choices) in self.ranges.iter().zip(self.choices.iter()) {
            match range.is_fixed() {
                true => log::debug!("{:<24} fixed", range.label()),
                false => log::debug!("{:<24} {} of {} holes live", range.label(), choices.len(), range.len()),
            }
        }
        let trials = self
            .enumerate()
            .take(limit)
            .take_while(move |_| deadline.map_or(true, |d| Instant::now() < d));
        let tally = match self.parallel {
            true => self.parallel_fold(trials)?,
            false => self.serial_fold(trials)?,
        };
        let complete = tally.trials() == total;
        if !complete {
            log::warn!("stopped after {} of {} trials", tally.trials(), total);
        }
        log::info!(
            "resolved {} trials in {:.2?}",
            tally.trials(),
            start.elapsed()
        );
        Report::try_from((self, &tally, total))
    }

    fn serial_fold(&self, mut trials: impl Iterator<Item = Trial>) -> Result<Tally, EquityError> {
        let n = self.players();
        trials.try_fold(Tally::new(n), |mut tally, trial| {
            tally.record(&trial.resolve()?);
            Ok::<Tally, EquityError>(tally)
        })
    }
    fn parallel_fold(
        &self,
        trials: impl Iterator<Item = Trial> + Send,
    ) -> Result<Tally, EquityError> {
        let n = self.players();
        trials
            .par_bridge()
            .map(|trial| trial.resolve())
            .try_fold(
                || Tally::new(n),
                |mut tally, outcomes| {
                    tally.record(&outcomes?);
                    Ok::<Tally, EquityError>(tally)
                },
            )
            .try_reduce(|| Tally::new(n), |a, b| Ok(a.merge(b)))
    }

    /// a range with nothing left once the board is dealt
    fn collision(holes: &[Hole], board: Hand) -> EquityError {
        holes
            .iter()
            .flat_map(|h| Hand::intersection(Hand::from(*h), board))
            .next()
            .map(EquityError::CardCollision)
            .unwrap_or_else(|| EquityError::InvalidTrial("range has no holes".to_string()))
    }
    /// no way to seat every range at once, so some card is always shared
    fn overlap(choices: &[Vec<Hole>]) -> EquityError {
        let covers = choices
            .iter()
            .map(|c| c.iter().fold(Hand::empty(), |u, h| Hand::union(u, Hand::from(*h))))
            .collect::<Vec<Hand>>();
        covers
            .iter()
            .enumerate()
            .flat_map(|(i, a)| covers[i + 1..].iter().map(move |b| Hand::intersection(*a, *b)))
            .flat_map(|shared| shared)
            .next()
            .map(EquityError::CardCollision)
            .unwrap_or_else(|| EquityError::InvalidTrial("no legal matchup".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn engine(hands: &[&str], board: &str) -> Result<Engine, EquityError> {
        Engine::try_from(Config::parse(hands, board)?)
    }
    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn aces_against_seven_deuce() {
        let report = engine(&["AsAh", "7c2d"], "")
            .unwrap()
            .run()
            .unwrap();
        assert!(report.complete);
        assert_eq!(report.trials, 1_712_304);
        assert!((report.rows[0].equity - 87.42244).abs() < 0.01);
        assert!((report.rows[0].equity + report.rows[1].equity - 100.0).abs() < 1e-6);
    }

    #[test]
    fn complete_board_is_one_trial() {
        let report = engine(&["AsAc", "7h2d"], "AhAdKhKdQh")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.trials, 1);
        assert_eq!(report.total, 1);
        assert!(report.complete);
    }

    #[test]
    fn complete_board_tie() {
        let report = engine(&["2c3d", "2h4d", "5c6c"], "TsJsQsKsAs")
            .unwrap()
            .run()
            .unwrap();
        for row in report.rows.iter() {
            assert_eq!(row.tie, 100.0);
            assert_eq!(row.win, 0.0);
            assert_eq!(row.equity, 50.0);
        }
    }

    #[test]
    fn trial_counts_per_street() {
        assert_eq!(engine(&["AsKs", "7c7d"], "").unwrap().trials(), 1_712_304);
        assert_eq!(engine(&["AsKs", "7c7d"], "Ah Kd Qc").unwrap().trials(), 990);
        assert_eq!(engine(&["AsKs", "7c7d"], "Ah Kd Qc 2s").unwrap().trials(), 44);
        assert_eq!(engine(&["AsKs", "7c7d", "JhTh"], "Ah Kd Qc").unwrap().trials(), 903);
    }

    #[test]
    fn ranges_multiply_matchups() {
        let engine = engine(&["AsKs AhKh", "7c7d KsQs"], "2c 3c 4d 5d").unwrap();
        assert_eq!(engine.matchups().count(), 3);
        assert_eq!(engine.trials(), 3 * 44);
        assert_eq!(engine.run().unwrap().trials, 3 * 44);
    }

    #[test]
    fn serial_matches_parallel() {
        let config = Config::parse(&["AsKs QhQd", "7c7d", "JhTh"], "Ah Kd 2c").unwrap();
        let serial = Engine::try_from(config.clone().parallel(false)).unwrap().run().unwrap();
        let parallel = Engine::try_from(config.parallel(true)).unwrap().run().unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn win_and_tie_bounds() {
        let report = engine(&["AsKs", "AhKh", "7c7d"], "Qs Jh 2d").unwrap().run().unwrap();
        for row in report.rows.iter() {
            assert!(row.win >= 0.0 && row.tie >= 0.0);
            assert!(row.win + row.tie <= 100.0 + 1e-9);
            assert!((row.equity - (row.win + row.tie / 2.0)).abs() < 1e-9);
        }
        let equity = report.rows.iter().map(|r| r.equity).sum::<f64>();
        assert!(equity <= 100.0 + 1e-6);
    }

    #[test]
    fn limit_marks_incomplete() {
        let config = Config::parse(&["AsKs", "7c7d"], "Ah Kd Qc").unwrap().limit(10);
        let report = Engine::try_from(config).unwrap().run().unwrap();
        assert_eq!(report.trials, 10);
        assert_eq!(report.total, 990);
        assert!(!report.complete);
    }

    #[test]
    fn expired_deadline_records_nothing() {
        let config = Config::parse(&["AsAh", "7c2d"], "").unwrap().timeout(Duration::ZERO);
        let result = Engine::try_from(config).unwrap().run();
        assert_eq!(result.unwrap_err(), EquityError::NoTrialsRecorded);
    }

    #[test]
    fn deadline_marks_incomplete() {
        let config = Config::parse(&["AsAh", "7c2d"], "")
            .unwrap()
            .parallel(false)
            .timeout(Duration::from_millis(20));
        let report = Engine::try_from(config).unwrap().run().unwrap();
        assert!(!report.complete);
        assert!(report.trials > 0);
        assert!(report.trials < report.total);
    }

    #[test]
    fn board_keeps_input_text() {
        let report = engine(&["AsKs", "7c7d"], " Ah Kd Qc ").unwrap().run().unwrap();
        assert_eq!(report.board, "Ah Kd Qc");
        let config = Config::default()
            .range(Range::try_from("AsKs").unwrap())
            .range(Range::try_from("7c7d").unwrap())
            .board(Hand::try_from("Ah Kd Qc").unwrap());
        let report = Engine::try_from(config).unwrap().run().unwrap();
        assert_eq!(report.board, "QcKdAh");
    }

    #[test]
    fn zero_limit_records_nothing() {
        let config = Config::parse(&["AsKs", "7c7d"], "Ah Kd Qc").unwrap().limit(0);
        let result = Engine::try_from(config).unwrap().run();
        assert_eq!(result.unwrap_err(), EquityError::NoTrialsRecorded);
    }

    #[test]
    fn shared_card_is_rejected() {
        assert_eq!(
            engine(&["AhKh", "AhQd"], "").unwrap_err(),
            EquityError::CardCollision(card("Ah"))
        );
    }

    #[test]
    fn board_card_is_rejected() {
        assert_eq!(
            engine(&["AhKh", "QsQd"], "Ah 7c 2d").unwrap_err(),
            EquityError::CardCollision(card("Ah"))
        );
    }

    #[test]
    fn range_survives_partial_board_collision() {
        let engine = engine(&["AhKh AsKs", "QdQc"], "Ah 7c 2d").unwrap();
        assert_eq!(engine.matchups().count(), 1);
    }

    #[test]
    fn player_counts() {
        assert_eq!(
            engine(&["AhKh"], "").unwrap_err(),
            EquityError::TooFewPlayers { got: 1, min: 2 }
        );
        let hands = ["AhKh", "QsQd", "2c2d", "3c3d", "4c4d", "5c5d", "6c6d", "7c7d", "8c8d", "9c9d", "TcTd"];
        assert_eq!(
            engine(&hands, "").unwrap_err(),
            EquityError::TooManyPlayers { got: 11, max: 10 }
        );
        let config = Config::parse(&hands, "").unwrap().max_players(11);
        assert!(Engine::try_from(config).is_ok());
    }

    #[test]
    fn bad_board_size() {
        let config = Config::parse(&["AhKh", "QsQd"], "").unwrap();
        let config = config.board(Hand::try_from("2c 3c").unwrap());
        assert_eq!(
            Engine::try_from(config).unwrap_err(),
            EquityError::InvalidBoardSize(2)
        );
    }
}
