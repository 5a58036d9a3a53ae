use super::error::EquityError;
use super::range::Range;
use crate::cards::Board;
use crate::cards::Hand;
use std::time::Duration;

/// Everything an [`Engine`](super::Engine) run needs to know.
///
/// Built with chained setters. Nothing is validated here; the engine
/// checks the whole configuration at once when it is constructed.
#[derive(Debug, Clone)]
pub struct Config {
    pub ranges: Vec<Range>,
    pub board: Hand,
    /// board as written by the caller, used as its report label
    pub board_text: Option<String>,
    pub limit: Option<u64>,
    pub timeout: Option<Duration>,
    pub parallel: bool,
    pub max_players: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranges: Vec::new(),
            board: Hand::empty(),
            board_text: None,
            limit: None,
            timeout: None,
            parallel: crate::DEFAULT_PARALLEL,
            max_players: crate::DEFAULT_MAX_PLAYERS,
        }
    }
}

impl Config {
    /// Parses one range per player plus the board text.
    pub fn parse<S: AsRef<str>>(hands: &[S], board: &str) -> Result<Self, EquityError> {
        let text = match board.trim() {
            "." => "",
            text => text,
        };
        let config = hands.iter().try_fold(Self::default(), |config, hand| {
            Range::try_from(hand.as_ref()).map(|range| config.range(range))
        })?;
        let mut config = config.board(Hand::from(Board::try_from(text)?));
        config.board_text = Some(text.to_string());
        Ok(config)
    }
    pub fn range(mut self, range: Range) -> Self {
        self.ranges.push(range);
        self
    }
    /// known board cards; the report shows them in card order
    pub fn board(mut self, board: Hand) -> Self {
        self.board = board;
        self.board_text = None;
        self
    }
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    pub fn max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.parallel);
        assert_eq!(config.max_players, 10);
        assert_eq!(config.limit, None);
        assert!(config.board.is_empty());
    }

    #[test]
    fn parse_hands_and_board() {
        let config = Config::parse(&["AhKh", "QsQd JcJd"], "2c 7d 9h").unwrap();
        assert_eq!(config.ranges.len(), 2);
        assert_eq!(config.ranges[1].len(), 2);
        assert_eq!(config.board.size(), 3);
        assert_eq!(config.board_text.as_deref(), Some("2c 7d 9h"));
        let config = Config::parse(&["AhKh", "QsQd"], ".").unwrap();
        assert!(config.board.is_empty());
        assert_eq!(config.board_text.as_deref(), Some(""));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Config::parse(&["AhKh", "Qs"], ""),
            Err(EquityError::MalformedRange { .. })
        ));
        assert_eq!(
            Config::parse(&["AhKh", "QsQd"], "2c7d").unwrap_err(),
            EquityError::InvalidBoardSize(2)
        );
    }

    #[test]
    fn setters_chain() {
        let config = Config::default()
            .limit(100)
            .timeout(Duration::from_secs(3))
            .parallel(false)
            .max_players(4);
        assert_eq!(config.limit, Some(100));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert!(!config.parallel);
        assert_eq!(config.max_players, 4);
    }
}
