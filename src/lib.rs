//! Exhaustive Texas Hold'em equity enumeration.
//!
//! Given two or more players, each holding a fixed hand or a range of hands,
//! and zero to five known board cards, every legal board completion is dealt
//! and resolved at showdown. The per-player win, tie and equity percentages
//! are exact, not sampled.
//!
//! - [`cards`]: bitset card primitives, lazy combinations, hand evaluation
//! - [`equity`]: ranges, runouts, showdown, tallies and the enumeration engine
pub mod cards;
pub mod equity;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ENUMERATION PARAMETERS
// ============================================================================
/// Players allowed at one table unless the caller raises it.
pub const DEFAULT_MAX_PLAYERS: usize = 10;
/// Fewest players an equity question makes sense for.
pub const MIN_PLAYERS: usize = 2;
/// Cards in a complete board.
pub const BOARD_SIZE: usize = 5;
/// Cards in a complete deck.
pub const DECK_SIZE: usize = 52;
/// Enumeration runs on the rayon pool unless disabled.
pub const DEFAULT_PARALLEL: bool = true;
/// Environment variable holding a run deadline such as "30s" or "5m".
pub const TIMEOUT_ENV: &str = "POKEREV_TIMEOUT";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Deadline taken from the [`TIMEOUT_ENV`] variable, if set and well formed.
pub fn timeout() -> Option<std::time::Duration> {
    std::env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| parse_duration(&s))
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
