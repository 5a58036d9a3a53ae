//! Equity Binary
//!
//! Exact Hold'em equity for fixed hands or ranges, on any known board.
//!
//! pokerev AsAh 7c2d
//! pokerev "AhKh, QsQd" JcTc -b "2c 7d 9h" --odds -f csv

use anyhow::Context;
use clap::Parser;
use pokerev::equity::Config;
use pokerev::equity::Engine;
use pokerev::equity::Format;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(required = true, help = "One fixed hand or range per player, e.g. AsAh or \"AhKh QsQd\"")]
    hands: Vec<String>,
    #[arg(short, long, default_value = "", help = "Known board cards, empty or . for none")]
    board: String,
    #[arg(short = 'O', long, help = "Show equity and win odds")]
    odds: bool,
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
    #[arg(long, help = "Stop after this many trials")]
    limit: Option<u64>,
    #[arg(long, value_parser = duration, help = "Stop after this long, e.g. 30s or 5m")]
    timeout: Option<Duration>,
    #[arg(long, help = "Enumerate on the calling thread only")]
    serial: bool,
    #[arg(long, default_value_t = pokerev::DEFAULT_MAX_PLAYERS)]
    max_players: usize,
}

fn duration(s: &str) -> Result<Duration, String> {
    pokerev::parse_duration(s).ok_or_else(|| format!("invalid duration {:?}", s))
}

fn main() -> anyhow::Result<()> {
    pokerev::log();
    let args = Args::parse();
    let mut config = Config::parse(args.hands.as_slice(), &args.board)
        .context("parsing hands and board")?
        .parallel(!args.serial)
        .max_players(args.max_players);
    if let Some(limit) = args.limit {
        config = config.limit(limit);
    }
    if let Some(timeout) = args.timeout.or_else(pokerev::timeout) {
        config = config.timeout(timeout);
    }
    let engine = Engine::try_from(config).context("validating setup")?;
    let report = engine.run().context("enumerating runouts")?;
    let text = args
        .format
        .render(&report, args.odds)
        .context("rendering report")?;
    print!("{}", text);
    Ok(())
}
