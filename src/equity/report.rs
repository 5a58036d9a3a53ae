use super::engine::Engine;
use super::error::EquityError;
use super::odds::Odds;
use super::tally::Tally;

/// One player's line in a [`Report`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    pub label: String,
    pub equity: f64,
    pub win: f64,
    pub tie: f64,
}

impl Row {
    pub fn odds(&self) -> Odds {
        Odds::from(self.equity)
    }
    pub fn win_odds(&self) -> Odds {
        Odds::from(self.win)
    }
}

/// The result of one enumeration, rows in input order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub board: String,
    pub street: String,
    pub trials: u64,
    pub total: u64,
    pub complete: bool,
    pub rows: Vec<Row>,
}

impl TryFrom<(&Engine, &Tally, u64)> for Report {
    type Error = EquityError;
    fn try_from((engine, tally, total): (&Engine, &Tally, u64)) -> Result<Self, Self::Error> {
        let rows = engine
            .ranges()
            .iter()
            .zip(tally.snapshot()?)
            .map(|(range, equity)| Row {
                label: range.label().to_string(),
                equity: equity.equity,
                win: equity.win,
                tie: equity.tie,
            })
            .collect();
        Ok(Self {
            board: engine.label().to_string(),
            street: engine.board().street().to_string(),
            trials: tally.trials(),
            total,
            complete: tally.trials() == total,
            rows,
        })
    }
}

/// How a [`Report`] is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    #[default]
    Table,
    Csv,
    Json,
}

impl Format {
    pub fn render(&self, report: &Report, odds: bool) -> Result<String, serde_json::Error> {
        match self {
            Self::Table => Ok(Self::table(report, odds)),
            Self::Csv => Ok(Self::csv(report, odds)),
            Self::Json => serde_json::to_string_pretty(report),
        }
    }

    fn table(report: &Report, odds: bool) -> String {
        let cell = |p: f64, o: Odds| match odds {
            true => format!("{:.4} % ({})", p, o),
            false => format!("{:.4} %", p),
        };
        let head = ["Hand", "Equity", "Win", "Tie"].map(String::from);
        let rows = report
            .rows
            .iter()
            .map(|r| {
                [
                    r.label.clone(),
                    cell(r.equity, r.odds()),
                    cell(r.win, r.win_odds()),
                    format!("{:.4} %", r.tie),
                ]
            })
            .collect::<Vec<[String; 4]>>();
        let mut widths = [0; 4];
        for line in std::iter::once(&head).chain(rows.iter()) {
            for (w, text) in widths.iter_mut().zip(line.iter()) {
                *w = (*w).max(text.chars().count());
            }
        }
        let board = match report.board.as_str() {
            "" => ".",
            board => board,
        };
        let mut out = format!("board {} ({}), {} trials", board, report.street, report.trials);
        if !report.complete {
            out.push_str(&format!(" of {} (incomplete)", report.total));
        }
        out.push('\n');
        for line in std::iter::once(&head).chain(rows.iter()) {
            out.push_str(&format!(
                "{:<a$} : {:>b$} : {:>c$} : {:>d$}\n",
                line[0],
                line[1],
                line[2],
                line[3],
                a = widths[0],
                b = widths[1],
                c = widths[2],
                d = widths[3],
            ));
        }
        out
    }

    fn csv(report: &Report, odds: bool) -> String {
        let mut out = match odds {
            true => String::from("hand,equity,win,tie,equity_odds,win_odds\n"),
            false => String::from("hand,equity,win,tie\n"),
        };
        for row in report.rows.iter() {
            out.push_str(&format!(
                "{},{:.4},{:.4},{:.4}",
                Self::quote(&row.label),
                row.equity,
                row.win,
                row.tie
            ));
            if odds {
                out.push_str(&format!(",{},{}", row.odds(), row.win_odds()));
            }
            out.push('\n');
        }
        out
    }

    fn quote(field: &str) -> String {
        match field.contains([',', '"', '\n']) {
            true => format!("\"{}\"", field.replace('"', "\"\"")),
            false => field.to_string(),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format {:?}", other)),
        }
    }
}
