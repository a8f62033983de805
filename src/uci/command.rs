//! Parsing of protocol lines into typed commands.

use crate::board::Color;
use crate::engine::TimeControl;

use super::UciError;

/// Number of whitespace-separated fields in a FEN record.
pub const FEN_FIELDS: usize = 6;

/// Deepest `perft` the dispatcher will run.
pub const MAX_PERFT_DEPTH: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(PositionCommand),
    Go(GoParams),
    SetOption { name: String, value: Option<String> },
    Perft(u32),
    /// Print the board.
    Display,
    /// Print the legal moves.
    ListMoves,
    Quit,
    /// Unrecognized verb, kept for the error notice.
    Unknown(String),
}

/// Where a `position` command starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSetup {
    StartPos,
    Fen(String),
    /// No setup keyword: moves apply to the current position.
    Current,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCommand {
    pub setup: PositionSetup,
    /// Move tokens as sent; validated against the position when applied.
    pub moves: Vec<String>,
}

/// Arguments of `go`. Malformed values are dropped while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub movetime: Option<i64>,
    pub wtime: Option<i64>,
    pub btime: Option<i64>,
    pub winc: Option<i64>,
    pub binc: Option<i64>,
    pub movestogo: Option<u64>,
    pub depth: Option<u32>,
}

impl GoParams {
    /// Time control for `side`. `movetime` wins over clock times.
    #[must_use]
    pub fn time_control(&self, side: Color) -> TimeControl {
        if let Some(time_ms) = self.movetime {
            return TimeControl::MoveTime { time_ms };
        }
        let (time_left, inc) = match side {
            Color::White => (self.wtime, self.winc),
            Color::Black => (self.btime, self.binc),
        };
        match time_left {
            Some(time_left_ms) => TimeControl::Incremental {
                time_left_ms,
                inc_ms: inc.unwrap_or(0),
                movestogo: self.movestogo,
            },
            None => TimeControl::Default,
        }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_uci_command(line: &str) -> Result<Option<UciCommand>, UciError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = parts.split_first() else {
        return Ok(None);
    };

    let cmd = match verb {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(parse_position(args)?),
        "go" => UciCommand::Go(parse_go(args)),
        "setoption" => {
            let (name, value) =
                super::options::parse_setoption(args).ok_or(UciError::MissingOptionName)?;
            UciCommand::SetOption { name, value }
        }
        "perft" => {
            let depth = match args.first() {
                None => 1,
                Some(v) => v
                    .parse::<u32>()
                    .ok()
                    .filter(|&d| d <= MAX_PERFT_DEPTH)
                    .ok_or_else(|| UciError::InvalidValue {
                        name: "perft depth".to_string(),
                        value: (*v).to_string(),
                    })?,
            };
            UciCommand::Perft(depth)
        }
        "d" => UciCommand::Display,
        "l" => UciCommand::ListMoves,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(verb.to_string()),
    };

    Ok(Some(cmd))
}

fn parse_position(args: &[&str]) -> Result<PositionCommand, UciError> {
    let (setup, rest) = match args.split_first() {
        Some((&"startpos", rest)) => (PositionSetup::StartPos, rest),
        Some((&"fen", rest)) => {
            let fields: Vec<&str> = rest
                .iter()
                .copied()
                .take_while(|&t| t != "moves")
                .take(FEN_FIELDS)
                .collect();
            if fields.len() < FEN_FIELDS {
                return Err(UciError::IncompleteFen {
                    found: fields.len(),
                });
            }
            (PositionSetup::Fen(fields.join(" ")), &rest[FEN_FIELDS..])
        }
        _ => (PositionSetup::Current, args),
    };

    let rest = match rest.split_first() {
        Some((&"moves", tail)) => tail,
        _ => rest,
    };

    Ok(PositionCommand {
        setup,
        moves: rest.iter().map(|t| (*t).to_string()).collect(),
    })
}

fn parse_go(args: &[&str]) -> GoParams {
    fn value<T: std::str::FromStr>(key: &str, raw: Option<&&str>) -> Option<T> {
        let parsed = raw.and_then(|v| v.parse::<T>().ok());
        if parsed.is_none() {
            log::warn!("ignoring malformed go {} value {:?}", key, raw);
        }
        parsed
    }

    let mut params = GoParams::default();
    let mut i = 0;
    while i < args.len() {
        let key = args[i];
        let raw = args.get(i + 1);
        match key {
            "movetime" => params.movetime = value(key, raw),
            "wtime" => params.wtime = value(key, raw),
            "btime" => params.btime = value(key, raw),
            "winc" => params.winc = value(key, raw),
            "binc" => params.binc = value(key, raw),
            "movestogo" => params.movestogo = value(key, raw),
            "depth" => params.depth = value(key, raw),
            other => {
                log::debug!("ignoring go argument {}", other);
                i += 1;
                continue;
            }
        }
        i += 2;
    }
    params
}
