//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Reads one command per line, drives the engine core and the time-bounded
//! search, and writes protocol responses. Malformed input is logged and skipped;
//! only I/O errors end the session early.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::board::{FenError, Move, MoveParseError, UciMove};
use crate::engine::{self, EngineCore, SearchBudget, SearchConfig};
use crate::perft::perft_divide;

pub mod command;
pub mod options;
pub mod print;

pub use command::{parse_uci_command, GoParams, PositionCommand, PositionSetup, UciCommand};

pub const ENGINE_NAME: &str = concat!("chess_frontend ", env!("CARGO_PKG_VERSION"));
pub const ENGINE_AUTHOR: &str = "the chess_frontend developers";

/// Error type for malformed protocol input. None of these end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Fewer than six FEN fields after `position fen`
    IncompleteFen { found: usize },
    /// FEN rejected by the engine core
    InvalidFen(FenError),
    /// Move token that failed to parse or is not legal in the position
    InvalidMove { move_str: String, error: MoveParseError },
    /// `setoption` without a name
    MissingOptionName,
    /// Option or argument value that does not parse
    InvalidValue { name: String, value: String },
    UnknownOption(String),
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::IncompleteFen { found } => {
                write!(f, "Incomplete FEN: expected 6 fields, found {found}")
            }
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingOptionName => write!(f, "setoption requires a name"),
            UciError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for {name}")
            }
            UciError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Resolve a move token against the legal moves of the current position.
pub fn parse_uci_move<E: EngineCore>(engine: &mut E, token: &str) -> Result<Move, UciError> {
    let invalid = |error| UciError::InvalidMove {
        move_str: token.to_string(),
        error,
    };
    let wanted: UciMove = token.parse().map_err(invalid)?;
    engine
        .legal_moves()
        .into_iter()
        .find(|&mv| wanted.matches(mv))
        .ok_or_else(|| {
            invalid(MoveParseError::IllegalMove {
                notation: token.to_string(),
            })
        })
}

/// Command dispatcher owning the engine position and the output stream.
pub struct UciHandler<E: EngineCore, W: Write> {
    engine: E,
    out: W,
    config: SearchConfig,
}

impl<E: EngineCore, W: Write> UciHandler<E, W> {
    pub fn new(engine: E, out: W, config: SearchConfig) -> Self {
        UciHandler {
            engine,
            out,
            config: config.normalized(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (E, W) {
        (self.engine, self.out)
    }

    /// Process one line. Returns [`Flow::Quit`] after `quit`.
    pub fn dispatch(&mut self, line: &str) -> io::Result<Flow> {
        let cmd = match parse_uci_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                log::warn!("{}: {}", e, line.trim());
                return Ok(Flow::Continue);
            }
        };

        match cmd {
            UciCommand::Uci => {
                self.engine.reset();
                print::print_id(&mut self.out, ENGINE_NAME, ENGINE_AUTHOR)?;
            }
            UciCommand::IsReady => print::print_ready(&mut self.out)?,
            UciCommand::UciNewGame => self.engine.reset(),
            UciCommand::Position(position) => self.handle_position(&position),
            UciCommand::Go(params) => self.handle_go(&params)?,
            UciCommand::SetOption { name, value } => {
                match options::apply_setoption(&mut self.config, &name, value.as_deref()) {
                    Ok(()) => log::debug!("config now {:?}", self.config),
                    Err(e) => log::warn!("{}", e),
                }
            }
            UciCommand::Perft(depth) => self.handle_perft(depth)?,
            UciCommand::Display => print::print_board(&mut self.out, &self.engine)?,
            UciCommand::ListMoves => {
                let moves = self.engine.legal_moves();
                print::print_moves(&mut self.out, &moves)?;
            }
            UciCommand::Quit => return Ok(Flow::Quit),
            UciCommand::Unknown(verb) => print::print_unknown(&mut self.out, &verb)?,
        }
        Ok(Flow::Continue)
    }

    /// Read and dispatch lines until `quit` or end of input, flushing after each.
    ///
    /// Lines are decoded lossily so stray bytes cannot end the session.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let flow = self.dispatch(&line)?;
            self.out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_position(&mut self, position: &PositionCommand) {
        match &position.setup {
            PositionSetup::StartPos => self.engine.reset(),
            PositionSetup::Fen(fen) => {
                if let Err(e) = self.engine.set_fen(fen) {
                    log::warn!("{}", UciError::from(e));
                    return;
                }
            }
            PositionSetup::Current => {}
        }

        for token in &position.moves {
            match parse_uci_move(&mut self.engine, token) {
                Ok(mv) => {
                    self.engine.apply(mv);
                }
                Err(e) => log::warn!("skipping move: {}", e),
            }
        }
    }

    fn handle_go(&mut self, params: &GoParams) -> io::Result<()> {
        let time_control = params.time_control(self.engine.side_to_move());
        let budget_ms =
            time_control.budget_ms(self.config.default_movetime_ms, self.config.move_overhead_ms);
        let config = match params.depth {
            Some(depth) => self.config.clone().with_max_depth(depth),
            None => self.config.clone(),
        };
        log::debug!("go: {:?}, budget {}ms", time_control, budget_ms);

        let budget = SearchBudget::start(budget_ms);
        let outcome = engine::search(&mut self.engine, &budget, &config);
        print::print_bestmove(&mut self.out, outcome.best_move)
    }

    fn handle_perft(&mut self, depth: u32) -> io::Result<()> {
        let start = Instant::now();
        let nodes = if depth == 0 {
            1
        } else {
            let divide = perft_divide(&mut self.engine, depth);
            for (mv, count) in &divide {
                log::debug!("{}: {}", mv, count);
            }
            divide.iter().map(|(_, count)| count).sum()
        };
        print::print_perft_info(&mut self.out, depth, nodes, start.elapsed())
    }
}
