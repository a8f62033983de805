use std::io;

use chess_frontend::engine::{
    SearchConfig, DEFAULT_BREADTH_LIMIT, DEFAULT_MAX_DEPTH, DEFAULT_MOVETIME_MS,
    DEFAULT_MOVE_OVERHEAD_MS, DEFAULT_RANKING_DEPTH,
};
use chess_frontend::{Board, UciHandler};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "UCI front end with a time-bounded search", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Ranked candidates searched deeper each iteration
    #[arg(long, default_value_t = DEFAULT_BREADTH_LIMIT)]
    breadth_limit: usize,

    /// Depth of the evaluation used to rank candidates
    #[arg(long, default_value_t = DEFAULT_RANKING_DEPTH)]
    ranking_depth: u32,

    /// Deepest refinement iteration
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Milliseconds per move when `go` has no time information
    #[arg(long, default_value_t = DEFAULT_MOVETIME_MS)]
    default_movetime: u64,

    /// Milliseconds held back from the clock per move
    #[arg(long, default_value_t = DEFAULT_MOVE_OVERHEAD_MS)]
    move_overhead: u64,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            breadth_limit: self.breadth_limit,
            ranking_depth: self.ranking_depth,
            max_depth: self.max_depth,
            default_movetime_ms: self.default_movetime,
            move_overhead_ms: self.move_overhead,
        }
        .normalized()
    }
}

fn main() {
    let args = Args::parse();

    // stdout carries protocol text only; env_logger writes to stderr.
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );

    let config = args.search_config();
    log::debug!("starting with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handler = UciHandler::new(Board::new(), stdout.lock(), config);
    if let Err(e) = handler.run(stdin.lock()) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
