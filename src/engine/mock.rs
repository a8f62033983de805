//! Scripted engine core for exercising the orchestration without real chess.

use std::time::Duration;

use crate::board::{Color, FenError, Move, Piece, Square};

use super::EngineCore;

type ScoreFn = Box<dyn Fn(Move, u32) -> i32>;

/// Root position with a fixed move list. Evaluating after `apply(mv)` at depth
/// `d` yields the mover's score `score(mv, d)`, negated as a real engine would
/// report it for the opponent.
pub(crate) struct ScriptedEngine {
    moves: Vec<Move>,
    score: ScoreFn,
    eval_delay: Duration,
    applied: Vec<Move>,
    pub(crate) evaluations: Vec<(Move, u32)>,
    pub(crate) resets: usize,
}

impl ScriptedEngine {
    pub(crate) fn new(moves: Vec<Move>, score: impl Fn(Move, u32) -> i32 + 'static) -> Self {
        ScriptedEngine {
            moves,
            score: Box::new(score),
            eval_delay: Duration::ZERO,
            applied: Vec::new(),
            evaluations: Vec::new(),
            resets: 0,
        }
    }

    /// Moves `a1a2`, `a1a3`, ... ; `count` of them, all distinct.
    pub(crate) fn numbered_moves(count: usize) -> Vec<Move> {
        (0..count)
            .map(|i| Move::quiet(Square::from_index(i), Square::from_index(i + 8)))
            .collect()
    }

    pub(crate) fn with_eval_delay(mut self, delay: Duration) -> Self {
        self.eval_delay = delay;
        self
    }

    pub(crate) fn is_at_root(&self) -> bool {
        self.applied.is_empty()
    }
}

impl EngineCore for ScriptedEngine {
    type Undo = usize;

    fn reset(&mut self) {
        self.resets += 1;
        self.applied.clear();
    }

    fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        Err(FenError::TooFewParts {
            found: fen.split_whitespace().count(),
        })
    }

    fn side_to_move(&self) -> Color {
        Color::White
    }

    fn legal_moves(&mut self) -> Vec<Move> {
        if self.applied.is_empty() {
            self.moves.clone()
        } else {
            Vec::new()
        }
    }

    fn apply(&mut self, mv: Move) -> usize {
        self.applied.push(mv);
        self.applied.len()
    }

    fn revert(&mut self, mv: Move, undo: usize) {
        assert_eq!(undo, self.applied.len(), "revert out of order");
        assert_eq!(self.applied.pop(), Some(mv), "revert of a different move");
    }

    fn evaluate(&mut self, depth: u32) -> i32 {
        if !self.eval_delay.is_zero() {
            std::thread::sleep(self.eval_delay);
        }
        match self.applied.last() {
            Some(&mv) => {
                self.evaluations.push((mv, depth));
                -(self.score)(mv, depth)
            }
            None => 0,
        }
    }

    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        match sq.index() {
            4 => Some((Color::White, Piece::King)),
            60 => Some((Color::Black, Piece::King)),
            _ => None,
        }
    }
}
