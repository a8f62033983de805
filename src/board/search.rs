//! Fixed-depth alpha-beta search used as the engine's evaluation primitive.
//!
//! - Negamax alpha-beta with fail-hard cutoffs
//! - Quiescence search over captures and promotions
//! - MVV-LVA ordering
//! - Mate scores adjusted by ply, draws by the fifty-move rule and repetition

use super::{Board, Move, Piece};

/// Score of being mated at the root. Mate in `n` plies scores `MATE_SCORE - n`.
pub const MATE_SCORE: i32 = 30_000;
/// Scores at or beyond this magnitude are forced mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;
/// Bound of the search window; no score reaches it.
pub const SCORE_MAX: i32 = 32_000;
/// Hard ply limit for quiescence recursion.
pub const MAX_PLY: usize = 64;

/// MVV-LVA key: most valuable victim first, cheapest attacker breaking ties.
fn order_key(board: &Board, mv: Move) -> i32 {
    let victim = if mv.is_en_passant() {
        Piece::Pawn.value()
    } else {
        board.piece_at(mv.to()).map_or(0, |(_, p)| p.value())
    };
    let attacker = board
        .piece_at(mv.from())
        .map_or(0, |(_, p)| p.index() as i32);
    let promotion = mv.promotion().map_or(0, Piece::value);
    if mv.is_capture() || mv.is_promotion() {
        10_000 + victim * 10 + promotion - attacker
    } else {
        0
    }
}

fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| -order_key(board, mv));
}

impl Board {
    /// Score of the current position searched `depth` plies deep, from the side to
    /// move's point of view. Depth 0 is a quiescence search.
    pub fn search(&mut self, depth: u32) -> i32 {
        self.alpha_beta(-SCORE_MAX, SCORE_MAX, depth, 0)
    }

    /// Best move and its score at `depth`, or `None` when there is no legal move.
    #[cfg(test)]
    pub(crate) fn best_move(&mut self, depth: u32) -> Option<(Move, i32)> {
        let mut moves = self.generate_moves();
        order_moves(self, &mut moves);

        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -SCORE_MAX;
        for mv in moves {
            let info = self.make_move(mv);
            let score = -self.alpha_beta(-SCORE_MAX, -alpha, depth.saturating_sub(1), 1);
            self.unmake_move(mv, info);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }
        }
        best
    }

    fn alpha_beta(&mut self, mut alpha: i32, beta: i32, depth: u32, ply: usize) -> i32 {
        if ply > 0 && self.is_draw() {
            return 0;
        }
        if depth == 0 || ply >= MAX_PLY {
            return self.quiescence(alpha, beta, ply);
        }

        let mut moves = self.generate_moves();
        if moves.is_empty() {
            return if self.in_check() {
                -MATE_SCORE + ply as i32
            } else {
                0
            };
        }
        order_moves(self, &mut moves);

        for mv in moves {
            let info = self.make_move(mv);
            let score = -self.alpha_beta(-beta, -alpha, depth - 1, ply + 1);
            self.unmake_move(mv, info);
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    fn quiescence(&mut self, mut alpha: i32, beta: i32, ply: usize) -> i32 {
        let stand_pat = self.evaluate_static();
        if ply >= MAX_PLY || stand_pat >= beta {
            return stand_pat.min(beta);
        }
        alpha = alpha.max(stand_pat);

        let mut moves: Vec<Move> = self
            .generate_moves()
            .into_iter()
            .filter(|mv| mv.is_capture() || mv.is_promotion())
            .collect();
        order_moves(self, &mut moves);

        for mv in moves {
            let info = self.make_move(mv);
            let score = -self.quiescence(-beta, -alpha, ply + 1);
            self.unmake_move(mv, info);
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}
