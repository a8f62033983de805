//! Property-based tests using proptest.

use crate::board::{Board, Move, UnmakeInfo, SCORE_MAX};
use crate::engine::{rank_moves, EngineCore};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_game(seed: u64, num_moves: usize) -> (Board, Vec<(Move, UnmakeInfo)>) {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let info = board.make_move(mv);
        played.push((mv, info));
    }
    (board, played)
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let initial = Board::new();
        let (mut board, mut played) = random_game(seed, num_moves);

        while let Some((mv, info)) = played.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.hash(), initial.hash());
        prop_assert_eq!(board.to_fen(), initial.to_fen());
    }

    /// Property: incremental hash always matches the recomputed hash
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            board.make_move(mv);
            prop_assert_eq!(board.hash(), board.calculate_hash());
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_game(seed, num_moves);
        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen);

        prop_assert!(restored.is_ok(), "FEN {} did not parse back", fen);
        let restored = restored.unwrap();
        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.hash(), board.hash());
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..10usize) {
        let (mut board, _) = random_game(seed, num_moves);
        let us = board.side_to_move();

        for mv in board.generate_moves() {
            let info = board.make_move(mv);
            let king = board.king_square(us);
            prop_assert!(king.is_some());
            prop_assert!(
                king.map_or(false, |k| !board.is_square_attacked(k, !us)),
                "Legal move left king in check: {:?}", mv
            );
            board.unmake_move(mv, info);
        }
    }

    /// Property: static evaluation stays far from the search bounds
    #[test]
    fn prop_eval_bounded(seed in seed_strategy(), num_moves in 0..30usize) {
        let (board, _) = random_game(seed, num_moves);
        let eval = board.evaluate_static();
        prop_assert!(eval.abs() < 10_000, "Evaluation {} is unreasonably large", eval);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: apply then revert leaves legal moves and evaluation unchanged
    #[test]
    fn prop_apply_revert_is_invisible(seed in seed_strategy(), num_moves in 0..12usize) {
        let (mut board, _) = random_game(seed, num_moves);
        let moves = board.legal_moves();
        let score = board.evaluate(1);

        for &mv in &moves {
            let undo = board.apply(mv);
            board.revert(mv, undo);
        }

        prop_assert_eq!(board.legal_moves(), moves);
        prop_assert_eq!(board.evaluate(1), score);
        prop_assert!(score.abs() <= SCORE_MAX);
    }

    /// Property: ranking twice gives the same order and never drops moves under the limit
    #[test]
    fn prop_ranking_is_stable(seed in seed_strategy(), num_moves in 0..12usize) {
        let (mut board, _) = random_game(seed, num_moves);
        let fen = board.to_fen();
        let moves = board.legal_moves();
        let limit = moves.len().max(1);

        let first = rank_moves(&mut board, &moves, limit, 1);
        let second = rank_moves(&mut board, &moves, limit, 1);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), moves.len());
        prop_assert_eq!(board.to_fen(), fen);
    }
}
