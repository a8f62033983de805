//! Make/unmake move tests.

use crate::board::{Board, Color, Move, Piece, Square};

fn sq(name: &str) -> Square {
    Square::parse(name).expect("valid square")
}

fn find_move(board: &mut Board, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    board
        .generate_moves()
        .into_iter()
        .find(|m| m.from() == sq(from) && m.to() == sq(to) && m.promotion() == promotion)
        .expect("Expected move not found")
}

fn assert_round_trip(fen: &str, from: &str, to: &str, promotion: Option<Piece>) -> Board {
    let mut board = Board::from_fen(fen);
    let original_fen = board.to_fen();
    let original_hash = board.hash();
    let mv = find_move(&mut board, from, to, promotion);

    let info = board.make_move(mv);
    assert_eq!(board.hash(), board.calculate_hash(), "incremental hash drifted");
    let after = board.clone();
    board.unmake_move(mv, info);

    assert_eq!(board.to_fen(), original_fen);
    assert_eq!(board.hash(), original_hash);
    after
}

#[test]
fn test_en_passant_make_unmake() {
    let after = assert_round_trip(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "e5",
        "f6",
        None,
    );
    assert_eq!(after.piece_at(sq("f5")), None);
    assert_eq!(after.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_promotion_make_unmake() {
    let after = assert_round_trip("8/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7", "a8", Some(Piece::Queen));
    assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    assert_eq!(after.piece_at(sq("a7")), None);
}

#[test]
fn test_promotion_capture_make_unmake() {
    let after = assert_round_trip("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7", "b8", Some(Piece::Knight));
    assert_eq!(after.piece_at(sq("b8")), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_castling_make_unmake() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let kingside = assert_round_trip(fen, "e1", "g1", None);
    assert_eq!(kingside.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(kingside.piece_at(sq("h1")), None);
    assert_eq!(kingside.castling_rights().to_string(), "kq");

    let queenside = assert_round_trip(fen, "e1", "c1", None);
    assert_eq!(queenside.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(queenside.piece_at(sq("a1")), None);
}

#[test]
fn test_rook_capture_clears_castling_right() {
    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1", "a8", None);
    assert_eq!(after.castling_rights().to_string(), "Kk");
}

#[test]
fn test_capture_restores_victim() {
    let mut board = Board::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let mv = find_move(&mut board, "e4", "d5", None);
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));
    board.unmake_move(mv, info);
    assert_eq!(board.piece_at(sq("d5")), Some((Color::Black, Piece::Queen)));
    assert_eq!(board.piece_at(sq("e4")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_every_move_round_trips_in_kiwipete() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let fen = board.to_fen();
    let hash = board.hash();
    for mv in board.generate_moves() {
        let info = board.make_move(mv);
        assert_eq!(board.hash(), board.calculate_hash(), "hash mismatch after {mv}");
        board.unmake_move(mv, info);
        assert_eq!(board.to_fen(), fen, "state mismatch after undoing {mv}");
        assert_eq!(board.hash(), hash);
    }
}

#[test]
fn test_fullmove_counter_advances_after_black() {
    let mut board = Board::new();
    let mv = find_move(&mut board, "e2", "e4", None);
    board.make_move(mv);
    let reply = find_move(&mut board, "e7", "e5", None);
    let info = board.make_move(reply);
    assert!(board.to_fen().ends_with(" 0 2"));
    board.unmake_move(reply, info);
    assert!(board.to_fen().ends_with(" 0 1"));
}
