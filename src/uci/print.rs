//! Protocol output.

use std::io::{self, Write};
use std::time::Duration;

use crate::board::{Color, Move, Square};
use crate::engine::EngineCore;

pub fn print_id<W: Write>(out: &mut W, name: &str, author: &str) -> io::Result<()> {
    writeln!(out, "id name {name}")?;
    writeln!(out, "id author {author}")?;
    writeln!(out, "uciok")
}

pub fn print_ready<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "readyok")
}

pub fn print_bestmove<W: Write>(out: &mut W, best_move: Option<Move>) -> io::Result<()> {
    match best_move {
        Some(mv) => writeln!(out, "bestmove {mv}"),
        None => writeln!(out, "bestmove (none)"),
    }
}

pub fn print_unknown<W: Write>(out: &mut W, verb: &str) -> io::Result<()> {
    writeln!(out, "Unknown command: {verb}")
}

pub fn print_perft_info<W: Write>(
    out: &mut W,
    depth: u32,
    nodes: u64,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(
        out,
        "info string perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    )
}

/// ASCII diagram, rank 8 at the top, White pieces in upper case.
pub fn print_board<E: EngineCore, W: Write>(out: &mut W, engine: &E) -> io::Result<()> {
    for rank in (0..8u8).rev() {
        write!(out, "{} ", rank + 1)?;
        for file in 0..8u8 {
            let c = Square::new(rank, file)
                .and_then(|sq| engine.piece_at(sq))
                .map_or('.', |(color, piece)| piece.to_fen_char(color));
            write!(out, " {c}")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "   a b c d e f g h")?;
    let side = match engine.side_to_move() {
        Color::White => "white",
        Color::Black => "black",
    };
    writeln!(out, "side to move: {side}")
}

pub fn print_moves<W: Write>(out: &mut W, moves: &[Move]) -> io::Result<()> {
    let text: Vec<String> = moves.iter().map(Move::to_string).collect();
    writeln!(out, "{}", text.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bestmove_lines() {
        let mv = Board::new().generate_moves()[0];
        assert_eq!(
            render(|o| print_bestmove(o, Some(mv))),
            format!("bestmove {mv}\n")
        );
        assert_eq!(render(|o| print_bestmove(o, None)), "bestmove (none)\n");
    }

    #[test]
    fn board_diagram_shows_start_position() {
        let text = render(|o| print_board(o, &Board::new()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[9], "side to move: white");
    }
}
