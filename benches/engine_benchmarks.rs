//! Benchmarks for the engine core and the search orchestration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_frontend::board::Board;
use chess_frontend::engine::{rank_moves, search, EngineCore, SearchBudget, SearchConfig};
use chess_frontend::perft::perft;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut board, black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut kiwipete, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let mut board = Board::from_fen(fen);
        group.bench_function(name, |b| b.iter(|| black_box(board.generate_moves())));
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_moves");

    for depth in [1, 2] {
        let mut board = Board::from_fen(MIDDLEGAME);
        let moves = board.legal_moves();
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| rank_moves(&mut board, black_box(&moves), 8, depth))
        });
    }

    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver");
    group.sample_size(10);

    for max_depth in [2, 3] {
        let config = SearchConfig::default().with_max_depth(max_depth);
        group.bench_with_input(
            BenchmarkId::new("middlegame", max_depth),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut board = Board::from_fen(MIDDLEGAME);
                    search(&mut board, &SearchBudget::start(60_000), config)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_ranking,
    bench_driver
);
criterion_main!(benches);
