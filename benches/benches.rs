use std::hint::black_box;

use chess_rules::{perft, Board, Game, Move, Position, Side, Square};
use criterion::{criterion_group, criterion_main, Criterion};

fn position(dump: &str, turn: Side) -> Position {
    let board = Board::from_ascii(dump, Side::First).expect("valid dump");
    Position::from_board(board, turn, Side::First)
}

fn bench_shallow_perft(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft 3", |b| {
        b.iter(|| assert_eq!(perft(black_box(&pos), 3), 8_902))
    });
}

fn bench_kiwipete(c: &mut Criterion) {
    let pos = position(include_str!("../tests/positions/kiwipete.txt"), Side::First);
    c.bench_function("kiwipete perft 2", |b| {
        b.iter(|| assert_eq!(perft(black_box(&pos), 2), 2_039))
    });
}

fn bench_generate_moves(c: &mut Criterion) {
    let pos = position(include_str!("../tests/positions/middlegame.txt"), Side::Second);
    c.bench_function("legal moves", |b| {
        b.iter(|| assert_eq!(black_box(&pos).legal_moves().len(), 39))
    });
}

fn bench_play_game(c: &mut Criterion) {
    let moves = [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::G1, Square::F3),
        (Square::B8, Square::C6),
        (Square::F1, Square::C4),
        (Square::G8, Square::F6),
        (Square::E1, Square::G1),
    ];
    c.bench_function("play opening", |b| {
        b.iter(|| {
            let mut game = Game::default();
            for (start, end) in moves {
                game.make_move(Move::from_squares(start, end), None)
                    .expect("legal move");
            }
            black_box(game)
        })
    });
}

criterion_group!(
    benches,
    bench_shallow_perft,
    bench_kiwipete,
    bench_generate_moves,
    bench_play_game
);
criterion_main!(benches);
