use std::fs;

use chess_rules::{perft, Board, Position, Side};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Record {
    position: String,
    depth: u32,
    nodes: u64,
}

fn swap_sides(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '1' => '2',
            '2' => '1',
            ch => ch,
        })
        .collect()
}

fn load(name: &str, white: Side) -> Position {
    if name == "start" {
        return Position::new(white);
    }

    let text = fs::read_to_string(format!("tests/positions/{name}.txt")).expect("position file");
    let text = match white {
        Side::First => text,
        Side::Second => swap_sides(&text),
    };
    let board = Board::from_ascii(&text, white).expect("valid dump");
    let pos = Position::from_board(board, white, white);
    pos.validate().expect("legal position");
    pos
}

fn test_perft_file(path: &str, white: Side, node_limit: u64) {
    let mut reader = csv::Reader::from_path(path).expect("reader");

    for record in reader.deserialize() {
        let record: Record = record.expect("record");
        println!("{record:?}");

        if record.nodes <= node_limit {
            let pos = load(&record.position, white);
            assert_eq!(perft(&pos, record.depth), record.nodes);
        }
    }
}

// macro for generating tests
macro_rules! gen_tests {
    ($($fn_name:ident, $white:expr, $path:tt, $num:expr,)+) => {
        $(
            #[test]
            #[cfg_attr(miri, ignore)]
            fn $fn_name() {
                test_perft_file($path, $white, $num);
            }
        )+
    }
}

gen_tests! {
    test_first_plays_white,  Side::First,  "tests/perft.csv", 100_000,
    test_second_plays_white, Side::Second, "tests/perft.csv", 100_000,
}
