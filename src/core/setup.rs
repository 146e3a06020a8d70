use crate::core::{Board, Cell, Position};

/// 文字列配列から盤面を作る
///
/// Each row is whitespace separated: `B` black, `W` white, anything else empty.
/// Row 0 is the top of the board.
pub fn board_from_strings(setup: &[&str]) -> Board {
    let height = setup.len();
    let width = if height > 0 {
        setup[0].split_whitespace().count()
    } else {
        0
    };
    let mut board = Board::empty(width, height);

    for (y, row) in setup.iter().enumerate() {
        for (x, s) in row.split_whitespace().enumerate().take(width) {
            let cell = match s {
                "B" | "b" | "X" | "x" => Cell::Black,
                "W" | "w" | "O" | "o" => Cell::White,
                _ => continue,
            };
            board.set(Position::new(x, y), cell);
        }
    }
    board
}

/// 盤面を文字列配列に戻す (ログ・デバッグ用)
pub fn board_to_strings(board: &Board) -> Vec<String> {
    (0..board.height)
        .map(|y| {
            (0..board.width)
                .map(|x| match board.get(Position::new(x, y)) {
                    Some(Cell::Black) => "B",
                    Some(Cell::White) => "W",
                    _ => ".",
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn get_standard_setup() -> Vec<&'static str> {
    vec![
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . W B . . .",
        ". . . B W . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]
}
