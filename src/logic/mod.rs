use crate::core::{Board, Cell, Color, Position};
use crate::error::MoveError;
use tracing::debug;

/// 8方向 (自分自身 (0,0) を除く)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Walks from `from` (exclusive) in one direction over opponent stones.
/// Returns the walked stones only if the run is closed by a `color` stone.
fn bounded_run(board: &Board, from: Position, dx: i32, dy: i32, color: Color) -> Vec<Position> {
    let own = Cell::from(color);
    let theirs = Cell::from(color.opponent());
    let mut run = Vec::new();
    let mut curr = from;

    while let Some(next) = curr.offset(dx, dy) {
        match board.get(next) {
            Some(cell) if cell == theirs => {
                run.push(next);
                curr = next;
            }
            Some(cell) if cell == own => return run,
            // 空きマスか盤外
            _ => break,
        }
    }
    Vec::new()
}

/// 指定されたマス目に石が置けるか判定
pub fn is_legal(board: &Board, pos: Position, color: Color) -> bool {
    if board.get(pos) != Some(Cell::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| !bounded_run(board, pos, dx, dy, color).is_empty())
}

/// 石を置けるマスが1つでもあるか
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.positions().any(|pos| is_legal(board, pos, color))
}

/// 合法手一覧 (row-major order)
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    board
        .positions()
        .filter(|&pos| is_legal(board, pos, color))
        .collect()
}

/// 裏返る石の一覧
///
/// Only meaningful for a legal placement; for anything else the result is
/// empty and should not be relied on.
pub fn resolve_flips(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    if board.get(pos) != Some(Cell::Empty) {
        return Vec::new();
    }
    DIRECTIONS
        .iter()
        .flat_map(|&(dx, dy)| bounded_run(board, pos, dx, dy, color))
        .collect()
}

/// 着手適用
///
/// Places `color` at `pos` and flips every captured stone in place.
/// Rejected moves leave the board untouched.
pub fn apply_move(board: &mut Board, pos: Position, color: Color) -> Result<Vec<Position>, MoveError> {
    if !board.in_bounds(pos) {
        return Err(MoveError::InvalidCoordinate { pos });
    }

    let flipped = resolve_flips(board, pos, color);
    if flipped.is_empty() {
        return Err(MoveError::IllegalMove { pos, color });
    }

    let cell = Cell::from(color);
    board.set(pos, cell);
    for &p in &flipped {
        board.set(p, cell);
    }

    debug!(%pos, %color, flipped = flipped.len(), "move applied");
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board_from_strings;

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::standard();
        assert!(!is_legal(&board, Position::new(3, 3), Color::Black));
        assert!(!is_legal(&board, Position::new(4, 3), Color::White));
    }

    #[test]
    fn test_out_of_bounds_fails_closed() {
        let board = Board::standard();
        assert!(!is_legal(&board, Position::new(8, 3), Color::Black));
        assert!(!is_legal(&board, Position::new(2, 100), Color::White));
    }

    #[test]
    fn test_adjacent_own_color_does_not_qualify() {
        // 隣が自分の色だけでは置けない
        let board = board_from_strings(&[". B B", ". . .", ". . ."]);
        assert!(!is_legal(&board, Position::new(0, 0), Color::Black));
    }

    #[test]
    fn test_run_ending_at_boundary_does_not_qualify() {
        let board = board_from_strings(&[". W W W"]);
        assert!(!is_legal(&board, Position::new(0, 0), Color::Black));
        assert!(resolve_flips(&board, Position::new(0, 0), Color::Black).is_empty());
    }

    #[test]
    fn test_run_ending_at_empty_does_not_qualify() {
        let board = board_from_strings(&[". W W . B"]);
        assert!(!is_legal(&board, Position::new(0, 0), Color::Black));
    }

    #[test]
    fn test_multiple_directions_flip_independently() {
        let board = board_from_strings(&[
            "B . B . .",
            ". W W . .",
            "B W . . .",
            ". . . . .",
            ". . . . .",
        ]);
        // (2,2) から: 上 (2,1), 左 (1,2), 左上 (1,1)
        let mut flips = resolve_flips(&board, Position::new(2, 2), Color::Black);
        flips.sort_by_key(|p| (p.y, p.x));
        assert_eq!(
            flips,
            vec![Position::new(1, 1), Position::new(2, 1), Position::new(1, 2)]
        );
    }

    #[test]
    fn test_apply_move_rejects_without_mutation() {
        let mut board = Board::standard();
        let before = board.clone();
        assert_eq!(
            apply_move(&mut board, Position::new(0, 0), Color::Black),
            Err(MoveError::IllegalMove {
                pos: Position::new(0, 0),
                color: Color::Black
            })
        );
        assert_eq!(
            apply_move(&mut board, Position::new(8, 8), Color::Black),
            Err(MoveError::InvalidCoordinate {
                pos: Position::new(8, 8)
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_flips_and_places() {
        let mut board = Board::standard();
        let flipped = apply_move(&mut board, Position::new(2, 3), Color::Black).unwrap();
        assert_eq!(flipped, vec![Position::new(3, 3)]);
        assert_eq!(board.get(Position::new(2, 3)), Some(Cell::Black));
        assert_eq!(board.get(Position::new(3, 3)), Some(Cell::Black));
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn test_has_any_legal_move() {
        assert!(has_any_legal_move(&Board::standard(), Color::White));
        let board = board_from_strings(&["B B", "B ."]);
        assert!(!has_any_legal_move(&board, Color::White));
        assert!(!has_any_legal_move(&board, Color::Black));
    }
}
