use super::types::{Cell, Color, Position};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: usize = 8;
pub const DEFAULT_HEIGHT: usize = 8;

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pub width: usize,
    pub height: usize,
    /// マス目 (row-major: index = y * width + x)
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        match raw.width.checked_mul(raw.height) {
            Some(n) if n == raw.cells.len() => Ok(Board {
                width: raw.width,
                height: raw.height,
                cells: raw.cells,
            }),
            _ => Err(format!(
                "board is {}x{} but has {} cells",
                raw.width,
                raw.height,
                raw.cells.len()
            )),
        }
    }
}

impl Board {
    /// 全マス空の盤面
    pub fn empty(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// 中央4マスに初期配置を置いた盤面
    pub fn new(width: usize, height: usize) -> Self {
        let mut board = Self::empty(width, height);
        board.place_opening();
        board
    }

    pub fn standard() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Bounds-checked lookup. `None` means off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        debug_assert!(self.in_bounds(pos), "set out of bounds: {}", pos);
        let idx = pos.y * self.width + pos.x;
        self.cells[idx] = cell;
    }

    /// 指定された色の石を数える
    pub fn count(&self, color: Color) -> usize {
        let target = Cell::from(color);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// 盤上がすべて埋まったかどうか
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// 初期配置に戻す
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Cell::Empty);
        self.place_opening();
    }

    /// All coordinates, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    fn place_opening(&mut self) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let cx = self.width / 2 - 1;
        let cy = self.height / 2 - 1;
        self.set(Position::new(cx, cy), Cell::White);
        self.set(Position::new(cx + 1, cy), Cell::Black);
        self.set(Position::new(cx, cy + 1), Cell::Black);
        self.set(Position::new(cx + 1, cy + 1), Cell::White);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
