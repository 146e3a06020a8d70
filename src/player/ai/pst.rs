use crate::core::Position;
use crate::error::ConfigError;

// Position score table for an 8x8 board.
// Row index = y (0 is top), column index = x.
// Corners are worth the most, the X/C squares next to them are traps,
// edges beat the ring just inside them.
pub const DEFAULT_WEIGHTS: [[i32; 8]; 8] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// 盤面サイズ分の重みテーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTable {
    width: usize,
    height: usize,
    weights: Vec<i32>,
}

impl PositionTable {
    pub fn standard() -> Self {
        PositionTable {
            width: 8,
            height: 8,
            weights: DEFAULT_WEIGHTS.iter().flatten().copied().collect(),
        }
    }

    /// Builds a table from rows (row 0 = top). Every row must have the same length.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ConfigError::Validation(
                "weight table must not be empty".to_string(),
            ));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ConfigError::Validation(format!(
                "weight row {} has {} columns, expected {}",
                y,
                row.len(),
                width
            )));
        }

        Ok(PositionTable {
            width,
            height,
            weights: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells outside the table score 0.
    pub fn weight(&self, pos: Position) -> i32 {
        if pos.x >= self.width || pos.y >= self.height {
            return 0;
        }
        self.weights[pos.y * self.width + pos.x]
    }
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_best() {
        let table = PositionTable::standard();
        let corner = table.weight(Position::new(0, 0));
        for y in 0..8 {
            for x in 0..8 {
                assert!(table.weight(Position::new(x, y)) <= corner);
            }
        }
        assert_eq!(table.weight(Position::new(7, 7)), 120);
        assert_eq!(table.weight(Position::new(1, 1)), -40);
    }

    #[test]
    fn test_table_is_symmetric() {
        let table = PositionTable::standard();
        for y in 0..8 {
            for x in 0..8 {
                let w = table.weight(Position::new(x, y));
                assert_eq!(w, table.weight(Position::new(y, x)));
                assert_eq!(w, table.weight(Position::new(7 - x, y)));
                assert_eq!(w, table.weight(Position::new(x, 7 - y)));
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            PositionTable::from_rows(&rows),
            Err(ConfigError::Validation(_))
        ));
        assert!(PositionTable::from_rows(&[]).is_err());
    }

    #[test]
    fn test_weight_off_table_is_zero() {
        let table = PositionTable::from_rows(&[vec![7, 8]]).unwrap();
        assert_eq!(table.weight(Position::new(1, 0)), 8);
        assert_eq!(table.weight(Position::new(2, 0)), 0);
        assert_eq!(table.weight(Position::new(0, 1)), 0);
    }
}
