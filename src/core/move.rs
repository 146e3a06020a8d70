use super::types::{Color, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 着手 (座標と手番の色)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pos: Position,
    pub color: Color,
}

impl Move {
    pub fn new(pos: Position, color: Color) -> Self {
        Move { pos, color }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.color, self.pos)
    }
}
