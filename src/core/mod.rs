pub mod board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use r#move::Move;
pub use setup::board_from_strings;
pub use types::{Cell, Color, Position};
