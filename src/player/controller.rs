use crate::core::{Board, Color, Position};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// `None` means the player gave up (quit / resign).
    fn choose_move(&mut self, board: &Board, color: Color, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
}
