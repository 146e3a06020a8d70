//! One-ply heuristic opponent.
//!
//! Scores every legal placement with the static position table and picks
//! uniformly among the placements that share the best score.

use crate::core::{Board, Color, Position};
use crate::error::ConfigError;
use crate::logic::legal_moves;
use crate::player::ai::config::AIConfig;
use crate::player::ai::pst::PositionTable;
use crate::player::PlayerController;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HeuristicAI {
    pub name: String,
    table: PositionTable,
    rng: StdRng,
}

impl HeuristicAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            table: PositionTable::standard(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed + same boards => same choices.
    pub fn with_seed(name: &str, seed: u64) -> Self {
        Self {
            name: name.to_string(),
            table: PositionTable::standard(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(name: &str, config: &AIConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            name: name.to_string(),
            table: config.position_table()?,
            rng,
        })
    }

    pub fn table(&self) -> &PositionTable {
        &self.table
    }

    /// 最高評価の候補手 (同点はすべて)
    pub fn candidates(&self, moves: &[Position]) -> Vec<Position> {
        let best = match moves.iter().map(|&p| self.table.weight(p)).max() {
            Some(best) => best,
            None => return Vec::new(),
        };
        moves
            .iter()
            .copied()
            .filter(|&p| self.table.weight(p) == best)
            .collect()
    }

    /// Picks a move for `color`, or `None` if it has no legal placement.
    pub fn select(&mut self, board: &Board, color: Color) -> Option<Position> {
        let moves = legal_moves(board, color);
        self.select_from(&moves)
    }

    fn select_from(&mut self, moves: &[Position]) -> Option<Position> {
        let candidates = self.candidates(moves);
        let chosen = candidates.choose(&mut self.rng).copied();
        if let Some(pos) = chosen {
            debug!(
                ai = %self.name,
                %pos,
                weight = self.table.weight(pos),
                ties = candidates.len(),
                "heuristic choice"
            );
        }
        chosen
    }
}

impl PlayerController for HeuristicAI {
    fn choose_move(&mut self, _board: &Board, _color: Color, legal_moves: &[Position]) -> Option<Position> {
        self.select_from(legal_moves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board_from_strings;

    #[test]
    fn test_opening_choice_is_legal() {
        let board = Board::standard();
        let mut ai = HeuristicAI::with_seed("AI", 1);
        let pos = ai.select(&board, Color::Black).unwrap();
        assert!(legal_moves(&board, Color::Black).contains(&pos));
    }

    #[test]
    fn test_prefers_corner() {
        // 黒は (0,0) の角と (3,0) の辺に置ける
        let board = board_from_strings(&[
            ". W B W . . . .",
            "W . . . . . . .",
            "B . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ]);
        let moves = legal_moves(&board, Color::Black);
        assert!(moves.contains(&Position::new(0, 0)));
        assert!(moves.len() > 1);

        let mut ai = HeuristicAI::with_seed("AI", 99);
        for _ in 0..10 {
            assert_eq!(ai.select(&board, Color::Black), Some(Position::new(0, 0)));
        }
    }

    #[test]
    fn test_choice_is_in_tie_set() {
        // 初期局面の黒の4手はすべて重み 3 で同点
        let board = Board::standard();
        let moves = legal_moves(&board, Color::Black);
        let ai = HeuristicAI::new("AI");
        let ties = ai.candidates(&moves);
        assert_eq!(ties.len(), 4);

        let mut ai = HeuristicAI::new("AI");
        for _ in 0..20 {
            let pos = ai.select(&board, Color::Black).unwrap();
            assert!(ties.contains(&pos));
            let best = moves.iter().map(|&p| ai.table().weight(p)).max().unwrap();
            assert_eq!(ai.table().weight(pos), best);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let board = Board::standard();
        let mut a = HeuristicAI::with_seed("A", 2024);
        let mut b = HeuristicAI::with_seed("B", 2024);
        for _ in 0..10 {
            assert_eq!(a.select(&board, Color::White), b.select(&board, Color::White));
        }
    }

    #[test]
    fn test_no_moves_gives_none() {
        let board = board_from_strings(&["B B", "B ."]);
        let mut ai = HeuristicAI::new("AI");
        assert_eq!(ai.select(&board, Color::White), None);
        assert!(ai.candidates(&[]).is_empty());
    }

    #[test]
    fn test_from_config_uses_table() {
        let mut weights = vec![vec![0; 8]; 8];
        weights[5][4] = 50; // (4,5)
        let config = AIConfig {
            weights,
            seed: Some(3),
            ..AIConfig::default()
        };
        let mut ai = HeuristicAI::from_config("AI", &config).unwrap();
        assert_eq!(ai.select(&Board::standard(), Color::Black), Some(Position::new(4, 5)));
    }
}
