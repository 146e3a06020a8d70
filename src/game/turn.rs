use crate::core::{Board, Color};
use crate::logic::has_any_legal_move;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    /// 石数で勝敗を決める
    pub fn from_counts(black: usize, white: usize) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::BlackWins,
            std::cmp::Ordering::Less => Outcome::WhiteWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn from_board(board: &Board) -> Self {
        Self::from_counts(board.count(Color::Black), board.count(Color::White))
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::BlackWins => Some(Color::Black),
            Outcome::WhiteWins => Some(Color::White),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::BlackWins => write!(f, "Black wins"),
            Outcome::WhiteWins => write!(f, "White wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing(Color),
    Finished(Outcome),
}

/// 手番と終局の管理
///
/// `Finished` is absorbing: the only way back to `Playing` is a new controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    phase: Phase,
}

impl TurnController {
    pub fn new(first: Color) -> Self {
        TurnController {
            phase: Phase::Playing(first),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_color(&self) -> Option<Color> {
        match self.phase {
            Phase::Playing(color) => Some(color),
            Phase::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::Playing(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Called after every applied move: hands the turn to the opponent,
    /// skipping it if blocked, or ends the game. Returns the colors that
    /// were passed over.
    pub fn advance(&mut self, board: &Board) -> Vec<Color> {
        if let Phase::Playing(color) = self.phase {
            self.phase = Phase::Playing(color.opponent());
        }
        self.settle(board)
    }

    /// Re-checks the current position without switching sides first.
    pub fn settle(&mut self, board: &Board) -> Vec<Color> {
        let mut passed = Vec::new();
        let active = match self.phase {
            Phase::Playing(color) => color,
            Phase::Finished(_) => return passed,
        };

        if Self::is_terminal(board) {
            self.finish(board);
            return passed;
        }

        if has_any_legal_move(board, active) {
            return passed;
        }

        // パス
        let other = active.opponent();
        if has_any_legal_move(board, other) {
            info!(color = %active, "no legal move, passing");
            passed.push(active);
            self.phase = Phase::Playing(other);
        } else {
            // 両者とも置けない
            self.finish(board);
        }
        passed
    }

    fn is_terminal(board: &Board) -> bool {
        board.count(Color::Black) == 0 || board.count(Color::White) == 0 || board.is_full()
    }

    fn finish(&mut self, board: &Board) {
        let outcome = Outcome::from_board(board);
        info!(
            black = board.count(Color::Black),
            white = board.count(Color::White),
            %outcome,
            "game finished"
        );
        self.phase = Phase::Finished(outcome);
    }
}
