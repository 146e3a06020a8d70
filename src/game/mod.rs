//! Game session: one board, one turn controller, two actors.

pub mod record;
pub mod replay;
pub mod turn;

pub use record::GameRecord;
pub use replay::Replay;
pub use turn::{Outcome, Phase, TurnController};

use crate::core::{Board, Color, Move, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::MoveError;
use crate::logic::{apply_move, legal_moves};
use crate::player::ai::HeuristicAI;
use tracing::{debug, info};

/// Who decides a color's moves.
#[derive(Debug, Clone)]
pub enum Actor {
    /// Decisions arrive from outside the core (keyboard, another program...).
    Human,
    Heuristic(HeuristicAI),
}

impl Actor {
    pub fn is_heuristic(&self) -> bool {
        matches!(self, Actor::Heuristic(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Actor::Human => "Human",
            Actor::Heuristic(ai) => &ai.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub black: usize,
    pub white: usize,
}

/// Result of one accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub mv: Move,
    /// Stones turned over by the move, for the view to animate.
    pub flipped: Vec<Position>,
    /// Colors skipped because they had nowhere to play.
    pub passed: Vec<Color>,
    pub phase: Phase,
}

pub struct Session {
    board: Board,
    turn: TurnController,
    first: Color,
    black: Actor,
    white: Actor,
    record: GameRecord,
}

impl Session {
    pub fn new(width: usize, height: usize, first: Color, black: Actor, white: Actor) -> Self {
        Self::from_board(Board::new(width, height), first, black, white)
    }

    pub fn standard(first: Color, black: Actor, white: Actor) -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, first, black, white)
    }

    /// Starts from an arbitrary position. `first` is passed over immediately
    /// if it has no move.
    pub fn from_board(board: Board, first: Color, black: Actor, white: Actor) -> Self {
        let mut record = GameRecord::new(&board, first, black.name(), white.name());
        let mut turn = TurnController::new(first);
        turn.settle(&board);
        // 開始局面で既に終局していることもある
        record.outcome = turn.outcome();
        info!(width = board.width, height = board.height, %first, "new session");
        Session {
            board,
            turn,
            first,
            black,
            white,
            record,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase()
    }

    pub fn active_color(&self) -> Option<Color> {
        self.turn.active_color()
    }

    /// Only `Some` once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.turn.outcome()
    }

    pub fn counts(&self) -> Counts {
        Counts {
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
        }
    }

    pub fn actor(&self, color: Color) -> &Actor {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    fn actor_mut(&mut self, color: Color) -> &mut Actor {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.active_color()
            .map(|c| self.actor(c).is_heuristic())
            .unwrap_or(false)
    }

    /// 手番側の合法手
    pub fn legal_moves(&self) -> Vec<Position> {
        match self.active_color() {
            Some(color) => legal_moves(&self.board, color),
            None => Vec::new(),
        }
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Overrides the player labels stored in the game record.
    pub fn set_names(&mut self, black: &str, white: &str) {
        self.record.black_name = black.to_string();
        self.record.white_name = white.to_string();
    }

    /// 外部からの着手
    ///
    /// Rejected placements (`Err`) leave the session untouched.
    pub fn attempt_placement(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        let color = self.active_color().ok_or(MoveError::GameFinished)?;
        if self.actor(color).is_heuristic() {
            return Err(MoveError::NotHumanTurn { color });
        }
        self.place(pos, color)
    }

    /// Lets the heuristic actor on turn pick and play its move.
    ///
    /// # Panics
    ///
    /// If the game is over or the side to move is not heuristic. Callers
    /// should check [`Session::is_ai_turn`] first.
    pub fn request_ai_move(&mut self) -> TurnReport {
        let color = match self.active_color() {
            Some(color) => color,
            None => panic!("request_ai_move called on a finished game"),
        };

        let board = self.board.clone();
        let chosen = match self.actor_mut(color) {
            Actor::Heuristic(ai) => ai.select(&board, color),
            Actor::Human => panic!("request_ai_move called on {}'s human turn", color),
        };
        let pos = match chosen {
            Some(pos) => pos,
            None => panic!("{} is on turn with no legal move", color),
        };

        match self.place(pos, color) {
            Ok(report) => report,
            Err(e) => panic!("heuristic chose a rejected move: {}", e),
        }
    }

    fn place(&mut self, pos: Position, color: Color) -> Result<TurnReport, MoveError> {
        let flipped = apply_move(&mut self.board, pos, color)?;
        let mv = Move::new(pos, color);
        self.record.moves.push(mv);

        let passed = self.turn.advance(&self.board);
        let phase = self.turn.phase();
        if let Phase::Finished(outcome) = phase {
            self.record.outcome = Some(outcome);
        }
        debug!(%mv, ?phase, "turn complete");

        Ok(TurnReport {
            mv,
            flipped,
            passed,
            phase,
        })
    }

    /// 最初からやり直す (同じ盤サイズ・同じ手番・同じプレイヤー)
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = TurnController::new(self.first);
        self.turn.settle(&self.board);
        let (black, white) = (self.record.black_name.clone(), self.record.white_name.clone());
        self.record = GameRecord::new(&self.board, self.first, &black, &white);
        self.record.outcome = self.turn.outcome();
        info!("session reset");
    }
}
