use crate::core::{Board, Color, Position};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::error;

/// キーボード操作の人間プレイヤー
pub struct TuiController {
    name: String,
    cursor: Position,
    /// Status line carried over from the previous turn (passes, flips...).
    pub notice: Option<String>,
    pub flipped: Vec<Position>,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cursor: Position::new(3, 3),
            notice: None,
            flipped: Vec::new(),
        }
    }

    /// Moves the cursor, wrapping around the board edges.
    fn move_cursor(&mut self, board: &Board, dx: i32, dy: i32) {
        let w = board.width as i32;
        let h = board.height as i32;
        let x = (self.cursor.x as i32 + dx).rem_euclid(w);
        let y = (self.cursor.y as i32 + dy).rem_euclid(h);
        self.cursor = Position::new(x as usize, y as usize);
    }

    fn read_key() -> std::io::Result<Option<KeyCode>> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Release {
                    return Ok(Some(code));
                }
            }
        }
        Ok(None)
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, color: Color, legal_moves: &[Position]) -> Option<Position> {
        let mut invalid = false;

        loop {
            let mut state = DisplayState::default();
            state.cursor = self.cursor;
            state.highlights = legal_moves.to_vec();
            state.flipped = self.flipped.clone();
            state.status_msg = Some(format!(
                "{}'s turn ({}) | X {} - O {}",
                self.name,
                color,
                board.count(Color::Black),
                board.count(Color::White)
            ));

            if let Err(e) = render_board(board, &state) {
                error!("render failed: {}", e);
                return None;
            }
            if let Some(notice) = &self.notice {
                print!("{}\r\n", notice);
            }
            if invalid {
                print!("Cannot place there.\r\n");
            }
            print!("[Arrows/hjkl]: Move | [Enter/Space]: Place | [q]: Quit\r\n");

            let code = match Self::read_key() {
                Ok(Some(code)) => code,
                Ok(None) => continue,
                Err(e) => {
                    error!("input failed: {}", e);
                    return None;
                }
            };

            match code {
                KeyCode::Char('q') => return None,
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(board, 0, -1),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(board, 0, 1),
                KeyCode::Left | KeyCode::Char('h') => self.move_cursor(board, -1, 0),
                KeyCode::Right | KeyCode::Char('l') => self.move_cursor(board, 1, 0),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if legal_moves.contains(&self.cursor) {
                        self.notice = None;
                        self.flipped.clear();
                        return Some(self.cursor);
                    }
                    invalid = true;
                    continue;
                }
                _ => {}
            }
            invalid = false;
        }
    }
}
