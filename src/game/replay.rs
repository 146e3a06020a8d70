use crate::core::{Board, Move};
use crate::display::{render_board, DisplayState};
use crate::game::record::GameRecord;
use crate::logic::apply_move;
use crossterm::event::{self, Event, KeyCode};
use std::time::Duration;

/// 棋譜再生
pub struct Replay {
    record: GameRecord,
    /// boards[i] = position after i moves
    boards: Vec<Board>,
    current_index: usize,
}

impl Replay {
    /// Recomputes every position of the record. Fails if a stored move is
    /// not legal where it was played.
    pub fn from_record(record: GameRecord) -> anyhow::Result<Self> {
        let mut board = record.initial.clone();
        let mut boards = vec![board.clone()];

        for (i, mv) in record.moves.iter().enumerate() {
            apply_move(&mut board, mv.pos, mv.color)
                .map_err(|e| anyhow::anyhow!("corrupt record at move {}: {}", i + 1, e))?;
            boards.push(board.clone());
        }

        Ok(Self {
            record,
            boards,
            current_index: 0,
        })
    }

    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        Self::from_record(GameRecord::load(path)?)
    }

    pub fn len(&self) -> usize {
        self.record.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.moves.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_board(&self) -> &Board {
        &self.boards[self.current_index]
    }

    pub fn final_board(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    pub fn last_move(&self) -> Option<Move> {
        if self.current_index > 0 {
            Some(self.record.moves[self.current_index - 1])
        } else {
            None
        }
    }

    pub fn forward(&mut self) {
        if self.current_index < self.len() {
            self.current_index += 1;
        }
    }

    pub fn back(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = self.last_move();
            state.status_msg = Some(format!(
                "Replay: {} (Black) vs {} (White)",
                self.record.black_name, self.record.white_name
            ));
            render_board(self.current_board(), &state)?;

            if let Some(outcome) = self.record.outcome {
                print!("Result: {}\r\n", outcome);
            }
            print!(
                "Move {}/{} | [←/→] Navigate | [q] Quit\r\n",
                self.current_index,
                self.len()
            );

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Right | KeyCode::Char('n') => self.forward(),
                        KeyCode::Left | KeyCode::Char('p') => self.back(),
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}
