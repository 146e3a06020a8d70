use crate::core::{Board, Cell, Move, Position};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{self, stdout, Write};

pub struct DisplayState {
    pub cursor: Position,
    /// 置けるマス
    pub highlights: Vec<Position>,
    /// 直前に裏返った石
    pub flipped: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::new(3, 3),
            highlights: Vec::new(),
            flipped: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: true,
        }
    }
}

pub fn render_board(board: &Board, state: &DisplayState) -> io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Reversi ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("   ");
    for x in 0..board.width {
        print!(" {} ", (b'a' + x as u8) as char);
    }
    print!("\r\n");
    print!("  +{}+\r\n", "---".repeat(board.width));

    for y in 0..board.height {
        print!("{:2}|", y + 1);
        for x in 0..board.width {
            let pos = Position::new(x, y);
            let cell = board.get(pos).unwrap_or_default();

            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_last = state.last_move.map(|m| m.pos == pos).unwrap_or(false);
            let is_flipped = state.flipped.contains(&pos);
            let is_highlight = state.highlights.contains(&pos);

            let ch = match cell {
                Cell::Black => 'X',
                Cell::White => 'O',
                Cell::Empty if is_highlight => '*',
                Cell::Empty => '.',
            };
            let (prefix, suffix) = if is_cursor { ('[', ']') } else { (' ', ' ') };
            let text = format!("{}{}{}", prefix, ch, suffix);

            if is_cursor {
                print!("{}", text.yellow());
            } else if is_last {
                print!("{}", text.red());
            } else if is_flipped {
                print!("{}", text.magenta());
            } else if is_highlight {
                print!("{}", text.green());
            } else {
                match cell {
                    Cell::Black => print!("{}", text.cyan()),
                    Cell::White => print!("{}", text.white()),
                    Cell::Empty => print!("{}", text.dark_grey()),
                }
            }
        }
        print!("|\r\n");
    }
    print!("  +{}+\r\n", "---".repeat(board.width));

    out.flush()
}
