use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, terminal,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub mod selection;

pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

/// Blocks until one of `keys` (or `q`/Esc) is pressed. `q`/Esc give `None`.
pub fn wait_for_choice(keys: &[char]) -> io::Result<Option<char>> {
    io::stdout().flush()?;
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Char(c) if keys.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

pub fn wait_for_any_key() -> io::Result<()> {
    io::stdout().flush()?;
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}

/// Sleeps for the whole of `delay`, returning `true` early only if `q` is
/// pressed. Other keys are swallowed.
pub fn pause_or_quit(delay: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if event::poll(remaining)? {
            if let Event::Key(key) = event::read()? {
                if is_quit_press(&key) {
                    return Ok(true);
                }
            }
        }
    }
}

fn is_quit_press(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release && key.code == KeyCode::Char('q')
}

/// Lets the user pick one record out of every file found in `dirs`.
pub fn select_record_file(dirs: &[&str]) -> anyhow::Result<Option<PathBuf>> {
    let files = crate::game::record::list_records(dirs);

    if files.is_empty() {
        clear_screen()?;
        print!("No records found in {}/\r\n", dirs.join("/, "));
        print!("Press any key to return.\r\n");
        wait_for_any_key()?;
        return Ok(None);
    }

    let mut selected = 0usize;
    loop {
        clear_screen()?;
        print!("=== Select a record ===\r\n\r\n");
        for (i, path) in files.iter().enumerate().take(20) {
            let name = path.display();
            if i == selected {
                print!("> {}\r\n", name);
            } else {
                print!("  {}\r\n", name);
            }
        }
        print!("\r\n[↑/↓] Select | [Enter] Open | [q] Back\r\n");
        io::stdout().flush()?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Up if selected > 0 => selected -= 1,
                    KeyCode::Down if selected + 1 < files.len().min(20) => selected += 1,
                    KeyCode::Enter => return Ok(Some(files[selected].clone())),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_only_q_press_ends_pause() {
        assert!(is_quit_press(&key(KeyCode::Char('q'), KeyEventKind::Press)));
        assert!(is_quit_press(&key(KeyCode::Char('q'), KeyEventKind::Repeat)));
        assert!(!is_quit_press(&key(KeyCode::Char('q'), KeyEventKind::Release)));
        assert!(!is_quit_press(&key(KeyCode::Enter, KeyEventKind::Press)));
        assert!(!is_quit_press(&key(KeyCode::Char('x'), KeyEventKind::Press)));
    }

    #[test]
    fn test_zero_pause_returns_immediately() {
        // poll は呼ばれない
        assert!(!pause_or_quit(Duration::ZERO).unwrap());
    }
}
