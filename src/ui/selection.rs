use crate::core::Color;
use crate::ui::{clear_screen, wait_for_choice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human vs heuristic AI; the human plays `Color`.
    OnePlayer(Color),
    TwoPlayers,
    Watch,
    SelfPlay,
    Replay,
}

/// タイトル画面
pub fn select_mode() -> anyhow::Result<Option<Mode>> {
    clear_screen()?;
    print!("=== Reversi ===\r\n\r\n");
    print!("1. 1 Player (vs Computer)\r\n");
    print!("2. 2 Players\r\n");
    print!("3. Computer vs Computer\r\n");
    print!("4. Self-play batch\r\n");
    print!("5. Replay a record\r\n");
    print!("\r\n[q] Quit\r\n");

    let mode = match wait_for_choice(&['1', '2', '3', '4', '5'])? {
        Some('1') => match select_color()? {
            Some(color) => Mode::OnePlayer(color),
            None => return Ok(None),
        },
        Some('2') => Mode::TwoPlayers,
        Some('3') => Mode::Watch,
        Some('4') => Mode::SelfPlay,
        Some('5') => Mode::Replay,
        _ => return Ok(None),
    };
    Ok(Some(mode))
}

/// 色選択 (黒が先手)
pub fn select_color() -> anyhow::Result<Option<Color>> {
    clear_screen()?;
    print!("Choose your color:\r\n\r\n");
    print!("1. Black (X, moves first)\r\n");
    print!("2. White (O)\r\n");

    Ok(match wait_for_choice(&['1', '2'])? {
        Some('1') => Some(Color::Black),
        Some('2') => Some(Color::White),
        _ => None,
    })
}
