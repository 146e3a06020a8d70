use crossterm::{execute, terminal};
use reversi_aho_ai::core::Color;
use reversi_aho_ai::display::{render_board, DisplayState};
use reversi_aho_ai::game::record::KIFU_DIR;
use reversi_aho_ai::game::{Actor, Replay, Session, TurnReport};
use reversi_aho_ai::player::ai::{AIConfig, HeuristicAI};
use reversi_aho_ai::player::{PlayerController, TuiController};
use reversi_aho_ai::selfplay::{run_selfplay, OpponentKind, SelfPlayConfig, SELFPLAY_KIFU_DIR};
use reversi_aho_ai::ui::{self, selection::{select_mode, Mode}};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

const LOG_FILE: &str = "reversi_aho_ai.log";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

/// Logs go to a file so they don't tear the board drawing.
fn init_logging() -> anyhow::Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let config = AIConfig::load_or_default();
    info!(seed = ?config.seed, think_delay_ms = config.think_delay_ms, "config loaded");

    // 終局後はタイトルに戻る
    while let Some(mode) = select_mode()? {
        match mode {
            Mode::OnePlayer(human) => {
                let ai = Actor::Heuristic(HeuristicAI::from_config("Computer", &config)?);
                let (black, white) = match human {
                    Color::Black => (Actor::Human, ai),
                    Color::White => (ai, Actor::Human),
                };
                run_match(black, white, &config)?;
            }
            Mode::TwoPlayers => run_match(Actor::Human, Actor::Human, &config)?,
            Mode::Watch => {
                let black = Actor::Heuristic(HeuristicAI::from_config("Computer-X", &config)?);
                let mut white_config = config.clone();
                white_config.seed = config.seed.map(|s| s.wrapping_add(1));
                let white = Actor::Heuristic(HeuristicAI::from_config("Computer-O", &white_config)?);
                run_match(black, white, &config)?;
            }
            Mode::SelfPlay => run_selfplay_batch(&config)?,
            Mode::Replay => {
                if let Some(path) = ui::select_record_file(&[KIFU_DIR, SELFPLAY_KIFU_DIR])? {
                    Replay::from_path(&path)?.run()?;
                }
            }
        }
    }
    Ok(())
}

fn pass_notice(report: &TurnReport) -> Option<String> {
    if report.passed.is_empty() {
        return None;
    }
    let names: Vec<String> = report.passed.iter().map(|c| c.to_string()).collect();
    Some(format!("{} has no legal move and passes.", names.join(", ")))
}

fn run_match(black: Actor, white: Actor, config: &AIConfig) -> anyhow::Result<()> {
    let mut session = Session::standard(Color::Black, black, white);
    let mut humans: [Option<TuiController>; 2] = [None, None];
    for (idx, color) in [Color::Black, Color::White].into_iter().enumerate() {
        if !session.actor(color).is_heuristic() {
            humans[idx] = Some(TuiController::new(&color.to_string()));
        }
    }
    let delay = Duration::from_millis(config.think_delay_ms);
    let mut last: Option<TurnReport> = None;

    while let Some(color) = session.active_color() {
        let notice = last.as_ref().and_then(pass_notice);
        let flipped = last.as_ref().map(|r| r.flipped.clone()).unwrap_or_default();

        let report = if session.is_ai_turn() {
            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = last.as_ref().map(|r| r.mv);
            state.flipped = flipped;
            state.status_msg = Some(format!(
                "{} ({}) is thinking...",
                session.actor(color).name(),
                color
            ));
            render_board(session.board(), &state)?;
            if let Some(notice) = &notice {
                print!("{}\r\n", notice);
            }
            print!("[q]: Quit\r\n");

            // 思考ウェイト中に終了判定
            if ui::pause_or_quit(delay)? {
                return Ok(());
            }
            session.request_ai_move()
        } else {
            let idx = match color {
                Color::Black => 0,
                Color::White => 1,
            };
            let legal = session.legal_moves();
            let controller = humans[idx]
                .as_mut()
                .ok_or_else(|| anyhow::anyhow!("no input controller for {}", color))?;
            controller.notice = notice;
            controller.flipped = flipped;

            let pos = match controller.choose_move(session.board(), color, &legal) {
                Some(pos) => pos,
                None => {
                    info!(%color, "player quit");
                    return Ok(());
                }
            };
            match session.attempt_placement(pos) {
                Ok(report) => report,
                Err(e) => {
                    warn!("placement rejected: {}", e);
                    continue;
                }
            }
        };
        last = Some(report);
    }

    let counts = session.counts();
    let mut state = DisplayState::default();
    state.show_cursor = false;
    state.last_move = last.as_ref().map(|r| r.mv);
    state.status_msg = Some(match session.outcome() {
        Some(outcome) => format!("{}! X {} - O {}", outcome, counts.black, counts.white),
        None => "Game over".to_string(),
    });
    render_board(session.board(), &state)?;

    match session.record().save(KIFU_DIR) {
        Ok(path) => print!("Record saved to {}\r\n", path.display()),
        Err(e) => warn!("failed to save record: {}", e),
    }
    print!("Press any key to return to the title.\r\n");
    ui::wait_for_any_key()?;
    Ok(())
}

fn run_selfplay_batch(config: &AIConfig) -> anyhow::Result<()> {
    ui::clear_screen()?;
    print!("=== Self-Play ===\r\n\r\n");
    print!(
        "Running {} games: Heuristic (X) vs Random (O)...\r\n",
        config.selfplay_games
    );

    let sp_config = SelfPlayConfig {
        num_games: config.selfplay_games,
        black: OpponentKind::Heuristic,
        white: OpponentKind::Random,
        seed: config.seed,
        ai_config: config.clone(),
        save_kifus: true,
    };
    let stats = run_selfplay(&sp_config)?;

    print!("\r\n--- Results ---\r\n");
    print!(
        "{} (X) wins: {} ({:.1}%)\r\n",
        stats.black_player,
        stats.black_wins,
        stats.win_rate(Color::Black) * 100.0
    );
    print!(
        "{} (O) wins: {} ({:.1}%)\r\n",
        stats.white_player,
        stats.white_wins,
        stats.win_rate(Color::White) * 100.0
    );
    print!("Draws: {}\r\n", stats.draws);
    print!("Avg Moves: {:.1}\r\n", stats.avg_moves);
    print!("Avg Time: {:.1}ms\r\n", stats.avg_time_ms);
    print!("Records saved under {}/\r\n\r\n", SELFPLAY_KIFU_DIR);
    print!("Press any key to return to the title.\r\n");
    ui::wait_for_any_key()?;
    Ok(())
}
