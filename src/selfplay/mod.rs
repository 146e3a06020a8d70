//! AI vs AI batches. Each game is an independent session, so games run in
//! parallel on the rayon pool.

use crate::core::{Color, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::game::{Actor, GameRecord, Outcome, Session};
use crate::player::ai::{AIConfig, HeuristicAI, RandomAI};
use crate::player::PlayerController;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

pub const SELFPLAY_KIFU_DIR: &str = "selfplay_kifu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Heuristic,
    Random,
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub black: OpponentKind,
    pub white: OpponentKind,
    /// Game i uses seed + i. `None` = entropy.
    pub seed: Option<u64>,
    pub ai_config: AIConfig,
    pub save_kifus: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            black: OpponentKind::Heuristic,
            white: OpponentKind::Random,
            seed: None,
            ai_config: AIConfig::default(),
            save_kifus: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub moves: usize,
    pub black_discs: usize,
    pub white_discs: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub black_player: String,
    pub white_player: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome {
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn win_rate(&self, color: Color) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let wins = match color {
            Color::Black => self.black_wins,
            Color::White => self.white_wins,
        };
        wins as f64 / self.total_games as f64
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let played: Vec<(GameRecord, GameResult)> = (0..config.num_games)
        .into_par_iter()
        .map(|i| play_game(config, config.seed.map(|s| s.wrapping_add(i as u64))))
        .collect::<anyhow::Result<_>>()?;

    let mut stats = SelfPlayStats::new();
    stats.black_player = format!("{:?}", config.black);
    stats.white_player = format!("{:?}", config.white);

    for (i, (record, result)) in played.into_iter().enumerate() {
        if config.save_kifus {
            record.save_as(SELFPLAY_KIFU_DIR, &format!("game_{:04}", i + 1))?;
        }
        stats.add_result(result);
    }

    info!(
        games = stats.total_games,
        black_wins = stats.black_wins,
        white_wins = stats.white_wins,
        draws = stats.draws,
        "self-play finished"
    );
    Ok(stats)
}

fn heuristic(name: &str, config: &AIConfig, seed: Option<u64>) -> anyhow::Result<HeuristicAI> {
    let mut config = config.clone();
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(HeuristicAI::from_config(name, &config)?)
}

fn random(name: &str, seed: Option<u64>) -> RandomAI {
    match seed {
        Some(seed) => RandomAI::with_seed(name, seed),
        None => RandomAI::new(name),
    }
}

/// Plays one full game. Heuristic sides go through `request_ai_move`,
/// random sides through `attempt_placement` like any outside player.
pub fn play_game(config: &SelfPlayConfig, seed: Option<u64>) -> anyhow::Result<(GameRecord, GameResult)> {
    let start_time = Instant::now();
    let white_seed = seed.map(|s| s.wrapping_mul(31).wrapping_add(17));

    let mut controllers: [Option<RandomAI>; 2] = [None, None];
    let black = match config.black {
        OpponentKind::Heuristic => Actor::Heuristic(heuristic("Heuristic-B", &config.ai_config, seed)?),
        OpponentKind::Random => {
            controllers[0] = Some(random("Random-B", seed));
            Actor::Human
        }
    };
    let white = match config.white {
        OpponentKind::Heuristic => Actor::Heuristic(heuristic("Heuristic-W", &config.ai_config, white_seed)?),
        OpponentKind::Random => {
            controllers[1] = Some(random("Random-W", white_seed));
            Actor::Human
        }
    };

    let mut session = Session::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color::Black, black, white);
    session.set_names(
        &format!("{:?}", config.black),
        &format!("{:?}", config.white),
    );
    let max_moves = DEFAULT_WIDTH * DEFAULT_HEIGHT;
    let mut move_count = 0;

    while let Some(color) = session.active_color() {
        if move_count >= max_moves {
            anyhow::bail!("game did not finish within {} moves", max_moves);
        }

        if session.is_ai_turn() {
            session.request_ai_move();
        } else {
            let idx = match color {
                Color::Black => 0,
                Color::White => 1,
            };
            let legal = session.legal_moves();
            let controller = controllers[idx]
                .as_mut()
                .ok_or_else(|| anyhow::anyhow!("no controller for {}", color))?;
            let pos = controller
                .choose_move(session.board(), color, &legal)
                .ok_or_else(|| anyhow::anyhow!("{} resigned", controller.name()))?;
            session.attempt_placement(pos)?;
        }
        move_count += 1;
    }

    let outcome = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("game ended without an outcome"))?;
    let counts = session.counts();
    let result = GameResult {
        outcome,
        moves: move_count,
        black_discs: counts.black,
        white_discs: counts.white,
        time_ms: start_time.elapsed().as_millis(),
    };
    Ok((session.record().clone(), result))
}
