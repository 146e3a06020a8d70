//! # Reversi Aho AI
//!
//! Reversi (Othello) rules engine with a one-ply heuristic opponent and a
//! small terminal front end.
//!
//! - [`core`]: board, cells, colors, coordinates
//! - [`logic`]: legality, flips, move application
//! - [`game`]: turn controller, session, game records and replay
//! - [`player`]: controllers (keyboard, heuristic AI, random AI)
//! - [`selfplay`]: parallel AI vs AI batches
//! - [`display`], [`ui`]: terminal rendering and menus

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;
pub mod ui;
