pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{HeuristicAI, RandomAI};
pub use controller::PlayerController;
pub use tui::TuiController;
