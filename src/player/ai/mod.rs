pub mod config;
pub mod heuristic;
pub mod pst;
pub mod random;

pub use config::AIConfig;
pub use heuristic::HeuristicAI;
pub use random::RandomAI;
