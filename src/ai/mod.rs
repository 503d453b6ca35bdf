//! Computer opponents: the `Agent` seam, the heuristic position evaluator,
//! and the greedy / minimax / alpha-beta strategies built on it.

mod agent;
mod eval;
mod greedy;
mod minimax;
mod random;

pub use agent::Agent;
pub use eval::score_position;
pub use greedy::{pick_best_move, GreedyAgent};
pub use minimax::{minimax, Bounds, MinimaxAgent, WIN_SCORE};
pub use random::RandomAgent;

use crate::config::{AiConfig, Strategy};

/// Build the opponent described by the configuration.
pub fn agent_from_config(cfg: &AiConfig) -> Box<dyn Agent> {
    let depth = cfg.search_depth();
    match cfg.strategy {
        Strategy::Greedy => match cfg.seed {
            Some(seed) => Box::new(GreedyAgent::seeded(seed)),
            None => Box::new(GreedyAgent::new()),
        },
        Strategy::Minimax => match cfg.seed {
            Some(seed) => Box::new(MinimaxAgent::seeded(depth, false, seed)),
            None => Box::new(MinimaxAgent::new(depth, false)),
        },
        Strategy::AlphaBeta => match cfg.seed {
            Some(seed) => Box::new(MinimaxAgent::seeded(depth, true, seed)),
            None => Box::new(MinimaxAgent::new(depth, true)),
        },
    }
}
