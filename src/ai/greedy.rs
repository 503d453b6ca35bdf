use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::eval::score_position;

/// Greedy one-ply move selection: simulate every legal drop for `player`,
/// score the result with the evaluator, and keep the strictly best column.
/// The running best starts at a uniformly random legal column.
pub fn pick_best_move(board: &Board, player: Player, rng: &mut StdRng) -> usize {
    let valid = board.valid_locations();
    assert!(!valid.is_empty(), "No legal actions available");

    let mut best_col = valid[rng.random_range(0..valid.len())];
    let mut best_score = i32::MIN;

    for &col in &valid {
        let mut child = *board;
        let row = child
            .next_open_row(col)
            .expect("column came from valid_locations");
        child.place(row, col, player.to_cell());

        let score = score_position(&child, player);
        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }

    best_col
}

/// One-ply lookahead agent for the "easy" mode. No search tree: just the
/// evaluator applied to each candidate drop.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        GreedyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        pick_best_move(state.board(), state.current_player(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
