use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Cell, GameState, Player};

use super::agent::Agent;
use super::eval::score_position;

/// Terminal score for a proven win or loss. Symmetric, and strictly larger
/// than any heuristic score the evaluator can produce.
pub const WIN_SCORE: i32 = 1_000_000;

/// Alpha-beta bounds. Passing `None` to [`minimax`] disables pruning and the
/// search degrades to plain minimax.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub alpha: i32,
    pub beta: i32,
}

impl Bounds {
    /// The full window, used at the root of a pruned search.
    pub fn full() -> Self {
        Bounds {
            alpha: i32::MIN,
            beta: i32::MAX,
        }
    }
}

/// Depth-limited minimax over board copies, maximizing for the computer.
///
/// Returns the chosen column and its backed-up value. The column is `None`
/// only at terminal and depth-zero leaves. The running best column starts at
/// a uniformly random legal column so a legal move is returned even if every
/// branch ties the initial bound.
pub fn minimax(
    board: &Board,
    depth: usize,
    bounds: Option<Bounds>,
    maximizing: bool,
    rng: &mut StdRng,
) -> (Option<usize>, i32) {
    // Terminal checks come before the depth check: a finished game must
    // score as a win/loss/draw even at depth 0.
    if board.has_four_in_row(Cell::Ai) {
        return (None, WIN_SCORE);
    }
    if board.has_four_in_row(Cell::Human) {
        return (None, -WIN_SCORE);
    }
    let valid = board.valid_locations();
    if valid.is_empty() {
        return (None, 0);
    }

    if depth == 0 {
        return (None, score_position(board, Player::Ai));
    }

    let mut best_col = valid[rng.random_range(0..valid.len())];
    let mut bounds = bounds;

    if maximizing {
        let mut value = i32::MIN;
        for &col in &valid {
            let mut child = *board;
            let row = child
                .next_open_row(col)
                .expect("column came from valid_locations");
            child.place(row, col, Cell::Ai);

            let (_, score) = minimax(&child, depth - 1, bounds, false, rng);
            if score > value {
                value = score;
                best_col = col;
            }

            if let Some(b) = bounds.as_mut() {
                b.alpha = b.alpha.max(value);
                if b.alpha >= b.beta {
                    break;
                }
            }
        }
        (Some(best_col), value)
    } else {
        let mut value = i32::MAX;
        for &col in &valid {
            let mut child = *board;
            let row = child
                .next_open_row(col)
                .expect("column came from valid_locations");
            child.place(row, col, Cell::Human);

            let (_, score) = minimax(&child, depth - 1, bounds, true, rng);
            if score < value {
                value = score;
                best_col = col;
            }

            if let Some(b) = bounds.as_mut() {
                b.beta = b.beta.min(value);
                if b.alpha >= b.beta {
                    break;
                }
            }
        }
        (Some(best_col), value)
    }
}

/// Minimax agent, with alpha-beta pruning selectable per instance.
pub struct MinimaxAgent {
    depth: usize,
    pruning: bool,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize, pruning: bool) -> Self {
        MinimaxAgent {
            depth,
            pruning,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(depth: usize, pruning: bool, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            pruning,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        assert!(
            !state.legal_actions().is_empty(),
            "No legal actions available"
        );

        let bounds = self.pruning.then(Bounds::full);
        let (column, _) = minimax(state.board(), self.depth, bounds, true, &mut self.rng);
        column.expect("search at depth >= 1 always returns a column")
    }

    fn name(&self) -> &str {
        if self.pruning {
            "Alpha-Beta"
        } else {
            "Minimax"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    /// A full board with no four-in-a-row anywhere: cell(r, c) alternates in
    /// two-row bands, so no run exceeds two in any orientation.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = if (row / 2 + col) % 2 == 0 {
                    Cell::Human
                } else {
                    Cell::Ai
                };
                board.place(row, col, cell);
            }
        }
        board
    }

    #[test]
    fn test_drawn_board_is_terminal_with_score_zero() {
        let board = drawn_board();
        assert!(!board.has_four_in_row(Cell::Human));
        assert!(!board.has_four_in_row(Cell::Ai));
        assert!(board.valid_locations().is_empty());

        let (col, value) = minimax(&board, 4, Some(Bounds::full()), true, &mut rng());
        assert_eq!(col, None);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_won_board_dominates_heuristic() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::Ai).unwrap();
        }
        let (_, value) = minimax(&board, 0, None, true, &mut rng());
        assert_eq!(value, WIN_SCORE);

        let mut lost = Board::new();
        for col in 0..4 {
            lost.drop_piece(col, Cell::Human).unwrap();
        }
        let (_, value) = minimax(&lost, 0, None, true, &mut rng());
        assert_eq!(value, -WIN_SCORE);
    }

    #[test]
    fn test_returns_only_legal_columns() {
        let mut board = Board::new();
        // Close columns 0 and 6 with alternating colors so nobody wins
        for i in 0..ROWS {
            let (left, right) = if i % 2 == 0 {
                (Cell::Human, Cell::Ai)
            } else {
                (Cell::Ai, Cell::Human)
            };
            board.drop_piece(0, left).unwrap();
            board.drop_piece(6, right).unwrap();
        }
        for depth in 1..=4 {
            let (col, _) = minimax(&board, depth, Some(Bounds::full()), true, &mut rng());
            let col = col.unwrap();
            assert!(
                board.valid_locations().contains(&col),
                "depth {depth} returned closed column {col}"
            );
        }
    }

    #[test]
    fn test_takes_immediate_win_at_depth_one() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Ai).unwrap();
        }
        let (col, value) = minimax(&board, 1, Some(Bounds::full()), true, &mut rng());
        assert_eq!(col, Some(3));
        assert_eq!(value, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Human).unwrap();
        }
        board.drop_piece(6, Cell::Ai).unwrap();

        let (col, _) = minimax(&board, 3, Some(Bounds::full()), true, &mut rng());
        assert_eq!(col, Some(3), "must block the human's open three");
    }

    #[test]
    fn test_prefers_win_over_block() {
        // Ai holds the bottom row 0..=2, Human the row above: both threaten
        // column 3, and taking the win ends the game first.
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Ai).unwrap();
            board.drop_piece(col, Cell::Human).unwrap();
        }
        let (col, value) = minimax(&board, 4, Some(Bounds::full()), true, &mut rng());
        assert_eq!(col, Some(3));
        assert_eq!(value, WIN_SCORE);
    }

    #[test]
    fn test_pruning_does_not_change_the_result() {
        // A midgame position with mixed threats
        let mut state = GameState::initial();
        for &col in &[3, 3, 2, 4, 4, 2, 5, 1] {
            state = state.apply_move(col).unwrap();
        }
        let board = *state.board();

        for depth in 1..=4 {
            let (pruned_col, pruned_value) =
                minimax(&board, depth, Some(Bounds::full()), true, &mut rng());
            let (plain_col, plain_value) = minimax(&board, depth, None, true, &mut rng());
            assert_eq!(pruned_col, plain_col, "column differs at depth {depth}");
            assert_eq!(pruned_value, plain_value, "value differs at depth {depth}");
        }
    }

    #[test]
    fn test_opening_move_is_center() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(1234);
        let (col, _) = minimax(&board, 4, Some(Bounds::full()), true, &mut rng);
        assert_eq!(col, Some(3), "the opening move should be the center column");
    }

    #[test]
    fn test_agent_selects_legal_action() {
        let mut agent = MinimaxAgent::seeded(4, true, 7);
        let state = GameState::initial();
        let action = agent.select_action(&state);
        assert!(state.legal_actions().contains(&action));
    }

    #[test]
    fn test_agent_names() {
        assert_eq!(MinimaxAgent::new(3, true).name(), "Alpha-Beta");
        assert_eq!(MinimaxAgent::new(3, false).name(), "Minimax");
    }

    #[test]
    fn test_full_game_against_greedy_completes() {
        use crate::ai::GreedyAgent;

        let mut human = GreedyAgent::seeded(1);
        let mut computer = MinimaxAgent::seeded(3, true, 2);
        let mut state = GameState::initial();
        let mut turn = 0;

        while !state.is_terminal() && turn < ROWS * COLS {
            let action = match state.current_player() {
                Player::Human => human.select_action(&state),
                Player::Ai => computer.select_action(&state),
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal(), "Game should complete");
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_beats_random_agent() {
        use crate::ai::RandomAgent;
        use crate::game::GameOutcome;

        let games = 20;
        let mut wins = 0;

        for seed in 0..games {
            // Ai moves second to make the test the harder direction
            let mut random = RandomAgent::seeded(seed);
            let mut search = MinimaxAgent::seeded(3, true, seed);
            let mut state = GameState::initial();
            let mut turn = 0;

            while !state.is_terminal() {
                let action = if turn % 2 == 0 {
                    random.select_action(&state)
                } else {
                    search.select_action(&state)
                };
                state = state.apply_move(action).unwrap();
                turn += 1;
            }

            if state.outcome() == Some(GameOutcome::Winner(Player::Ai)) {
                wins += 1;
            }
        }

        assert!(
            wins as f64 / games as f64 > 0.8,
            "minimax should beat random >80% of the time, got {wins}/{games}"
        );
    }
}
