use rand::rngs::StdRng;
use rand::Rng;

use crate::error::MoveError;

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One game session: the live board, whose turn it is, and whether the game
/// has ended. Search never touches this value; it works on board copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with the human to move.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Human,
            outcome: None,
        }
    }

    /// Create initial game state with the starting side decided by a coin
    /// flip from the supplied generator.
    pub fn with_random_start(rng: &mut StdRng) -> Self {
        let starter = if rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Ai
        };
        GameState {
            board: Board::new(),
            current_player: starter,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_locations()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let piece = self.current_player.to_cell();
        self.board.drop_piece(column, piece)?;

        if self.board.has_four_in_row(piece) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Human);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_random_start_is_deterministic_with_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = GameState::with_random_start(&mut rng_a);
        let b = GameState::with_random_start(&mut rng_b);
        assert_eq!(a.current_player(), b.current_player());
    }

    #[test]
    fn test_random_start_covers_both_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_human = false;
        let mut seen_ai = false;
        for _ in 0..50 {
            match GameState::with_random_start(&mut rng).current_player() {
                Player::Human => seen_human = true,
                Player::Ai => seen_ai = true,
            }
        }
        assert!(seen_human && seen_ai);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Ai);
        assert_eq!(new_state.board().get(0, 3), Cell::Human);
        // Original state untouched
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Human builds bottom row 0..=3, Ai stacks on top of earlier columns
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Human
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Ai
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Human)));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
            if col < 3 {
                state = state.apply_move(col).unwrap();
            }
        }
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
    }
}
