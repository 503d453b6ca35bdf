use crate::game::GameState;

/// Universal interface for all computer opponents.
///
/// Implementations carry their own random generator so that a fixed seed
/// makes move selection reproducible.
pub trait Agent {
    /// Select an action (column) given the current game state.
    ///
    /// Callers must ensure at least one legal column exists; invoking an
    /// agent on a terminal board is a programming error.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
