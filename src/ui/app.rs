use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::ai::{agent_from_config, Agent};
use crate::config::{AiConfig, Difficulty, Strategy};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, COLS};

/// Which screen the app is showing. Mirrors the original menu flow:
/// difficulty first, then opponent strategy, then the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DifficultyMenu,
    StrategyMenu,
    Playing,
}

pub struct App {
    config: AiConfig,
    screen: Screen,
    game_state: GameState,
    agent: Box<dyn Agent>,
    rng: StdRng,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let agent = agent_from_config(&config);
        App {
            config,
            screen: Screen::DifficultyMenu,
            game_state: GameState::initial(),
            agent,
            rng,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::DifficultyMenu => self.handle_difficulty_key(key),
            Screen::StrategyMenu => self.handle_strategy_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_difficulty_key(&mut self, key: KeyEvent) {
        let difficulty = match key.code {
            KeyCode::Char('1') => Difficulty::Easy,
            KeyCode::Char('2') => Difficulty::Medium,
            KeyCode::Char('3') => Difficulty::Hard,
            _ => return,
        };
        self.config.difficulty = difficulty;
        self.screen = Screen::StrategyMenu;
    }

    fn handle_strategy_key(&mut self, key: KeyEvent) {
        let strategy = match key.code {
            KeyCode::Char('1') => Strategy::Minimax,
            KeyCode::Char('2') => Strategy::AlphaBeta,
            KeyCode::Char('3') => Strategy::Greedy,
            _ => return,
        };
        self.config.strategy = strategy;
        self.start_game();
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.screen = Screen::DifficultyMenu;
            }
            _ => {}
        }
    }

    /// Start a fresh game with the configured opponent. The starting side is
    /// a coin flip.
    fn start_game(&mut self) {
        self.agent = agent_from_config(&self.config);
        self.game_state = GameState::with_random_start(&mut self.rng);
        self.selected_column = COLS / 2;
        self.message = None;
        self.screen = Screen::Playing;

        if self.game_state.current_player() == Player::Ai {
            self.computer_turn();
        }
    }

    /// Drop the human's piece in the selected column, then let the computer
    /// reply.
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }
        if self.game_state.current_player() != Player::Human {
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                self.update_outcome_message();
                if !self.game_state.is_terminal() {
                    self.computer_turn();
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Run the blocking search and apply the computer's move.
    fn computer_turn(&mut self) {
        let column = self.agent.select_action(&self.game_state);
        self.game_state
            .apply_move_mut(column)
            .expect("agent returned an illegal column");
        self.update_outcome_message();
    }

    fn update_outcome_message(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(Player::Human) => "You win!".to_string(),
                GameOutcome::Winner(Player::Ai) => "The computer wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    fn mode_label(&self) -> String {
        format!("{} · {}", self.config.difficulty.label(), self.agent.name())
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::DifficultyMenu => super::game_view::render_difficulty_menu(frame),
            Screen::StrategyMenu => super::game_view::render_strategy_menu(frame),
            Screen::Playing => super::game_view::render_game(
                frame,
                &self.game_state,
                self.selected_column,
                &self.message,
                &self.mode_label(),
            ),
        }
    }
}
