//! # Connect Four
//!
//! A terminal Connect Four game with a minimax computer opponent. The game
//! core (board, win detection, heuristic evaluation, search) is a plain
//! synchronous library; the terminal UI built with Ratatui is a thin caller
//! on top of it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, heuristic evaluator, greedy and minimax search
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI: menus and game view

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
