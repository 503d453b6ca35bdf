//! Terminal UI: difficulty and algorithm menus, and the game view for
//! playing against the computer.

mod app;
mod board_widget;
mod game_view;

pub use app::{App, Screen};
