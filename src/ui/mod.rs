//! Terminal UI: keyboard-driven board view for picking and moving marbles.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{describe, key_command, App};
