//! # Hex Marbles
//!
//! Board geometry and move legality for an Abalone-style marble game on a
//! hexagonal board, with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: coordinates, board, selection, cursor, setup
//! - [`ui`]: Terminal UI: board view and keyboard controls
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
