//! Fixed-grid Snake: the snake grows to its starting length on its own, eats
//! food for points, and the round ends on a wall or self collision.
//!
//! [`game::GameState`] holds all rules and is independent of the terminal;
//! [`renderer`] draws it with ratatui and [`input`] maps crossterm keys.

pub mod config;
pub mod driver;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
