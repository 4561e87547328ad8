//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board wraps at its edges, so the only way to lose is running into yourself,
//! which silently restarts the snake.

pub mod action;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo};
pub use geometry::{Cell, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use state::{Apple, GameState, Snake};
