//! Grid Snake - single-player Snake on a wrapping board
//!
//! This library provides:
//! - Core game logic (game module)
//! - Terminal rendering of a 640x480 logical canvas (render module)
//! - Keyboard input routing (input module)
//! - Session statistics (metrics module)
//! - The fixed-tick game loop and terminal wiring (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
