//! Wiring between the game core and the terminal.

pub mod clock;
pub mod game_loop;
pub mod terminal;

pub use clock::FrameClock;
pub use game_loop::GameLoop;

use anyhow::Result;

use crate::game::GameConfig;
use crate::input::TerminalEvents;

/// Take over the terminal, play until the player quits, then give it back
pub async fn run(config: GameConfig) -> Result<()> {
    let terminal = terminal::setup_terminal()?;
    let mut game = GameLoop::new(config, terminal, TerminalEvents, FrameClock::new());

    let result = game.run().await;

    // Restore even if the loop failed, but report the loop's error first
    let restored = terminal::restore_terminal(game.terminal_mut());
    result.and(restored)
}
