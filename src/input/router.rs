use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};

use super::handler::{InputHandler, KeyAction};
use super::source::EventSource;
use crate::game::Snake;

/// Whether the loop should keep going after routing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    Continue,
    Quit,
}

/// Turns raw key events into turns for the snake
pub struct InputRouter {
    handler: InputHandler,
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }

    /// Route a single event.
    ///
    /// A turn straight back against the snake's current direction is
    /// dropped. Only one turn is buffered: a later key replaces an earlier
    /// one that has not been applied yet.
    pub fn route_event(&self, event: &Event, snake: &mut Snake) -> Routing {
        let Event::Key(key) = event else {
            return Routing::Continue;
        };

        // Only process key press events, not repeat or release
        if key.kind != KeyEventKind::Press {
            return Routing::Continue;
        }

        match self.handler.handle_key_event(*key) {
            KeyAction::Turn(direction) => {
                if !snake.direction.is_opposite(direction) {
                    snake.set_pending_direction(direction);
                }
                Routing::Continue
            }
            KeyAction::Quit => Routing::Quit,
            KeyAction::None => Routing::Continue,
        }
    }

    /// Drain `source` and route everything in it, stopping at the first quit
    pub fn poll_and_route<E: EventSource + ?Sized>(
        &self,
        source: &mut E,
        snake: &mut Snake,
    ) -> Result<Routing> {
        for event in source.poll_events()? {
            if self.route_event(&event, snake) == Routing::Quit {
                return Ok(Routing::Quit);
            }
        }
        Ok(Routing::Continue)
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
