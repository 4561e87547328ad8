use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

/// A queue of input events the game loop drains once per tick
pub trait EventSource {
    /// Every event that is ready, without blocking
    fn poll_events(&mut self) -> Result<Vec<Event>>;
}

/// Events from the controlling terminal
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_events(&mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            events.push(event::read().context("Failed to read terminal event")?);
        }
        Ok(events)
    }
}

/// Hands out prepared batches, one per poll
#[cfg(test)]
pub struct ScriptedEvents {
    batches: std::collections::VecDeque<Vec<Event>>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(batches: Vec<Vec<Event>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Result<Vec<Event>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
