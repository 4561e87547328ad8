use std::time::{Duration, Instant};

use crate::game::StepInfo;

/// In-memory statistics for the current session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold the outcome of one tick into the session statistics
    pub fn on_step(&mut self, info: &StepInfo, length: usize) {
        if info.self_collision {
            self.resets += 1;
        }
        self.best_length = self.best_length.max(length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
