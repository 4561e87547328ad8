use super::{
    config::GameConfig,
    state::{Apple, GameState, Snake},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Whether the snake ran into itself and was reset
    pub self_collision: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Fresh game: a length-1 snake at the center and a randomly placed apple
    pub fn reset(&mut self) -> GameState {
        GameState::new(Snake::new(), Apple::new(&mut self.rng))
    }

    /// Tick rate for the current state; longer snakes move faster
    pub fn ticks_per_second(&self, state: &GameState) -> u32 {
        let length = u32::try_from(state.snake.len()).unwrap_or(u32::MAX);
        self.config.base_speed.saturating_add(length)
    }

    /// Execute one tick: turn, move, then eat if the head reached the apple
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        let length_before = state.snake.len();

        state.snake.apply_pending_direction();
        let self_collision = state.snake.advance(&mut self.rng);
        if self_collision {
            info!(
                length = length_before,
                direction = ?state.snake.direction,
                "snake ran into itself, restarting"
            );
        }

        // A restarted snake does not eat an apple sitting on the center;
        // the apple moves away instead
        let on_apple = state.snake.head() == state.apple.position;
        if on_apple && self_collision {
            state.apple.relocate(&mut self.rng);
        }

        let ate_apple = on_apple && !self_collision;
        if ate_apple {
            state.snake.feed(state.apple.position);
            state.apple.relocate(&mut self.rng);
            debug!(
                length = state.snake.len(),
                apple = ?state.apple.position,
                "apple eaten"
            );
        }

        StepInfo {
            ate_apple,
            self_collision,
        }
    }
}
