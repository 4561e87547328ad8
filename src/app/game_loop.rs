use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend};
use tracing::info;

use super::clock::FrameClock;
use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{EventSource, InputRouter, Routing};
use crate::metrics::GameMetrics;
use crate::render::{BOARD_BACKGROUND_COLOR, BoardCanvas, Drawable, Renderer, Surface};

/// Fixed-order tick loop: wait, read input, update, draw.
///
/// The terminal, event source and clock are handed in by the caller, so the
/// loop runs the same against a real terminal or a test backend.
pub struct GameLoop<B: Backend, E: EventSource> {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    canvas: BoardCanvas,
    renderer: Renderer,
    router: InputRouter,
    terminal: Terminal<B>,
    events: E,
    clock: FrameClock,
}

impl<B: Backend, E: EventSource> GameLoop<B, E> {
    pub fn new(config: GameConfig, terminal: Terminal<B>, events: E, clock: FrameClock) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            canvas: BoardCanvas::new(BOARD_BACKGROUND_COLOR),
            renderer: Renderer::new(),
            router: InputRouter::new(),
            terminal,
            events,
            clock,
        }
    }

    /// Tick until the player quits
    pub async fn run(&mut self) -> Result<()> {
        loop {
            if self.tick().await? == Routing::Quit {
                info!(
                    length = self.state.snake.len(),
                    best = self.metrics.best_length,
                    "quit requested"
                );
                return Ok(());
            }
        }
    }

    /// Run one full tick. Returns [`Routing::Quit`] without updating or
    /// drawing if a quit key was pressed.
    pub async fn tick(&mut self) -> Result<Routing> {
        let rate = self.engine.ticks_per_second(&self.state);
        self.clock.tick(rate).await;

        let routing = self
            .router
            .poll_and_route(&mut self.events, &mut self.state.snake)?;
        if routing == Routing::Quit {
            return Ok(Routing::Quit);
        }

        let info = self.engine.step(&mut self.state);
        self.metrics.on_step(&info, self.state.snake.len());

        self.draw()?;
        Ok(Routing::Continue)
    }

    fn draw(&mut self) -> Result<()> {
        self.canvas.fill(BOARD_BACKGROUND_COLOR);
        self.state.apple.draw(&mut self.canvas);
        self.state.snake.draw(&mut self.canvas);

        self.metrics.update();
        let rate = self.engine.ticks_per_second(&self.state);
        self.terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, &self.canvas, &self.state, &self.metrics, rate)
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}
