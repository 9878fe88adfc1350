//! Game facade
//!
//! Bundles the simulation with its scoreboard and colors so a host only has
//! to forward three things: frame deltas, pointer moves, and clicks.

use crate::renderer::{self, Palette, RenderSurface, ScoreRenderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState};

/// A running game of Pong
#[derive(Debug, Clone)]
pub struct Pong {
    state: GameState,
    scoreboard: ScoreRenderer,
    palette: Palette,
}

impl Pong {
    /// Start a game on a `width` x `height` surface
    pub fn new(width: f32, height: f32, seed: u64, settings: &Settings) -> Self {
        log::info!("New game {}x{} (seed {})", width, height, seed);
        Self {
            state: GameState::new(width, height, seed),
            scoreboard: ScoreRenderer::new(settings.char_pixel, settings.palette.foreground),
            palette: settings.palette,
        }
    }

    /// Advance by `dt` seconds, then redraw onto `surface`
    pub fn frame<S>(&mut self, dt: f32, surface: &mut S) -> Vec<GameEvent>
    where
        S: RenderSurface + ?Sized,
    {
        let events = self.state.update(dt);
        self.render(surface);
        events
    }

    /// Draw the current state without advancing it
    pub fn render<S>(&self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        renderer::draw(&self.state, &self.scoreboard, &self.palette, surface);
    }

    /// Pointer moved to `fraction` of the surface height
    pub fn pointer_moved(&mut self, fraction: f32) {
        self.state.set_pointer(fraction);
    }

    /// Click/tap: serve if the ball is at rest
    pub fn serve(&mut self) -> bool {
        self.state.play()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scoreboard(&self) -> &ScoreRenderer {
        &self.scoreboard
    }
}
