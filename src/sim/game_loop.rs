//! Fixed-delay game loop
//!
//! One tick: poll tilt, move the ball, test the box, sleep. Runs until the
//! stop signal is raised, which by default never happens.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;

use super::ball::Ball;
use super::hitbox::HitBoxGame;
use crate::consts::TICK_INTERVAL;
use crate::input::TiltSource;
use crate::palette;
use crate::renderer::Renderer;

/// Shared flag that asks a running loop to stop after its current tick
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What a finished run achieved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub ticks: u64,
    pub score: u32,
}

/// Owns the ball, the game and their collaborators for the life of a run
pub struct GameLoop<T, R, G> {
    pub ball: Ball,
    pub game: HitBoxGame,
    tilt: T,
    renderer: R,
    rng: G,
    stop: StopSignal,
    tick_delay: Duration,
    max_ticks: Option<u64>,
    ticks: u64,
}

impl<T, R, G> GameLoop<T, R, G>
where
    T: TiltSource,
    R: Renderer,
    G: Rng,
{
    pub fn new(ball: Ball, game: HitBoxGame, tilt: T, renderer: R, rng: G) -> Self {
        Self {
            ball,
            game,
            tilt,
            renderer,
            rng,
            stop: StopSignal::new(),
            tick_delay: TICK_INTERVAL,
            max_ticks: None,
            ticks: 0,
        }
    }

    /// Override the delay between ticks (zero for headless runs)
    pub fn with_tick_delay(mut self, delay: Duration) -> Self {
        self.tick_delay = delay;
        self
    }

    /// Stop on its own after `max` ticks
    pub fn with_max_ticks(mut self, max: Option<u64>) -> Self {
        self.max_ticks = max;
        self
    }

    /// Handle that can stop the loop from elsewhere
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            ticks: self.ticks,
            score: self.game.score,
        }
    }

    /// Clear the surface and draw the box and ball once
    pub fn start(&mut self) {
        self.renderer.fill_screen(palette::BACKGROUND);
        self.game.draw(&mut self.renderer);
        self.ball.draw(&mut self.renderer);
    }

    /// One iteration without the sleep; returns whether a point was scored
    pub fn tick(&mut self) -> bool {
        let tilt = self.tilt.poll();
        self.ball.update(tilt, &mut self.renderer);
        let scored = self.game.update(&self.ball, &mut self.renderer, &mut self.rng);
        self.ticks += 1;
        scored
    }

    fn should_stop(&self) -> bool {
        self.stop.is_stopped() || self.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    /// Draw the opening frame, then tick until stopped
    pub fn play(&mut self) -> GameSummary {
        log::info!(
            "Hit box game starting: box {:?}, ball {:?}",
            self.game.box_pos,
            self.ball.pos
        );
        self.start();

        while !self.should_stop() {
            self.tick();
            if !self.tick_delay.is_zero() {
                std::thread::sleep(self.tick_delay);
            }
        }

        let summary = self.summary();
        log::info!("Game stopped after {} ticks, score {}", summary.ticks, summary.score);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;
    use crate::input::{Scripted, Tilt};
    use crate::renderer::{DrawCall, Framebuffer, GraphicsRenderer, Recorder};
    use glam::{IVec2, Vec2};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn make_loop(tilt: Scripted) -> GameLoop<Scripted, Recorder, Pcg32> {
        let surface = Surface::default();
        GameLoop::new(
            Ball::new(surface),
            HitBoxGame::new(surface),
            tilt,
            Recorder::new(),
            Pcg32::seed_from_u64(12345),
        )
        .with_tick_delay(Duration::ZERO)
    }

    #[test]
    fn test_level_tilt_only_draws_opening_frame() {
        let mut game = make_loop(Scripted::constant(Tilt::LEVEL)).with_max_ticks(Some(500));
        let summary = game.play();

        assert_eq!(summary, GameSummary { ticks: 500, score: 0 });
        assert_eq!(game.ball.pos, Vec2::splat(64.0));
        assert_eq!(
            game.renderer().calls,
            vec![
                DrawCall::FillScreen(palette::BACKGROUND),
                DrawCall::Rect { x: 64, y: 64, width: 4, height: 4, color: palette::HIT_BOX },
                DrawCall::Pixel { x: 64, y: 64, color: palette::BALL },
            ]
        );
    }

    #[test]
    fn test_stop_signal_ends_run() {
        let mut game = make_loop(Scripted::constant(Tilt::new(10, 10)));
        let stop = game.stop_signal();
        stop.stop();
        let summary = game.play();
        assert_eq!(summary.ticks, 0);
        assert!(stop.is_stopped());
    }

    #[test]
    fn test_tilt_into_box_scores() {
        // Ball starts at (64, 64), on the box corner; nudge it inside
        let mut game = make_loop(Scripted::new([Tilt::new(20, 20), Tilt::LEVEL]));
        game.start();
        assert!(game.tick());
        assert_eq!(game.ball.pos, Vec2::splat(65.0));
        assert_eq!(game.game.score, 1);
    }

    #[test]
    fn test_ball_draw_precedes_box_update() {
        let mut game = make_loop(Scripted::constant(Tilt::new(20, 20)));
        game.tick();
        let calls = &game.renderer().calls;
        assert!(matches!(calls[0], DrawCall::Pixel { x: 64, y: 64, .. }));
        assert!(matches!(calls[1], DrawCall::Pixel { x: 65, y: 65, .. }));
        assert!(matches!(calls[2], DrawCall::Rect { x: 64, y: 64, .. }));
    }

    #[test]
    fn test_runs_on_framebuffer() {
        let surface = Surface::default();
        let mut game = GameLoop::new(
            Ball::new(surface),
            HitBoxGame::new(surface),
            Scripted::constant(Tilt::new(-30, 0)),
            GraphicsRenderer::new(Framebuffer::new(surface.size() as u32)),
            Pcg32::seed_from_u64(1),
        )
        .with_tick_delay(Duration::ZERO)
        .with_max_ticks(Some(200));
        game.play();

        // Pinned against the left border
        assert_eq!(game.ball.last_drawn(), IVec2::new(1, 64));
        let fb = game.renderer().target();
        assert_eq!(fb.pixel(1, 64), Some(palette::BALL));
        // The ball's first erase clipped the box corner at (64, 64)
        assert_eq!(fb.pixel(67, 67), Some(palette::HIT_BOX));
        assert_eq!(fb.count(palette::BALL), 1);
    }
}
