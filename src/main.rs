//! Tilt Hit-Box entry point
//!
//! Hosted run: draws into an in-memory framebuffer, steered by a slowly
//! rotating demo tilt. Usage: `tilt-hitbox [settings.json]`

use tilt_hitbox::input::{SwapAxes, Sweep};
use tilt_hitbox::renderer::{Framebuffer, GraphicsRenderer};
use tilt_hitbox::{Ball, GameLoop, HitBoxGame, Settings, TiltSource, palette};

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("No settings file given, using defaults");
        return Settings::default();
    };
    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{} ({}), using defaults", e, path);
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Tilt Hit-Box (native) starting...");

    let settings = load_settings();
    let surface = settings.surface();

    let tilt: Box<dyn TiltSource> = if settings.swap_axes {
        Box::new(SwapAxes::new(Sweep::default()))
    } else {
        Box::new(Sweep::default())
    };
    let renderer = GraphicsRenderer::new(Framebuffer::new(surface.size() as u32));

    let mut game = GameLoop::new(
        Ball::new(surface),
        HitBoxGame::new(surface),
        tilt,
        renderer,
        settings.rng(),
    )
    .with_max_ticks(settings.max_ticks);

    let summary = game.play();
    println!("Final score: {} ({} ticks)", summary.score, summary.ticks);

    if settings.dump_frame {
        print!("{}", game.renderer().target().to_ascii(palette::BACKGROUND));
    }
}
