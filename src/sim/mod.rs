//! Game simulation
//!
//! All gameplay logic lives here:
//! - Single thread, fixed tick delay
//! - Injected RNG for box placement
//! - Rendering only through the `Renderer` trait

pub mod ball;
pub mod game_loop;
pub mod hitbox;

pub use ball::Ball;
pub use game_loop::{GameLoop, GameSummary, StopSignal};
pub use hitbox::HitBoxGame;
