//! Elephant Run - a five-stage trick platformer
//!
//! Core modules:
//! - `sim`: deterministic gameplay (physics, collisions, stages, session state)
//! - `frontend`: canvas contract, scene and HUD drawing, frame runner
//! - `settings`: runtime configuration for the demo binary

pub mod frontend;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Canvas width in world units (y grows upward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    /// Canvas height in world units
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Delay between frames in milliseconds
    pub const FRAME_DELAY_MS: u64 = 15;

    /// The player sprite is a square
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Collision pad on every test; equals half the player sprite, so all
    /// checks take the player center
    pub const COLLISION_MARGIN: f32 = 10.0;

    /// Where the player enters every stage, just above the start pipe
    pub const SPAWN_POINT: Vec2 = Vec2::new(131.0, 465.0);
    /// Horizontal slack around the exit pipe center
    pub const EXIT_TOLERANCE_X: f32 = 20.0;
    /// Vertical slack around the exit pipe center
    pub const EXIT_TOLERANCE_Y: f32 = 7.0;

    /// Units the open door falls per frame
    pub const DOOR_DROP_STEP: f32 = 3.0;

    /// Hold time for reset and stage-transition banners
    pub const BANNER_PAUSE_MS: u64 = 2000;
    /// Debounce after a pointer press is handled
    pub const POINTER_DEBOUNCE_MS: u64 = 80;
}
