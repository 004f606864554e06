//! Presentation and input layer
//!
//! The simulation never draws or reads devices; everything it needs
//! from the outside world goes through the [`Canvas`] trait. The
//! [`app::Runner`] drives one session against any canvas, and
//! [`headless::HeadlessCanvas`] records frames for tests and demos.

pub mod app;
pub mod headless;
pub mod hud;
pub mod scene;

pub use app::Runner;
pub use headless::{DrawCall, HeadlessCanvas};

use glam::Vec2;

use crate::sim::{Color, Key};

/// One display surface plus its input devices.
///
/// Positions are world coordinates: the y axis points up on an 800x600
/// surface. Implementations map them to whatever the backend wants.
pub trait Canvas {
    /// Wipe the frame under construction.
    fn clear(&mut self);

    /// Show the frame built since the last [`Canvas::clear`].
    fn present(&mut self);

    /// Hold the current frame on screen for `ms` milliseconds.
    fn pause(&mut self, ms: u64);

    fn draw_filled_rect(&mut self, center: Vec2, half_width: f32, half_height: f32, color: Color);

    /// Outline only.
    fn draw_rect(&mut self, center: Vec2, half_width: f32, half_height: f32, color: Color);

    /// Text centered on `center`.
    fn draw_text(&mut self, center: Vec2, text: &str, color: Color);

    /// Image asset centered on `center`, rotated counterclockwise in
    /// degrees.
    fn draw_sprite(&mut self, center: Vec2, asset: &str, width: f32, height: f32, rotation: f32);

    fn is_key_down(&self, key: Key) -> bool;

    fn is_pointer_pressed(&self) -> bool;

    /// Pointer position in world coordinates.
    fn pointer_position(&self) -> Vec2;
}
