//! The fixed level layout
//!
//! One hand-authored layout serves all five stages. Geometry is stored in
//! corner form, y up, on the 800 by 600 canvas, and never mutates; the
//! physics pass and the scene renderer both read it through the `Level`
//! value each map owns.

use glam::Vec2;

use super::geometry::Rect;
use crate::consts::SPAWN_POINT;

/// One hazard strip plus its sprite rotation
#[derive(Debug, Clone, Copy)]
pub struct Spike {
    pub rect: Rect,
    /// Counterclockwise sprite rotation in degrees
    pub rotation_degrees: f32,
}

impl Spike {
    pub const fn new(rect: Rect, rotation_degrees: f32) -> Self {
        Self {
            rect,
            rotation_degrees,
        }
    }

    /// Sideways spikes draw with width and height exchanged.
    pub fn swaps_extents(&self) -> bool {
        self.rotation_degrees == 90.0 || self.rotation_degrees == 270.0
    }
}

const OBSTACLES: [Rect; 24] = [
    Rect::new(0.0, 120.0, 120.0, 270.0),
    Rect::new(0.0, 270.0, 168.0, 330.0),
    Rect::new(0.0, 330.0, 30.0, 480.0),
    Rect::new(0.0, 480.0, 180.0, 600.0),
    Rect::new(180.0, 570.0, 680.0, 600.0),
    Rect::new(270.0, 540.0, 300.0, 570.0),
    Rect::new(590.0, 540.0, 620.0, 570.0),
    Rect::new(680.0, 510.0, 800.0, 600.0),
    Rect::new(710.0, 450.0, 800.0, 510.0),
    Rect::new(740.0, 420.0, 800.0, 450.0),
    Rect::new(770.0, 300.0, 800.0, 420.0),
    Rect::new(680.0, 240.0, 800.0, 300.0),
    Rect::new(680.0, 300.0, 710.0, 330.0),
    Rect::new(770.0, 180.0, 800.0, 240.0),
    Rect::new(0.0, 120.0, 800.0, 150.0),
    Rect::new(560.0, 150.0, 800.0, 180.0),
    Rect::new(530.0, 180.0, 590.0, 210.0),
    Rect::new(530.0, 210.0, 560.0, 240.0),
    Rect::new(320.0, 150.0, 440.0, 210.0),
    Rect::new(350.0, 210.0, 440.0, 270.0),
    Rect::new(220.0, 270.0, 310.0, 300.0),
    Rect::new(360.0, 360.0, 480.0, 390.0),
    Rect::new(530.0, 310.0, 590.0, 340.0),
    Rect::new(560.0, 400.0, 620.0, 430.0),
];

const SPIKES: [Spike; 7] = [
    Spike::new(Rect::new(30.0, 333.0, 50.0, 423.0), 90.0),
    Spike::new(Rect::new(121.0, 150.0, 207.0, 170.0), 180.0),
    Spike::new(Rect::new(441.0, 150.0, 557.0, 170.0), 180.0),
    Spike::new(Rect::new(591.0, 180.0, 621.0, 200.0), 180.0),
    Spike::new(Rect::new(752.0, 301.0, 771.0, 419.0), 270.0),
    Spike::new(Rect::new(680.0, 490.0, 710.0, 510.0), 0.0),
    Spike::new(Rect::new(401.0, 550.0, 521.0, 570.0), 0.0),
];

const BUTTON: Rect = Rect::new(400.0, 390.0, 470.0, 410.0);
// Standing surface under the button; collides like an obstacle
const BUTTON_FLOOR: Rect = Rect::new(400.0, 390.0, 470.0, 400.0);

const START_PIPE: [Rect; 2] = [
    Rect::new(115.0, 450.0, 145.0, 480.0),
    Rect::new(110.0, 430.0, 150.0, 450.0),
];

const EXIT_PIPE: [Rect; 2] = [
    Rect::new(720.0, 175.0, 740.0, 215.0),
    Rect::new(740.0, 180.0, 770.0, 210.0),
];

const DOOR: Rect = Rect::new(685.0, 180.0, 700.0, 240.0);

/// Fixed world geometry shared by every stage
#[derive(Debug, Clone)]
pub struct Level {
    pub obstacles: &'static [Rect],
    pub spikes: &'static [Spike],
    pub button: Rect,
    pub button_floor: Rect,
    /// Decorative only; the player spawns inside it
    pub start_pipe: &'static [Rect],
    /// The second segment's center is the exit target
    pub exit_pipe: &'static [Rect],
    pub door: Rect,
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

impl Level {
    pub fn new() -> Self {
        Self {
            obstacles: &OBSTACLES,
            spikes: &SPIKES,
            button: BUTTON,
            button_floor: BUTTON_FLOOR,
            start_pipe: &START_PIPE,
            exit_pipe: &EXIT_PIPE,
            door: DOOR,
        }
    }

    pub fn spawn_point(&self) -> Vec2 {
        SPAWN_POINT
    }

    pub fn exit_target(&self) -> Vec2 {
        self.exit_pipe[1].center()
    }
}
