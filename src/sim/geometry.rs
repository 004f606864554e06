//! Rectangles and colors for the fixed level geometry
//!
//! Everything solid in the level is an axis-aligned rectangle stored in
//! corner form. Collision tests take the player center; the 10 unit pad
//! baked into them stands in for the player's half extents.

use glam::Vec2;
use rand::Rng;

use crate::consts::COLLISION_MARGIN;

/// An axis-aligned rectangle in corner form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl Rect {
    pub const fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            min: Vec2::new(x_min, y_min),
            max: Vec2::new(x_max, y_max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) / 2.0
    }

    /// Movement collision test, padded on every side, strict bounds.
    ///
    /// The level is authored against this exact arithmetic; keep the
    /// written form.
    pub fn blocks(&self, point: Vec2) -> bool {
        point.x + COLLISION_MARGIN > self.min.x
            && point.x < self.max.x + COLLISION_MARGIN
            && point.y + COLLISION_MARGIN > self.min.y
            && point.y < self.max.y + COLLISION_MARGIN
    }

    /// Hazard and button overlap test: padded on x, exact inclusive
    /// bounds on y. A separate convention from [`Rect::blocks`]; the
    /// two never unify.
    pub fn overlaps(&self, point: Vec2) -> bool {
        point.x + COLLISION_MARGIN >= self.min.x
            && point.x - COLLISION_MARGIN <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict interior test, used for pointer hit boxes.
    pub fn contains_interior(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    /// HUD panel background
    pub const PANEL_BLUE: Color = Color::rgb(56, 93, 172);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color; stage fills use this with a seeded RNG.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}
