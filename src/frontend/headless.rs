//! Recording canvas
//!
//! Stands in for a real window in tests and in the demo binary. Draw
//! calls accumulate per frame and inputs are scripted by the caller.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::{Color, Key};

use super::Canvas;

/// One recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FilledRect {
        center: Vec2,
        half_width: f32,
        half_height: f32,
        color: Color,
    },
    Rect {
        center: Vec2,
        half_width: f32,
        half_height: f32,
        color: Color,
    },
    Text {
        center: Vec2,
        text: String,
        color: Color,
    },
    Sprite {
        center: Vec2,
        asset: String,
        width: f32,
        height: f32,
        rotation: f32,
    },
}

#[derive(Debug, Default)]
pub struct HeadlessCanvas {
    held: HashSet<Key>,
    pointer_pressed: bool,
    pointer: Vec2,
    /// Calls since the last clear
    pub calls: Vec<DrawCall>,
    /// Total pause time requested, in milliseconds
    pub paused_ms: u64,
    /// Frames presented so far
    pub frames: u64,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
        self.pointer_pressed = false;
    }

    pub fn set_pointer(&mut self, pressed: bool, position: Vec2) {
        self.pointer_pressed = pressed;
        self.pointer = position;
    }

    /// Every text drawn since the last clear, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any drawn text contains `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }
}

impl Canvas for HeadlessCanvas {
    fn clear(&mut self) {
        self.calls.clear();
    }

    fn present(&mut self) {
        self.frames += 1;
    }

    fn pause(&mut self, ms: u64) {
        self.paused_ms += ms;
    }

    fn draw_filled_rect(&mut self, center: Vec2, half_width: f32, half_height: f32, color: Color) {
        self.calls.push(DrawCall::FilledRect {
            center,
            half_width,
            half_height,
            color,
        });
    }

    fn draw_rect(&mut self, center: Vec2, half_width: f32, half_height: f32, color: Color) {
        self.calls.push(DrawCall::Rect {
            center,
            half_width,
            half_height,
            color,
        });
    }

    fn draw_text(&mut self, center: Vec2, text: &str, color: Color) {
        self.calls.push(DrawCall::Text {
            center,
            text: text.to_string(),
            color,
        });
    }

    fn draw_sprite(&mut self, center: Vec2, asset: &str, width: f32, height: f32, rotation: f32) {
        self.calls.push(DrawCall::Sprite {
            center,
            asset: asset.to_string(),
            width,
            height,
            rotation,
        });
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }
}
