//! Stage configuration and the fixed five-stage roster
//!
//! A stage never changes after construction; deaths and resets rebuild the
//! map around the same stage value.

use rand_pcg::Pcg32;

use super::geometry::Color;

/// Logical key identifiers shared by stage bindings and the canvas input
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Right,
    Left,
    Up,
    A,
    F,
    H,
    Q,
    T,
}

/// Immutable per-stage tuning
#[derive(Debug, Clone)]
pub struct Stage {
    /// Position in the roster (0-based)
    pub index: usize,
    /// Per-frame vertical acceleration; negative pulls down
    pub gravity: f32,
    /// Horizontal distance per held movement key per frame
    pub velocity_x: f32,
    /// Upward velocity applied by a jump
    pub velocity_y: f32,
    /// Key that moves the player right
    pub right: Key,
    /// Key that moves the player left
    pub left: Key,
    /// Jump key; `None` on stages where ground contact drives the jump
    pub jump: Option<Key>,
    /// Short hint always shown on the HUD
    pub clue: &'static str,
    /// Longer hint shown while help is toggled on
    pub help: &'static str,
    /// Obstacle fill color, rolled once at construction
    pub color: Color,
    /// Button presses needed before the door opens
    pub required_presses: u32,
    /// Sprite faces opposite the travel direction
    pub inverted_facing: bool,
    /// The jump impulse re-applies on every grounded frame
    pub auto_bounce: bool,
}

/// Build the five stages in play order.
pub fn roster(rng: &mut Pcg32) -> Vec<Stage> {
    vec![
        Stage {
            index: 0,
            gravity: -0.45,
            velocity_x: 3.65,
            velocity_y: 10.0,
            right: Key::Right,
            left: Key::Left,
            jump: Some(Key::Up),
            clue: "Arrow keys are required",
            help: "Arrow keys move player, press button and enter the second pipe",
            color: Color::random(rng),
            required_presses: 1,
            inverted_facing: false,
            auto_bounce: false,
        },
        Stage {
            index: 1,
            gravity: -0.45,
            velocity_x: 3.65,
            velocity_y: 10.0,
            right: Key::Left,
            left: Key::Right,
            jump: Some(Key::Up),
            clue: "Not always straight forward",
            help: "Right and left buttons reversed",
            color: Color::random(rng),
            required_presses: 1,
            inverted_facing: true,
            auto_bounce: false,
        },
        Stage {
            index: 2,
            gravity: -2.0,
            velocity_x: 3.65,
            velocity_y: 24.0,
            right: Key::Right,
            left: Key::Left,
            jump: None,
            clue: "A bit bouncy here",
            help: "You jump constantly",
            color: Color::random(rng),
            required_presses: 1,
            inverted_facing: false,
            auto_bounce: true,
        },
        Stage {
            index: 3,
            gravity: -0.45,
            velocity_x: 3.65,
            velocity_y: 10.0,
            right: Key::Right,
            left: Key::Left,
            jump: Some(Key::Up),
            clue: "Never gonna give you up",
            help: "Press button 5 times",
            color: Color::random(rng),
            required_presses: 5,
            inverted_facing: false,
            auto_bounce: false,
        },
        Stage {
            index: 4,
            gravity: -0.45,
            velocity_x: 3.65,
            velocity_y: 10.0,
            right: Key::H,
            left: Key::F,
            jump: Some(Key::T),
            clue: "Center keyboard",
            help: "Use 'F', 'T', 'H' keys to move",
            color: Color::random(rng),
            required_presses: 0,
            inverted_facing: false,
            auto_bounce: false,
        },
    ]
}
