//! The controllable character
//!
//! One player value lives for the whole session; stage changes and resets
//! respawn it rather than rebuild it.

use glam::Vec2;

/// Horizontal facing, used to pick the sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity accumulated by gravity and jumps
    pub velocity_y: f32,
    pub facing: Facing,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            velocity_y: 0.0,
            facing: Facing::Right,
        }
    }

    /// Integrate one frame of vertical motion.
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
        self.pos.y += self.velocity_y;
    }

    /// Teleport to a point with motion and facing cleared.
    pub fn respawn(&mut self, point: Vec2) {
        self.pos = point;
        self.velocity_y = 0.0;
        self.facing = Facing::Right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPAWN_POINT;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_accumulates() {
        let mut player = Player::new(Vec2::new(131.0, 465.0));
        player.apply_gravity(-0.45);
        assert_eq!(player.velocity_y, -0.45);
        assert_eq!(player.pos.y, 464.55);
        player.apply_gravity(-0.45);
        assert_eq!(player.velocity_y, -0.9);
        assert!((player.pos.y - 463.65).abs() < 1e-4);
    }

    #[test]
    fn test_respawn_clears_motion_and_facing() {
        let mut player = Player::new(Vec2::new(300.0, 200.0));
        player.velocity_y = -12.5;
        player.facing = Facing::Left;
        player.respawn(SPAWN_POINT);
        assert_eq!(player.pos, SPAWN_POINT);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.facing, Facing::Right);
    }

    proptest! {
        #[test]
        fn respawn_is_idempotent(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            vy in -30.0f32..30.0,
        ) {
            let mut player = Player::new(Vec2::new(x, y));
            player.velocity_y = vy;
            player.facing = Facing::Left;

            player.respawn(SPAWN_POINT);
            let once = player.clone();
            player.respawn(SPAWN_POINT);

            prop_assert_eq!(player.pos, once.pos);
            prop_assert_eq!(player.velocity_y, once.velocity_y);
            prop_assert_eq!(player.facing, once.facing);
        }
    }
}
