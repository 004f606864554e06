//! Per-stage session logic
//!
//! A map binds one stage to the fixed level: movement with collision,
//! gravity integration with ground and ceiling snapping, spike deaths,
//! the button press cycle, door state, and the exit check. The map never
//! owns the player; callers pass it in for the duration of a call.

use glam::Vec2;

use super::geometry::Rect;
use super::level::Level;
use super::player::{Facing, Player};
use super::stage::Stage;
use crate::consts::{
    COLLISION_MARGIN, DOOR_DROP_STEP, EXIT_TOLERANCE_X, EXIT_TOLERANCE_Y, SPAWN_POINT,
};

/// Movement commands accepted while a stage runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
}

/// What happened during one physics step
#[derive(Debug, Clone, Copy, Default)]
pub struct StepEvents {
    /// The player rested on a surface this frame
    pub grounded: bool,
    /// Spike contact; the player is already back at the spawn point
    pub died: bool,
    /// A full press-and-release cycle completed
    pub button_pressed: bool,
    /// This frame's press reached the stage's requirement
    pub door_opened: bool,
}

#[derive(Debug, Clone)]
pub struct Map {
    stage: Stage,
    level: Level,
    death_count: u32,
    button_presses: u32,
    door_open: bool,
    door_drop: f32,
    /// Movement stays disabled until the first ground or ceiling contact
    first_touch: bool,
    /// The player currently overlaps the button
    pressing_button: bool,
}

impl Map {
    pub fn new(stage: Stage) -> Self {
        // A stage that needs no presses starts with its door open
        let door_open = stage.required_presses == 0;
        Self {
            stage,
            level: Level::new(),
            death_count: 0,
            button_presses: 0,
            door_open,
            door_drop: 0.0,
            first_touch: false,
            pressing_button: false,
        }
    }

    /// Apply one movement command. Ignored until the player has touched
    /// the world at least once.
    pub fn move_player(&self, player: &mut Player, direction: Direction) {
        if !self.first_touch {
            return;
        }
        match direction {
            Direction::Right => self.walk(player, self.stage.velocity_x, Facing::Right),
            Direction::Left => self.walk(player, -self.stage.velocity_x, Facing::Left),
            Direction::Up => {
                if self.snap_to_ground(player) {
                    player.velocity_y = self.stage.velocity_y;
                }
            }
        }
    }

    fn walk(&self, player: &mut Player, dx: f32, travel: Facing) {
        let next = Vec2::new(player.pos.x + dx, player.pos.y);
        if self.blocked(next) {
            return;
        }
        player.pos.x = next.x;
        player.facing = if self.stage.inverted_facing {
            travel.flipped()
        } else {
            travel
        };
    }

    /// A candidate position collides with an obstacle, the closed door,
    /// or the button floor.
    fn blocked(&self, next: Vec2) -> bool {
        if self.level.obstacles.iter().any(|o| o.blocks(next)) {
            return true;
        }
        if !self.door_open && self.level.door.blocks(next) {
            return true;
        }
        self.level.button_floor.blocks(next)
    }

    /// One physics frame: gravity, surface contacts, the button cycle,
    /// the door animation, and spike deaths, in that order.
    pub fn step(&mut self, player: &mut Player) -> StepEvents {
        let mut events = StepEvents::default();

        player.apply_gravity(self.stage.gravity);

        if self.snap_to_ground(player) {
            player.velocity_y = self.stage.gravity;
            self.first_touch = true;
            events.grounded = true;
            if self.stage.auto_bounce {
                player.velocity_y = self.stage.velocity_y;
            }
        }

        if self.snap_to_ceiling(player) {
            player.velocity_y = self.stage.gravity;
            self.first_touch = true;
        }

        // Drop advances before the press check; a door opened this frame
        // still draws at its resting position.
        if self.door_open {
            self.door_drop += DOOR_DROP_STEP;
        }

        if self.level.button.overlaps(player.pos) {
            self.pressing_button = true;
        } else if self.pressing_button {
            self.pressing_button = false;
            self.button_presses += 1;
            events.button_pressed = true;
            if !self.door_open && self.button_presses >= self.stage.required_presses {
                self.door_open = true;
                events.door_opened = true;
            }
        }

        if self.level.spikes.iter().any(|s| s.rect.overlaps(player.pos)) {
            self.death_count += 1;
            self.reset_progress(player);
            events.died = true;
        }

        events
    }

    /// The player center is within the exit slack of the pipe mouth.
    pub fn reached_exit(&self, player: &Player) -> bool {
        let target = self.level.exit_target();
        (player.pos.x - target.x).abs() <= EXIT_TOLERANCE_X
            && (player.pos.y - target.y).abs() <= EXIT_TOLERANCE_Y
    }

    /// Back to the spawn point with stage-local progress cleared. Deaths
    /// are kept; only the spike path adds one.
    pub fn restart_stage(&mut self, player: &mut Player) {
        self.reset_progress(player);
    }

    fn reset_progress(&mut self, player: &mut Player) {
        player.respawn(SPAWN_POINT);
        self.button_presses = 0;
        self.first_touch = false;
        self.pressing_button = false;
        self.door_open = self.stage.required_presses == 0;
        self.door_drop = 0.0;
    }

    /// Snap onto the nearest surface below, obstacles before the button
    /// floor. Returns whether a surface held the player this frame.
    fn snap_to_ground(&self, player: &mut Player) -> bool {
        let gravity = self.stage.gravity;
        let floor = std::slice::from_ref(&self.level.button_floor);
        let snapped = surface_below(player.pos, gravity, self.level.obstacles)
            .or_else(|| surface_below(player.pos, gravity, floor));
        match snapped {
            Some(y) => {
                player.pos.y = y;
                true
            }
            None => false,
        }
    }

    fn snap_to_ceiling(&self, player: &mut Player) -> bool {
        match surface_above(player.pos, self.stage.gravity, self.level.obstacles) {
            Some(y) => {
                player.pos.y = y;
                true
            }
            None => false,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn death_count(&self) -> u32 {
        self.death_count
    }

    /// Deaths carry across stage changes; the session writes them into
    /// each fresh map.
    pub fn set_death_count(&mut self, deaths: u32) {
        self.death_count = deaths;
    }

    pub fn button_presses(&self) -> u32 {
        self.button_presses
    }

    pub fn door_open(&self) -> bool {
        self.door_open
    }

    /// How far the open door has fallen, in world units
    pub fn door_drop(&self) -> f32 {
        self.door_drop
    }

    pub fn pressing_button(&self) -> bool {
        self.pressing_button
    }

    pub fn first_touch(&self) -> bool {
        self.first_touch
    }
}

/// First surface whose top band catches the player's next vertical
/// position. The hit returns the resting height one pad above the top.
fn surface_below(pos: Vec2, gravity: f32, rects: &[Rect]) -> Option<f32> {
    for rect in rects {
        let center = rect.center();
        let half = rect.half_extents();
        let drop = pos.y + gravity - center.y;
        if drop > 0.0
            && drop <= half.y + COLLISION_MARGIN
            && pos.x + COLLISION_MARGIN > rect.min.x
            && pos.x < rect.max.x + COLLISION_MARGIN
        {
            return Some(center.y + half.y + COLLISION_MARGIN);
        }
    }
    None
}

/// Mirror of [`surface_below`] for bottom bands hit from underneath.
fn surface_above(pos: Vec2, gravity: f32, rects: &[Rect]) -> Option<f32> {
    for rect in rects {
        let center = rect.center();
        let half = rect.half_extents();
        let rise = center.y - pos.y + gravity;
        if rise > 0.0
            && rise <= half.y + COLLISION_MARGIN
            && pos.x + COLLISION_MARGIN > rect.min.x
            && pos.x < rect.max.x + COLLISION_MARGIN
        {
            return Some(center.y - half.y - COLLISION_MARGIN);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Color;
    use crate::sim::stage::Key;

    fn arrow_stage() -> Stage {
        Stage {
            index: 0,
            gravity: -0.45,
            velocity_x: 3.65,
            velocity_y: 10.0,
            right: Key::Right,
            left: Key::Left,
            jump: Some(Key::Up),
            clue: "",
            help: "",
            color: Color::rgb(10, 20, 30),
            required_presses: 1,
            inverted_facing: false,
            auto_bounce: false,
        }
    }

    fn bouncy_stage() -> Stage {
        Stage {
            gravity: -2.0,
            velocity_y: 24.0,
            jump: None,
            auto_bounce: true,
            ..arrow_stage()
        }
    }

    fn step_until_grounded(map: &mut Map, player: &mut Player) -> u32 {
        for frame in 1..200 {
            if map.step(player).grounded {
                return frame;
            }
        }
        panic!("never grounded");
    }

    #[test]
    fn test_fall_from_spawn_lands_on_the_shelf() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(SPAWN_POINT);
        let frames = step_until_grounded(&mut map, &mut player);
        assert!(frames > 1, "spawn hangs in the air for a while");
        // Shelf top is 330; resting height adds the pad
        assert_eq!(player.pos.y, 340.0);
        assert_eq!(player.velocity_y, map.stage().gravity);
        assert!(map.first_touch());
    }

    #[test]
    fn test_movement_is_ignored_before_first_touch() {
        let map = Map::new(arrow_stage());
        let mut player = Player::new(SPAWN_POINT);
        map.move_player(&mut player, Direction::Right);
        assert_eq!(player.pos, SPAWN_POINT);
        map.move_player(&mut player, Direction::Up);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_grounded_jump_applies_stage_impulse() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(SPAWN_POINT);
        step_until_grounded(&mut map, &mut player);

        map.move_player(&mut player, Direction::Up);
        assert_eq!(player.velocity_y, 10.0);

        // Next frame rises despite gravity
        let before = player.pos.y;
        map.step(&mut player);
        assert!(player.pos.y > before);
    }

    #[test]
    fn test_airborne_jump_is_ignored() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(SPAWN_POINT);
        step_until_grounded(&mut map, &mut player);
        map.move_player(&mut player, Direction::Up);
        map.step(&mut player);
        // Rising fast, well clear of any top band
        map.move_player(&mut player, Direction::Up);
        assert!(player.velocity_y < 10.0);
    }

    #[test]
    fn test_wall_blocks_the_walk() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(Vec2::new(41.0, 465.0));
        step_until_grounded(&mut map, &mut player);
        assert_eq!(player.pos.y, 340.0);

        // The left wall spans x 0..30 at this height
        map.move_player(&mut player, Direction::Left);
        assert_eq!(player.pos.x, 41.0);

        map.move_player(&mut player, Direction::Right);
        assert!((player.pos.x - 44.65).abs() < 1e-3);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_inverted_facing_flips_the_sprite_only() {
        let mut map = Map::new(Stage {
            inverted_facing: true,
            ..arrow_stage()
        });
        let mut player = Player::new(SPAWN_POINT);
        step_until_grounded(&mut map, &mut player);

        let before = player.pos.x;
        map.move_player(&mut player, Direction::Right);
        assert!(player.pos.x > before);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_spike_contact_respawns_and_counts() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(Vec2::new(45.0, 400.0));
        player.facing = Facing::Left;

        let events = map.step(&mut player);
        assert!(events.died);
        assert_eq!(map.death_count(), 1);
        assert_eq!(player.pos, SPAWN_POINT);
        assert_eq!(player.facing, Facing::Right);
        assert!(!map.first_touch());
        assert_eq!(map.button_presses(), 0);
        assert!(!map.door_open());
    }

    #[test]
    fn test_death_discards_button_progress() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(Vec2::new(435.0, 400.0));

        // Stand on the button, then leave it: one full press
        map.step(&mut player);
        assert!(map.pressing_button());
        player.pos = Vec2::new(435.0, 500.0);
        player.velocity_y = 0.0;
        let events = map.step(&mut player);
        assert!(events.button_pressed);
        assert!(map.door_open());

        // Die on a spike afterwards
        player.pos = Vec2::new(45.0, 400.0);
        player.velocity_y = 0.0;
        map.step(&mut player);
        assert!(!map.door_open());
        assert_eq!(map.button_presses(), 0);
        assert_eq!(map.death_count(), 1);
    }

    #[test]
    fn test_button_counts_once_per_cycle() {
        let mut map = Map::new(Stage {
            required_presses: 5,
            ..arrow_stage()
        });
        let mut player = Player::new(Vec2::new(435.0, 400.0));

        // Sustained overlap never counts
        for _ in 0..4 {
            let events = map.step(&mut player);
            assert!(!events.button_pressed);
            player.pos = Vec2::new(435.0, 410.0);
            player.velocity_y = 0.0;
        }
        assert_eq!(map.button_presses(), 0);

        // Leaving completes the cycle exactly once
        player.pos = Vec2::new(435.0, 500.0);
        player.velocity_y = 0.0;
        assert!(map.step(&mut player).button_pressed);
        player.pos = Vec2::new(435.0, 500.0);
        player.velocity_y = 0.0;
        assert!(!map.step(&mut player).button_pressed);
        assert_eq!(map.button_presses(), 1);
        assert!(!map.door_open());
    }

    #[test]
    fn test_door_opens_at_the_required_count() {
        let mut map = Map::new(Stage {
            required_presses: 2,
            ..arrow_stage()
        });
        let mut player = Player::new(Vec2::new(435.0, 400.0));

        for press in 1..=2u32 {
            map.step(&mut player); // overlap
            player.pos = Vec2::new(435.0, 500.0);
            player.velocity_y = 0.0;
            let events = map.step(&mut player); // release
            assert_eq!(map.button_presses(), press);
            assert_eq!(events.door_opened, press == 2);
            player.pos = Vec2::new(435.0, 400.0);
            player.velocity_y = 0.0;
        }
        assert!(map.door_open());
    }

    #[test]
    fn test_zero_press_stage_starts_open() {
        let map = Map::new(Stage {
            required_presses: 0,
            ..arrow_stage()
        });
        assert!(map.door_open());
    }

    #[test]
    fn test_open_door_falls_each_frame() {
        let mut map = Map::new(Stage {
            required_presses: 0,
            ..arrow_stage()
        });
        let mut player = Player::new(SPAWN_POINT);
        map.step(&mut player);
        map.step(&mut player);
        assert_eq!(map.door_drop(), 6.0);
    }

    #[test]
    fn test_closed_door_blocks_the_corridor() {
        let closed = Map::new(arrow_stage());
        let open = Map::new(Stage {
            required_presses: 0,
            ..arrow_stage()
        });
        // Candidate spot one step into the door's padded bounds
        let next = Vec2::new(677.65, 190.0);
        assert!(closed.blocked(next));
        assert!(!open.blocked(next));
    }

    #[test]
    fn test_ceiling_contact_stops_the_rise() {
        let mut map = Map::new(arrow_stage());
        // Under the slab spanning x 360..480 at y 360..390
        let mut player = Player::new(Vec2::new(400.0, 340.0));
        player.velocity_y = 10.0;

        let mut bumped = false;
        for _ in 0..6 {
            map.step(&mut player);
            if player.velocity_y == map.stage().gravity && player.pos.y == 350.0 {
                bumped = true;
                break;
            }
        }
        assert!(bumped, "rise never snapped to the bottom band");
        assert!(map.first_touch());
    }

    #[test]
    fn test_auto_bounce_rejumps_every_grounded_frame() {
        let mut map = Map::new(bouncy_stage());
        let mut player = Player::new(SPAWN_POINT);
        step_until_grounded(&mut map, &mut player);
        assert_eq!(player.velocity_y, 24.0);

        // Airborne again next frame, no input involved
        let before = player.pos.y;
        let events = map.step(&mut player);
        assert!(!events.grounded);
        assert!(player.pos.y > before);
    }

    #[test]
    fn test_exit_slack_boundaries() {
        let map = Map::new(arrow_stage());
        let mut player = Player::new(Vec2::new(755.0, 195.0));
        assert!(map.reached_exit(&player));

        player.pos = Vec2::new(775.0, 195.0);
        assert!(map.reached_exit(&player));
        player.pos = Vec2::new(775.5, 195.0);
        assert!(!map.reached_exit(&player));

        player.pos = Vec2::new(755.0, 202.0);
        assert!(map.reached_exit(&player));
        player.pos = Vec2::new(755.0, 202.5);
        assert!(!map.reached_exit(&player));

        player.pos = Vec2::new(735.0, 188.0);
        assert!(map.reached_exit(&player));
        player.pos = Vec2::new(734.5, 187.5);
        assert!(!map.reached_exit(&player));
    }

    #[test]
    fn test_restart_matches_the_death_path_without_the_count() {
        let mut map = Map::new(arrow_stage());
        let mut player = Player::new(Vec2::new(435.0, 400.0));
        map.step(&mut player); // arms the button
        map.set_death_count(3);

        map.restart_stage(&mut player);
        assert_eq!(player.pos, SPAWN_POINT);
        assert_eq!(map.death_count(), 3);
        assert_eq!(map.button_presses(), 0);
        assert!(!map.first_touch());
        assert!(!map.pressing_button());
        assert!(!map.door_open());
        assert_eq!(map.door_drop(), 0.0);
    }

    #[test]
    fn test_standing_on_the_button_floor_arms_the_press() {
        let mut map = Map::new(arrow_stage());
        // Drop straight onto the button floor
        let mut player = Player::new(Vec2::new(435.0, 412.0));
        step_until_grounded(&mut map, &mut player);
        // Resting height is the floor top plus the pad, inside the
        // button's inclusive vertical bounds
        assert_eq!(player.pos.y, 410.0);
        assert!(map.pressing_button());
    }
}
