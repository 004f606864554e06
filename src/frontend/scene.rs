//! World drawing
//!
//! Paints one frame of the play field back to front: door, terrain,
//! hazards, button, player, pipes. All geometry comes straight from the
//! map; nothing here mutates state.

use glam::Vec2;

use crate::consts::PLAYER_SIZE;
use crate::sim::{Color, Facing, Map, Player};

use super::Canvas;

const SPIKE_SPRITE: &str = "./misc/Spikes.png";
const PLAYER_SPRITE_RIGHT: &str = "./misc/ElephantRight.png";
const PLAYER_SPRITE_LEFT: &str = "./misc/ElephantLeft.png";

pub fn draw(canvas: &mut impl Canvas, map: &Map, player: &Player) {
    let level = map.level();

    // The door sits behind the terrain so it can sink out of sight
    // through the floor once opened.
    let door = level.door;
    let door_half = door.half_extents();
    canvas.draw_filled_rect(
        door.center() - Vec2::new(0.0, map.door_drop()),
        door_half.x,
        door_half.y,
        Color::GREEN,
    );

    let terrain = map.stage().color;
    for obstacle in level.obstacles {
        let half = obstacle.half_extents();
        canvas.draw_filled_rect(obstacle.center(), half.x, half.y, terrain);
    }

    for spike in level.spikes {
        let size = spike.rect.max - spike.rect.min;
        let (width, height) = if spike.swaps_extents() {
            (size.y, size.x)
        } else {
            (size.x, size.y)
        };
        canvas.draw_sprite(
            spike.rect.center(),
            SPIKE_SPRITE,
            width,
            height,
            spike.rotation_degrees,
        );
    }

    // The button disappears while stood on
    if !map.pressing_button() {
        let half = level.button.half_extents();
        canvas.draw_filled_rect(level.button.center(), half.x, half.y, Color::RED);
    }
    let floor_half = level.button_floor.half_extents();
    canvas.draw_filled_rect(
        level.button_floor.center(),
        floor_half.x,
        floor_half.y,
        Color::DARK_GRAY,
    );

    let sprite = match player.facing {
        Facing::Right => PLAYER_SPRITE_RIGHT,
        Facing::Left => PLAYER_SPRITE_LEFT,
    };
    canvas.draw_sprite(player.pos, sprite, PLAYER_SIZE, PLAYER_SIZE, 0.0);

    for pipe in level.start_pipe.iter().chain(level.exit_pipe) {
        let half = pipe.half_extents();
        canvas.draw_filled_rect(pipe.center(), half.x, half.y, Color::ORANGE);
    }
}
