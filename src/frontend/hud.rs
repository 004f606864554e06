//! Status panel and banners
//!
//! The panel strip runs along the bottom of the canvas and carries the
//! pointer targets. Region rectangles are public so input handling and
//! drawing cannot drift apart.

use glam::Vec2;

use crate::sim::{Color, Rect};

use super::Canvas;

/// Pointer target that reveals the stage help text
pub const HELP_REGION: Rect = Rect::new(210.0, 70.0, 290.0, 100.0);
/// Pointer target that restarts the stage for one death
pub const RESTART_REGION: Rect = Rect::new(510.0, 70.0, 590.0, 100.0);
/// Pointer target that wipes the whole session
pub const RESET_REGION: Rect = Rect::new(320.0, 5.0, 480.0, 35.0);

/// Paint the panel: buttons, counters, clock, and the stage message.
pub fn draw(
    canvas: &mut impl Canvas,
    deaths: u32,
    stage_number: usize,
    clock: &str,
    message: &str,
) {
    canvas.draw_filled_rect(Vec2::new(400.0, 60.0), 400.0, 60.0, Color::PANEL_BLUE);

    button(canvas, HELP_REGION, "Help");
    button(canvas, RESTART_REGION, "Restart");
    button(canvas, RESET_REGION, "RESET THE GAME");

    canvas.draw_text(Vec2::new(100.0, 50.0), clock, Color::WHITE);
    canvas.draw_text(Vec2::new(100.0, 75.0), "Level: 1", Color::WHITE);
    canvas.draw_text(
        Vec2::new(700.0, 50.0),
        &format!("Stage: {stage_number}"),
        Color::WHITE,
    );
    canvas.draw_text(
        Vec2::new(700.0, 75.0),
        &format!("Deaths: {deaths}"),
        Color::WHITE,
    );
    canvas.draw_text(Vec2::new(400.0, 85.0), "Clue:", Color::WHITE);
    canvas.draw_text(Vec2::new(400.0, 55.0), message, Color::WHITE);
}

fn button(canvas: &mut impl Canvas, region: Rect, label: &str) {
    let half = region.half_extents();
    canvas.draw_rect(region.center(), half.x, half.y, Color::WHITE);
    canvas.draw_text(region.center(), label, Color::WHITE);
}

/// Full-width green banner with one line of text.
pub fn banner_single(canvas: &mut impl Canvas, line: &str) {
    canvas.draw_filled_rect(Vec2::new(400.0, 320.0), 400.0, 70.0, Color::GREEN);
    canvas.draw_text(Vec2::new(400.0, 320.0), line, Color::WHITE);
}

/// Banner used between stages.
pub fn banner_double(canvas: &mut impl Canvas, first: &str, second: &str) {
    canvas.draw_filled_rect(Vec2::new(400.0, 270.0), 400.0, 70.0, Color::GREEN);
    canvas.draw_text(Vec2::new(400.0, 290.0), first, Color::WHITE);
    canvas.draw_text(Vec2::new(400.0, 250.0), second, Color::WHITE);
}

/// Banner used on the finish screen.
pub fn banner_triple(canvas: &mut impl Canvas, first: &str, second: &str, third: &str) {
    canvas.draw_filled_rect(Vec2::new(400.0, 270.0), 400.0, 70.0, Color::GREEN);
    canvas.draw_text(Vec2::new(400.0, 300.0), first, Color::WHITE);
    canvas.draw_text(Vec2::new(400.0, 260.0), second, Color::WHITE);
    canvas.draw_text(Vec2::new(400.0, 230.0), third, Color::WHITE);
}
