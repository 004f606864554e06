//! Elephant Run entry point
//!
//! Runs the game headless: a scripted input marches the player through
//! the first stage while the frame loop, physics, and banners all run
//! for real. Useful as a smoke run and as a log source.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use elephant_run::Settings;
use elephant_run::frontend::{Canvas, HeadlessCanvas, Runner};
use elephant_run::sim::{GameSession, Key, roster};

fn main() {
    env_logger::init();
    log::info!("Elephant Run starting...");

    let settings = Settings::load();
    let seed = settings.rng_seed.unwrap_or_else(time_seed);
    log::info!("stage palette seed: {seed}");

    let mut rng = Pcg32::seed_from_u64(seed);
    let session = GameSession::new(roster(&mut rng), Instant::now());
    let mut runner = Runner::new(session);
    let mut canvas = HeadlessCanvas::new();

    for frame in 0..settings.demo_frames {
        // Hold right once the opening drop is over; the scripted march
        // ends on the floor spikes over and over
        if frame == 40 {
            canvas.press(Key::Right);
        }
        canvas.clear();
        runner.frame(&mut canvas);
        canvas.present();
        canvas.pause(settings.frame_delay_ms);
        if runner.quit_requested() {
            break;
        }
    }

    let session = runner.session();
    log::info!(
        "demo over on stage {} with {} deaths, player at ({:.1}, {:.1})",
        session.stage_index() + 1,
        session.deaths(),
        session.player().pos.x,
        session.player().pos.y,
    );
    log::info!(
        "{} frames presented, {} ms of pauses requested",
        canvas.frames,
        canvas.paused_ms,
    );
}

fn time_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as u64,
        Err(_) => 0,
    }
}
