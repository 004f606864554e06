//! Frame loop driver
//!
//! [`Runner`] advances one [`GameSession`] a frame at a time against
//! any [`Canvas`]: it routes the stage's key bindings and the pointer
//! into the session, steps the physics, paints the frame, and handles
//! the banner pauses around resets, stage changes, and the finish
//! screen.

use std::time::Instant;

use crate::consts::{BANNER_PAUSE_MS, POINTER_DEBOUNCE_MS};
use crate::sim::{Advance, Direction, GameSession, Key, SessionPhase};

use super::{Canvas, hud, scene};

pub struct Runner {
    session: GameSession,
}

impl Runner {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn quit_requested(&self) -> bool {
        self.session.quit_requested()
    }

    /// Run one frame. The caller clears the canvas before and presents
    /// after; banners present themselves mid-frame so they survive
    /// their pause.
    pub fn frame(&mut self, canvas: &mut impl Canvas) {
        match self.session.phase() {
            SessionPhase::Running => self.running_frame(canvas),
            SessionPhase::Finished => self.finished_frame(canvas),
        }
    }

    fn running_frame(&mut self, canvas: &mut impl Canvas) {
        let now = Instant::now();

        self.read_movement(canvas);
        self.read_pointer(canvas);

        let events = self.session.step_map();
        if events.died {
            log::debug!("player died, death count {}", self.session.deaths());
        }
        if events.button_pressed {
            log::debug!(
                "button presses: {}",
                self.session.map().button_presses()
            );
        }
        if events.door_opened {
            log::info!("door opened on stage {}", self.session.stage_index() + 1);
        }

        scene::draw(canvas, self.session.map(), self.session.player());
        hud::draw(
            canvas,
            self.session.deaths(),
            self.session.stage_index() + 1,
            &self.session.clock_text(now),
            self.session.hud_message(),
        );

        if self.apply_reset_if_requested(canvas) {
            return;
        }

        match self.session.check_exit(now) {
            Advance::None => {}
            Advance::NextStage => {
                log::info!("entering stage {}", self.session.stage_index() + 1);
                hud::banner_double(canvas, "You passed the stage", "But is the level over?!");
                canvas.present();
                canvas.pause(BANNER_PAUSE_MS);
            }
            Advance::Finished => {
                if let Some(summary) = self.session.summary() {
                    log::info!(
                        "level finished with {} deaths in {}",
                        summary.deaths,
                        summary.clock
                    );
                }
            }
        }
    }

    fn finished_frame(&mut self, canvas: &mut impl Canvas) {
        if let Some(summary) = self.session.summary() {
            let result = format!(
                "You finished with {} deaths in {}",
                summary.deaths, summary.clock
            );
            hud::banner_triple(
                canvas,
                "CONGRATULATIONS YOU FINISHED THE LEVEL",
                "PRESS 'A' TO PLAY AGAIN!",
                &result,
            );
        }

        if canvas.is_key_down(Key::A) {
            self.session.choose_replay(Instant::now());
            log::info!("replaying from the first stage");
            return;
        }
        if canvas.is_key_down(Key::Q) {
            self.session.choose_quit();
            log::info!("quit requested");
            return;
        }

        self.read_pointer(canvas);
        self.apply_reset_if_requested(canvas);
    }

    /// Movement arrives through the stage's own bindings, each checked
    /// independently so opposing keys can cancel out.
    fn read_movement(&mut self, canvas: &impl Canvas) {
        let stage = self.session.current_stage();
        let (right, left, jump) = (stage.right, stage.left, stage.jump);

        if canvas.is_key_down(right) {
            self.session.move_player(Direction::Right);
        }
        if canvas.is_key_down(left) {
            self.session.move_player(Direction::Left);
        }
        if let Some(key) = jump {
            if canvas.is_key_down(key) {
                self.session.move_player(Direction::Up);
            }
        }
    }

    /// Pointer presses hit the panel regions; every press costs a short
    /// debounce pause so one click is not read on consecutive frames.
    fn read_pointer(&mut self, canvas: &mut impl Canvas) {
        if !canvas.is_pointer_pressed() {
            return;
        }
        let at = canvas.pointer_position();
        if hud::HELP_REGION.contains_interior(at) {
            self.session.set_help_visible(true);
        } else if hud::RESTART_REGION.contains_interior(at) {
            self.session.manual_restart();
            log::debug!("stage restarted, death count {}", self.session.deaths());
        } else if hud::RESET_REGION.contains_interior(at) {
            self.session.request_reset();
        }
        canvas.pause(POINTER_DEBOUNCE_MS);
    }

    /// Banner the pending reset, then apply it with a timestamp taken
    /// after the pause so none of it counts as play time.
    fn apply_reset_if_requested(&mut self, canvas: &mut impl Canvas) -> bool {
        if !self.session.reset_requested() {
            return false;
        }
        hud::banner_single(canvas, "RESETTING THE GAME...");
        canvas.present();
        canvas.pause(BANNER_PAUSE_MS);
        self.session.full_reset(Instant::now());
        log::info!("session reset");
        true
    }
}
