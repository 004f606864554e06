//! Level progression across the stage roster
//!
//! A session owns the player, the active map, and the clock, and moves
//! through the roster one exit at a time. Frontends drive it once per
//! frame and read its state back for drawing.

use std::time::{Duration, Instant};

use crate::consts::{BANNER_PAUSE_MS, SPAWN_POINT};

use super::clock::{GameClock, format_clock};
use super::map::{Direction, Map, StepEvents};
use super::player::Player;
use super::stage::Stage;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Finished,
}

/// Outcome of an exit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The player is not at the exit
    None,
    /// Entered the pipe; the next stage is already loaded
    NextStage,
    /// Entered the pipe on the last stage
    Finished,
}

/// Final results, frozen at the moment the last exit is entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub deaths: u32,
    pub clock: String,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    stages: Vec<Stage>,
    stage_index: usize,
    map: Map,
    player: Player,
    clock: GameClock,
    help_visible: bool,
    reset_requested: bool,
    quit_requested: bool,
    phase: SessionPhase,
    summary: Option<Summary>,
}

impl GameSession {
    /// Start at the first stage of a non-empty roster.
    pub fn new(stages: Vec<Stage>, now: Instant) -> Self {
        let map = Map::new(stages[0].clone());
        Self {
            stages,
            stage_index: 0,
            map,
            player: Player::new(SPAWN_POINT),
            clock: GameClock::new(now),
            help_visible: false,
            reset_requested: false,
            quit_requested: false,
            phase: SessionPhase::Running,
            summary: None,
        }
    }

    pub fn move_player(&mut self, direction: Direction) {
        self.map.move_player(&mut self.player, direction);
    }

    /// One physics frame on the active map.
    pub fn step_map(&mut self) -> StepEvents {
        self.map.step(&mut self.player)
    }

    /// Advance when the player stands at the exit pipe. Loads the next
    /// stage, or freezes the final summary after the last one.
    pub fn check_exit(&mut self, now: Instant) -> Advance {
        if self.phase == SessionPhase::Finished || !self.map.reached_exit(&self.player) {
            return Advance::None;
        }
        self.stage_index += 1;
        if self.stage_index >= self.stages.len() {
            self.phase = SessionPhase::Finished;
            self.summary = Some(Summary {
                deaths: self.map.death_count(),
                clock: self.clock_text(now),
            });
            return Advance::Finished;
        }
        let deaths = self.map.death_count();
        self.map = Map::new(self.stages[self.stage_index].clone());
        self.map.set_death_count(deaths);
        self.player.respawn(SPAWN_POINT);
        // The frontend pauses on the stage banner; keep that time off
        // the clock.
        self.clock.add_credit(Duration::from_millis(BANNER_PAUSE_MS));
        self.help_visible = false;
        Advance::NextStage
    }

    /// Restart the current stage at the cost of one death.
    pub fn manual_restart(&mut self) {
        self.map.set_death_count(self.map.death_count() + 1);
        self.map.restart_stage(&mut self.player);
    }

    /// Flag a full reset; the frontend banners first, then applies it.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }

    /// Back to the first stage with zero deaths and a fresh clock.
    ///
    /// `now` should postdate any reset banner so its pause never counts
    /// as play time.
    pub fn full_reset(&mut self, now: Instant) {
        self.stage_index = 0;
        self.map = Map::new(self.stages[0].clone());
        self.map.restart_stage(&mut self.player);
        self.clock.restart(now);
        self.help_visible = false;
        self.reset_requested = false;
        self.quit_requested = false;
        self.phase = SessionPhase::Running;
        self.summary = None;
    }

    /// Play again from the finish screen.
    pub fn choose_replay(&mut self, now: Instant) {
        self.full_reset(now);
    }

    /// Leave from the finish screen.
    pub fn choose_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn current_stage(&self) -> &Stage {
        self.map.stage()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    pub fn deaths(&self) -> u32 {
        self.map.death_count()
    }

    /// Clue by default, full help once requested.
    pub fn hud_message(&self) -> &'static str {
        let stage = self.map.stage();
        if self.help_visible { stage.help } else { stage.clue }
    }

    pub fn clock_text(&self, now: Instant) -> String {
        format_clock(self.clock.elapsed_ms(now))
    }
}
