//! Deterministic game simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-by-frame stepping; wall-clock time arrives as arguments
//! - Seeded RNG only, and only for stage palette colors
//! - No rendering or platform dependencies

pub mod clock;
pub mod geometry;
pub mod level;
pub mod map;
pub mod player;
pub mod session;
pub mod stage;

pub use clock::{GameClock, format_clock};
pub use geometry::{Color, Rect};
pub use level::{Level, Spike};
pub use map::{Direction, Map, StepEvents};
pub use player::{Facing, Player};
pub use session::{Advance, GameSession, SessionPhase, Summary};
pub use stage::{Key, Stage, roster};
