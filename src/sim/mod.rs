//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Display access only through the `Surface` trait
//! - No platform or audio dependencies

pub mod cell;
pub mod emitter;
pub mod levels;
pub mod program;
pub mod programs;
pub mod ring;
pub mod ship;
pub mod state;
pub mod surface;
pub mod tick;

pub use cell::{Address, Cell, CellTable};
pub use emitter::{Emitter, EmitterEvent};
pub use levels::{CAMPAIGN, EmitterKind, Level, VICTORY_TUNE};
pub use program::{DiffProgram, ProgramError, Record};
pub use ring::ActiveRing;
pub use ship::{Collision, Direction, DrawMode, Ship};
pub use state::{GameEvent, GamePhase, GameState};
pub use surface::{Screen, Surface};
pub use tick::{TickInput, tick};
