//! Rim Runner - a reflex game on the rim of a circular field
//!
//! Core modules:
//! - `sim`: Deterministic tick simulation (field cells, ring buffer, emitters, ship, levels)
//! - `codec`: Offline encoder turning time-varying column bitmaps into diff programs
//! - `settings`: Data-driven game tuning

pub mod codec;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Angular positions around the field
    pub const FIELD_ANGLES: u16 = 128;
    /// Radial steps from centre to rim
    pub const FIELD_RADII: u16 = 32;
    /// Total logical cells (angle << 5 | radius)
    pub const FIELD_CELLS: u16 = FIELD_ANGLES * FIELD_RADII;
    /// Shift between the angle and radius parts of a cell index
    pub const RADIUS_BITS: u16 = 5;
    /// Mask selecting the radius part of a cell index
    pub const RADIUS_MASK: u16 = FIELD_RADII - 1;

    /// Maximum cells travelling through the field at once
    pub const RING_CAPACITY: usize = 256;

    /// Display dimensions (1 bit per pixel, 8 pixels per byte)
    pub const SCREEN_WIDTH: u16 = 256;
    pub const SCREEN_HEIGHT: u16 = 192;
    pub const SCREEN_BYTES: usize = (SCREEN_WIDTH as usize / 8) * SCREEN_HEIGHT as usize;

    /// Field centre on screen
    pub const FIELD_CENTER_X: f32 = 128.0;
    pub const FIELD_CENTER_Y: f32 = 96.0;
    /// Pixel radius of radial step 0
    pub const FIELD_INNER_RADIUS: f32 = 16.0;
    /// Pixel distance between radial steps
    pub const FIELD_RADIAL_STEP: f32 = 2.5;
    /// Extra rotation per radial step (radians) that bends rays into a spiral
    pub const FIELD_TWIST: f32 = 0.012;

    /// Spiral emitter stops pushing once this many ticks have elapsed
    pub const SPIRAL_TICKS: u32 = 256;
    /// Ticks during which the spiral fans out its first rays
    pub const PRESEED_TICKS: u32 = 10;
    /// Angle steps per tick during the pre-seed window
    pub const PRESEED_STRIDE: i32 = 3;

    /// Radius the ship orbits on
    pub const SHIP_RADIUS: u16 = FIELD_RADII - 1;
    /// `dying` value that ends the death sequence
    pub const DEATH_TICKS: u8 = 32;
    /// Debris is only shown while `dying` is below this
    pub const DEBRIS_TICKS: u8 = 8;
}

/// Wrap an angle step count into `[0, FIELD_ANGLES)`
#[inline]
pub fn wrap_angle(angle: i32) -> u16 {
    angle.rem_euclid(consts::FIELD_ANGLES as i32) as u16
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
