//! Field emitters
//!
//! An emitter decides which streak heads enter the field each tick. Spiral
//! emitters compute their cells from elapsed time; program emitters step a
//! cursor through a diff program. Both end by handing over to `Done`, which
//! only waits for the ring to drain.

use serde::Serialize;

use crate::consts::*;
use crate::wrap_angle;

use super::cell::Cell;
use super::program::{DiffProgram, Record};
use super::ring::ActiveRing;

/// What an emitter reports after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmitterEvent {
    Running,
    /// Nothing left to emit and the ring is empty
    Done,
}

#[derive(Debug, Clone, Serialize)]
pub enum Emitter {
    /// Two opposite rays rotating `rate` angle steps per tick
    ///
    /// `unpaired` has bit `a` set while the ray pair at angles `a` and
    /// `a + 64` has been pushed an odd number of times.
    Spiral {
        rate: i8,
        elapsed: u32,
        angle: u16,
        unpaired: u64,
    },
    Program(ProgramPlayer),
    /// Replays the initial record once to erase the last loop's pattern
    Cleanup { program: DiffProgram<'static> },
    Done,
}

impl Emitter {
    pub fn spiral(rate: i8) -> Self {
        Emitter::Spiral {
            rate,
            elapsed: 0,
            angle: 0,
            unpaired: 0,
        }
    }

    pub fn program(program: DiffProgram<'static>, repeats: u8) -> Self {
        Emitter::Program(ProgramPlayer::new(program, repeats))
    }

    /// Push this tick's cells, swapping to the next emitter stage when finished
    pub fn advance(&mut self, ring: &mut ActiveRing) -> EmitterEvent {
        match self {
            Emitter::Spiral {
                rate,
                elapsed,
                angle,
                unpaired,
            } => {
                if *elapsed >= SPIRAL_TICKS {
                    // Pre-seed rays are lit an odd number of times; push each
                    // of them once more so the field ends blank
                    if *unpaired == 0 {
                        log::debug!("Spiral finished after {} ticks", elapsed);
                        *self = Emitter::Done;
                        return self.advance(ring);
                    }
                    let pair = unpaired.trailing_zeros() as u16;
                    *unpaired &= *unpaired - 1;
                    push_ray_pair(ring, pair);
                    *elapsed += 1;
                    return EmitterEvent::Running;
                }

                push_ray_pair(ring, *angle);
                *unpaired ^= 1u64 << (*angle % HALF_TURN);

                let stride = if *elapsed < PRESEED_TICKS {
                    PRESEED_STRIDE
                } else {
                    1
                };
                *angle = wrap_angle(*angle as i32 + *rate as i32 * stride);
                *elapsed += 1;
                EmitterEvent::Running
            }
            Emitter::Program(player) => {
                if player.step(ring) {
                    let program = player.program;
                    *self = Emitter::Cleanup { program };
                    return self.advance(ring);
                }
                EmitterEvent::Running
            }
            Emitter::Cleanup { program } => {
                push_columns(ring, program.initial());
                *self = Emitter::Done;
                EmitterEvent::Running
            }
            Emitter::Done => {
                if ring.is_empty() {
                    EmitterEvent::Done
                } else {
                    EmitterEvent::Running
                }
            }
        }
    }
}

/// Cursor state for playing a diff program in a loop
#[derive(Debug, Clone, Serialize)]
pub struct ProgramPlayer {
    program: DiffProgram<'static>,
    /// Byte offset of the next record to fire
    cursor: usize,
    /// Loop restarts still allowed before cleanup
    loops_left: u8,
    /// Idle ticks before the record at `cursor` fires
    countdown: u16,
    started: bool,
}

impl ProgramPlayer {
    pub fn new(program: DiffProgram<'static>, repeats: u8) -> Self {
        Self {
            program,
            cursor: program.loop_start(),
            loops_left: repeats.saturating_sub(1),
            countdown: 0,
            started: false,
        }
    }

    /// Advance one tick; returns true once every loop has played
    fn step(&mut self, ring: &mut ActiveRing) -> bool {
        if !self.started {
            self.started = true;
            push_columns(ring, self.program.initial());
            return self.schedule(ring);
        }

        if self.countdown > 0 {
            self.countdown -= 1;
            return false;
        }

        match self.program.record_at(self.cursor) {
            (Record::Flip { columns, .. }, next) => {
                push_columns(ring, columns);
                self.cursor = next;
                self.schedule(ring)
            }
            (Record::End { .. }, _) => self.close_loop(ring),
        }
    }

    /// Arm the countdown for the record under the cursor
    fn schedule(&mut self, ring: &mut ActiveRing) -> bool {
        match self.program.record_at(self.cursor).0 {
            Record::Flip { wait, .. } => {
                self.countdown = wait as u16;
                false
            }
            Record::End { wait: 0 } => self.close_loop(ring),
            Record::End { wait } => {
                self.countdown = wait as u16 - 1;
                false
            }
        }
    }

    fn close_loop(&mut self, ring: &mut ActiveRing) -> bool {
        if self.loops_left == 0 {
            return true;
        }
        self.loops_left -= 1;
        self.cursor = self.program.loop_start();
        self.schedule(ring)
    }
}

const HALF_TURN: u16 = FIELD_ANGLES as u16 / 2;

/// Rays at `angle` and straight across from it
fn push_ray_pair(ring: &mut ActiveRing, angle: u16) {
    ring.push(Cell::polar(angle as i32, 0));
    ring.push(Cell::polar((angle + HALF_TURN) as i32, 0));
}

fn push_columns(ring: &mut ActiveRing, columns: &[u8]) {
    for &column in columns {
        ring.push(Cell::column(column));
    }
}
