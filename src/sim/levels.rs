//! Level campaign
//!
//! Each level pairs a field emitter with the label shown when it starts.

use super::emitter::Emitter;
use super::program::{DiffProgram, ProgramError};
use super::programs;

/// How a level fills the field
#[derive(Debug, Clone, Copy)]
pub enum EmitterKind {
    /// Closed-form rotating rays, `rate` angle steps per tick (sign = direction)
    Spiral { rate: i8 },
    /// Built-in diff program played `repeats` times
    Program { bytes: &'static [u8], repeats: u8 },
}

#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub label: &'static str,
    pub emitter: EmitterKind,
}

impl Level {
    /// Fresh emitter for the start of this level
    pub fn emitter(&self) -> Result<Emitter, ProgramError> {
        match self.emitter {
            EmitterKind::Spiral { rate } => Ok(Emitter::spiral(rate)),
            EmitterKind::Program { bytes, repeats } => {
                Ok(Emitter::program(DiffProgram::parse(bytes)?, repeats))
            }
        }
    }

    /// Emitter for a built-in level
    ///
    /// Built-in programs are constant data, so one that fails to parse is a
    /// defect in the campaign rather than something to recover from.
    pub fn start_emitter(&self) -> Emitter {
        self.emitter()
            .unwrap_or_else(|e| panic!("level {} has a malformed program: {e}", self.label))
    }
}

/// The fixed campaign, played in order
pub const CAMPAIGN: &[Level] = &[
    Level {
        label: "WHIRLER",
        emitter: EmitterKind::Spiral { rate: 1 },
    },
    Level {
        label: "REVERSE",
        emitter: EmitterKind::Spiral { rate: -1 },
    },
    Level {
        label: "ROTOR",
        emitter: EmitterKind::Program {
            bytes: &programs::ROTOR,
            repeats: 4,
        },
    },
    Level {
        label: "GATES",
        emitter: EmitterKind::Program {
            bytes: &programs::GATES,
            repeats: 3,
        },
    },
    Level {
        label: "SWEEP",
        emitter: EmitterKind::Program {
            bytes: &programs::SWEEP,
            repeats: 2,
        },
    },
];

/// Victory jingle as (pitch, ticks) pairs; pitch is a semitone index above C2
pub const VICTORY_TUNE: &[(u8, u8)] = &[
    (24, 8),
    (28, 8),
    (31, 8),
    (36, 16),
    (31, 8),
    (36, 32),
];
