//! Diff program encoder
//!
//! Turns a looping column matrix into the byte program the emitters play:
//! the columns of tick 0, then for every tick whose row differs from the one
//! before it the idle gap and the columns that changed, closing with the gap
//! left before the loop wraps back to tick 0.

use serde::Serialize;
use thiserror::Error;

use crate::consts::RING_CAPACITY;
use crate::sim::program::{DiffProgram, ProgramError};

use super::matrix::{ColumnMatrix, columns_of};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("matrix has no rows")]
    EmptyMatrix,
    #[error("row {row} is {width} columns wide, expected 128")]
    RowWidth { row: usize, width: usize },
    #[error("{wait} idle ticks before tick {tick} do not fit in a byte")]
    WaitOverflow { tick: usize, wait: usize },
    #[error("{peak} cells in flight at tick {tick} exceed the ring")]
    CapacityExceeded { peak: usize, tick: u32 },
    #[error("bitmap has no rows")]
    BitmapEmpty,
    #[error("bitmap line {line} is {width} pixels wide, expected {expected}")]
    BitmapRagged {
        line: usize,
        width: usize,
        expected: usize,
    },
    #[error("bitmap line {line} has unexpected character {found:?}")]
    BitmapChar { line: usize, found: char },
    #[error("encoded program is malformed: {0}")]
    Program(#[from] ProgramError),
}

/// Size report for an encoded program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    /// Ticks in one loop
    pub rows: usize,
    /// Records after the initial one, end record included
    pub records: usize,
    /// Column flips across one loop
    pub flips: usize,
    pub bytes: usize,
    /// Most streak heads in flight while the program loops
    pub peak: usize,
    /// Tick the peak is reached at
    pub peak_tick: u32,
}

impl EncodeStats {
    /// Raw matrix size (one bit per cell per tick) over program size
    pub fn compression_ratio(&self) -> f32 {
        (self.rows * 16) as f32 / self.bytes.max(1) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub stats: EncodeStats,
}

/// Encode a looping matrix into a diff program
pub fn encode(matrix: &ColumnMatrix) -> Result<Encoded, EncodeError> {
    if matrix.is_empty() {
        return Err(EncodeError::EmptyMatrix);
    }
    let height = matrix.height();
    let rows = matrix.rows();

    let mut bytes = Vec::new();
    push_record(&mut bytes, rows[0]);

    let mut idle = 0usize;
    let mut flips = 0;
    for y in 1..=height {
        let diff = rows[y - 1] ^ rows[y % height];
        if diff == 0 {
            idle += 1;
            continue;
        }
        bytes.push(wait_byte(idle, y)?);
        push_record(&mut bytes, diff);
        flips += diff.count_ones() as usize;
        idle = 0;
    }
    bytes.push(wait_byte(idle, height)?);
    bytes.push(0);

    let program = DiffProgram::parse(&bytes)?;
    let (peak, peak_tick) = program.peak_in_flight();
    if peak > RING_CAPACITY {
        return Err(EncodeError::CapacityExceeded {
            peak,
            tick: peak_tick,
        });
    }

    let stats = EncodeStats {
        rows: height,
        records: program.flip_records() + 1,
        flips,
        bytes: bytes.len(),
        peak,
        peak_tick,
    };
    log::debug!("Encoded {} ticks into {} bytes", height, bytes.len());
    Ok(Encoded { bytes, stats })
}

/// Rebuild `ticks` rows of the column matrix a program plays
pub fn replay(program: &DiffProgram<'_>, ticks: usize) -> ColumnMatrix {
    let period = program.period() as usize;
    let mut flips = vec![0u128; period + 1];
    for (tick, columns) in program.events() {
        flips[tick as usize] ^= columns.iter().fold(0u128, |bits, &c| bits | 1 << c);
    }

    let mut row = program.initial().iter().fold(0u128, |bits, &c| bits | 1 << c);
    let mut rows = Vec::with_capacity(ticks);
    for t in 0..ticks {
        if t > 0 {
            row ^= flips[(t - 1) % period + 1];
        }
        rows.push(row);
    }
    ColumnMatrix::from_rows(rows)
}

fn push_record(bytes: &mut Vec<u8>, bits: u128) {
    bytes.push(bits.count_ones() as u8);
    bytes.extend(columns_of(bits));
}

fn wait_byte(idle: usize, tick: usize) -> Result<u8, EncodeError> {
    u8::try_from(idle).map_err(|_| EncodeError::WaitOverflow { tick, wait: idle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_ANGLES;
    use proptest::prelude::*;

    fn blink() -> ColumnMatrix {
        // Column 5 lit on ticks 3 and 4 of a 5 tick loop
        ColumnMatrix::from_fn(5, |x, y| x == 5 && (3..5).contains(&y))
    }

    #[test]
    fn test_encode_blink() {
        let encoded = encode(&blink()).expect("blink encodes");
        assert_eq!(encoded.bytes, vec![0, 2, 1, 5, 1, 1, 5, 0, 0]);
        assert_eq!(encoded.stats.rows, 5);
        assert_eq!(encoded.stats.flips, 2);
        assert_eq!(encoded.stats.records, 3);
        // Two flips every five ticks, thirteen of them inside one ring lifetime
        assert_eq!(encoded.stats.peak, 13);
    }

    #[test]
    fn test_encode_trailing_idle() {
        let matrix = ColumnMatrix::from_fn(5, |x, y| x == 2 && y == 1);
        let encoded = encode(&matrix).expect("encodes");
        assert_eq!(encoded.bytes, vec![0, 0, 1, 2, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_encode_constant_pattern() {
        let matrix = ColumnMatrix::from_fn(7, |x, _| x % 32 == 0);
        let encoded = encode(&matrix).expect("encodes");
        assert_eq!(encoded.bytes, vec![4, 0, 32, 64, 96, 7, 0]);
        let program = DiffProgram::parse(&encoded.bytes).expect("parses");
        assert_eq!(program.period(), 7);
    }

    #[test]
    fn test_encode_errors() {
        assert_eq!(encode(&ColumnMatrix::new(0)), Err(EncodeError::EmptyMatrix));

        // A single flip followed by 300 idle ticks
        let matrix = ColumnMatrix::from_fn(302, |x, y| x == 0 && y == 1);
        assert!(matches!(
            encode(&matrix),
            Err(EncodeError::WaitOverflow { wait: 300, .. })
        ));

        // Every column toggling every tick floods the ring
        let matrix = ColumnMatrix::from_fn(2, |_, y| y == 0);
        assert!(matches!(
            encode(&matrix),
            Err(EncodeError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_replay_blink() {
        let program = DiffProgram::parse(&[0, 2, 1, 5, 1, 1, 5, 0, 0]).expect("parses");
        let matrix = replay(&program, 10);
        let lit: Vec<bool> = (0..10).map(|y| matrix.get(5, y)).collect();
        assert_eq!(
            lit,
            vec![false, false, false, true, true, false, false, false, true, true]
        );
        assert!((0..10).all(|y| matrix.row(y) & !(1u128 << 5) == 0));
    }

    #[test]
    fn test_builtin_programs_replay() {
        use crate::sim::programs::{GATES, ROTOR, SWEEP};
        for bytes in [&ROTOR[..], &GATES[..], &SWEEP[..]] {
            let program = DiffProgram::parse(bytes).expect("built-in parses");
            let matrix = replay(&program, program.period() as usize);
            let encoded = encode(&matrix).expect("re-encodes");
            assert_eq!(encoded.bytes, bytes);
        }
    }

    fn sparse_matrix() -> impl Strategy<Value = ColumnMatrix> {
        // A few columns per tick keeps the ring well under capacity
        (1usize..40).prop_flat_map(|height| {
            prop::collection::vec(prop::collection::vec(0u8..FIELD_ANGLES as u8, 0..3), height)
                .prop_map(|rows| {
                    ColumnMatrix::from_rows(
                        rows.iter()
                            .map(|cols| cols.iter().fold(0u128, |bits, &c| bits | 1 << c))
                            .collect(),
                    )
                })
        })
    }

    proptest! {
        #[test]
        fn prop_replay_reconstructs_matrix(matrix in sparse_matrix(), loops in 1usize..3) {
            let encoded = encode(&matrix).expect("sparse matrices encode");
            let program = DiffProgram::parse(&encoded.bytes).expect("encoder output parses");
            prop_assert_eq!(program.period() as usize, matrix.height());

            let height = matrix.height();
            let replayed = replay(&program, height * loops);
            for y in 0..height * loops {
                prop_assert_eq!(replayed.row(y), matrix.row(y % height));
            }
        }

        #[test]
        fn prop_program_size_tracks_changes(matrix in sparse_matrix()) {
            let encoded = encode(&matrix).expect("sparse matrices encode");
            let changed = (1..=matrix.height())
                .filter(|&y| matrix.row(y - 1) != matrix.row(y % matrix.height()))
                .count();
            prop_assert_eq!(encoded.stats.records, changed + 1);
            let initial = matrix.row(0).count_ones() as usize;
            prop_assert_eq!(encoded.bytes.len(), 1 + initial + 2 * changed + encoded.stats.flips + 2);
        }
    }
}
