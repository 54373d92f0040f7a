//! Diff program format
//!
//! Layout:
//! - initial record: `count, column[count]` (the pattern at tick 0)
//! - flip record: `wait, count, column[count]` with `count >= 1`, firing
//!   `wait + 1` ticks after the previous event
//! - end record: `wait, 0`, closing the loop `wait` ticks after the last flip
//!
//! The loop period is the tick at which the end record fires. Replays rewind
//! to the first flip record, so tick `period` behaves as tick 0 again.

use std::collections::VecDeque;

use serde::Serialize;
use thiserror::Error;

use crate::consts::{FIELD_ANGLES, FIELD_RADII};

/// Problems found while validating program bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("program is empty")]
    Empty,
    #[error("record at byte {offset} is truncated")]
    Truncated { offset: usize },
    #[error("column {column} at byte {offset} is outside the field")]
    ColumnOutOfRange { column: u8, offset: usize },
    #[error("{extra} trailing bytes after the end record")]
    TrailingBytes { extra: usize },
    #[error("program loop has zero length")]
    ZeroPeriod,
}

/// One decoded record after the initial one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    Flip { wait: u8, columns: &'a [u8] },
    End { wait: u8 },
}

/// A validated diff program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffProgram<'a> {
    bytes: &'a [u8],
    /// Byte offset of the first record after the initial one
    loop_start: usize,
    period: u32,
    flip_records: usize,
}

impl<'a> DiffProgram<'a> {
    /// Validate the byte layout and measure the loop
    pub fn parse(bytes: &'a [u8]) -> Result<Self, ProgramError> {
        let Some(&initial) = bytes.first() else {
            return Err(ProgramError::Empty);
        };
        let loop_start = check_columns(bytes, 1, initial)?;

        let mut offset = loop_start;
        let mut tick: u32 = 0;
        let mut flip_records = 0;
        loop {
            if offset + 2 > bytes.len() {
                return Err(ProgramError::Truncated { offset });
            }
            let (wait, count) = (bytes[offset], bytes[offset + 1]);
            if count == 0 {
                tick += wait as u32;
                offset += 2;
                break;
            }
            tick += wait as u32 + 1;
            flip_records += 1;
            offset = check_columns(bytes, offset + 2, count)?;
        }

        if offset != bytes.len() {
            return Err(ProgramError::TrailingBytes {
                extra: bytes.len() - offset,
            });
        }
        if tick == 0 {
            return Err(ProgramError::ZeroPeriod);
        }

        Ok(Self {
            bytes,
            loop_start,
            period: tick,
            flip_records,
        })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Columns lit at tick 0
    pub fn initial(&self) -> &'a [u8] {
        &self.bytes[1..self.loop_start]
    }

    pub fn loop_start(&self) -> usize {
        self.loop_start
    }

    /// Ticks in one loop
    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn flip_records(&self) -> usize {
        self.flip_records
    }

    /// Decode the record at `offset`, returning it and the offset after it
    ///
    /// `offset` must come from `loop_start` or a previous call.
    pub fn record_at(&self, offset: usize) -> (Record<'a>, usize) {
        let wait = self.bytes[offset];
        let count = self.bytes[offset + 1] as usize;
        if count == 0 {
            return (Record::End { wait }, offset + 2);
        }
        let end = offset + 2 + count;
        (
            Record::Flip {
                wait,
                columns: &self.bytes[offset + 2..end],
            },
            end,
        )
    }

    /// Flip events of one loop as `(tick, columns)`, tick counted from loop start
    pub fn events(&self) -> Events<'a> {
        Events {
            program: *self,
            offset: self.loop_start,
            tick: 0,
        }
    }

    /// Largest number of streak heads a player of this program keeps in flight
    ///
    /// Plays enough loops to cover every window that straddles the loop
    /// point, followed by the cleanup replay of the initial record.
    pub fn peak_in_flight(&self) -> (usize, u32) {
        let loops = 2 + FIELD_RADII as u32 / self.period + 1;

        let mut pushes = vec![(0u32, self.initial().len())];
        for n in 0..loops {
            let base = n * self.period;
            pushes.extend(self.events().map(|(tick, columns)| (base + tick, columns.len())));
        }
        pushes.push((loops * self.period, self.initial().len()));

        let mut window: VecDeque<(u32, usize)> = VecDeque::new();
        let mut in_flight = 0;
        let mut peak = (0, 0);
        for (tick, count) in pushes {
            while let Some(&(oldest, n)) = window.front() {
                if oldest + FIELD_RADII as u32 > tick {
                    break;
                }
                in_flight -= n;
                window.pop_front();
            }
            window.push_back((tick, count));
            in_flight += count;
            if in_flight > peak.0 {
                peak = (in_flight, tick);
            }
        }
        peak
    }
}

/// Iterator over the flip events of one loop
#[derive(Debug, Clone)]
pub struct Events<'a> {
    program: DiffProgram<'a>,
    offset: usize,
    tick: u32,
}

impl<'a> Iterator for Events<'a> {
    type Item = (u32, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.program.bytes.len() {
            return None;
        }
        match self.program.record_at(self.offset) {
            (Record::Flip { wait, columns }, next) => {
                self.tick += wait as u32 + 1;
                self.offset = next;
                Some((self.tick, columns))
            }
            (Record::End { .. }, _) => {
                self.offset = self.program.bytes.len();
                None
            }
        }
    }
}

/// Check `count` column bytes starting at `offset`, returning the end offset
fn check_columns(bytes: &[u8], offset: usize, count: u8) -> Result<usize, ProgramError> {
    let end = offset + count as usize;
    let Some(columns) = bytes.get(offset..end) else {
        return Err(ProgramError::Truncated {
            offset: offset.saturating_sub(1),
        });
    };
    if let Some(i) = columns.iter().position(|&c| c as u16 >= FIELD_ANGLES) {
        return Err(ProgramError::ColumnOutOfRange {
            column: columns[i],
            offset: offset + i,
        });
    }
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLINK: &[u8] = &[0, 2, 1, 5, 1, 1, 5, 0, 0];

    #[test]
    fn test_parse_blink() {
        let program = DiffProgram::parse(BLINK).expect("valid program");
        assert!(program.initial().is_empty());
        assert_eq!(program.period(), 5);
        assert_eq!(program.flip_records(), 2);

        let events: Vec<_> = program.events().collect();
        assert_eq!(events, vec![(3, &[5u8][..]), (5, &[5u8][..])]);
    }

    #[test]
    fn test_parse_trailing_idle() {
        // Column 2 lit from tick 0, flips off at tick 1, loop closes 4 ticks later
        let program = DiffProgram::parse(&[1, 2, 0, 1, 2, 4, 0]).expect("valid program");
        assert_eq!(program.initial(), &[2]);
        assert_eq!(program.period(), 5);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(DiffProgram::parse(&[]), Err(ProgramError::Empty));
        assert!(matches!(
            DiffProgram::parse(&[2, 1]),
            Err(ProgramError::Truncated { .. })
        ));
        assert!(matches!(
            DiffProgram::parse(&[0, 3, 1]),
            Err(ProgramError::Truncated { .. })
        ));
        assert!(matches!(
            DiffProgram::parse(&[1, 200, 1, 0]),
            Err(ProgramError::ColumnOutOfRange { column: 200, .. })
        ));
        assert_eq!(
            DiffProgram::parse(&[0, 1, 0, 9]),
            Err(ProgramError::TrailingBytes { extra: 1 })
        );
        assert_eq!(DiffProgram::parse(&[1, 7, 0, 0]), Err(ProgramError::ZeroPeriod));
    }

    #[test]
    fn test_peak_in_flight_counts_loop_point() {
        // Four columns every tick of a one-tick loop, then the cleanup
        // replay lands on the same tick as the last flip
        let program = DiffProgram::parse(&[4, 0, 1, 2, 3, 0, 4, 0, 1, 2, 3, 0, 0])
            .expect("valid program");
        assert_eq!(program.period(), 1);
        let (peak, _) = program.peak_in_flight();
        assert_eq!(peak, 4 * FIELD_RADII as usize + 4);
    }
}
