//! Column presence matrix
//!
//! One `u128` per tick; bit `x` set means field column `x` is lit on that tick.

use serde::Serialize;

use crate::consts::FIELD_ANGLES;

use super::encoder::EncodeError;

/// Per-tick column bitmap, `height` ticks long
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColumnMatrix {
    rows: Vec<u128>,
}

impl ColumnMatrix {
    /// All columns off for `height` ticks
    pub fn new(height: usize) -> Self {
        Self {
            rows: vec![0; height],
        }
    }

    pub fn from_rows(rows: Vec<u128>) -> Self {
        Self { rows }
    }

    /// Build by asking `lit(x, y)` for every column and tick
    pub fn from_fn(height: usize, mut lit: impl FnMut(u8, usize) -> bool) -> Self {
        let rows = (0..height)
            .map(|y| {
                (0..FIELD_ANGLES as u8)
                    .filter(|&x| lit(x, y))
                    .fold(0u128, |row, x| row | 1 << x)
            })
            .collect();
        Self { rows }
    }

    /// Build from rows of booleans, each exactly one field wide
    pub fn from_bools(rows: &[Vec<bool>]) -> Result<Self, EncodeError> {
        let mut matrix = Self::new(rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != FIELD_ANGLES as usize {
                return Err(EncodeError::RowWidth {
                    row: y,
                    width: row.len(),
                });
            }
            for (x, &on) in row.iter().enumerate() {
                matrix.set(x as u8, y, on);
            }
        }
        Ok(matrix)
    }

    /// Number of ticks
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, x: u8, y: usize) -> bool {
        self.rows[y] >> x & 1 != 0
    }

    pub fn set(&mut self, x: u8, y: usize, on: bool) {
        if on {
            self.rows[y] |= 1 << x;
        } else {
            self.rows[y] &= !(1 << x);
        }
    }

    pub fn row(&self, y: usize) -> u128 {
        self.rows[y]
    }

    pub fn rows(&self) -> &[u128] {
        &self.rows
    }

    /// Lit columns on tick `y`, ascending
    pub fn columns(&self, y: usize) -> impl Iterator<Item = u8> {
        columns_of(self.rows[y])
    }

    /// Render as `#`/`.` text, one line per tick
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (FIELD_ANGLES as usize + 1));
        for y in 0..self.rows.len() {
            for x in 0..FIELD_ANGLES as u8 {
                out.push(if self.get(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

/// Set bits of a row bitmap as ascending column numbers
pub fn columns_of(bits: u128) -> impl Iterator<Item = u8> {
    (0..FIELD_ANGLES as u8).filter(move |&x| bits >> x & 1 != 0)
}
