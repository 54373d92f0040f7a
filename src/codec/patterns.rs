//! Pattern generators
//!
//! Each generator produces one loop of a column matrix. The integer ones
//! (`rotor`, `gates`, `sweep`) back the built-in level programs.

use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::FIELD_ANGLES;

use super::encoder::EncodeError;
use super::matrix::ColumnMatrix;

const COLUMNS: u32 = FIELD_ANGLES as u32;

/// Generator selectable from the encoder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Pattern {
    /// Four spokes turning one full spacing per loop
    Rotor,
    /// One lit sector in four, stepping round every quarter loop
    Gates,
    /// A wedge opening round the field, then closing behind itself
    Sweep,
    /// A band swinging back and forth on a sine
    Wave,
    /// Seeded pseudo-random drops
    Rain,
    /// Text bitmap of `#` and `.` rows
    Bitmap,
}

/// Knobs shared by the generators; each uses what applies to it
#[derive(Debug, Clone, Default)]
pub struct PatternOptions {
    /// Loop length in ticks (generator default when `None`)
    pub rows: Option<usize>,
    /// Seed for `rain`
    pub seed: u64,
    /// Bitmap text for `bitmap`
    pub bitmap: Option<String>,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Rotor => "rotor",
            Pattern::Gates => "gates",
            Pattern::Sweep => "sweep",
            Pattern::Wave => "wave",
            Pattern::Rain => "rain",
            Pattern::Bitmap => "bitmap",
        }
    }

    pub fn generate(&self, options: &PatternOptions) -> Result<ColumnMatrix, EncodeError> {
        let rows = options.rows;
        Ok(match self {
            Pattern::Rotor => rotor(4, 4, rows.unwrap_or(64)),
            Pattern::Gates => gates(rows.unwrap_or(64)),
            Pattern::Sweep => sweep(),
            Pattern::Wave => wave(rows.unwrap_or(64)),
            Pattern::Rain => rain(rows.unwrap_or(64), options.seed),
            Pattern::Bitmap => bitmap(options.bitmap.as_deref().unwrap_or_default())?,
        })
    }
}

/// `spokes` evenly spaced spokes `width` columns wide, advancing one spacing per loop
pub fn rotor(spokes: u32, width: u32, period: usize) -> ColumnMatrix {
    let spacing = COLUMNS / spokes.max(1);
    ColumnMatrix::from_fn(period, |x, y| {
        let shift = (y as u32 * spacing) / period as u32;
        (x as u32 + shift) % spacing < width
    })
}

/// Sixteen-column sectors; every fourth one lit, stepping each quarter loop
pub fn gates(period: usize) -> ColumnMatrix {
    let step = (period / 4).max(1);
    ColumnMatrix::from_fn(period, |x, y| {
        let phase = y / step;
        (x as usize / 16 + phase) % 4 == 0
    })
}

/// 128 ticks: a wedge opens two columns per tick, then its trailing edge follows
pub fn sweep() -> ColumnMatrix {
    ColumnMatrix::from_fn(128, |x, y| {
        let x = x as usize;
        if y < 64 { x < 2 * y } else { x >= 2 * (y - 64) }
    })
}

/// Eleven-column band swinging sixteen columns either side of the bottom
pub fn wave(period: usize) -> ColumnMatrix {
    use std::f32::consts::TAU;

    ColumnMatrix::from_fn(period, |x, y| {
        let centre = 64.0 + 16.0 * (TAU * y as f32 / period as f32).sin();
        let centre = centre.round() as i32;
        let d = (x as i32 - centre).rem_euclid(COLUMNS as i32);
        d <= 5 || d >= COLUMNS as i32 - 5
    })
}

/// A quarter of the columns carry a drop that repeats every loop
pub fn rain(period: usize, seed: u64) -> ColumnMatrix {
    let mut rng = Pcg32::seed_from_u64(seed);
    let drops: Vec<Option<(usize, usize)>> = (0..COLUMNS)
        .map(|_| {
            rng.random_bool(0.25).then(|| {
                let start = rng.random_range(0..period.max(1));
                let len = rng.random_range(2..=6).min(period);
                (start, len)
            })
        })
        .collect();

    ColumnMatrix::from_fn(period, |x, y| match drops[x as usize] {
        Some((start, len)) => (y + period - start) % period < len,
        None => false,
    })
}

/// Parse `#`/`.` text rows and stretch them across the field
///
/// Blank lines are skipped. Every row must have the same width, at most 128.
pub fn bitmap(text: &str) -> Result<ColumnMatrix, EncodeError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    let Some(&(_, first)) = lines.first() else {
        return Err(EncodeError::BitmapEmpty);
    };
    let width = first.chars().count();

    let mut pixels = Vec::with_capacity(lines.len());
    for &(line, row) in &lines {
        let count = row.chars().count();
        if count != width || count > COLUMNS as usize {
            return Err(EncodeError::BitmapRagged {
                line,
                width: count,
                expected: width.min(COLUMNS as usize),
            });
        }
        let bits = row
            .chars()
            .map(|c| match c {
                '#' => Ok(true),
                '.' => Ok(false),
                found => Err(EncodeError::BitmapChar { line, found }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        pixels.push(bits);
    }

    Ok(ColumnMatrix::from_fn(pixels.len(), |x, y| {
        pixels[y][x as usize * width / COLUMNS as usize]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoder::encode;
    use crate::consts::RING_CAPACITY;
    use crate::sim::programs::{GATES, ROTOR, SWEEP};

    #[test]
    fn test_generators_match_builtin_programs() {
        let options = PatternOptions::default();
        for (pattern, bytes) in [
            (Pattern::Rotor, &ROTOR[..]),
            (Pattern::Gates, &GATES[..]),
            (Pattern::Sweep, &SWEEP[..]),
        ] {
            let matrix = pattern.generate(&options).expect("generates");
            let encoded = encode(&matrix).expect("encodes");
            assert_eq!(encoded.bytes, bytes, "{} drifted", pattern.as_str());
        }
    }

    #[test]
    fn test_rotor_shape() {
        let matrix = rotor(4, 4, 64);
        assert_eq!(matrix.columns(0).collect::<Vec<_>>(), vec![
            0, 1, 2, 3, 32, 33, 34, 35, 64, 65, 66, 67, 96, 97, 98, 99
        ]);
        // Half a loop later the spokes sit half a spacing further round
        assert!(matrix.get(16, 32));
        assert!(!matrix.get(0, 32));
    }

    #[test]
    fn test_gates_one_sector_in_four() {
        let matrix = gates(64);
        for y in 0..64 {
            assert_eq!(matrix.row(y).count_ones(), 32);
        }
        assert!(matrix.get(0, 0));
        assert!(matrix.get(48, 16));
    }

    #[test]
    fn test_sweep_opens_and_closes() {
        let matrix = sweep();
        assert_eq!(matrix.row(0), 0);
        assert_eq!(matrix.row(64), u128::MAX);
        assert_eq!(matrix.row(127).count_ones(), 2);
    }

    #[test]
    fn test_wave_band_width() {
        let matrix = wave(64);
        for y in 0..64 {
            assert_eq!(matrix.row(y).count_ones(), 11);
        }
        let encoded = encode(&matrix).expect("wave stays within the ring");
        assert!(encoded.stats.peak <= RING_CAPACITY);
    }

    #[test]
    fn test_rain_is_seeded() {
        assert_eq!(rain(64, 7), rain(64, 7));
        assert_ne!(rain(64, 7), rain(64, 8));
        assert!(encode(&rain(64, 7)).is_ok());
    }

    #[test]
    fn test_bitmap_scaling() {
        let matrix = bitmap("#...\n\n.#..\n").expect("valid bitmap");
        assert_eq!(matrix.height(), 2);
        assert_eq!(matrix.columns(0).collect::<Vec<_>>(), (0..32).collect::<Vec<u8>>());
        assert_eq!(matrix.columns(1).collect::<Vec<_>>(), (32..64).collect::<Vec<u8>>());
    }

    #[test]
    fn test_bitmap_errors() {
        assert_eq!(bitmap("\n\n"), Err(EncodeError::BitmapEmpty));
        assert_eq!(
            bitmap("##\n#"),
            Err(EncodeError::BitmapRagged {
                line: 2,
                width: 1,
                expected: 2
            })
        );
        assert_eq!(
            bitmap("#x"),
            Err(EncodeError::BitmapChar { line: 1, found: 'x' })
        );
    }
}
