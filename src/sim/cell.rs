//! Logical field cells and the addressing table
//!
//! A cell index packs `(angle, radius)` as `angle << 5 | radius`. The table
//! maps every index to the display byte and bit that represent it, using a
//! fixed spiral projection around the field centre.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{polar_to_cartesian, wrap_angle};

use super::surface::Surface;

/// A logical field cell in `[0, FIELD_CELLS)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(u16);

impl Cell {
    /// Build a cell from an arbitrary index (taken modulo 4096)
    #[inline]
    pub fn new(index: u16) -> Self {
        Self(index % FIELD_CELLS)
    }

    /// Build a cell from a signed angle (wrapped) and a radius
    #[inline]
    pub fn polar(angle: i32, radius: u16) -> Self {
        Self((wrap_angle(angle) << RADIUS_BITS) | (radius & RADIUS_MASK))
    }

    /// Streak origin for a program column
    #[inline]
    pub fn column(column: u8) -> Self {
        Self::polar(column as i32, 0)
    }

    #[inline]
    pub fn index(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn angle(self) -> u16 {
        self.0 >> RADIUS_BITS
    }

    #[inline]
    pub fn radius(self) -> u16 {
        self.0 & RADIUS_MASK
    }

    /// Same radius, `steps` angle positions further round
    #[inline]
    pub fn rotated(self, steps: i32) -> Self {
        Self::polar(self.angle() as i32 + steps, self.radius())
    }
}

/// Display byte offset plus the bit inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub location: u16,
    pub mask: u8,
}

/// Byte offset of the first byte of screen row `y` (interleaved layout)
#[inline]
pub fn row_base(y: u8) -> u16 {
    let f = ((y & 7) << 3) | ((y >> 3) & 7) | (y & 0xC0);
    (f as u16) << 5
}

/// Address of pixel (x, y)
#[inline]
pub fn pixel_address(x: u8, y: u8) -> Address {
    Address {
        location: row_base(y) + (x >> 3) as u16,
        mask: 0x80 >> (x & 7),
    }
}

/// Read-only lookup from cell index to display address
#[derive(Debug, Clone)]
pub struct CellTable {
    locations: Vec<u16>,
    masks: Vec<u8>,
}

impl Default for CellTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CellTable {
    /// Project every cell through the spiral and record its address
    pub fn new() -> Self {
        let mut locations = Vec::with_capacity(FIELD_CELLS as usize);
        let mut masks = Vec::with_capacity(FIELD_CELLS as usize);

        for index in 0..FIELD_CELLS {
            let (x, y) = project(Cell(index));
            let addr = pixel_address(x, y);
            locations.push(addr.location);
            masks.push(addr.mask);
        }

        Self { locations, masks }
    }

    #[inline]
    pub fn address_of(&self, cell: Cell) -> Address {
        let i = cell.index() as usize;
        Address {
            location: self.locations[i],
            mask: self.masks[i],
        }
    }

    /// Clear every field pixel, leaving the rest of the display alone
    pub fn wipe(&self, surface: &mut impl Surface) {
        for (&location, &mask) in self.locations.iter().zip(&self.masks) {
            let value = surface.read(location) & !mask;
            surface.write(location, value);
        }
    }

    /// Parallel location array (for export)
    pub fn locations(&self) -> &[u16] {
        &self.locations
    }

    /// Parallel mask array (for export)
    pub fn masks(&self) -> &[u8] {
        &self.masks
    }
}

/// Screen pixel for a cell
pub fn project(cell: Cell) -> (u8, u8) {
    use std::f32::consts::TAU;

    let r = FIELD_INNER_RADIUS + cell.radius() as f32 * FIELD_RADIAL_STEP;
    let theta =
        cell.angle() as f32 * TAU / FIELD_ANGLES as f32 + cell.radius() as f32 * FIELD_TWIST;
    let p = polar_to_cartesian(r, theta);

    let x = (FIELD_CENTER_X + p.x).round().clamp(0.0, (SCREEN_WIDTH - 1) as f32);
    let y = (FIELD_CENTER_Y - p.y).round().clamp(0.0, (SCREEN_HEIGHT - 1) as f32);
    (x as u8, y as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::surface::Screen;
    use std::collections::HashSet;

    #[test]
    fn test_cell_packing() {
        let cell = Cell::polar(5, 7);
        assert_eq!(cell.index(), (5 << 5) | 7);
        assert_eq!(cell.angle(), 5);
        assert_eq!(cell.radius(), 7);

        // Negative angles wrap
        assert_eq!(Cell::polar(-1, 31).angle(), 127);
        assert_eq!(Cell::new(4096 + 3).index(), 3);
        assert_eq!(Cell::polar(127, 4).rotated(1).angle(), 0);
    }

    #[test]
    fn test_row_base_interleave() {
        assert_eq!(row_base(0), 0);
        // Pixel row 1 is one character row (256 bytes) further on
        assert_eq!(row_base(1), 256);
        // Pixel row 8 is the next character line (32 bytes)
        assert_eq!(row_base(8), 32);
        // Second third of the screen
        assert_eq!(row_base(64), 2048);
        assert_eq!(row_base(191) as usize + 31, SCREEN_BYTES - 1);
    }

    #[test]
    fn test_table_within_screen() {
        let table = CellTable::new();
        assert_eq!(table.locations().len(), FIELD_CELLS as usize);
        for index in 0..FIELD_CELLS {
            let addr = table.address_of(Cell::new(index));
            assert!((addr.location as usize) < SCREEN_BYTES);
            assert_eq!(addr.mask.count_ones(), 1);
        }
    }

    #[test]
    fn test_wipe_clears_only_field_pixels() {
        let table = CellTable::new();
        let mut screen = Screen::new();
        screen.toggle(table.address_of(Cell::polar(10, 10)));
        screen.toggle(table.address_of(Cell::polar(70, 31)));
        // Top-left corner is outside the field
        screen.toggle(pixel_address(0, 0));

        table.wipe(&mut screen);
        assert_eq!(screen.lit(), 1);
        assert!(screen.test(pixel_address(0, 0)));
    }

    #[test]
    fn test_rim_cells_are_distinct_pixels() {
        let table = CellTable::new();
        let mut seen = HashSet::new();
        for angle in 0..FIELD_ANGLES as i32 {
            for radius in [SHIP_RADIUS - 1, SHIP_RADIUS] {
                let addr = table.address_of(Cell::polar(angle, radius));
                assert!(
                    seen.insert((addr.location, addr.mask)),
                    "rim cell ({angle}, {radius}) shares a pixel"
                );
            }
        }
    }
}
