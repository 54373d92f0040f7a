//! Active-cell ring buffer
//!
//! Every in-flight streak head lives here. Each drain pass toggles the cell's
//! pixel and moves it one radial step outward; after toggling radius 31 the
//! cell has crossed the whole field and drops off the tail.

use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::cell::{Cell, CellTable};
use super::surface::Surface;

/// Fixed-capacity FIFO of cell indices with 8-bit head/tail counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveRing {
    cells: Vec<u16>,
    head: u8,
    tail: u8,
    len: u16,
    /// Highest occupancy seen since the last clear
    peak: u16,
}

impl Default for ActiveRing {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveRing {
    pub fn new() -> Self {
        Self {
            cells: vec![0; RING_CAPACITY],
            head: 0,
            tail: 0,
            len: 0,
            peak: 0,
        }
    }

    /// Queue a new streak head at the head of the ring
    ///
    /// Exceeding the capacity would overwrite live cells, so it is treated as
    /// a programming error in the emitter.
    pub fn push(&mut self, cell: Cell) {
        assert!(
            (self.len as usize) < RING_CAPACITY,
            "active ring overflow: {} cells already in flight",
            self.len
        );
        self.cells[self.head as usize] = cell.index();
        self.head = self.head.wrapping_add(1);
        self.len += 1;
        self.peak = self.peak.max(self.len);
    }

    /// Toggle every active cell, step it outward and retire finished ones
    pub fn drain_tick(&mut self, surface: &mut impl Surface, table: &CellTable) {
        let mut expired: u16 = 0;
        let mut slot = self.tail;

        for n in 0..self.len {
            let index = self.cells[slot as usize];
            surface.toggle(table.address_of(Cell::new(index)));

            if index & RADIUS_MASK == RADIUS_MASK {
                // Pushed in tick order, so finished cells form a run at the tail
                debug_assert_eq!(expired, n, "expired cell behind a younger one");
                expired += 1;
            }
            self.cells[slot as usize] = (index + 1) % FIELD_CELLS;
            slot = slot.wrapping_add(1);
        }

        self.tail = self.tail.wrapping_add(expired as u8);
        self.len -= expired;
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn peak(&self) -> usize {
        self.peak as usize
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        self.peak = 0;
    }

    /// Active cells, oldest first
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len).map(move |n| {
            let slot = self.tail.wrapping_add(n as u8);
            Cell::new(self.cells[slot as usize])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::surface::Screen;

    fn setup() -> (ActiveRing, Screen, CellTable) {
        (ActiveRing::new(), Screen::new(), CellTable::new())
    }

    #[test]
    fn test_cell_expires_after_32_drains() {
        let (mut ring, mut screen, table) = setup();
        ring.push(Cell::column(9));

        for tick in 0..32 {
            assert_eq!(ring.len(), 1, "cell missing before drain {tick}");
            ring.drain_tick(&mut screen, &table);
        }
        assert!(ring.is_empty());

        // The whole ray was drawn once
        for radius in 0..FIELD_RADII {
            assert!(screen.test(table.address_of(Cell::polar(9, radius))));
        }
    }

    #[test]
    fn test_cell_walks_outward() {
        let (mut ring, mut screen, table) = setup();
        ring.push(Cell::column(3));
        ring.drain_tick(&mut screen, &table);
        ring.drain_tick(&mut screen, &table);
        let cell = ring.iter().next().expect("cell in flight");
        assert_eq!(cell.angle(), 3);
        assert_eq!(cell.radius(), 2);
    }

    #[test]
    fn test_second_push_erases_ray() {
        let (mut ring, mut screen, table) = setup();
        ring.push(Cell::column(40));
        for _ in 0..5 {
            ring.drain_tick(&mut screen, &table);
        }
        ring.push(Cell::column(40));
        for _ in 0..40 {
            ring.drain_tick(&mut screen, &table);
        }
        assert!(ring.is_empty());
        assert!(screen.is_blank());
    }

    #[test]
    fn test_counters_wrap_past_256() {
        let (mut ring, mut screen, table) = setup();
        // 8 cells per tick for 100 ticks keeps 256 in flight at the peak
        for _ in 0..100 {
            for column in 0..8 {
                ring.push(Cell::column(column));
            }
            ring.drain_tick(&mut screen, &table);
            assert!(ring.len() <= RING_CAPACITY);
        }
        assert_eq!(ring.peak(), RING_CAPACITY);
        for _ in 0..32 {
            ring.drain_tick(&mut screen, &table);
        }
        assert!(ring.is_empty());
    }

    #[test]
    #[should_panic(expected = "active ring overflow")]
    fn test_overflow_is_fatal() {
        let mut ring = ActiveRing::new();
        for n in 0..=RING_CAPACITY {
            ring.push(Cell::new(n as u16));
        }
    }
}
