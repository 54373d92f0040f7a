//! Ship drawing and collision
//!
//! The craft is three field cells on the rim, drawn and erased with the same
//! XOR toggle the streaks use. Collisions are found while drawing (the craft
//! flies into a lit pixel) and while erasing (a streak changed a pixel under
//! the craft since it was drawn).

use serde::Serialize;

use crate::consts::*;

use super::cell::{Address, Cell, CellTable};
use super::surface::Surface;

/// Direction of travel round the rim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Position increasing
    Forward,
    /// Position decreasing
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Whether a ship pass writes or removes the craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawMode {
    Draw,
    Erase,
}

/// How the craft was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Collision {
    /// Flew into a lit pixel (found while drawing)
    Flew,
    /// A streak passed over the drawn craft (found while erasing)
    Struck,
}

/// Addresses and pre-draw bytes of the craft as last drawn
#[derive(Debug, Clone, Copy, Serialize)]
struct Footprint {
    #[serde(skip)]
    addrs: [Address; 3],
    /// Masks widened to the neighbour in the direction of travel
    data: [u8; 3],
    /// Display bytes before the craft was drawn
    saved: [u8; 3],
}

/// The player's craft
#[derive(Debug, Clone, Serialize)]
pub struct Ship {
    /// Rim position, two steps per field angle (wraps at 256)
    pub position: u8,
    pub direction: Direction,
    /// 0 while alive, then counts up every tick of the death sequence
    pub dying: u8,
    /// Angle the craft was lost at (centre of the debris)
    pub wreck_angle: u16,
    step: u8,
    last_input: bool,
    drawn: Option<Footprint>,
}

/// Starting position at the bottom of the field
const START_POSITION: u8 = 192;

impl Ship {
    pub fn new(step: u8) -> Self {
        Self {
            position: START_POSITION,
            direction: Direction::Forward,
            dying: 0,
            wreck_angle: 0,
            step,
            last_input: false,
            drawn: None,
        }
    }

    /// Back to the start of a level, not drawn
    pub fn reset(&mut self) {
        *self = Self::new(self.step);
    }

    pub fn is_alive(&self) -> bool {
        self.dying == 0
    }

    pub fn is_drawn(&self) -> bool {
        self.drawn.is_some()
    }

    /// Treat `pressed` as already seen so a held button does not steer
    pub fn hold_input(&mut self, pressed: bool) {
        self.last_input = pressed;
    }

    /// Drop the footprint after the field under the craft was wiped
    pub fn forget_drawing(&mut self) {
        self.drawn = None;
    }

    #[inline]
    pub fn angle(&self) -> u16 {
        (self.position >> 1) as u16
    }

    /// Rim pair plus a spoke leaning into the direction of travel
    pub fn cells(&self) -> [Cell; 3] {
        let a = self.angle() as i32;
        let d = self.direction.sign();
        [
            Cell::polar(a - 1, SHIP_RADIUS),
            Cell::polar(a + 1, SHIP_RADIUS),
            Cell::polar(a + d, SHIP_RADIUS - 1),
        ]
    }

    /// One tick: erase, steer, move, draw
    ///
    /// Returns the collision that started the death sequence, if it started
    /// this tick.
    pub fn update(
        &mut self,
        pressed: bool,
        surface: &mut impl Surface,
        table: &CellTable,
    ) -> Option<Collision> {
        let struck = self.render(DrawMode::Erase, surface, table);

        if self.is_alive() && pressed && !self.last_input {
            self.direction = self.direction.flipped();
        }
        self.last_input = pressed;

        self.position = match self.direction {
            Direction::Forward => self.position.wrapping_add(self.step),
            Direction::Backward => self.position.wrapping_sub(self.step),
        };

        let flew = self.render(DrawMode::Draw, surface, table);

        if !self.is_alive() {
            self.dying = self.dying.saturating_add(1);
            self.debris(surface, table);
            return None;
        }

        let hit = struck.or(flew);
        if let Some(collision) = hit {
            log::debug!("Ship hit ({:?}) at angle {}", collision, self.angle());
            self.dying = 1;
            self.wreck_angle = self.angle();
        }
        hit
    }

    /// Draw or erase the craft at its current position
    pub fn render(
        &mut self,
        mode: DrawMode,
        surface: &mut impl Surface,
        table: &CellTable,
    ) -> Option<Collision> {
        match mode {
            DrawMode::Draw => {
                let cells = self.cells();
                let d = self.direction.sign();
                let mut footprint = Footprint {
                    addrs: cells.map(|c| table.address_of(c)),
                    data: cells.map(|c| swept_mask(table, c, d)),
                    saved: [0; 3],
                };

                // Check everything before toggling so the craft never hits itself
                let mut hit = false;
                for i in 0..3 {
                    let byte = surface.read(footprint.addrs[i].location);
                    footprint.saved[i] = byte;
                    hit |= byte & footprint.data[i] != 0;
                }
                for addr in footprint.addrs {
                    surface.toggle(addr);
                }

                self.drawn = Some(footprint);
                hit.then_some(Collision::Flew)
            }
            DrawMode::Erase => {
                let footprint = self.drawn.take()?;
                for addr in footprint.addrs {
                    surface.toggle(addr);
                }

                let struck = (0..3).any(|i| {
                    let now = surface.read(footprint.addrs[i].location);
                    (now ^ footprint.saved[i]) & footprint.data[i] != 0
                });
                struck.then_some(Collision::Struck)
            }
        }
    }

    /// Shrinking debris pair: lit on even ticks, cleared on the next
    fn debris(&self, surface: &mut impl Surface, table: &CellTable) {
        if self.dying < 2 || self.dying >= DEBRIS_TICKS {
            return;
        }
        let offset = (DEBRIS_TICKS - (self.dying & !1)) as i32;
        let centre = self.wreck_angle as i32;
        for angle in [centre - offset, centre + offset] {
            surface.toggle(table.address_of(Cell::polar(angle, SHIP_RADIUS)));
        }
    }
}

/// Cell mask plus its travel-side neighbour when both share a display byte
fn swept_mask(table: &CellTable, cell: Cell, d: i32) -> u8 {
    let addr = table.address_of(cell);
    let next = table.address_of(cell.rotated(d));
    if next.location == addr.location {
        addr.mask | next.mask
    } else {
        addr.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::surface::Screen;

    fn setup() -> (Ship, Screen, CellTable) {
        (Ship::new(1), Screen::new(), CellTable::new())
    }

    #[test]
    fn test_draw_erase_restores_field() {
        let (mut ship, mut screen, table) = setup();
        assert_eq!(ship.render(DrawMode::Draw, &mut screen, &table), None);
        assert_eq!(screen.lit(), 3);
        assert_eq!(ship.render(DrawMode::Erase, &mut screen, &table), None);
        assert!(screen.is_blank());
    }

    #[test]
    fn test_flying_into_lit_pixel() {
        let (mut ship, mut screen, table) = setup();
        let target = ship.cells()[1];
        screen.toggle(table.address_of(target));

        assert_eq!(
            ship.render(DrawMode::Draw, &mut screen, &table),
            Some(Collision::Flew)
        );
    }

    #[test]
    fn test_struck_while_drawn() {
        let (mut ship, mut screen, table) = setup();
        ship.render(DrawMode::Draw, &mut screen, &table);

        // A streak toggles the pixel under the spoke
        let spoke = ship.cells()[2];
        screen.toggle(table.address_of(spoke));

        assert_eq!(
            ship.render(DrawMode::Erase, &mut screen, &table),
            Some(Collision::Struck)
        );
    }

    #[test]
    fn test_unrelated_pixels_do_not_collide() {
        let (mut ship, mut screen, table) = setup();
        // Opposite side of the field
        screen.toggle(table.address_of(Cell::polar(ship.angle() as i32 + 64, SHIP_RADIUS)));
        assert_eq!(ship.update(false, &mut screen, &table), None);
        assert_eq!(ship.update(false, &mut screen, &table), None);
        assert!(ship.is_alive());
    }

    #[test]
    fn test_rising_edge_flips_direction() {
        let (mut ship, mut screen, table) = setup();
        ship.update(true, &mut screen, &table);
        assert_eq!(ship.direction, Direction::Backward);
        // Held button does not flip again
        ship.update(true, &mut screen, &table);
        assert_eq!(ship.direction, Direction::Backward);
        ship.update(false, &mut screen, &table);
        ship.update(true, &mut screen, &table);
        assert_eq!(ship.direction, Direction::Forward);
    }

    #[test]
    fn test_position_wraps() {
        let (mut ship, mut screen, table) = setup();
        ship.position = 255;
        ship.update(false, &mut screen, &table);
        assert_eq!(ship.position, 0);
        ship.update(true, &mut screen, &table);
        assert_eq!(ship.position, 255);
    }

    #[test]
    fn test_death_sequence_coasts_and_cleans_up() {
        let (mut ship, mut screen, table) = setup();
        let ahead = Cell::polar(ship.angle() as i32 + 2, SHIP_RADIUS);
        screen.toggle(table.address_of(ahead));

        let mut hit_at = None;
        for tick in 0..8 {
            if ship.update(false, &mut screen, &table).is_some() {
                hit_at = Some(tick);
                break;
            }
        }
        assert!(hit_at.is_some(), "ship never reached the lit pixel");
        assert_eq!(ship.dying, 1);

        // Input is ignored while dying
        let direction = ship.direction;
        while ship.dying < DEATH_TICKS {
            assert_eq!(ship.update(true, &mut screen, &table), None);
            assert_eq!(ship.direction, direction);
        }

        // Only the wreck's own pixels and the original obstacle remain
        ship.render(DrawMode::Erase, &mut screen, &table);
        screen.toggle(table.address_of(ahead));
        assert!(screen.is_blank());
    }
}
