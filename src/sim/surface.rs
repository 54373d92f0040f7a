//! Display memory capability
//!
//! The simulation only ever reads, writes or flips single bits at byte
//! locations. `Screen` is the in-memory 1-bit bitmap used by the runner and
//! tests; a real display adapter implements `Surface` over its own memory.

use crate::consts::SCREEN_BYTES;

use super::cell::Address;

/// Byte-addressed display memory
pub trait Surface {
    fn read(&self, location: u16) -> u8;
    fn write(&mut self, location: u16, value: u8);

    /// XOR the masked bits (applying it twice restores the byte)
    #[inline]
    fn toggle(&mut self, addr: Address) {
        let value = self.read(addr.location) ^ addr.mask;
        self.write(addr.location, value);
    }

    /// True if any masked bit is set
    #[inline]
    fn test(&self, addr: Address) -> bool {
        self.read(addr.location) & addr.mask != 0
    }
}

/// In-memory 256x192 bitmap
#[derive(Debug, Clone)]
pub struct Screen {
    bytes: Vec<u8>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; SCREEN_BYTES],
        }
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Number of lit pixels
    pub fn lit(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Surface for Screen {
    #[inline]
    fn read(&self, location: u16) -> u8 {
        self.bytes[location as usize]
    }

    #[inline]
    fn write(&mut self, location: u16, value: u8) {
        self.bytes[location as usize] = value;
    }
}
