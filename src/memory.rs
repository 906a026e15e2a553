//! # Memory Bus Abstraction
//!
//! The [`MemoryBus`] trait decouples the CPU from the address-decoding and
//! cartridge-mapping layer, which is owned externally. The trait follows
//! 6502 hardware behavior: there are no bus errors, reads and writes always
//! succeed, and unmapped regions are the implementation's business.
//!
//! [`FlatMemory`] is a simple 64KB implementation used by tests and the
//! debugger; real systems substitute a mapper.

/// Byte-addressable 16-bit memory bus consumed by the CPU core.
pub trait MemoryBus {
    /// Reads a byte from the given address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given address. Must never panic; read-only
    /// regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Restores the bus to its power-on state.
    fn reset(&mut self);

    /// Reads a little-endian 16-bit value.
    ///
    /// No wraparound other than the natural modulo of the 64K space: a read
    /// at 0xFFFF takes its high byte from 0x0000.
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        hi << 8 | lo
    }

    /// Reads a little-endian 16-bit value whose bytes both live in the zero
    /// page, wrapping at 0xFF rather than crossing into page 1.
    ///
    /// Used only by the two indirect addressing modes.
    fn zero_page_read16(&self, addr: u8) -> u16 {
        let lo = self.read(addr as u16) as u16;
        let hi = self.read(addr.wrapping_add(1) as u16) as u16;
        hi << 8 | lo
    }
}

/// Simple 64KB flat memory.
///
/// All 65536 addresses map to a single RAM array. A program image loaded via
/// [`load_program`] survives [`reset`], mirroring a RAM + cartridge ROM
/// split: reset clears RAM and the cartridge contents reappear.
///
/// [`load_program`]: FlatMemory::load_program
/// [`reset`]: MemoryBus::reset
///
/// # Examples
///
/// ```
/// use nes6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load_program(0xC000, &[0xA9, 0x01]);
/// mem.write(0x0000, 0x42);
///
/// mem.reset();
/// assert_eq!(mem.read(0x0000), 0x00); // RAM cleared
/// assert_eq!(mem.read(0xC000), 0xA9); // program restored
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
    program: Option<(u16, Vec<u8>)>,
}

impl FlatMemory {
    /// Creates a new instance with all bytes zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
            program: None,
        }
    }

    /// Copies a program image to `origin` and remembers it so `reset()` can
    /// restore it.
    pub fn load_program(&mut self, origin: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            let addr = origin.wrapping_add(i as u16);
            self.data[addr as usize] = b;
        }
        self.program = Some((origin, bytes.to_vec()));
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn reset(&mut self) {
        self.data.fill(0);
        if let Some((origin, bytes)) = self.program.clone() {
            for (i, &b) in bytes.iter().enumerate() {
                let addr = origin.wrapping_add(i as u16);
                self.data[addr as usize] = b;
            }
        }
    }
}
