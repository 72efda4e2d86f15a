/// Memory interface seen by the 6502.
///
/// Only `read8`/`write8` are required. The interrupt lines and the stall
/// counter let the NES bus feed the PPU NMI, the mapper IRQ and OAM DMA into
/// the CPU without the CPU knowing the memory map.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Edge-triggered NMI. Returns `true` once per request.
    fn take_nmi(&mut self) -> bool {
        false
    }

    /// Level-triggered IRQ line.
    fn irq_line(&mut self) -> bool {
        false
    }

    /// CPU cycles stolen by the bus (OAM DMA) since the last call.
    fn take_stall_cycles(&mut self) -> u32 {
        0
    }
}
