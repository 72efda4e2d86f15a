/// Memory interface seen by the CPU.
///
/// Only `read8`/`write8` are required; the remaining hooks let the system
/// bus expose OAM DMA and the CGB speed switch without the CPU knowing the
/// memory map.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Pending and enabled interrupt lines (`IE & IF & 0x1F`).
    fn pending_interrupts(&mut self) -> u8 {
        self.read8(0xFFFF) & self.read8(0xFF0F) & 0x1F
    }

    /// Clear one bit of IF after an interrupt has been dispatched.
    fn acknowledge_interrupt(&mut self, index: u8) {
        let iflags = self.read8(0xFF0F);
        self.write8(0xFF0F, iflags & !(1 << index));
    }

    /// True while an OAM DMA transfer still has bytes to copy.
    fn dma_active(&self) -> bool {
        false
    }

    /// Copy one byte of the active OAM DMA transfer.
    fn dma_step(&mut self) {}

    /// KEY1 + STOP. Returns `true` if the speed switch happened, in which
    /// case STOP does not enter low-power mode.
    fn speed_switch(&mut self) -> bool {
        false
    }
}
