use super::GameBoyBus;

impl GameBoyBus {
    /// Put the IO registers into the state the boot ROM leaves behind, so
    /// execution can start directly at 0x0100.
    pub(super) fn apply_post_boot_state(&mut self) {
        self.timer.init_post_boot();
        self.apu.init_post_boot();
        self.ppu.init_post_boot();
        self.if_reg = 0x01;
        self.ie_reg = 0x00;
        self.serial.sc = 0x7E;
        self.wram_bank = 1;
    }
}
