/// Serial port modelled via SB/SC with no link partner.
///
/// A transfer started on the internal clock (SC bits 7 and 0 set) completes
/// at once: the outgoing byte is captured in `output`, SB reads back 0xFF
/// as if the line were floating, and the serial interrupt is requested.
#[derive(Default)]
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Serial {
    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }

    /// Returns true when the write completed a transfer.
    pub(super) fn write_sc(&mut self, value: u8) -> bool {
        self.sc = value;
        if (self.sc & 0x81) == 0x81 {
            self.output.push(self.sb);
            self.sb = 0xFF;
            self.sc &= !0x80;
            return true;
        }
        false
    }
}
